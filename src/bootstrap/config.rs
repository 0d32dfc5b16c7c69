/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Exact origin allowed by CORS. When unset the API answers any origin,
    /// which is what the bundled single-page client expects in development.
    pub cors_allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());

        Self {
            bind_addr,
            cors_allowed_origin,
        }
    }
}
