//! Backend API for a collection of browser-based developer utilities.
//!
//! The interesting logic lives in `application/services`: a structural
//! reformatter for JSON / JS / TS / CSS / HTML / SQL sources, a pair of line
//! differs, and small unit/color conversion helpers. Everything above that is
//! plumbing: use cases orchestrate the services, `presentation/http` exposes
//! them over axum, and `infrastructure` binds the one external collaborator
//! (the SQL formatting engine) to its port.

pub mod application;
pub mod bootstrap;
pub mod infrastructure;
pub mod presentation;
