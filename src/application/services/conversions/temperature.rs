use crate::application::dto::conversions::{TemperatureReadings, TemperatureUnit};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Expresses `value` on all three scales. The entered value is kept verbatim
/// for its own scale; the other two derive through Celsius.
pub fn readings_from(value: f64, unit: TemperatureUnit) -> TemperatureReadings {
    match unit {
        TemperatureUnit::Celsius => TemperatureReadings {
            celsius: value,
            fahrenheit: celsius_to_fahrenheit(value),
            kelvin: celsius_to_kelvin(value),
        },
        TemperatureUnit::Fahrenheit => {
            let celsius = fahrenheit_to_celsius(value);
            TemperatureReadings {
                celsius,
                fahrenheit: value,
                kelvin: celsius_to_kelvin(celsius),
            }
        }
        TemperatureUnit::Kelvin => {
            let celsius = kelvin_to_celsius(value);
            TemperatureReadings {
                celsius,
                fahrenheit: celsius_to_fahrenheit(celsius),
                kelvin: value,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_the_fixed_points_of_water() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_eq!(kelvin_to_celsius(0.0), -273.15);
    }

    #[test]
    fn celsius_round_trips_through_fahrenheit() {
        let celsius = 36.6;
        let back = fahrenheit_to_celsius(celsius_to_fahrenheit(celsius));
        assert!((back - celsius).abs() < 1e-9);
    }

    #[test]
    fn readings_keep_the_entered_value_verbatim() {
        let readings = readings_from(98.6, TemperatureUnit::Fahrenheit);
        assert_eq!(readings.fahrenheit, 98.6);
        assert!((readings.celsius - 37.0).abs() < 1e-9);
        assert!((readings.kelvin - 310.15).abs() < 1e-9);
    }

    #[test]
    fn readings_from_kelvin_derive_through_celsius() {
        let readings = readings_from(273.15, TemperatureUnit::Kelvin);
        assert_eq!(readings.kelvin, 273.15);
        assert_eq!(readings.celsius, 0.0);
        assert_eq!(readings.fahrenheit, 32.0);
    }
}
