//! Scenario configuration for the booking demonstration.
//!
//! Without a scenario file the built-in demonstration runs ([`Config::default`]).
//! A YAML file replaces it, and environment variables prefixed with `BOOKING_`
//! override single values on top of both.
//!
//! # Configuration File Format
//!
//! ```yaml
//! title: "=== Appointment Booking with Patterns ==="
//! bookings:
//!   - patient: "Mariana Diaz"
//!     schedule: "2025-11-20 10:00"
//!     appointment:
//!       kind: general
//!     channel: sms
//!     headline: "-- Confirming the first appointment --"
//!     new_status: "confirmed"
//!     message: "Your appointment has been confirmed."
//!   - patient: "Roberto Cruz"
//!     schedule: "2025-11-21 15:30"
//!     appointment:
//!       kind: specialist
//!       specialty: "Dermatology"
//!     channel: email
//!     headline: "-- Cancelling the second appointment --"
//!     new_status: "cancelled"
//!     message: "Your appointment has been cancelled."
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export BOOKING_TITLE="=== Morning shift ==="
//! ```
//!
//! Environment values are parsed before they reach the configuration, so
//! `BOOKING_TITLE=2025` arrives as a number. Text fields accept numbers and
//! booleans and keep their textual form.

use std::{fmt, path::Path};

use anyhow::{Context, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use log::info;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

use crate::{creators::AppointmentKind, decorators::Channel};

/// Prefix of the environment variables overriding configuration values.
const ENV_PREFIX: &str = "BOOKING_";

/// Root configuration: a title and the bookings to play through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First line printed by the demonstration.
    #[serde(deserialize_with = "text")]
    pub title: String,
    /// Bookings in the order they are created, described and updated.
    pub bookings: Vec<Booking>,
}

/// One appointment of the demonstration and what happens to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(deserialize_with = "text")]
    pub patient: String,
    #[serde(deserialize_with = "text")]
    pub schedule: String,
    /// Variant to create, general or specialist.
    pub appointment: AppointmentKind,
    /// Decorator wrapping the appointment.
    #[serde(default)]
    pub channel: Channel,
    /// Line printed before the status change.
    #[serde(deserialize_with = "text")]
    pub headline: String,
    #[serde(deserialize_with = "text")]
    pub new_status: String,
    /// Message delivered through the channel after the status change.
    #[serde(deserialize_with = "text")]
    pub message: String,
}

/// Deserializes a text field, accepting numbers and booleans as their text.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl Visitor<'_> for TextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_owned())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i128<E: de::Error>(self, value: i128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "=== Appointment Booking with Patterns ===".to_owned(),
            bookings: vec![
                Booking {
                    patient: "Mariana Diaz".to_owned(),
                    schedule: "2025-11-20 10:00".to_owned(),
                    appointment: AppointmentKind::General,
                    channel: Channel::Sms,
                    headline: "-- Confirming the first appointment --".to_owned(),
                    new_status: "confirmed".to_owned(),
                    message: "Your appointment has been confirmed. Please arrive 10 minutes early."
                        .to_owned(),
                },
                Booking {
                    patient: "Roberto Cruz".to_owned(),
                    schedule: "2025-11-21 15:30".to_owned(),
                    appointment: AppointmentKind::Specialist {
                        specialty: "Dermatology".to_owned(),
                    },
                    channel: Channel::Email,
                    headline: "-- Cancelling the second appointment --".to_owned(),
                    new_status: "cancelled".to_owned(),
                    message: "Your appointment has been cancelled. Contact us to reschedule."
                        .to_owned(),
                },
            ],
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// Layers, lowest priority first: [`Config::default`], the YAML file at
    /// `path` when given, then `BOOKING_` environment variables (`__` separates
    /// nested keys).
    ///
    /// # Errors
    ///
    /// Fails when `path` does not exist or when the merged values do not form a
    /// valid [`Config`].
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = path {
            if !Path::new(path).is_file() {
                bail!("scenario file {} not found", path);
            }
            info!("loading scenario from {}", path);
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid scenario configuration")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use figment::Jail;
    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    const SCENARIO: &str = r#"
title: "=== Morning shift ==="
bookings:
  - patient: "Ana Ruiz"
    schedule: "2025-01-01 10:00"
    appointment:
      kind: specialist
      specialty: "Cardiology"
    channel: sms
    headline: "-- Confirming --"
    new_status: "confirmed"
    message: "See you soon"
  - patient: "Luis Gomez"
    schedule: "2025-01-01 11:00"
    appointment:
      kind: general
    headline: "-- Arriving --"
    new_status: "arrived"
    message: "Welcome"
"#;

    #[test]
    fn test_default_has_two_bookings() {
        let config = Config::default();

        assert_eq!(config.bookings.len(), 2);
        assert_eq!(config.bookings[0].channel, Channel::Sms);
        assert_eq!(config.bookings[1].channel, Channel::Email);
        assert_eq!(
            config.bookings[1].appointment,
            AppointmentKind::Specialist {
                specialty: "Dermatology".to_owned()
            }
        );
    }

    #[test]
    #[serial]
    fn test_load_without_file_returns_default() {
        Jail::expect_with(|_| {
            let config = Config::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.title, "=== Morning shift ===");
        assert_eq!(config.bookings.len(), 2);
        assert_eq!(
            config.bookings[0].appointment,
            AppointmentKind::Specialist {
                specialty: "Cardiology".to_owned()
            }
        );
        assert_eq!(config.bookings[1].appointment, AppointmentKind::General);
        assert_eq!(config.bookings[1].channel, Channel::None);
    }

    #[test]
    #[serial]
    fn test_env_overrides_title() {
        Jail::expect_with(|jail| {
            jail.create_file("scenario.yaml", SCENARIO)?;
            jail.set_env("BOOKING_TITLE", "=== Evening shift ===");

            let config = Config::load(Some("scenario.yaml")).map_err(|e| e.to_string())?;

            assert_eq!(config.title, "=== Evening shift ===");
            assert_eq!(config.bookings[0].patient, "Ana Ruiz");
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_numeric_env_override_stays_text() {
        Jail::expect_with(|jail| {
            jail.set_env("BOOKING_TITLE", "2025");

            let config = Config::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config.title, "2025");
            assert_eq!(config.bookings, Config::default().bookings);
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_numeric_yaml_values_stay_text() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "scenario.yaml",
                r#"
title: 42
bookings:
  - patient: "Ana Ruiz"
    schedule: "2025-01-01 10:00"
    appointment:
      kind: specialist
      specialty: 7
    headline: "--"
    new_status: 200
    message: true
"#,
            )?;

            let config = Config::load(Some("scenario.yaml")).map_err(|e| e.to_string())?;

            assert_eq!(config.title, "42");
            assert_eq!(config.bookings[0].new_status, "200");
            assert_eq!(config.bookings[0].message, "true");
            assert_eq!(
                config.bookings[0].appointment,
                AppointmentKind::Specialist {
                    specialty: "7".to_owned()
                }
            );
            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_load_missing_file_fails() {
        let result = Config::load(Some("/nonexistent/booking/scenario.yaml"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    #[serial]
    fn test_load_invalid_kind_fails() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "scenario.yaml",
                r#"
bookings:
  - patient: "Ana Ruiz"
    schedule: "2025-01-01 10:00"
    appointment:
      kind: dentist
    headline: "--"
    new_status: "confirmed"
    message: "hi"
"#,
            )?;

            assert!(Config::load(Some("scenario.yaml")).is_err());
            Ok(())
        });
    }
}
