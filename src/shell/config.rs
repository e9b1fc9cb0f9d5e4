// Process configuration read from the environment once at start-up.
//
// A missing variable falls back to its default with a log line; a present but
// unparsable one aborts start-up.

use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, bail};
use chrono::{FixedOffset, Local, Offset};
use tracing::{info, warn};

use crate::modules::hydration::core::day::offset_from_minutes;
use crate::shared::core::primitives::{DEFAULT_REMINDER_END_HOUR, DEFAULT_REMINDER_START_HOUR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_offset: FixedOffset,
    pub reminder_start_hour: u32,
    pub reminder_end_hour: u32,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let default_offset = match lookup("HYDRATION_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = parse("HYDRATION_UTC_OFFSET_MINUTES", &raw)?;
                offset_from_minutes(minutes)
                    .with_context(|| format!("HYDRATION_UTC_OFFSET_MINUTES={raw}"))?
            }
            None => {
                let local = Local::now().offset().fix();
                info!(%local, "HYDRATION_UTC_OFFSET_MINUTES not set, using the host offset");
                local
            }
        };

        let config = Self {
            host: or_default(&lookup, "HYDRATION_HOST", "0.0.0.0".to_string())?,
            port: or_default(&lookup, "HYDRATION_PORT", 8080)?,
            default_offset,
            reminder_start_hour: or_default(
                &lookup,
                "HYDRATION_REMINDER_START_HOUR",
                DEFAULT_REMINDER_START_HOUR,
            )?,
            reminder_end_hour: or_default(
                &lookup,
                "HYDRATION_REMINDER_END_HOUR",
                DEFAULT_REMINDER_END_HOUR,
            )?,
        };

        if config.reminder_start_hour >= config.reminder_end_hour || config.reminder_end_hour > 24 {
            bail!(
                "reminder window {}..{} must satisfy start < end <= 24",
                config.reminder_start_hour,
                config.reminder_end_hour
            );
        }
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => parse(key, &raw),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("invalid {key}={raw:?}: {e}")
    })
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("HYDRATION_UTC_OFFSET_MINUTES", "0")])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.reminder_start_hour, 8);
        assert_eq!(config.reminder_end_hour, 20);
        assert_eq!(config.default_offset, FixedOffset::east_opt(0).unwrap());
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("HYDRATION_HOST", "127.0.0.1"),
            ("HYDRATION_PORT", "9000"),
            ("HYDRATION_UTC_OFFSET_MINUTES", "-300"),
            ("HYDRATION_REMINDER_START_HOUR", "7"),
            ("HYDRATION_REMINDER_END_HOUR", "23"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.default_offset, FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!((config.reminder_start_hour, config.reminder_end_hour), (7, 23));
    }

    #[rstest]
    #[case("HYDRATION_PORT", "eighty")]
    #[case("HYDRATION_UTC_OFFSET_MINUTES", "1440")]
    #[case("HYDRATION_REMINDER_END_HOUR", "6")]
    fn it_should_refuse_to_start_when_misconfigured(#[case] key: &str, #[case] value: &str) {
        assert!(Config::from_lookup(lookup(&[(key, value)])).is_err());
    }
}
