//! Service configuration

use crate::model::DEFAULT_TAX_RATE;
use crate::notifier::DEFAULT_EVENT_CAPACITY;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

const DEFAULT_MAILBOX_SIZE: usize = 32;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Mailbox capacity of every actor (env: TABLE_SERVICE_MAILBOX_SIZE)
    pub mailbox_size: usize,
    /// Bound on each call made through the public clients. Calls the table
    /// actor makes to the order and bill stores are not bounded, so a bill
    /// generation always runs to completion or compensation
    /// (env: TABLE_SERVICE_REQUEST_TIMEOUT_MS)
    pub request_timeout: Duration,
    /// Events a slow subscriber may fall behind by (env: TABLE_SERVICE_EVENT_CAPACITY)
    pub event_capacity: usize,
    /// Tax applied to the bill subtotal (env: TABLE_SERVICE_TAX_RATE, e.g. "0.05")
    pub tax_rate: Decimal,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables. Unset variables keep
    /// their default; malformed ones are logged and also keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let setting = |name: &str, default| parse_or(lookup(name), name, default);

        let mut tax_rate = parse_or(
            lookup("TABLE_SERVICE_TAX_RATE"),
            "TABLE_SERVICE_TAX_RATE",
            DEFAULT_TAX_RATE,
        );
        if tax_rate < Decimal::ZERO {
            warn!(%tax_rate, "Ignoring negative tax rate");
            tax_rate = DEFAULT_TAX_RATE;
        }

        Self {
            mailbox_size: setting("TABLE_SERVICE_MAILBOX_SIZE", DEFAULT_MAILBOX_SIZE as u64).max(1)
                as usize,
            request_timeout: Duration::from_millis(setting(
                "TABLE_SERVICE_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            )),
            event_capacity: setting("TABLE_SERVICE_EVENT_CAPACITY", DEFAULT_EVENT_CAPACITY as u64)
                .max(1) as usize,
            tax_rate,
        }
    }
}

/// Parses `raw`, falling back to `default` when it is absent, blank or
/// malformed.
fn parse_or<T: FromStr>(raw: Option<String>, name: &str, default: T) -> T {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(name, value = %raw, "Ignoring malformed setting");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServiceConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.tax_rate, Decimal::new(5, 2));
    }

    #[test]
    fn test_values_are_read() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("TABLE_SERVICE_MAILBOX_SIZE", "64"),
            ("TABLE_SERVICE_REQUEST_TIMEOUT_MS", "8000"),
            ("TABLE_SERVICE_EVENT_CAPACITY", "16"),
            ("TABLE_SERVICE_TAX_RATE", " 0.18 "),
        ]));
        assert_eq!(config.mailbox_size, 64);
        assert_eq!(config.request_timeout, Duration::from_millis(8000));
        assert_eq!(config.event_capacity, 16);
        assert_eq!(config.tax_rate, Decimal::new(18, 2));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("TABLE_SERVICE_MAILBOX_SIZE", "lots"),
            ("TABLE_SERVICE_REQUEST_TIMEOUT_MS", "-1"),
            ("TABLE_SERVICE_TAX_RATE", "-0.05"),
            ("TABLE_SERVICE_EVENT_CAPACITY", "0"),
        ]));
        let defaults = ServiceConfig::default();
        assert_eq!(config.mailbox_size, defaults.mailbox_size);
        assert_eq!(config.request_timeout, defaults.request_timeout);
        assert_eq!(config.tax_rate, defaults.tax_rate);
        assert_eq!(config.event_capacity, 1);
    }
}
