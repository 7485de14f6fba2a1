//! Configuration for the demo binary.
//!
//! | Variable          | Field        | Default       |
//! |-------------------|--------------|---------------|
//! | `RUST_LOG`        | `log_filter` | `info`        |
//! | `ORDER_NOTIFIERS` | `notifiers`  | `sms,email`   |
//!
//! `ORDER_NOTIFIERS` is a comma-separated, case-insensitive list. An empty value
//! disables notification.

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::orders::{BroadcastOrderPlacedNotifier, EmailNotifier, OrderPlacedNotifier, SmsNotifier};

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const NOTIFIERS_VAR: &str = "ORDER_NOTIFIERS";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown notifier: {0}")]
    UnknownNotifier(String),
}

/// A notification channel that can be switched on by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    Sms,
    Email,
}

impl NotifierKind {
    pub fn build(self) -> Arc<dyn OrderPlacedNotifier> {
        match self {
            NotifierKind::Sms => Arc::new(SmsNotifier),
            NotifierKind::Email => Arc::new(EmailNotifier),
        }
    }
}

impl FromStr for NotifierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sms" => Ok(NotifierKind::Sms),
            "email" => Ok(NotifierKind::Email),
            _ => Err(ConfigError::UnknownNotifier(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub notifiers: Vec<NotifierKind>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            notifiers: vec![NotifierKind::Sms, NotifierKind::Email],
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }
        if let Some(list) = lookup(NOTIFIERS_VAR) {
            config.notifiers = parse_notifiers(&list)?;
        }
        Ok(config)
    }

    /// Broadcast notifier over the configured channels, in listed order.
    pub fn order_notifier(&self) -> BroadcastOrderPlacedNotifier {
        self.notifiers.iter().map(|kind| kind.build()).collect()
    }
}

fn parse_notifiers(list: &str) -> Result<Vec<NotifierKind>, ConfigError> {
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(NotifierKind::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.order_notifier().len(), 2);
    }

    #[test]
    fn test_notifier_list_is_case_insensitive() {
        let config = AppConfig::from_lookup(lookup(&[(NOTIFIERS_VAR, " Email , SMS ")])).unwrap();
        assert_eq!(config.notifiers, vec![NotifierKind::Email, NotifierKind::Sms]);
    }

    #[test]
    fn test_empty_notifier_list_disables_notification() {
        let config = AppConfig::from_lookup(lookup(&[(NOTIFIERS_VAR, "")])).unwrap();
        assert!(config.notifiers.is_empty());
        assert!(config.order_notifier().is_empty());
    }

    #[test]
    fn test_unknown_notifier_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(NOTIFIERS_VAR, "sms,pigeon")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownNotifier("pigeon".into()));
    }

    #[test]
    fn test_log_filter_override() {
        let config = AppConfig::from_lookup(lookup(&[(LOG_FILTER_VAR, "debug")])).unwrap();
        assert_eq!(config.log_filter, "debug");
    }
}
