//! Server configuration from the environment.

use tracing::warn;
use uxlaws_core::Locale;

pub const LOCALE_VAR: &str = "UXLAWS_LOCALE";
pub const LOG_VAR: &str = "UXLAWS_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Report language, `es` or `en`. Default: `es`.
    pub locale: Option<String>,
    /// `tracing` filter directive. Default: `info`.
    pub log_filter: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            locale: non_empty(LOCALE_VAR),
            log_filter: non_empty(LOG_VAR),
        }
    }

    /// Configured locale; unsupported values fall back to Spanish.
    pub fn effective_locale(&self) -> Locale {
        match self.locale.as_deref().map(str::parse::<Locale>) {
            None => Locale::default(),
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                warn!(var = LOCALE_VAR, "{}, using default", e);
                Locale::default()
            }
        }
    }

    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let c = config(&[]);
        assert_eq!(c.effective_locale(), Locale::Es);
        assert_eq!(c.effective_log_filter(), "info");
    }

    #[test]
    fn reads_locale_and_filter() {
        let c = config(&[(LOCALE_VAR, "en"), (LOG_VAR, "uxlaws_core=debug")]);
        assert_eq!(c.effective_locale(), Locale::En);
        assert_eq!(c.effective_log_filter(), "uxlaws_core=debug");
    }

    #[test]
    fn invalid_or_blank_values_use_defaults() {
        let c = config(&[(LOCALE_VAR, "klingon"), (LOG_VAR, "  ")]);
        assert_eq!(c.effective_locale(), Locale::Es);
        assert_eq!(c.effective_log_filter(), "info");
    }
}
