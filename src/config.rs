use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "GAPS";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Digital card QR code rotation period.
pub const DEFAULT_QR_REFRESH_SECS: u64 = 30;

/// A reminder within this many minutes of "now" is shown as due.
pub const DEFAULT_DOSE_WINDOW_MINUTES: i64 = 30;

/// Patient name shown in the header greeting.
pub const DEFAULT_PATIENT_NAME: &str = "Maria";

/// Env-filter directive used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "gaps_lib=info,warn"
}

/// Runtime configuration. Every field has a default, so partial JSON
/// documents and sparse environments are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub patient_name: String,
    pub qr_refresh_secs: u64,
    pub dose_window_minutes: i64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            qr_refresh_secs: DEFAULT_QR_REFRESH_SECS,
            dose_window_minutes: DEFAULT_DOSE_WINDOW_MINUTES,
        }
    }
}

impl CompanionConfig {
    /// Parse a JSON document, filling missing fields from the defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Overlay `GAPS_*` environment variables on the defaults.
    /// Unparseable numbers are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("GAPS_PATIENT_NAME") {
            if !name.trim().is_empty() {
                config.patient_name = name.trim().to_string();
            }
        }

        if let Some(raw) = lookup("GAPS_QR_REFRESH_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.qr_refresh_secs = secs,
                _ => tracing::warn!(value = %raw, "Ignoring invalid GAPS_QR_REFRESH_SECS"),
            }
        }

        if let Some(raw) = lookup("GAPS_DOSE_WINDOW_MINUTES") {
            match raw.parse::<i64>() {
                Ok(minutes) if minutes >= 0 => config.dose_window_minutes = minutes,
                _ => tracing::warn!(value = %raw, "Ignoring invalid GAPS_DOSE_WINDOW_MINUTES"),
            }
        }

        config
    }

    pub fn qr_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.qr_refresh_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn app_name_is_gaps() {
        assert_eq!(APP_NAME, "GAPS");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn defaults_match_constants() {
        let config = CompanionConfig::default();
        assert_eq!(config.patient_name, "Maria");
        assert_eq!(config.qr_refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.dose_window_minutes, 30);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CompanionConfig::from_json(r#"{"patient_name": "João"}"#).unwrap();
        assert_eq!(config.patient_name, "João");
        assert_eq!(config.qr_refresh_secs, DEFAULT_QR_REFRESH_SECS);
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(CompanionConfig::from_json("{not json").is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = [
            ("GAPS_PATIENT_NAME", " Ana "),
            ("GAPS_QR_REFRESH_SECS", "10"),
            ("GAPS_DOSE_WINDOW_MINUTES", "15"),
        ]
        .into_iter()
        .collect();
        let config = CompanionConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.patient_name, "Ana");
        assert_eq!(config.qr_refresh_secs, 10);
        assert_eq!(config.dose_window_minutes, 15);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let vars: HashMap<&str, &str> = [
            ("GAPS_QR_REFRESH_SECS", "0"),
            ("GAPS_DOSE_WINDOW_MINUTES", "soon"),
        ]
        .into_iter()
        .collect();
        let config = CompanionConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config, CompanionConfig::default());
    }
}
