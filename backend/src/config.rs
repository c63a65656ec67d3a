//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file, and
//! `USER_SERVICE_*` environment variables.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_CONFIRMATION_SENDER: &str = "no-reply@localhost";

/// Configuration values for the sign-up service and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct UserServiceSettings {
    /// Emit logs as JSON lines instead of human-readable text. Defaults to
    /// `true`; read it through [`UserServiceSettings::json_logs`].
    pub json_logs: Option<bool>,
    /// Tracing filter directive. Falls back to `RUST_LOG` when unset.
    pub log_filter: Option<String>,
    /// Address confirmation emails are sent from.
    pub confirmation_sender: Option<String>,
}

impl UserServiceSettings {
    /// Whether logs are emitted as JSON lines.
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.json_logs.unwrap_or(true)
    }

    /// Return the configured sender address, falling back to the default.
    #[must_use]
    pub fn confirmation_sender(&self) -> &str {
        self.confirmation_sender
            .as_deref()
            .map(str::trim)
            .filter(|sender| !sender.is_empty())
            .unwrap_or(DEFAULT_CONFIRMATION_SENDER)
    }

    /// Return the configured log filter, ignoring blank values.
    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter
            .as_deref()
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> UserServiceSettings {
        UserServiceSettings::load_from_iter([OsString::from("create-user")])
            .expect("config should load")
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(true), true)]
    #[case(Some(false), false)]
    fn json_logs_is_on_unless_disabled(#[case] raw: Option<bool>, #[case] expected: bool) {
        let settings = UserServiceSettings {
            json_logs: raw,
            log_filter: None,
            confirmation_sender: None,
        };
        assert_eq!(settings.json_logs(), expected);
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USER_SERVICE_JSON_LOGS", None::<String>),
            ("USER_SERVICE_LOG_FILTER", None::<String>),
            ("USER_SERVICE_CONFIRMATION_SENDER", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.json_logs, None);
        assert!(settings.json_logs());
        assert_eq!(settings.log_filter(), None);
        assert_eq!(settings.confirmation_sender(), DEFAULT_CONFIRMATION_SENDER);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_SERVICE_JSON_LOGS", Some("false".to_owned())),
            ("USER_SERVICE_LOG_FILTER", Some("backend=debug".to_owned())),
            (
                "USER_SERVICE_CONFIRMATION_SENDER",
                Some("welcome@example.com".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.json_logs());
        assert_eq!(settings.log_filter(), Some("backend=debug"));
        assert_eq!(settings.confirmation_sender(), "welcome@example.com");
    }

    #[rstest]
    fn blank_values_fall_back_to_defaults() {
        let _guard = lock_env([
            ("USER_SERVICE_JSON_LOGS", None::<String>),
            ("USER_SERVICE_LOG_FILTER", Some("  ".to_owned())),
            ("USER_SERVICE_CONFIRMATION_SENDER", Some(" ".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.log_filter(), None);
        assert_eq!(settings.confirmation_sender(), DEFAULT_CONFIRMATION_SENDER);
    }
}
