//! Runtime settings for a conversion session.
//!
//! Settings come from command-line flags (each with an environment
//! fallback, see `main.rs`) and are checked by [`AppConfig::validate`]
//! before a session starts. Nothing is read from or written to disk.
//!
//! # Example
//!
//! ```
//! use morse_desk::config::AppConfig;
//!
//! let config = AppConfig::default().with_history_limit(5);
//! assert!(config.validate().is_ok());
//! ```

mod error;

pub use error::ConfigError;

use std::time::Duration;

use crate::core::Mode;

/// Default number of conversions kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Largest accepted history limit.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Default time the copy confirmation stays visible.
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2_000;

/// Largest accepted copy confirmation duration.
pub const MAX_COPY_FEEDBACK_MS: u64 = 60_000;

/// Settings for one running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum number of history entries before the oldest is evicted.
    pub history_limit: usize,
    /// How long the "copied" indicator stays visible.
    pub copy_feedback: Duration,
    /// Direction a new session starts in.
    pub default_mode: Mode,
    /// Whether terminal output is colored.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            copy_feedback: Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS),
            default_mode: Mode::TextToMorse,
            color: true,
        }
    }
}

impl AppConfig {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_copy_feedback_ms(mut self, millis: u64) -> Self {
        self.copy_feedback = Duration::from_millis(millis);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Parses a mode name and applies it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMode` for an unrecognised name.
    pub fn with_mode_name(self, name: &str) -> Result<Self, ConfigError> {
        Ok(self.with_mode(name.parse()?))
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Applies the color preference to terminal output.
    ///
    /// Disabling forces plain output. Leaving color on keeps `colored`'s
    /// own detection (which honours `NO_COLOR` and non-terminal output).
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Checks every setting against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHistoryLimit` when the limit is zero or
    /// above [`MAX_HISTORY_LIMIT`], and `ConfigError::InvalidCopyFeedback`
    /// when the duration is zero or above [`MAX_COPY_FEEDBACK_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ConfigError::InvalidHistoryLimit {
                value: self.history_limit,
                max: MAX_HISTORY_LIMIT,
            });
        }

        let millis = self.copy_feedback.as_millis() as u64;
        if millis == 0 || millis > MAX_COPY_FEEDBACK_MS {
            return Err(ConfigError::InvalidCopyFeedback {
                value: millis,
                max: MAX_COPY_FEEDBACK_MS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.copy_feedback, Duration::from_millis(2_000));
        assert_eq!(config.default_mode, Mode::TextToMorse);
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let result = AppConfig::default().with_history_limit(0).validate();

        match result {
            Err(ConfigError::InvalidHistoryLimit { value, max }) => {
                assert_eq!(value, 0);
                assert_eq!(max, MAX_HISTORY_LIMIT);
            }
            other => panic!("Expected InvalidHistoryLimit, got: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_history_limit_rejected() {
        let result = AppConfig::default()
            .with_history_limit(MAX_HISTORY_LIMIT + 1)
            .validate();
        assert!(matches!(result, Err(ConfigError::InvalidHistoryLimit { .. })));
    }

    #[test]
    fn test_copy_feedback_bounds() {
        assert!(AppConfig::default().with_copy_feedback_ms(0).validate().is_err());
        assert!(AppConfig::default()
            .with_copy_feedback_ms(MAX_COPY_FEEDBACK_MS + 1)
            .validate()
            .is_err());
        assert!(AppConfig::default().with_copy_feedback_ms(500).validate().is_ok());
    }

    #[test]
    fn test_color_off_forces_plain_output() {
        AppConfig::default().with_color(false).apply_color();

        assert!(!colored::control::SHOULD_COLORIZE.should_colorize());
        assert_eq!(format!("{}", colored::Colorize::green("ok")), "ok");
    }

    #[test]
    fn test_mode_name() {
        let config = AppConfig::default().with_mode_name("morse").unwrap();
        assert_eq!(config.default_mode, Mode::MorseToText);

        let err = AppConfig::default().with_mode_name("semaphore").unwrap_err();
        assert!(err.to_string().contains("semaphore"));
    }
}
