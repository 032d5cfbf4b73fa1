//! Session configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum signing key length accepted in production, in bytes.
const MIN_PRODUCTION_KEY_BYTES: usize = 32;

/// Session configuration (token signing and validity)
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// HMAC signing key for session tokens
    pub signing_key: String,

    /// Validity window in days
    #[serde(default = "default_validity_days")]
    pub validity_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            signing_key: String::new(),
            validity_days: default_validity_days(),
        }
    }
}

impl SessionConfig {
    /// Validate session configuration
    ///
    /// Development tolerates short keys for convenience; production does
    /// not, since the key is the only thing standing between a client
    /// and a forged session.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.signing_key.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SIGNING_KEY"));
        }
        if *environment == Environment::Production
            && self.signing_key.len() < MIN_PRODUCTION_KEY_BYTES
        {
            return Err(ValidationError::SigningKeyTooShort);
        }
        if self.validity_days < 1 || self.validity_days > 365 {
            return Err(ValidationError::InvalidValidityWindow);
        }
        Ok(())
    }
}

fn default_validity_days() -> i64 {
    crate::domain::session::DEFAULT_VALIDITY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SessionConfig {
        SessionConfig {
            signing_key: "0123456789abcdef0123456789abcdef".to_string(),
            validity_days: 5,
        }
    }

    #[test]
    fn test_validation_missing_signing_key() {
        let config = SessionConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_short_key_allowed_in_development() {
        let config = SessionConfig {
            signing_key: "short".to_string(),
            validity_days: 5,
        };
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_short_key_rejected_in_production() {
        let config = SessionConfig {
            signing_key: "short".to_string(),
            validity_days: 5,
        };
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::SigningKeyTooShort)
        ));
    }

    #[test]
    fn test_validation_validity_window_bounds() {
        let mut config = valid_config();
        config.validity_days = 0;
        assert!(config.validate(&Environment::Development).is_err());

        config.validity_days = 366;
        assert!(config.validate(&Environment::Development).is_err());

        config.validity_days = 5;
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_default_validity_is_five_days() {
        let json = r#"{"signing_key":"0123456789abcdef0123456789abcdef"}"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validity_days, 5);
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate(&Environment::Production).is_ok());
    }
}
