use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Attribute key read by default.
pub const DEFAULT_AUTHORITIES_KEY: &str = "authorities";

/// Authority granted when the attributes carry none.
pub const DEFAULT_AUTHORITY: &str = "ROLE_USER";

/// Configuration for [`FixedAuthoritiesExtractor`](crate::FixedAuthoritiesExtractor).
///
/// Missing fields fall back to their defaults when deserialized, so a YAML
/// section only needs to name what it overrides:
///
/// ```yaml
/// key: groups
/// default_authority: ROLE_GUEST
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoritiesConfig {
    /// Attribute holding the authorities (default: `authorities`).
    pub key: String,

    /// Authority used when no usable one is found (default: `ROLE_USER`).
    pub default_authority: String,
}

impl Default for AuthoritiesConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_AUTHORITIES_KEY.to_string(),
            default_authority: DEFAULT_AUTHORITY.to_string(),
        }
    }
}

impl AuthoritiesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute key the authorities are read from.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the authority granted when none can be extracted.
    pub fn with_default_authority(mut self, authority: impl Into<String>) -> Self {
        self.default_authority = authority.into();
        self
    }

    /// Parse and validate a config from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the key is usable and that the default authority is a
    /// single non-empty token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(invalid("key", "must not be blank"));
        }
        if self.default_authority.trim().is_empty() {
            return Err(invalid("default_authority", "must not be blank"));
        }
        if self.default_authority.contains(',') {
            return Err(invalid(
                "default_authority",
                "must be a single authority without commas",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    debug!(field, reason, "Rejected authorities config");
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
