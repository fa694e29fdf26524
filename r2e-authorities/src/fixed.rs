//! Default authorities extraction for user-info attributes.
//!
//! Authorities are read from a single attribute (`authorities` unless
//! configured otherwise). The value may be:
//!
//! - a comma-delimited string: `"ROLE_ADMIN,ROLE_USER"`
//! - an array of strings: `["ROLE_ADMIN", "ROLE_USER"]`
//! - an array of objects, as emitted by most authorization servers:
//!   `[{"authority": "ROLE_ADMIN"}, {"role": "ROLE_OPS"}]`
//! - any mix of the above
//!
//! A bare object (not wrapped in an array) is kept as a single token holding
//! its compact JSON text.
//!
//! When no usable authority is found, the configured default (`ROLE_USER`)
//! is granted, so the result is never empty.

use std::slice;

use serde_json::Value;
use tracing::{debug, trace};

use crate::authority::{push_comma_separated, GrantedAuthority};
use crate::config::AuthoritiesConfig;
use crate::error::ConfigError;
use crate::extractor::{AttributeMap, AuthoritiesExtractor};

/// Keys probed, in order, on multi-entry authority objects.
const AUTHORITY_KEYS: [&str; 3] = ["authority", "role", "value"];

/// Extracts authorities from a fixed attribute, defaulting to `ROLE_USER`.
///
/// # Example
///
/// ```ignore
/// use r2e_authorities::{AuthoritiesExtractor, FixedAuthoritiesExtractor};
///
/// let attributes = serde_json::json!({
///     "sub": "user-1",
///     "authorities": ["ROLE_ADMIN", {"authority": "ROLE_OPS"}]
/// });
///
/// let authorities = FixedAuthoritiesExtractor::new().extract_from_claims(&attributes);
/// assert_eq!(authorities, ["ROLE_ADMIN", "ROLE_OPS"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedAuthoritiesExtractor {
    config: AuthoritiesConfig,
}

impl FixedAuthoritiesExtractor {
    /// Create an extractor reading `authorities` with a `ROLE_USER` default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from a custom config. The config is validated first.
    pub fn from_config(config: AuthoritiesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AuthoritiesConfig {
        &self.config
    }
}

impl AuthoritiesExtractor for FixedAuthoritiesExtractor {
    fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority> {
        let mut authorities = Vec::new();

        match attributes.get(&self.config.key) {
            // A bare object is not a list of authorities; it is kept as one token.
            Some(value @ Value::Object(_)) => {
                trace!(value = %value, "Authorities attribute is an object, keeping it verbatim");
                authorities.push(GrantedAuthority::new(value.to_string()));
            }
            Some(value) => {
                for element in as_sequence(value) {
                    push_element(&mut authorities, element);
                }
            }
            None => debug!(key = %self.config.key, "No authorities attribute present"),
        }

        if authorities.is_empty() {
            debug!(
                default = %self.config.default_authority,
                "No usable authorities found, granting default authority"
            );
            authorities.push(GrantedAuthority::new(self.config.default_authority.trim()));
        }

        authorities
    }
}

/// Extract authorities with the default configuration.
pub fn extract_authorities(attributes: &AttributeMap) -> Vec<GrantedAuthority> {
    FixedAuthoritiesExtractor::new().extract_authorities(attributes)
}

/// Arrays are used as-is; any other scalar is a one-element sequence.
fn as_sequence(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        other => slice::from_ref(other),
    }
}

fn push_element(authorities: &mut Vec<GrantedAuthority>, element: &Value) {
    match element {
        Value::Object(map) => match select_entry(map) {
            Some(selected) => push_value(authorities, selected),
            None => {
                trace!(element = %element, "Unrecognized authority object, keeping it verbatim");
                authorities.push(GrantedAuthority::new(element.to_string()));
            }
        },
        other => push_value(authorities, other),
    }
}

/// Pick the authority out of an object element: the sole value of a
/// single-entry object, else the first of [`AUTHORITY_KEYS`] present.
fn select_entry(map: &AttributeMap) -> Option<&Value> {
    if map.len() == 1 {
        return map.values().next();
    }
    AUTHORITY_KEYS.iter().find_map(|key| map.get(*key))
}

fn push_value(authorities: &mut Vec<GrantedAuthority>, value: &Value) {
    match value {
        Value::String(s) => push_comma_separated(authorities, s),
        // Null never names an authority; an all-null value falls back to the default.
        Value::Null => {}
        Value::Bool(b) => authorities.push(GrantedAuthority::new(b.to_string())),
        Value::Number(n) => authorities.push(GrantedAuthority::new(n.to_string())),
        // Structured values are never re-split on commas.
        Value::Array(_) | Value::Object(_) => {
            authorities.push(GrantedAuthority::new(value.to_string()))
        }
    }
}
