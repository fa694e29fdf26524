//! The authorities extension point and its combinators.
//!
//! [`FixedAuthoritiesExtractor`](crate::FixedAuthoritiesExtractor) covers the
//! common case. Providers that publish authorities somewhere else implement
//! [`AuthoritiesExtractor`] directly and can be chained with the built-in one.

use std::collections::HashSet;

use serde_json::Value;

use crate::authority::GrantedAuthority;

/// Decoded user-info attributes.
pub type AttributeMap = serde_json::Map<String, Value>;

/// Trait for extracting granted authorities from user-info attributes.
///
/// # Example
///
/// ```ignore
/// use r2e_authorities::{AttributeMap, AuthoritiesExtractor, GrantedAuthority};
///
/// struct GroupsExtractor;
///
/// impl AuthoritiesExtractor for GroupsExtractor {
///     fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority> {
///         attributes
///             .get("groups")
///             .and_then(|v| v.as_array())
///             .map(|arr| arr.iter().filter_map(|g| g.as_str()).map(GrantedAuthority::from).collect())
///             .unwrap_or_default()
///     }
/// }
/// ```
pub trait AuthoritiesExtractor: Send + Sync {
    /// Extract authorities from the given attributes.
    fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority>;

    /// Extract authorities from a raw claims value.
    ///
    /// Anything other than a JSON object is treated as an empty attribute map.
    fn extract_from_claims(&self, claims: &Value) -> Vec<GrantedAuthority> {
        match claims {
            Value::Object(attributes) => self.extract_authorities(attributes),
            _ => self.extract_authorities(&AttributeMap::new()),
        }
    }
}

impl<T: AuthoritiesExtractor + ?Sized> AuthoritiesExtractor for &T {
    fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority> {
        (**self).extract_authorities(attributes)
    }
}

impl<T: AuthoritiesExtractor + ?Sized> AuthoritiesExtractor for Box<T> {
    fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority> {
        (**self).extract_authorities(attributes)
    }
}

/// Tries two extractors in order and returns the first non-empty result.
///
/// Since [`FixedAuthoritiesExtractor`](crate::FixedAuthoritiesExtractor) never
/// returns an empty list, put it last.
///
/// ```ignore
/// let extractor = Composite(GroupsExtractor, FixedAuthoritiesExtractor::new());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Composite<A, B>(pub A, pub B);

impl<A: AuthoritiesExtractor, B: AuthoritiesExtractor> AuthoritiesExtractor for Composite<A, B> {
    fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority> {
        let authorities = self.0.extract_authorities(attributes);
        if !authorities.is_empty() {
            authorities
        } else {
            self.1.extract_authorities(attributes)
        }
    }
}

/// Combines the authorities of two extractors.
///
/// Duplicates are removed, keeping the first occurrence.
#[derive(Debug, Clone, Copy)]
pub struct Merge<A, B>(pub A, pub B);

impl<A: AuthoritiesExtractor, B: AuthoritiesExtractor> AuthoritiesExtractor for Merge<A, B> {
    fn extract_authorities(&self, attributes: &AttributeMap) -> Vec<GrantedAuthority> {
        let mut authorities = self.0.extract_authorities(attributes);
        authorities.extend(self.1.extract_authorities(attributes));

        let mut seen = HashSet::new();
        authorities.retain(|a| seen.insert(a.clone()));

        authorities
    }
}
