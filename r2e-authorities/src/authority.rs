use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single authority (role or permission) granted to a principal.
///
/// Serialized as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantedAuthority(String);

impl GrantedAuthority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self(authority.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GrantedAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GrantedAuthority {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GrantedAuthority {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GrantedAuthority {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GrantedAuthority {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for GrantedAuthority {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GrantedAuthority {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Parse a comma-delimited string into an authority list.
///
/// Each token is trimmed and empty tokens are dropped, so `" A, ,B "` yields
/// `["A", "B"]`.
pub fn comma_separated_to_authority_list(authorities: &str) -> Vec<GrantedAuthority> {
    let mut list = Vec::new();
    push_comma_separated(&mut list, authorities);
    list
}

pub(crate) fn push_comma_separated(list: &mut Vec<GrantedAuthority>, authorities: &str) {
    list.extend(
        authorities
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(GrantedAuthority::from),
    );
}

/// Collect the authority names into an ordered set.
pub fn authority_list_to_set(authorities: &[GrantedAuthority]) -> BTreeSet<&str> {
    authorities.iter().map(GrantedAuthority::as_str).collect()
}

/// Check whether `authority` is present in the list.
pub fn has_authority(authorities: &[GrantedAuthority], authority: &str) -> bool {
    authorities.iter().any(|a| a == authority)
}
