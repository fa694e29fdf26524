//! Granted-authority extraction for R2E.
//!
//! Turns the attributes returned by an OAuth2 user-info endpoint into a list
//! of [`GrantedAuthority`] values. See [`FixedAuthoritiesExtractor`] for the
//! accepted attribute shapes.

pub mod authority;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fixed;

// Re-export primary public types for convenience.
pub use authority::{
    authority_list_to_set, comma_separated_to_authority_list, has_authority, GrantedAuthority,
};
pub use config::{AuthoritiesConfig, DEFAULT_AUTHORITIES_KEY, DEFAULT_AUTHORITY};
pub use error::ConfigError;
pub use extractor::{AttributeMap, AuthoritiesExtractor, Composite, Merge};
pub use fixed::{extract_authorities, FixedAuthoritiesExtractor};

pub mod prelude {
    //! Re-exports of the most commonly used authority types.
    pub use crate::{
        AttributeMap, AuthoritiesConfig, AuthoritiesExtractor, FixedAuthoritiesExtractor,
        GrantedAuthority,
    };
}
