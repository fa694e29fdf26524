/// Errors raised while loading or validating an [`AuthoritiesConfig`](crate::AuthoritiesConfig).
///
/// Extraction itself never fails; only configuration does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The YAML source could not be parsed.
    Load(String),

    /// A field holds a value the extractor cannot work with.
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Authorities config load error: {msg}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid authorities config '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Load(err.to_string())
    }
}
