use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The input does not match the accepted version grammar.
    #[error("Invalid version format: '{0}'")]
    InvalidFormat(String),
}

impl VersionError {
    pub(crate) fn invalid(raw: &str) -> Self {
        VersionError::InvalidFormat(raw.to_string())
    }

    /// The offending input string
    pub fn input(&self) -> &str {
        match self {
            VersionError::InvalidFormat(raw) => raw,
        }
    }
}
