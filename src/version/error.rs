use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Unrecognized qualifier: {0}")]
    UnrecognizedQualifier(String),

    #[error("Version has {count} components but the hash normalization limit is {limit}")]
    TooManyComponents { count: usize, limit: usize },
}

#[derive(Debug, Error)]
pub enum SelfCheckError {
    #[error("Expected {left} {op} {right}")]
    Assertion {
        left: &'static str,
        right: &'static str,
        op: &'static str,
    },

    #[error(transparent)]
    Version(#[from] VersionError),
}
