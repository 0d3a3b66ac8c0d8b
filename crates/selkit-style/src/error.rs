use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors from token lookup and export.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The path is well-formed but names no token or shade.
    #[error("unknown theme token: {path}")]
    UnknownToken { path: String },

    /// Empty path, empty segment, or more than two segments.
    #[error("invalid token path: {path:?}")]
    InvalidPath { path: String },

    /// JSON export failed.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TokenError {
    #[must_use]
    pub fn unknown(path: impl Into<String>) -> Self {
        Self::UnknownToken { path: path.into() }
    }

    #[must_use]
    pub fn invalid(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
