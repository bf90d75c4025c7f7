//! Error types for parsing button style options.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when turning text or numbers into style options.
///
/// Resolution itself never fails; these only surface at the configuration
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name is not one of the 22 color families.
    #[error("Unknown color family '{0}'")]
    UnknownColorFamily(String),

    /// The name is not small, medium or large.
    #[error("Unknown button size '{0}'")]
    UnknownSize(String),

    /// The name is not one of the visual styles.
    #[error("Unknown button style '{0}'")]
    UnknownStyle(String),

    /// The value is not a canonical shade (50, 100, 200, ... 900).
    #[error("Invalid shade '{0}', expected one of 50, 100, 200, 300, 400, 500, 600, 700, 800, 900")]
    InvalidShade(String),

    /// A `<family>-<shade>` token could not be split or parsed.
    #[error("Invalid color token '{token}': {message}")]
    InvalidColorToken { token: String, message: String },
}

impl Error {
    /// Create an unknown color family error.
    pub fn unknown_color_family(name: impl Into<String>) -> Self {
        Self::UnknownColorFamily(name.into())
    }

    /// Create an unknown size error.
    pub fn unknown_size(name: impl Into<String>) -> Self {
        Self::UnknownSize(name.into())
    }

    /// Create an unknown style error.
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle(name.into())
    }

    /// Create an invalid shade error.
    pub fn invalid_shade(value: impl ToString) -> Self {
        Self::InvalidShade(value.to_string())
    }

    /// Create an invalid color token error.
    pub fn invalid_color_token(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColorToken {
            token: token.into(),
            message: message.into(),
        }
    }
}
