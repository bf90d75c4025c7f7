//! Error types for button configuration.

use std::path::PathBuf;

/// Result type alias for button operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading button descriptions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read button sheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sheet is not valid TOML or does not match the expected shape.
    #[error("Invalid button sheet: {0}")]
    Toml(#[from] toml::de::Error),

    /// A style option or color token failed to parse.
    #[error("Invalid style in button {index}: {source}")]
    Style {
        index: usize,
        #[source]
        source: tailwind_button_style::Error,
    },

    /// A button has neither text nor an icon.
    #[error("Button {index} has neither text nor an icon")]
    EmptyButton { index: usize },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a style error for the button at `index`.
    pub fn style(index: usize, source: tailwind_button_style::Error) -> Self {
        Self::Style { index, source }
    }
}
