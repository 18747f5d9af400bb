//! Error types for rowval

use thiserror::Error;

/// Result type alias for rendering and binding operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for SQL rendering
#[derive(Debug, Error)]
pub enum SqlError {
    /// Invalid SQL identifier (column, table, or schema name)
    #[error("Identifier error: {0}")]
    Identifier(String),

    /// Failure raised by a wrapped renderer; propagated unchanged
    #[error("Render error: {0}")]
    Render(String),
}

impl SqlError {
    /// Create an identifier error
    pub fn identifier(message: impl Into<String>) -> Self {
        Self::Identifier(message.into())
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }
}
