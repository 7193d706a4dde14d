use thiserror::Error;

/// Result type for suidgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for serialVersionUID computation
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Class descriptor requires a non-empty qualified name")]
    EmptyClassName,

    #[error("String too long for modified UTF-8 encoding: {len} bytes (max 65535)")]
    UtfTooLong { len: usize },

    #[error("Message digest unavailable: {reason}")]
    DigestUnavailable { reason: String },

    #[error("Invalid type syntax in '{input}': {message}")]
    TypeSyntax { input: String, message: String },

    #[error("Unknown class: {name}")]
    UnknownClass { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a type syntax error for the given input text
    pub fn type_syntax(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeSyntax {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a digest-unavailable error
    pub fn digest_unavailable(reason: impl Into<String>) -> Self {
        Self::DigestUnavailable { reason: reason.into() }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
