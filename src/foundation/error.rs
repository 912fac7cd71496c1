/// Result alias used by the fallible parts of the crate.
pub type MorphResult<T> = Result<T, MorphError>;

/// Errors raised by strict parsing and command (de)serialization.
///
/// Interpolation itself never fails: malformed or absent paths degrade to
/// empty command sequences instead.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Path data did not match the grammar.
    #[error("parse error at byte {offset}: {message}")]
    Parse {
        /// Byte offset into the input where the problem was found.
        offset: usize,
        /// Human readable description.
        message: String,
    },

    /// Command records could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Builds a [`MorphError::Parse`].
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }

    /// Builds a [`MorphError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Byte offset of a parse error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
