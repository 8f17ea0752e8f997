//! Error types for the Chosen widgets.

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, ChosenError>;

/// Errors that can occur when manipulating a value list box.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChosenError {
    /// A value with the same key is already in the accepted values list.
    ///
    /// Keys must be unique across all accepted values; silently overwriting
    /// the existing value would corrupt the key-to-position index.
    #[error("duplicate key: a value with the same key is already accepted at position {existing_index}")]
    DuplicateKey { existing_index: usize },

    /// The value is not part of the accepted values list.
    #[error("value is not part of the accepted values list")]
    NotAccepted,
}

impl ChosenError {
    /// Create a duplicate-key error pointing at the position of the
    /// already-accepted value.
    pub fn duplicate_key(existing_index: usize) -> Self {
        Self::DuplicateKey { existing_index }
    }
}
