use thiserror::Error;

/// Error type for past-frame metadata access
#[derive(Error, Debug)]
pub enum TrackerMetaError {
    /// Error when a required pointer is null
    #[error("Null pointer encountered: {0}")]
    NullPointer(String),

    /// Error when an index is at or past the filled count of a container
    #[error("Index {index} out of range: container holds {filled} filled element(s)")]
    IndexOutOfRange { index: usize, filled: usize },
}

impl TrackerMetaError {
    /// Create a null pointer error
    pub fn null_pointer(context: &str) -> Self {
        TrackerMetaError::NullPointer(context.to_string())
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, filled: usize) -> Self {
        TrackerMetaError::IndexOutOfRange { index, filled }
    }
}
