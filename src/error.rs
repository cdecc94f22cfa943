/// Errors produced by [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// An index argument fell outside the valid bound.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of the call.
        len: usize,
    },

    /// A `[start, end)` range was reversed or exceeded the array length.
    #[error("invalid range {start}..{end} for array of length {len}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// The array length at the time of the call.
        len: usize,
    },
}

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;
