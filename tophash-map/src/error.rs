use core::fmt;

/// Errors reported by the fallible map constructors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The bucket array could not be allocated
    AllocationFailed {
        /// Number of buckets that were requested
        buckets: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::AllocationFailed { buckets } => {
                write!(f, "Failed to allocate {} buckets", buckets)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MapError {}
