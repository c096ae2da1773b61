use core::fmt;

/// Typed errors for map operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The key is its type's absence sentinel and cannot be stored or looked up
    NullKey,
    /// An entry with an equal key is already present
    DuplicateKey,
    /// No entry with an equal key is present
    KeyNotFound,
    /// The map was mutated while an iteration over it was in progress
    ConcurrentModification,
    /// The map was constructed with a bucket count that cannot address any key
    InvalidCapacity {
        /// Bucket count that was asked for
        requested: usize,
    },
    /// A copy destination cannot hold every entry past the requested offset
    DestinationTooSmall {
        /// Number of entries to copy
        needed: usize,
        /// Slots left after the offset
        available: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NullKey => write!(f, "Key cannot be null"),
            MapError::DuplicateKey => {
                write!(f, "An element with the same key already exists")
            }
            MapError::KeyNotFound => {
                write!(f, "The given key was not present in the map")
            }
            MapError::ConcurrentModification => {
                write!(f, "Map was modified; iteration may not continue")
            }
            MapError::InvalidCapacity { requested } => {
                write!(f, "Bucket count must be positive, got {}", requested)
            }
            MapError::DestinationTooSmall { needed, available } => {
                write!(
                    f,
                    "Destination too small: {} slots needed, {} available",
                    needed, available
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MapError::DuplicateKey.to_string(),
            "An element with the same key already exists"
        );
        assert_eq!(
            MapError::InvalidCapacity { requested: 0 }.to_string(),
            "Bucket count must be positive, got 0"
        );
        assert_eq!(
            MapError::DestinationTooSmall {
                needed: 3,
                available: 1
            }
            .to_string(),
            "Destination too small: 3 slots needed, 1 available"
        );
    }
}
