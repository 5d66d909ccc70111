//! Error types for ring operations.

use core::fmt;

/// Error returned when an insertion index is past the end of the ring.
///
/// Carries the value that could not be inserted so the caller can take it
/// back with [`into_inner`](Self::into_inner). The ring is unchanged when
/// this error is returned.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds<T> {
    /// The value that could not be inserted.
    pub value: T,
    /// The rejected index.
    pub index: usize,
    /// Ring length at the time of the call.
    pub len: usize,
}

impl<T> OutOfBounds<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for OutOfBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutOfBounds")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> fmt::Display for OutOfBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert index {} exceeds length {}", self.index, self.len)
    }
}

impl<T> std::error::Error for OutOfBounds<T> {}

/// First structural inconsistency found by [`Ring::validate`].
///
/// Each variant names the invariant clause that failed. A healthy ring
/// never produces any of these; they exist so tests and debugging tools
/// can report corruption precisely.
///
/// [`Ring::validate`]: crate::Ring::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// Length is zero but a head or tail link is still set.
    EmptyWithLinks,
    /// Length is nonzero but the head link is unset.
    MissingHead,
    /// Length is nonzero but the tail link is unset.
    MissingTail,
    /// The tail node links to a successor.
    TailNotTerminal,
    /// No chain end was found within `len` steps from the head, so the
    /// chain is longer than recorded or cyclic.
    ChainTooLong {
        /// The recorded length that bounded the walk.
        len: usize,
    },
    /// The chain ended before `len` nodes were walked.
    LengthMismatch {
        /// The recorded length.
        len: usize,
        /// Nodes actually reached from the head.
        walked: usize,
    },
    /// The terminal node reached from the head is not the tail.
    TailMismatch,
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyWithLinks => {
                write!(f, "length is 0 but head or tail is still set")
            }
            InvariantError::MissingHead => write!(f, "nonzero length but no head node"),
            InvariantError::MissingTail => write!(f, "nonzero length but no tail node"),
            InvariantError::TailNotTerminal => write!(f, "tail node has a successor"),
            InvariantError::ChainTooLong { len } => {
                write!(f, "no chain end within {} nodes", len)
            }
            InvariantError::LengthMismatch { len, walked } => {
                write!(f, "recorded length {} but walked {} nodes", len, walked)
            }
            InvariantError::TailMismatch => {
                write!(f, "terminal node reached from head is not the tail")
            }
        }
    }
}

impl std::error::Error for InvariantError {}
