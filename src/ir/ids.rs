//! Newtype ID for model definitions.
//!
//! The same number appears as the first field of an IPL `inst` line and of
//! the IDE `objs` line it refers to, so it gets its own type rather than
//! travelling around as a bare integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A model ID shared by an IDE definition and every IPL instance of it.
///
/// Zero (or a missing ID) marks an object that has no definition of its own,
/// such as a child mesh of a multi-part model.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub i64);

impl ObjectId {
    /// Returns the underlying i64 value.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns true for IDs that can own a definition (strictly positive).
    #[inline]
    pub fn is_exportable(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for ObjectId {
    fn from(id: i32) -> Self {
        Self(id as i64)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
