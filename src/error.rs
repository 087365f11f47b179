//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! Not finding a value is never an error: lookups return `Option` and
//! [`Tree::depth`][crate::Tree::depth] returns `0`.

use thiserror::Error;

/// The ways an operation on a [`Tree`][crate::Tree] can be refused.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError<T> {
    /// The value being inserted is equal to one already stored. The rejected value is handed back
    /// so the caller keeps ownership of it.
    #[error("value is already present in the tree")]
    Duplicate(T),

    /// The operation needs a root but the tree has none.
    #[error("tree is empty")]
    Empty,
}

impl<T> TreeError<T> {
    /// Takes back the value rejected by a failed insert, if this error carries one.
    pub fn into_rejected(self) -> Option<T> {
        match self {
            Self::Duplicate(value) => Some(value),
            Self::Empty => None,
        }
    }
}
