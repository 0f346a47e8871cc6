use std::io;

use thiserror::Error;

/// Returned by [`AvlTree::insert`](crate::AvlTree::insert) when the key is
/// already present. The tree is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("duplicate key")]
pub struct DuplicateKeyError;

#[derive(Debug, Error)]
pub enum SelfTestError {
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),
    #[error("failed to write self-test output: {0}")]
    Io(#[from] io::Error),
    #[error("tree invariant violated: {0}")]
    InvariantViolation(String),
}
