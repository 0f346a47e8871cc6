//! Arena-backed AVL tree.
//!
//! Keeps two invariants across every mutation: binary-search ordering over
//! distinct keys, and `|height(right) - height(left)| <= 1` at every node.
//! Heights are cached on the nodes and repaired bottom-up as insert and
//! delete unwind.
//!
//! Instead of boxed child pointers, nodes live in an [`Arena`] and link to
//! each other through `Option<u32>` indices.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] and the empty-subtree height |
//! [`arena`] | Slot storage with free-list reuse |
//! [`util`] | Height bookkeeping, rotations, rebalance, traversals, validation |
//! [`tree`] | [`AvlTree`]: search, insert, delete |
//! [`self_test`] | Fixed demonstration scenario and banner runner |
//! [`error`] | [`DuplicateKeyError`], [`SelfTestError`] |

pub mod arena;
pub mod error;
pub mod tree;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use error::{DuplicateKeyError, SelfTestError};
pub use self_test::{run_with_banner, self_tests, AvlSelfTest, Scenario, SelfTest};
pub use tree::AvlTree;
pub use types::{AvlNode, EMPTY_HEIGHT};
