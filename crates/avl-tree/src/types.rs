//! Node layout.
//!
//! Links are `Option<u32>` indices into an [`Arena`](crate::arena::Arena)
//! rather than boxed pointers. Every index is owned by exactly one link (a
//! parent's `l`/`r` or the tree's root field), so the shape stays a tree.

/// Height of the empty subtree.
pub const EMPTY_HEIGHT: i32 = -1;

/// AVL tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Cached `1 + max(height(l), height(r))`; a leaf has height `0`.
    pub height: i32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            height: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
