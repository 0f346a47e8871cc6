use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::debug;

use crate::arena::Arena;
use crate::error::DuplicateKeyError;
use crate::types::{AvlNode, EMPTY_HEIGHT};
use crate::util::{assert_avl_tree, balance, find, inorder, preorder, print, rebalance};

/// Height-balanced binary search tree over distinct keys.
///
/// Every mutation descends recursively and rebalances each visited node on
/// the way back up, one level at a time.
///
/// ```
/// use algs_avl::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [10, 50, 40, 25, 30, 20] {
///     tree.insert(k).unwrap();
/// }
/// assert_eq!(tree.preorder(), vec![&25, &10, &20, &40, &30, &50]);
/// assert!(tree.insert(25).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct AvlTree<K> {
    root: Option<u32>,
    arena: Arena<K>,
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Arena::new(),
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K> {
        &self.arena[idx]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx].k
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root; `-1` for the empty tree.
    pub fn height(&self) -> i32 {
        self.root
            .map(|i| self.arena[i].height)
            .unwrap_or(EMPTY_HEIGHT)
    }

    /// Balance factor of `node`, `0` for `None`.
    pub fn balance_of(&self, node: Option<u32>) -> i32 {
        balance(&self.arena, node)
    }

    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        preorder(&self.arena, self.root, &mut |k| keys.push(k));
        keys
    }

    pub fn inorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        inorder(&self.arena, self.root, &mut |k| keys.push(k));
        keys
    }

    /// Visits keys root first, then the left and right subtrees.
    pub fn for_each_preorder<F: FnMut(&K)>(&self, mut f: F) {
        preorder(&self.arena, self.root, &mut f);
    }

    /// Visits keys in ascending order.
    pub fn for_each_inorder<F: FnMut(&K)>(&self, mut f: F) {
        inorder(&self.arena, self.root, &mut f);
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn print(&self, tab: &str) -> String
    where
        K: Debug,
    {
        print(&self.arena, self.root, tab)
    }
}

impl<K: Ord> AvlTree<K> {
    /// Builds a tree by inserting `keys` in order.
    pub fn try_from_keys<I>(keys: I) -> Result<Self, DuplicateKeyError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key)
    }

    pub fn search(&self, key: &K) -> Option<&K> {
        self.find(key).map(|i| &self.arena[i].k)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `key`. On [`DuplicateKeyError`] no link, height or slot has
    /// been touched.
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKeyError> {
        let root = self.insert_at(self.root, key)?;
        self.root = Some(root);
        Ok(())
    }

    fn insert_at(&mut self, node: Option<u32>, key: K) -> Result<u32, DuplicateKeyError> {
        let Some(n) = node else {
            return Ok(self.arena.alloc(AvlNode::new(key)));
        };

        match key.cmp(&self.arena[n].k) {
            Ordering::Less => {
                let l = self.arena[n].l;
                let l = self.insert_at(l, key)?;
                self.arena[n].l = Some(l);
            }
            Ordering::Greater => {
                let r = self.arena[n].r;
                let r = self.insert_at(r, key)?;
                self.arena[n].r = Some(r);
            }
            Ordering::Equal => {
                debug!(slot = n, "duplicate key rejected");
                return Err(DuplicateKeyError);
            }
        }

        Ok(rebalance(&mut self.arena, n))
    }

    /// Removes `key`; returns `false` if it was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let (root, removed) = self.delete_at(self.root, key);
        self.root = root;
        if removed {
            debug!(len = self.len(), "key removed");
        } else {
            debug!("delete of absent key");
        }
        removed
    }

    fn delete_at(&mut self, node: Option<u32>, key: &K) -> (Option<u32>, bool) {
        let Some(n) = node else {
            return (None, false);
        };

        let removed = match key.cmp(&self.arena[n].k) {
            Ordering::Less => {
                let l = self.arena[n].l;
                let (l, removed) = self.delete_at(l, key);
                self.arena[n].l = l;
                removed
            }
            Ordering::Greater => {
                let r = self.arena[n].r;
                let (r, removed) = self.delete_at(r, key);
                self.arena[n].r = r;
                removed
            }
            Ordering::Equal => match (self.arena[n].l, self.arena[n].r) {
                (Some(_), Some(r)) => {
                    self.promote_successor(n, r);
                    true
                }
                (l, r) => {
                    self.arena.release(n);
                    return (l.or(r), true);
                }
            },
        };

        (Some(rebalance(&mut self.arena, n)), removed)
    }

    /// Replaces the key of `n` with the smallest key of its right subtree
    /// `r`, unlinking the node that held it.
    fn promote_successor(&mut self, n: u32, r: u32) {
        let (r, successor) = self.take_min(r);
        self.arena[n].r = r;
        self.arena[n].k = successor;
    }

    /// Detaches the leftmost node of `node`, rebalancing on the way up.
    /// Returns the new subtree root and the detached key.
    fn take_min(&mut self, node: u32) -> (Option<u32>, K) {
        match self.arena[node].l {
            Some(l) => {
                let (l, key) = self.take_min(l);
                self.arena[node].l = l;
                (Some(rebalance(&mut self.arena, node)), key)
            }
            None => {
                let r = self.arena[node].r;
                (r, self.arena.release(node).k)
            }
        }
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root)
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_starts_at_height_zero() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.height(), -1);
        tree.insert(1).unwrap();
        assert_eq!(tree.height(), 0);
        let root = tree.root().unwrap();
        assert!(tree.node(root).is_leaf());
    }

    #[test]
    fn two_children_delete_promotes_successor_in_place() {
        let mut tree = AvlTree::try_from_keys([20, 10, 30, 25, 40]).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(*tree.key(root), 20);

        assert!(tree.delete(&20));
        assert_eq!(tree.root(), Some(root));
        assert_eq!(*tree.key(root), 25);
        assert_eq!(tree.inorder(), vec![&10, &25, &30, &40]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn leaf_delete_rotates_at_root() {
        let mut tree = AvlTree::try_from_keys([20, 10, 30, 5, 25, 40, 50]).unwrap();
        assert!(tree.delete(&5));
        assert_eq!(tree.preorder(), vec![&30, &20, &10, &25, &40, &50]);
        assert!(tree.delete(&10));
        tree.assert_valid().unwrap();
        assert_eq!(tree.inorder(), vec![&20, &25, &30, &40, &50]);
    }

    #[test]
    fn successor_removal_rebalances_right_subtree() {
        // Taking 30 out of the right subtree leaves 40 right-heavy by two.
        let mut tree = AvlTree::try_from_keys([20, 10, 40, 5, 30, 50, 55]).unwrap();
        assert!(tree.delete(&20));
        assert_eq!(tree.preorder(), vec![&30, &10, &5, &50, &40, &55]);
        assert_eq!(tree.height(), 2);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn freed_slots_are_reused_by_insert() {
        let mut tree = AvlTree::try_from_keys(0..8).unwrap();
        let slots = tree.arena.slot_count();
        assert!(tree.delete(&3));
        assert!(tree.delete(&6));
        tree.insert(100).unwrap();
        tree.insert(101).unwrap();
        assert_eq!(tree.arena.slot_count(), slots);
        assert_eq!(tree.len(), 8);
        tree.assert_valid().unwrap();
    }
}
