//! Slot storage for tree nodes.
//!
//! Released slots go on a free list and are handed out again by
//! [`Arena::alloc`], so a long insert/delete workload does not grow the
//! backing `Vec` past the peak number of live nodes.

use std::ops::{Index, IndexMut};

use crate::types::AvlNode;

#[derive(Clone, Debug)]
pub struct Arena<K> {
    slots: Vec<Option<AvlNode<K>>>,
    free: Vec<u32>,
}

impl<K> Arena<K> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its index.
    pub fn alloc(&mut self, node: AvlNode<K>) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        let idx = u32::try_from(self.slots.len()).expect("arena index overflow");
        self.slots.push(Some(node));
        idx
    }

    /// Vacates slot `idx` and hands the node back to the caller.
    pub fn release(&mut self, idx: u32) -> AvlNode<K> {
        let node = self.slots[idx as usize]
            .take()
            .expect("release of a vacant slot");
        self.free.push(idx);
        node
    }

    pub fn get(&self, idx: u32) -> Option<&AvlNode<K>> {
        self.slots.get(idx as usize).and_then(Option::as_ref)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots ever allocated, live or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<u32> for Arena<K> {
    type Output = AvlNode<K>;

    fn index(&self, idx: u32) -> &AvlNode<K> {
        self.slots[idx as usize]
            .as_ref()
            .expect("dangling node index")
    }
}

impl<K> IndexMut<u32> for Arena<K> {
    fn index_mut(&mut self, idx: u32) -> &mut AvlNode<K> {
        self.slots[idx as usize]
            .as_mut()
            .expect("dangling node index")
    }
}
