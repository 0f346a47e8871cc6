use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::trace;

use crate::arena::Arena;
use crate::types::EMPTY_HEIGHT;

#[inline]
pub fn height<K>(arena: &Arena<K>, node: Option<u32>) -> i32 {
    node.map(|i| arena[i].height).unwrap_or(EMPTY_HEIGHT)
}

#[inline]
pub fn update_height<K>(arena: &mut Arena<K>, node: u32) {
    let (l, r) = (arena[node].l, arena[node].r);
    let h = 1 + height(arena, l).max(height(arena, r));
    arena[node].height = h;
}

/// Balance factor, `height(right) - height(left)`. The empty subtree is
/// balanced.
pub fn balance<K>(arena: &Arena<K>, node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => height(arena, arena[i].r) - height(arena, arena[i].l),
    }
}

/// ```text
///   y                  x
///    \                / \
///     x     --->     y
///    /                \
///   z                  z
/// ```
pub fn rotate_left<K>(arena: &mut Arena<K>, y: u32) -> u32 {
    let x = arena[y].r.expect("rotate_left requires right child");
    let z = arena[x].l;

    arena[x].l = Some(y);
    arena[y].r = z;

    update_height(arena, y);
    update_height(arena, x);
    trace!(pivot = y, root = x, "rotate left");
    x
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<K>(arena: &mut Arena<K>, y: u32) -> u32 {
    let x = arena[y].l.expect("rotate_right requires left child");
    let z = arena[x].r;

    arena[x].r = Some(y);
    arena[y].l = z;

    update_height(arena, y);
    update_height(arena, x);
    trace!(pivot = y, root = x, "rotate right");
    x
}

/// Restores the AVL property at `node` after one of its subtrees changed
/// height by at most one. Returns the root of the (possibly rotated)
/// subtree.
///
/// A heavy child whose own subtrees are of equal height (only reachable
/// after a delete) takes the single rotation; the double rotation would
/// leave the demoted node unbalanced.
pub fn rebalance<K>(arena: &mut Arena<K>, node: u32) -> u32 {
    update_height(arena, node);
    let bf = balance(arena, Some(node));

    if bf > 1 {
        let r = arena[node].r.expect("right-heavy node has right child");
        if height(arena, arena[r].r) >= height(arena, arena[r].l) {
            return rotate_left(arena, node);
        }
        let r = rotate_right(arena, r);
        arena[node].r = Some(r);
        return rotate_left(arena, node);
    }

    if bf < -1 {
        let l = arena[node].l.expect("left-heavy node has left child");
        if height(arena, arena[l].l) >= height(arena, arena[l].r) {
            return rotate_right(arena, node);
        }
        let l = rotate_left(arena, l);
        arena[node].l = Some(l);
        return rotate_right(arena, node);
    }

    node
}

pub fn find<K: Ord>(arena: &Arena<K>, root: Option<u32>, key: &K) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match arena[i].k.cmp(key) {
            Ordering::Equal => return Some(i),
            Ordering::Less => arena[i].r,
            Ordering::Greater => arena[i].l,
        };
    }
    None
}

pub fn preorder<'a, K, F>(arena: &'a Arena<K>, node: Option<u32>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(i) = node {
        visit(&arena[i].k);
        preorder(arena, arena[i].l, visit);
        preorder(arena, arena[i].r, visit);
    }
}

pub fn inorder<'a, K, F>(arena: &'a Arena<K>, node: Option<u32>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(i) = node {
        inorder(arena, arena[i].l, visit);
        visit(&arena[i].k);
        inorder(arena, arena[i].r, visit);
    }
}

pub fn assert_avl_tree<K: Ord>(arena: &Arena<K>, root: Option<u32>) -> Result<(), String> {
    fn validate<K: Ord>(
        arena: &Arena<K>,
        node: Option<u32>,
        lo: Option<&K>,
        hi: Option<&K>,
        count: &mut usize,
    ) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(EMPTY_HEIGHT);
        };
        let n = arena
            .get(i)
            .ok_or_else(|| format!("Dangling link to slot {i}"))?;

        *count += 1;
        if *count > arena.len() {
            return Err("Node reachable more than once".to_string());
        }
        if lo.is_some_and(|lo| n.k <= *lo) || hi.is_some_and(|hi| n.k >= *hi) {
            return Err(format!("Node order violated at slot {i}"));
        }

        let lh = validate(arena, n.l, lo, Some(&n.k), count)?;
        let rh = validate(arena, n.r, Some(&n.k), hi, count)?;

        let expected = 1 + lh.max(rh);
        if n.height != expected {
            return Err(format!(
                "Height mismatch at slot {i}: expected {expected}, got {}",
                n.height
            ));
        }
        if !(-1..=1).contains(&(rh - lh)) {
            return Err(format!("AVL balance violated at slot {i}: bf={}", rh - lh));
        }
        Ok(expected)
    }

    let mut count = 0;
    validate(arena, root, None, None, &mut count)?;
    if count != arena.len() {
        return Err(format!(
            "{} live slots but {count} reachable nodes",
            arena.len()
        ));
    }
    Ok(())
}

/// Debug printer; each node shows its slot, cached height and key.
pub fn print<K: Debug>(arena: &Arena<K>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {:?}\n{tab}L={left}\n{tab}R={right}",
                n.height, n.k
            )
        }
    }
}
