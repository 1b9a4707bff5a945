//! Merge sort over node chains.
//!
//! A chain is identified by its first node. Every function here takes
//! ownership of the chains it is handed and returns the chains it produces;
//! only links are rewritten, so sorting never allocates or frees a node.

use super::arena::{Arena, NodeId};

/// Returns true when `a` must be taken before `b` during a merge.
///
/// `a` is compared only up to the length of `b`. Because values carry no NUL
/// bytes this orders exactly like a full byte-wise comparison; `b` wins ties.
pub fn bounded_less(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    a[..a.len().min(b.len())] < *b
}

/// Sort the chain starting at `head` and return its new first node.
pub(crate) fn merge_sort(arena: &mut Arena, head: Option<NodeId>) -> Option<NodeId> {
    let first = head?;
    if arena.next(first).is_none() {
        return head;
    }

    let (front, back) = front_back_split(arena, first);
    let front = merge_sort(arena, Some(front));
    let back = merge_sort(arena, back);
    sorted_merge(arena, front, back)
}

/// Split a chain into front and back halves.
///
/// The front half receives the extra node when the length is odd.
pub(crate) fn front_back_split(arena: &mut Arena, src: NodeId) -> (NodeId, Option<NodeId>) {
    let mut slow = src;
    let mut fast = arena.next(src);

    while let Some(step) = fast {
        fast = arena.next(step);
        if let Some(step) = fast {
            slow = match arena.next(slow) {
                Some(next) => next,
                None => unreachable!("slow pointer overtook fast pointer"),
            };
            fast = arena.next(step);
        }
    }

    let back = arena.set_next(slow, None);
    (src, back)
}

/// Merge two sorted chains into one sorted chain.
pub(crate) fn sorted_merge(
    arena: &mut Arena,
    mut a: Option<NodeId>,
    mut b: Option<NodeId>,
) -> Option<NodeId> {
    let mut head = None;
    let mut tail: Option<NodeId> = None;

    loop {
        let picked = match (a, b) {
            (None, rest) | (rest, None) => {
                match tail {
                    Some(tail) => {
                        arena.set_next(tail, rest);
                    }
                    None => head = rest,
                }
                return head;
            }
            (Some(x), Some(y)) => {
                if bounded_less(arena.value(x), arena.value(y)) {
                    a = arena.set_next(x, None);
                    x
                } else {
                    b = arena.set_next(y, None);
                    y
                }
            }
        };

        match tail {
            Some(tail) => {
                arena.set_next(tail, Some(picked));
            }
            None => head = Some(picked),
        }
        tail = Some(picked);
    }
}
