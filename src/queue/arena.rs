//! Slot storage for queue nodes.
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`NodeId`].
//! Vacant slots form an intrusive free list, so releasing a node never
//! allocates and a later insertion reuses the slot.

use std::collections::TryReserveError;

/// Stable identity of a live node within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index backing this node
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) next: Option<NodeId>,
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free_head: Option<usize>,
    live: usize,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `additional` more slots without touching any node.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.slots.try_reserve(additional)
    }

    /// Number of occupied slots
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Bytes a fresh slot would add to the backing vector
    pub(crate) const fn slot_size() -> usize {
        std::mem::size_of::<Slot>()
    }

    /// Store `value` in a fresh unlinked node.
    ///
    /// Leaves the arena untouched when the slot vector cannot grow.
    pub(crate) fn try_alloc(&mut self, value: String) -> Result<NodeId, TryReserveError> {
        let node = Node { value, next: None };
        let index = match self.free_head {
            Some(index) => {
                let next_free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
                };
                self.free_head = next_free;
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.live += 1;
        Ok(NodeId(index))
    }

    /// Take the node out of its slot, returning the owned value.
    pub(crate) fn release(&mut self, id: NodeId) -> String {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(id.0);
                self.live -= 1;
                node.value
            }
            Slot::Vacant { .. } => unreachable!("released vacant slot {}", id.0),
        }
    }

    /// Drop every node and give the storage back to the allocator.
    pub(crate) fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_head = None;
        self.live = 0;
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        match self.slots.get(id.0)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node id {}", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node id {}", id.0),
        }
    }

    pub(crate) fn value(&self, id: NodeId) -> &str {
        &self.node(id).value
    }

    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    /// Replace the link out of `id`, returning the previous one.
    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.node_mut(id).next, next)
    }
}
