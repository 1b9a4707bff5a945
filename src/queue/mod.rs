//! Queue Engine
//!
//! A singly-linked FIFO of owned text values with head and tail access.
//!
//! # Invariants
//!
//! Between operations:
//! - `size == 0` iff head is absent iff tail is absent
//! - walking `next` from head visits exactly `size` nodes and ends at tail
//! - tail has no successor, and no node is reachable twice
//!
//! Insertion is the only path that allocates. It copies the caller's value
//! into storage the queue owns and either completes or leaves the queue
//! exactly as it was. Removal, reversal and sorting never allocate.

mod arena;
pub mod sort;

use std::fmt;

use tracing::{debug, trace};

use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::types::Operation;

use self::arena::Arena;
pub use self::arena::NodeId;

/// Singly-linked queue of text values.
pub struct TextQueue {
    nodes: Arena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
    config: QueueConfig,
}

impl TextQueue {
    /// Create an empty queue with the default configuration.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            size: 0,
            config: QueueConfig::default(),
        }
    }

    /// Create an empty queue, reserving `config.initial_capacity` node slots.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Allocation`] if the reservation fails.
    pub fn with_config(config: QueueConfig) -> Result<Self> {
        let mut nodes = Arena::new();
        nodes.try_reserve(config.initial_capacity).map_err(|_| {
            QueueError::allocation(
                Operation::Create,
                config.initial_capacity.saturating_mul(Arena::slot_size()),
            )
        })?;
        debug!(initial_capacity = config.initial_capacity, "created queue");
        Ok(Self {
            nodes,
            head: None,
            tail: None,
            size: 0,
            config,
        })
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Copy `value` into a fresh node linked in front of the current head.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let id = self.alloc_node(Operation::InsertHead, value)?;
        self.nodes.set_next(id, self.head);
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.size += 1;
        trace!(size = self.size, "inserted at head");
        Ok(())
    }

    /// Copy `value` into a fresh node linked after the current tail.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let id = self.alloc_node(Operation::InsertTail, value)?;
        match self.tail {
            Some(tail) => {
                self.nodes.set_next(tail, Some(id));
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
        trace!(size = self.size, "inserted at tail");
        Ok(())
    }

    /// Validate and copy a value into an unlinked node.
    ///
    /// Both reservations happen before the node is stored, so a failure
    /// leaves the queue untouched and drops the partial copy.
    fn alloc_node(&mut self, op: Operation, value: &str) -> Result<NodeId> {
        if value.len() > self.config.max_value_len {
            return Err(QueueError::ValueTooLong {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        if let Some(position) = value.bytes().position(|b| b == 0) {
            return Err(QueueError::InteriorNul { position });
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| QueueError::allocation(op, value.len()))?;
        owned.push_str(value);

        self.nodes
            .try_alloc(owned)
            .map_err(|_| QueueError::allocation(op, Arena::slot_size()))
    }

    /// Detach the head node and return its value.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if there is nothing to remove.
    pub fn pop_head(&mut self) -> Result<String> {
        let id = self.head.ok_or(QueueError::empty(Operation::RemoveHead))?;
        self.head = self.nodes.set_next(id, None);
        self.size -= 1;
        if self.size == 0 {
            self.tail = None;
        }
        trace!(size = self.size, "removed head");
        Ok(self.nodes.release(id))
    }

    /// Remove the head node, copying its value into `out` when given.
    ///
    /// At most `out.len() - 1` bytes of the value are copied, followed by a
    /// NUL terminator. An empty buffer receives nothing. Returns the number
    /// of value bytes written, excluding the terminator.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<usize> {
        let value = self.pop_head()?;
        Ok(out.map_or(0, |buf| copy_terminated(&value, buf)))
    }

    /// Reverse the chain in place and swap head and tail.
    pub fn reverse(&mut self) {
        if self.size < 2 {
            return;
        }
        let mut reversed = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            cur = self.nodes.set_next(id, reversed);
            reversed = Some(id);
        }
        self.tail = self.head;
        self.head = reversed;
        debug!(size = self.size, "reversed queue");
    }

    /// Sort the chain into ascending order by merge sort.
    ///
    /// Ordering follows [`sort::bounded_less`]. The tail is re-derived by
    /// walking forward from the old tail once the chain is relinked.
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }
        self.head = sort::merge_sort(&mut self.nodes, self.head);

        let mut tail = self.tail;
        while let Some(next) = tail.and_then(|id| self.nodes.next(id)) {
            tail = Some(next);
        }
        self.tail = tail;
        debug!(size = self.size, "sorted queue");
    }

    /// Release every node. The queue stays usable.
    pub fn clear(&mut self) {
        let released = self.size;
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
        debug!(released, "cleared queue");
    }

    pub fn peek_head(&self) -> Option<&str> {
        self.head.map(|id| self.nodes.value(id))
    }

    pub fn peek_tail(&self) -> Option<&str> {
        self.tail.map(|id| self.nodes.value(id))
    }

    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Successor of a live node; `None` at the tail or for a stale id.
    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.next
    }

    /// Value of a live node; `None` for a stale id.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.value.as_str())
    }

    /// Node ids in chain order, head first.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.size);
        let mut cur = self.head;
        while let Some(id) = cur {
            if ids.len() == self.size {
                break;
            }
            ids.push(id);
            cur = self.nodes.next(id);
        }
        ids
    }

    /// Values in chain order, head first.
    pub fn snapshot(&self) -> Vec<&str> {
        self.node_ids()
            .into_iter()
            .map(|id| self.nodes.value(id))
            .collect()
    }

    /// Audit every structural invariant.
    pub fn verify(&self) -> Result<()> {
        match (self.size, self.head, self.tail) {
            (0, None, None) => {}
            (0, _, _) => return Err(QueueError::corrupted("empty queue has a head or tail")),
            (_, None, _) | (_, _, None) => {
                return Err(QueueError::corrupted(format!(
                    "queue of size {} is missing head or tail",
                    self.size
                )));
            }
            _ => {}
        }
        if self.nodes.live() != self.size {
            return Err(QueueError::corrupted(format!(
                "{} live nodes for size {}",
                self.nodes.live(),
                self.size
            )));
        }

        let mut walked = 0;
        let mut last = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            walked += 1;
            // more steps than live nodes means the walk revisited one
            if walked > self.size {
                return Err(QueueError::corrupted("cycle in chain"));
            }
            last = Some(id);
            cur = self.nodes.next(id);
        }

        if walked != self.size {
            return Err(QueueError::corrupted(format!(
                "walked {} nodes for size {}",
                walked, self.size
            )));
        }
        if last != self.tail {
            return Err(QueueError::corrupted("chain does not end at tail"));
        }
        Ok(())
    }
}

impl Default for TextQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot()).finish()
    }
}

/// Copy `value` into `buf` as a NUL-terminated byte string, truncating to fit.
fn copy_terminated(value: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let n = value.len().min(room);
    buf[..n].copy_from_slice(&value.as_bytes()[..n]);
    buf[n] = 0;
    n
}
