//! Operation vocabulary shared by errors and log events

use strum::{Display, EnumIter, EnumString};

/// A queue engine operation, as named at the call boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Create,
    Destroy,
    InsertHead,
    InsertTail,
    RemoveHead,
    Size,
    Reverse,
    Sort,
}

impl Operation {
    /// Returns true if the operation may allocate node or value storage
    pub const fn allocates(self) -> bool {
        matches!(self, Self::Create | Self::InsertHead | Self::InsertTail)
    }

    /// Returns true if the operation only reorders existing nodes
    pub const fn relinks_only(self) -> bool {
        matches!(self, Self::Reverse | Self::Sort)
    }
}
