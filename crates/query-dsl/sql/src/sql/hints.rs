//! Query hints: stateless marker tags attached alongside a query, not inside
//! the expression tree. The rendering layer reads them to select
//! dialect-specific output paths (for example a database's direct-path
//! fast-load mechanism). Identity is the whole value; there is nothing else
//! to compare.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// The known hint kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize,
)]
pub enum Hint {
    /// Instructs dialects that support it to use direct-path access for the
    /// query's data load.
    DirectPathQueryHint,
    /// Instructs the dialect to join tables in the order they are written.
    UseImplicitJoinOrder,
    /// Permits parallel DML execution where the dialect supports it.
    AllowParallelDml,
}

/// An ordered, duplicate-free collection of hints carried beside a query
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hints {
    hints: Vec<Hint>,
}

impl Hints {
    pub fn new() -> Self {
        Hints::default()
    }

    /// Adds a hint; adding one already present is a no-op, so insertion order
    /// is the order of first addition.
    pub fn add(&mut self, hint: Hint) {
        if !self.hints.contains(&hint) {
            self.hints.push(hint);
        }
    }

    pub fn contains(&self, hint: Hint) -> bool {
        self.hints.contains(&hint)
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Hint> + '_ {
        self.hints.iter().copied()
    }
}
