//! Traversal orders.
//!
//! There is no in-order traversal: trees are not binary, so "between the children"
//! has no single meaning.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseOrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IterationOrder {
    /// Level by level from the root down, children in insertion order.
    #[default]
    BreadthFirst,
    /// A node before its subtree, then its next sibling's subtree.
    PreOrder,
    /// A node's subtree before the node, siblings left to right.
    PostOrder,
}

impl IterationOrder {
    pub const ALL: [IterationOrder; 3] = [
        IterationOrder::BreadthFirst,
        IterationOrder::PreOrder,
        IterationOrder::PostOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IterationOrder::BreadthFirst => "breadth-first",
            IterationOrder::PreOrder => "pre-order",
            IterationOrder::PostOrder => "post-order",
        }
    }
}

impl fmt::Display for IterationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IterationOrder {
    type Err = ParseOrderError;

    /// Case-insensitive; `_` is accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        IterationOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == normalized)
            .ok_or_else(|| ParseOrderError(s.to_string()))
    }
}
