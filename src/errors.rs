use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Cannot construct an iterator from node {0}: not present in the tree")]
    InvalidRoot(NodeId),

    #[error("No elements remaining in iterative traversal")]
    Exhausted,

    #[error("next() has not been called, or remove() was already called after the last next()")]
    IllegalRemove,

    #[error("Child index {index} out of bounds for node with {len} children")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Node {0} is not present in the tree")]
    UnknownNode(NodeId),
}

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown iteration order: {0}")]
pub struct ParseOrderError(pub String);
