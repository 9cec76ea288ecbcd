use super::{IndexT, Weight};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("negative edge weight {weight} is not supported")]
    InvalidWeight { weight: Weight },

    #[error("vertex index {index} is out of range for a graph of {size} vertices")]
    IndexOutOfRange { index: IndexT, size: usize },

    #[error("vertex {to} is unreachable from vertex {from}")]
    TargetUnreachable { from: IndexT, to: IndexT },

    #[error("no route from vertex {from} to vertex {to} has a representable length")]
    LengthOverflow { from: IndexT, to: IndexT },
}
