use thiserror::Error;

/// A command that was rejected. State is left untouched whenever one of these
/// is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplyError {
    #[error("the reserve stack is full, cannot reserve another piece")]
    StackFull,

    #[error("the reserve stack is empty")]
    StackEmpty,

    #[error("the reserve stack needs at least {required} pieces, it has {available}")]
    InsufficientStackDepth { required: usize, available: usize },

    #[error("invalid option: {0:?}")]
    InvalidSelection(String),
}
