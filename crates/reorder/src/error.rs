use shared::{
    domain::ItemId,
    error::{EditorFault, ErrorCode},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("unknown item id {0}")]
    UnknownItem(ItemId),
    #[error("list is full ({capacity} items)")]
    CapacityExceeded { capacity: usize },
    #[error("list is being saved; edits are disabled until the save resolves")]
    Busy,
    #[error("no save is in flight")]
    NotSaving,
    #[error("save failed: {source}")]
    Submission { source: anyhow::Error },
}

impl From<ReorderError> for EditorFault {
    fn from(value: ReorderError) -> Self {
        let code = match &value {
            ReorderError::OutOfRange { .. }
            | ReorderError::DuplicateId(_)
            | ReorderError::UnknownItem(_)
            | ReorderError::CapacityExceeded { .. } => ErrorCode::Validation,
            ReorderError::Busy | ReorderError::NotSaving => ErrorCode::Conflict,
            ReorderError::Submission { .. } => ErrorCode::Internal,
        };
        EditorFault::new(code, value.to_string())
    }
}
