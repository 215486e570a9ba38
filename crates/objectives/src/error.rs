use shared::{
    domain::{GameModeFamily, Orientation},
    error::{EditorFault, ErrorCode},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("game mode {0:?} has no objective selection")]
    UnsupportedGameMode(GameModeFamily),
    #[error("grid layout does not match claimed orientation {claimed:?}")]
    OrientationMismatch { claimed: Orientation },
    #[error("line {line} has more than one selected objective")]
    AmbiguousLine { line: usize },
    #[error("line {line} out of range (grid has {lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("objective {objective} out of range (line has {positions} objectives)")]
    ObjectiveOutOfRange { objective: usize, positions: usize },
    #[error("no objective named '{name}' on line {line}")]
    UnknownObjective { line: usize, name: String },
    #[error("malformed objective catalog: {0}")]
    MalformedCatalog(String),
    #[error("objectives are being submitted; edits are disabled until it resolves")]
    Busy,
    #[error("no objective submission is in flight")]
    NotCommitting,
    #[error("objective submission failed: {source}")]
    Submission { source: anyhow::Error },
}

impl From<GridError> for EditorFault {
    fn from(value: GridError) -> Self {
        let code = match &value {
            GridError::UnsupportedGameMode(_) => ErrorCode::Unsupported,
            GridError::Busy | GridError::NotCommitting => ErrorCode::Conflict,
            GridError::Submission { .. } => ErrorCode::Internal,
            _ => ErrorCode::Validation,
        };
        EditorFault::new(code, value.to_string())
    }
}
