use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire value for a line whose objective is left to runtime randomness.
pub const RANDOM_SENTINEL: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("invalid objective value {0}; expected -1 or a non-negative index")]
    InvalidObjectiveValue(i64),
    #[error("unknown random constraint bits {0:#b}")]
    UnknownConstraintBits(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum SelectionEntry {
    Random,
    Objective(usize),
}

impl SelectionEntry {
    pub fn objective_index(self) -> Option<usize> {
        match self {
            Self::Random => None,
            Self::Objective(index) => Some(index),
        }
    }

    pub fn to_wire(self) -> i64 {
        i64::from(self)
    }
}

impl From<SelectionEntry> for i64 {
    fn from(value: SelectionEntry) -> Self {
        match value {
            SelectionEntry::Random => RANDOM_SENTINEL,
            SelectionEntry::Objective(index) => index as i64,
        }
    }
}

impl TryFrom<i64> for SelectionEntry {
    type Error = ProtocolError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            RANDOM_SENTINEL => Ok(Self::Random),
            v => usize::try_from(v)
                .map(Self::Objective)
                .map_err(|_| ProtocolError::InvalidObjectiveValue(v)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSelection {
    pub line_index: usize,
    pub objective: SelectionEntry,
}

bitflags! {
    /// Extra randomness rules applied by the game server to `Random` lines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RandomConstraints: u32 {
        const ALWAYS_ADJACENT = 1 << 0;
        const ALWAYS_DIAGONAL = 1 << 1;
    }
}

impl RandomConstraints {
    pub fn from_mask(mask: u32) -> Result<Self, ProtocolError> {
        Self::from_bits(mask).ok_or(ProtocolError::UnknownConstraintBits(
            mask & !Self::all().bits(),
        ))
    }
}

/// Outbound shape of a saved rotation / vote-map pool: underlying domain ids
/// in rank order, synthetic item ids stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSave<Id> {
    pub ids: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSubmission {
    pub objectives: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_constraints: Option<u32>,
}

impl ObjectiveSubmission {
    pub fn new(selection: &[LineSelection], constraints: Option<RandomConstraints>) -> Self {
        let mut ordered = selection.to_vec();
        ordered.sort_by_key(|entry| entry.line_index);
        Self {
            objectives: ordered.iter().map(|entry| entry.objective.to_wire()).collect(),
            random_constraints: constraints.map(|flags| flags.bits()),
        }
    }

    pub fn entries(&self) -> Result<Vec<SelectionEntry>, ProtocolError> {
        self.objectives
            .iter()
            .map(|value| SelectionEntry::try_from(*value))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
