//! Pure index arithmetic for moving one element of an ordered sequence.

use serde::{Deserialize, Serialize};
use shared::domain::ParseDomainError;
use tracing::warn;

use crate::error::ReorderError;

/// Direction along which a list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Closest edge of the drop target under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Whether a drop on this edge places the dragged item after the target.
    /// Edges perpendicular to `axis` count as leading.
    pub fn is_trailing(self, axis: Axis) -> bool {
        matches!(
            (axis, self),
            (Axis::Vertical, Edge::Bottom) | (Axis::Horizontal, Edge::Right)
        )
    }
}

impl std::str::FromStr for Edge {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDomainError {
                kind: "edge",
                value: s.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(ParseDomainError {
                kind: "axis",
                value: s.to_string(),
            }),
        }
    }
}

/// Index the dragged item occupies after the move.
///
/// A drop on the touching edge of a direct neighbour resolves to
/// `start_index`, as does a drop onto the item itself. With no detected edge
/// the item takes the target's slot.
pub fn destination_index(
    start_index: usize,
    target_index: usize,
    edge: Option<Edge>,
    axis: Axis,
) -> usize {
    if start_index == target_index {
        return start_index;
    }
    let Some(edge) = edge else {
        return target_index;
    };

    let after = edge.is_trailing(axis);
    if start_index < target_index {
        if after {
            target_index
        } else {
            target_index - 1
        }
    } else if after {
        target_index + 1
    } else {
        target_index
    }
}

/// Where a drop indicator should be drawn for a hovered target, or `None`
/// when the drop would not move anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropIndicator {
    pub target_index: usize,
    pub edge: Option<Edge>,
    pub destination_index: usize,
}

pub fn drop_indicator(
    start_index: usize,
    target_index: usize,
    edge: Option<Edge>,
    axis: Axis,
) -> Option<DropIndicator> {
    let destination = destination_index(start_index, target_index, edge, axis);
    (destination != start_index).then_some(DropIndicator {
        target_index,
        edge,
        destination_index: destination,
    })
}

/// Moves the element at `start` to `finish`, keeping the relative order of
/// everything else. The input is never touched; on error the caller still
/// holds the original sequence.
pub fn reorder<T: Clone>(
    sequence: &[T],
    start: usize,
    finish: usize,
) -> Result<Vec<T>, ReorderError> {
    let len = sequence.len();
    for index in [start, finish] {
        if index >= len {
            warn!(index, len, "reorder: index out of range, sequence left unchanged");
            return Err(ReorderError::OutOfRange { index, len });
        }
    }

    let mut result = sequence.to_vec();
    if start != finish {
        let moved = result.remove(start);
        result.insert(finish, moved);
    }
    Ok(result)
}

/// Relative move by `offset` places, saturating at either end of the
/// sequence. Backs keyboard "move up / move down" controls.
pub fn move_by<T: Clone>(
    sequence: &[T],
    start: usize,
    offset: isize,
) -> Result<Vec<T>, ReorderError> {
    let len = sequence.len();
    if start >= len {
        warn!(index = start, len, "reorder: index out of range, sequence left unchanged");
        return Err(ReorderError::OutOfRange { index: start, len });
    }
    let finish = start.saturating_add_signed(offset).min(len - 1);
    reorder(sequence, start, finish)
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
