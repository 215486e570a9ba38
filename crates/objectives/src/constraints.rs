//! Exclusivity rules over an [`ObjectiveGrid`] and conversion to a flat
//! per-line selection.
//!
//! Two write paths keep "at most one selected cell per line":
//! clicks are gated by [`is_cell_selectable`] and require an explicit
//! deselect before switching, while [`select_by_name`] clears the line and
//! sets the pick in one step.

use shared::{
    domain::{GameModeFamily, Orientation},
    protocol::{LineSelection, SelectionEntry},
};
use tracing::{debug, warn};

use crate::{
    error::GridError,
    grid::{
        cell_on_line, is_border, line_of, CellMatrix, CellState, ObjectiveGrid, BORDER_OFFSET,
        GRID_SIZE, POSITIONS_PER_LINE,
    },
};

pub fn ensure_objectives_supported(family: GameModeFamily) -> Result<(), GridError> {
    if family.supports_objectives() {
        Ok(())
    } else {
        Err(GridError::UnsupportedGameMode(family))
    }
}

pub fn generate_grid(orientation: Orientation) -> ObjectiveGrid {
    ObjectiveGrid::seeded(orientation)
}

/// Grid creation for an editor; refuses families without objectives before
/// any grid exists.
pub fn generate_grid_for(
    family: GameModeFamily,
    orientation: Orientation,
) -> Result<ObjectiveGrid, GridError> {
    ensure_objectives_supported(family)?;
    Ok(generate_grid(orientation))
}

pub fn clear(orientation: Orientation) -> ObjectiveGrid {
    generate_grid(orientation)
}

/// Rearranges the matrix so that entry `[line][position]` is the cell at
/// `position` along exclusivity line `line`. Horizontal layouts run their
/// lines down the columns, so they are transposed.
pub fn canonical_lines(grid: &ObjectiveGrid, orientation: Orientation) -> CellMatrix {
    let states = grid.states();
    match orientation {
        Orientation::Vertical => *states,
        Orientation::Horizontal => {
            let mut transposed = [[CellState::Unselected; GRID_SIZE]; GRID_SIZE];
            for (row, line) in states.iter().enumerate() {
                for (col, state) in line.iter().enumerate() {
                    transposed[col][row] = *state;
                }
            }
            transposed
        }
    }
}

pub fn is_cell_selectable(
    grid: &ObjectiveGrid,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    match grid.state(row, col) {
        None | Some(CellState::Blocked) => false,
        Some(CellState::Selected) => true,
        Some(CellState::Unselected) => {
            let line = line_of(orientation, row, col);
            !canonical_lines(grid, orientation)[line].contains(&CellState::Selected)
        }
    }
}

/// Flips exactly the targeted cell. Blocked or out-of-range cells leave the
/// grid unchanged.
pub fn toggle_cell(grid: &ObjectiveGrid, row: usize, col: usize) -> ObjectiveGrid {
    let mut next = *grid;
    match grid.state(row, col) {
        Some(CellState::Unselected) => next.set(row, col, CellState::Selected),
        Some(CellState::Selected) => next.set(row, col, CellState::Unselected),
        Some(CellState::Blocked) => {
            debug!(row, col, "grid: toggle on blocked cell ignored");
        }
        None => {
            warn!(row, col, "grid: toggle outside grid ignored");
        }
    }
    next
}

pub fn select_by_name(
    grid: &ObjectiveGrid,
    line: usize,
    objective: usize,
    orientation: Orientation,
) -> Result<ObjectiveGrid, GridError> {
    if line >= GRID_SIZE {
        return Err(GridError::LineOutOfRange {
            line,
            lines: GRID_SIZE,
        });
    }
    if objective >= POSITIONS_PER_LINE {
        return Err(GridError::ObjectiveOutOfRange {
            objective,
            positions: POSITIONS_PER_LINE,
        });
    }

    let (target_row, target_col) = cell_on_line(orientation, line, objective + BORDER_OFFSET);
    if grid.state(target_row, target_col) == Some(CellState::Blocked) {
        warn!(line, objective, "grid: pick on blocked cell ignored");
        return Ok(*grid);
    }

    let mut next = *grid;
    for position in 0..GRID_SIZE {
        let (row, col) = cell_on_line(orientation, line, position);
        if grid.state(row, col) == Some(CellState::Selected) {
            next.set(row, col, CellState::Unselected);
        }
    }
    next.set(target_row, target_col, CellState::Selected);
    Ok(next)
}

/// Checks that the blocked cells are exactly the border of `orientation`.
pub fn ensure_layout(grid: &ObjectiveGrid, orientation: Orientation) -> Result<(), GridError> {
    let consistent = grid
        .cells()
        .all(|cell| {
            (cell.state == CellState::Blocked) == is_border(orientation, cell.row, cell.col)
        });
    if consistent {
        Ok(())
    } else {
        Err(GridError::OrientationMismatch {
            claimed: orientation,
        })
    }
}

/// One entry per exclusivity line, in line order.
pub fn extract_selection(
    grid: &ObjectiveGrid,
    orientation: Orientation,
) -> Result<Vec<LineSelection>, GridError> {
    ensure_layout(grid, orientation)?;

    canonical_lines(grid, orientation)
        .iter()
        .enumerate()
        .map(|(line_index, line)| {
            let mut picked = line
                .iter()
                .enumerate()
                .filter(|(_, state)| **state == CellState::Selected)
                .map(|(position, _)| position);
            let objective = match (picked.next(), picked.next()) {
                (None, _) => SelectionEntry::Random,
                (Some(position), None) => SelectionEntry::Objective(position - BORDER_OFFSET),
                (Some(_), Some(_)) => return Err(GridError::AmbiguousLine { line: line_index }),
            };
            Ok(LineSelection {
                line_index,
                objective,
            })
        })
        .collect()
}

/// Gate run before a grid is handed off for submission.
pub fn validate_commit(
    family: GameModeFamily,
    grid: &ObjectiveGrid,
    orientation: Orientation,
) -> Result<Vec<LineSelection>, GridError> {
    ensure_objectives_supported(family)?;
    extract_selection(grid, orientation)
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
