use std::fmt;

use serde::{Deserialize, Serialize};
use shared::domain::Orientation;

pub const GRID_SIZE: usize = 5;
/// Blocked cells at each end of an exclusivity line.
pub const BORDER_OFFSET: usize = 1;
pub const POSITIONS_PER_LINE: usize = GRID_SIZE - 2 * BORDER_OFFSET;

pub type CellMatrix = [[CellState; GRID_SIZE]; GRID_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Blocked,
    Unselected,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// Whether `(row, col)` is permanently blocked under `orientation`:
/// the outer columns for vertical layouts, the outer rows for horizontal.
pub fn is_border(orientation: Orientation, row: usize, col: usize) -> bool {
    let across = match orientation {
        Orientation::Vertical => col,
        Orientation::Horizontal => row,
    };
    across < BORDER_OFFSET || across >= GRID_SIZE - BORDER_OFFSET
}

/// Index of the exclusivity line through `(row, col)`.
pub fn line_of(orientation: Orientation, row: usize, col: usize) -> usize {
    match orientation {
        Orientation::Vertical => row,
        Orientation::Horizontal => col,
    }
}

/// Grid coordinates of `position` (border cells included) on `line`.
pub fn cell_on_line(orientation: Orientation, line: usize, position: usize) -> (usize, usize) {
    match orientation {
        Orientation::Vertical => (line, position),
        Orientation::Horizontal => (position, line),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectiveGrid {
    cells: CellMatrix,
}

impl ObjectiveGrid {
    pub(crate) fn seeded(orientation: Orientation) -> Self {
        let mut cells = [[CellState::Unselected; GRID_SIZE]; GRID_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if is_border(orientation, row, col) {
                    *cell = CellState::Blocked;
                }
            }
        }
        Self { cells }
    }

    /// Rehydrates a grid from an externally held matrix. Nothing is
    /// validated here; `extract_selection` checks it against an orientation.
    pub fn from_states(cells: CellMatrix) -> Self {
        Self { cells }
    }

    pub fn states(&self) -> &CellMatrix {
        &self.cells
    }

    pub fn state(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        self.state(row, col).map(|state| GridCell { row, col, state })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, state)| GridCell {
                    row,
                    col,
                    state: *state,
                })
        })
    }

    pub fn selected(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells().filter(|cell| cell.state == CellState::Selected)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }
}

impl fmt::Display for ObjectiveGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let rendered: String = line
                .iter()
                .map(|state| match state {
                    CellState::Blocked => '#',
                    CellState::Unselected => '.',
                    CellState::Selected => 'x',
                })
                .collect();
            writeln!(f, "{rendered}")?;
        }
        Ok(())
    }
}
