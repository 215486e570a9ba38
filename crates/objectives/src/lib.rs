pub mod catalog;
pub mod constraints;
pub mod editor;
pub mod error;
pub mod grid;

pub use catalog::ObjectiveCatalog;
pub use constraints::{
    canonical_lines, clear, extract_selection, generate_grid, generate_grid_for,
    is_cell_selectable, select_by_name, toggle_cell, validate_commit,
};
pub use editor::{GridPhase, ObjectiveEditor, ObjectiveSink};
pub use error::GridError;
pub use grid::{CellState, GridCell, ObjectiveGrid, BORDER_OFFSET, GRID_SIZE, POSITIONS_PER_LINE};
