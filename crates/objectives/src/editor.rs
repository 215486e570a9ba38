//! Objective picker lifecycle: `Initialized -> Editing -> Committing`, back to
//! a fresh `Initialized` grid on success or to `Editing` on failure.

use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::{GameModeFamily, Orientation},
    protocol::{LineSelection, ObjectiveSubmission, RandomConstraints},
};
use tracing::{debug, info, warn};

use crate::{
    catalog::ObjectiveCatalog,
    constraints,
    error::GridError,
    grid::ObjectiveGrid,
};

#[async_trait]
pub trait ObjectiveSink: Send + Sync {
    async fn submit(&self, submission: &ObjectiveSubmission) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Initialized,
    Editing,
    Committing,
}

#[derive(Debug, Clone)]
pub struct ObjectiveEditor {
    family: GameModeFamily,
    orientation: Orientation,
    catalog: ObjectiveCatalog,
    grid: ObjectiveGrid,
    phase: GridPhase,
}

impl ObjectiveEditor {
    pub fn open(
        family: GameModeFamily,
        orientation: Orientation,
        catalog: ObjectiveCatalog,
    ) -> Result<Self, GridError> {
        let grid = constraints::generate_grid_for(family, orientation)?;
        debug!(?family, ?orientation, "objectives: editor opened");
        Ok(Self {
            family,
            orientation,
            catalog,
            grid,
            phase: GridPhase::Initialized,
        })
    }

    pub fn family(&self) -> GameModeFamily {
        self.family
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn catalog(&self) -> &ObjectiveCatalog {
        &self.catalog
    }

    pub fn grid(&self) -> &ObjectiveGrid {
        &self.grid
    }

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    pub fn is_selectable(&self, row: usize, col: usize) -> bool {
        self.phase != GridPhase::Committing
            && constraints::is_cell_selectable(&self.grid, row, col, self.orientation)
    }

    /// Click on a cell. Returns `false` when the click is refused because
    /// another cell on the line is already selected or the cell is blocked.
    pub fn click(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.ensure_editable()?;
        if !constraints::is_cell_selectable(&self.grid, row, col, self.orientation) {
            debug!(row, col, "objectives: click refused");
            return Ok(false);
        }
        self.grid = constraints::toggle_cell(&self.grid, row, col);
        self.phase = GridPhase::Editing;
        Ok(true)
    }

    pub fn pick(&mut self, line: usize, objective: usize) -> Result<(), GridError> {
        self.ensure_editable()?;
        self.grid = constraints::select_by_name(&self.grid, line, objective, self.orientation)?;
        self.phase = GridPhase::Editing;
        Ok(())
    }

    pub fn pick_by_name(&mut self, line: usize, name: &str) -> Result<usize, GridError> {
        let objective = self.catalog.index_of(line, name)?;
        self.pick(line, objective)?;
        Ok(objective)
    }

    pub fn clear(&mut self) -> Result<(), GridError> {
        self.ensure_editable()?;
        self.grid = constraints::clear(self.orientation);
        self.phase = GridPhase::Editing;
        Ok(())
    }

    pub fn selection(&self) -> Result<Vec<LineSelection>, GridError> {
        constraints::extract_selection(&self.grid, self.orientation)
    }

    /// Discards edits. Not allowed while a submission is in flight.
    pub fn cancel(&mut self) -> Result<(), GridError> {
        self.ensure_editable()?;
        self.grid = constraints::generate_grid(self.orientation);
        self.phase = GridPhase::Initialized;
        Ok(())
    }

    /// Validates and freezes the grid, returning the payload to hand off.
    pub fn begin_commit(
        &mut self,
        random_constraints: Option<RandomConstraints>,
    ) -> Result<ObjectiveSubmission, GridError> {
        self.ensure_editable()?;
        let selection = constraints::validate_commit(self.family, &self.grid, self.orientation)?;
        self.phase = GridPhase::Committing;
        Ok(ObjectiveSubmission::new(&selection, random_constraints))
    }

    /// Resolves an in-flight commit. Refused, with nothing changed, when no
    /// commit was started.
    pub fn finish_commit(&mut self, result: Result<()>) -> Result<(), GridError> {
        if self.phase != GridPhase::Committing {
            warn!(phase = ?self.phase, "objectives: commit result without a commit in flight");
            return Err(GridError::NotCommitting);
        }
        match result {
            Ok(()) => {
                info!(
                    family = ?self.family,
                    orientation = ?self.orientation,
                    "objectives: submitted"
                );
                self.grid = constraints::generate_grid(self.orientation);
                self.phase = GridPhase::Initialized;
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "objectives: submission failed, edits kept");
                self.phase = GridPhase::Editing;
                Err(GridError::Submission { source })
            }
        }
    }

    pub async fn submit_with<S>(
        &mut self,
        sink: &S,
        random_constraints: Option<RandomConstraints>,
    ) -> Result<ObjectiveSubmission, GridError>
    where
        S: ObjectiveSink + ?Sized,
    {
        let submission = self.begin_commit(random_constraints)?;
        let result = sink.submit(&submission).await;
        self.finish_commit(result)?;
        Ok(submission)
    }

    fn ensure_editable(&self) -> Result<(), GridError> {
        match self.phase {
            GridPhase::Committing => Err(GridError::Busy),
            GridPhase::Initialized | GridPhase::Editing => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
