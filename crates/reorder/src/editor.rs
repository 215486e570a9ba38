//! One rotation / vote-map pool editor: list, drag gesture, handles and the
//! save round trip.

use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::{EditorInstanceId, ItemId},
    protocol::RotationSave,
};
use tracing::{debug, info, warn};

use crate::{
    controller::{CancelReason, DragEvent, DragOutcome, DragReorderController},
    engine::Axis,
    error::ReorderError,
    list::{DomainRecord, OrderedList},
    registry::HandleRegistry,
};

#[async_trait]
pub trait RotationSink<Id: Send + Sync>: Send + Sync {
    async fn save(&self, request: &RotationSave<Id>) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSummary {
    pub item_id: ItemId,
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

/// Animation / narration side effects fired after a gesture resolves.
pub trait DropFeedback<H> {
    fn item_moved(&mut self, handle: Option<&H>, summary: &MoveSummary);

    fn drag_cancelled(&mut self, _handle: Option<&H>, _reason: CancelReason) {}
}

pub struct NoFeedback;

impl<H> DropFeedback<H> for NoFeedback {
    fn item_moved(&mut self, _handle: Option<&H>, _summary: &MoveSummary) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePhase {
    Idle,
    Saving,
}

pub struct ListEditor<T, H = ()> {
    list: OrderedList<T>,
    baseline: OrderedList<T>,
    controller: DragReorderController,
    handles: HandleRegistry<H>,
    phase: SavePhase,
}

impl<T: Clone, H> ListEditor<T, H> {
    pub fn new(list: OrderedList<T>, axis: Axis) -> Self {
        Self {
            baseline: list.clone(),
            list,
            controller: DragReorderController::new(EditorInstanceId::new(), axis),
            handles: HandleRegistry::new(),
            phase: SavePhase::Idle,
        }
    }

    pub fn instance(&self) -> EditorInstanceId {
        self.controller.instance()
    }

    pub fn list(&self) -> &OrderedList<T> {
        &self.list
    }

    pub fn phase(&self) -> SavePhase {
        self.phase
    }

    pub fn dragging_item(&self) -> Option<ItemId> {
        self.controller.dragging_item()
    }

    pub fn controller(&self) -> &DragReorderController {
        &self.controller
    }

    pub fn handles(&self) -> &HandleRegistry<H> {
        &self.handles
    }

    pub fn register_handle(&mut self, id: ItemId, handle: H) -> Option<H> {
        self.handles.register(id, handle)
    }

    pub fn handle_drag(
        &mut self,
        event: &DragEvent,
        feedback: &mut dyn DropFeedback<H>,
    ) -> Result<DragOutcome, ReorderError> {
        self.ensure_editable()?;

        let outcome = self.controller.handle(event, &self.list);
        match outcome {
            DragOutcome::Reorder(intent) => {
                self.list
                    .apply_reorder(intent.start_index, intent.finish_index)?;
                let summary = MoveSummary {
                    item_id: intent.item_id,
                    from: intent.start_index,
                    to: intent.finish_index,
                    len: self.list.len(),
                };
                feedback.item_moved(self.handles.get(intent.item_id), &summary);
            }
            DragOutcome::Cancelled(reason) => {
                feedback.drag_cancelled(self.handles.get(event.source_id), reason);
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Keyboard move of one item by `offset` places.
    pub fn move_by(
        &mut self,
        id: ItemId,
        offset: isize,
        feedback: &mut dyn DropFeedback<H>,
    ) -> Result<usize, ReorderError> {
        self.ensure_editable()?;
        let from = self.list.position_of(id).ok_or(ReorderError::UnknownItem(id))?;
        let to = self.list.move_by(id, offset)?;
        if from != to {
            let summary = MoveSummary {
                item_id: id,
                from,
                to,
                len: self.list.len(),
            };
            feedback.item_moved(self.handles.get(id), &summary);
        }
        Ok(to)
    }

    pub fn add(&mut self, payload: T) -> Result<ItemId, ReorderError> {
        self.ensure_editable()?;
        self.list.push(payload)
    }

    pub fn insert(&mut self, index: usize, payload: T) -> Result<ItemId, ReorderError> {
        self.ensure_editable()?;
        self.list.insert(index, payload)
    }

    /// Removes an item. Removing the item being dragged ends the gesture as
    /// stale.
    pub fn remove(
        &mut self,
        id: ItemId,
        feedback: &mut dyn DropFeedback<H>,
    ) -> Result<T, ReorderError> {
        self.ensure_editable()?;
        let item = self.list.remove(id)?;
        if self.controller.dragging_item() == Some(id) {
            debug!(instance = %self.instance(), item = %id, "list: dragged item removed");
            self.controller.reset();
            feedback.drag_cancelled(self.handles.get(id), CancelReason::StaleItem);
        }
        self.handles.unregister(id);
        Ok(item.payload)
    }

    pub fn clear(&mut self) -> Result<(), ReorderError> {
        self.ensure_editable()?;
        self.controller.reset();
        self.list.clear();
        self.handles.clear();
        Ok(())
    }

    /// Restores the last seeded or saved sequence, ids included.
    pub fn reset(&mut self) -> Result<(), ReorderError> {
        self.ensure_editable()?;
        self.controller.reset();
        self.list = self.baseline.clone();
        let list = &self.list;
        self.handles.retain(|id| list.position_of(id).is_some());
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), ReorderError> {
        match self.phase {
            SavePhase::Idle => Ok(()),
            SavePhase::Saving => Err(ReorderError::Busy),
        }
    }
}

impl<T: Clone + PartialEq, H> ListEditor<T, H> {
    pub fn is_dirty(&self) -> bool {
        self.list != self.baseline
    }
}

impl<T, H> ListEditor<T, H>
where
    T: Clone + DomainRecord,
{
    /// Freezes the editor and returns the payload to submit. Any gesture in
    /// progress is dropped without applying.
    pub fn begin_save(&mut self) -> Result<RotationSave<T::Id>, ReorderError> {
        self.ensure_editable()?;
        if self.controller.is_dragging() {
            debug!(instance = %self.instance(), "list: drag abandoned for save");
            self.controller.reset();
        }
        self.phase = SavePhase::Saving;
        Ok(RotationSave {
            ids: self.list.domain_ids(),
        })
    }

    /// Resolves an in-flight save. On failure the edited sequence stays as it
    /// was so the save can be retried. Without a save in flight the result is
    /// refused and the baseline kept.
    pub fn finish_save(&mut self, result: Result<()>) -> Result<(), ReorderError> {
        if self.phase != SavePhase::Saving {
            warn!(instance = %self.instance(), "list: save result without a save in flight");
            return Err(ReorderError::NotSaving);
        }
        self.phase = SavePhase::Idle;
        match result {
            Ok(()) => {
                self.baseline = self.list.clone();
                info!(instance = %self.instance(), len = self.list.len(), "list: saved");
                Ok(())
            }
            Err(source) => {
                warn!(instance = %self.instance(), error = %source, "list: save failed");
                Err(ReorderError::Submission { source })
            }
        }
    }

    pub async fn save_with<S>(&mut self, sink: &S) -> Result<RotationSave<T::Id>, ReorderError>
    where
        S: RotationSink<T::Id> + ?Sized,
        T::Id: Send + Sync,
    {
        let request = self.begin_save()?;
        let result = sink.save(&request).await;
        self.finish_save(result)?;
        Ok(request)
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
