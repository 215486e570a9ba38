//! Turns normalized drag events into reorder intents for one list instance.
//!
//! Events carry `{instance, phase, source_id, target_id, edge}` and nothing
//! else, so any pointer or windowing layer can feed the controller. Each
//! controller only reacts to events stamped with its own instance id.

use serde::{Deserialize, Serialize};
use shared::domain::{EditorInstanceId, ItemId};
use tracing::debug;

use crate::{
    engine::{self, Axis, DropIndicator, Edge},
    list::OrderedList,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    Start,
    Over,
    Drop,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub instance: EditorInstanceId,
    pub phase: DragPhase,
    pub source_id: ItemId,
    pub target_id: Option<ItemId>,
    pub edge: Option<Edge>,
}

impl DragEvent {
    pub fn start(instance: EditorInstanceId, source_id: ItemId) -> Self {
        Self {
            instance,
            phase: DragPhase::Start,
            source_id,
            target_id: None,
            edge: None,
        }
    }

    pub fn over(
        instance: EditorInstanceId,
        source_id: ItemId,
        target_id: Option<ItemId>,
        edge: Option<Edge>,
    ) -> Self {
        Self {
            instance,
            phase: DragPhase::Over,
            source_id,
            target_id,
            edge,
        }
    }

    pub fn release(
        instance: EditorInstanceId,
        source_id: ItemId,
        target_id: Option<ItemId>,
        edge: Option<Edge>,
    ) -> Self {
        Self {
            instance,
            phase: DragPhase::Drop,
            source_id,
            target_id,
            edge,
        }
    }

    pub fn cancel(instance: EditorInstanceId, source_id: ItemId) -> Self {
        Self {
            instance,
            phase: DragPhase::Cancel,
            source_id,
            target_id: None,
            edge: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    ForeignInstance,
    AlreadyDragging,
    NotDragging,
    SourceMismatch,
    UnknownSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Pointer capture lost or the host aborted the gesture.
    Aborted,
    OutsideTarget,
    /// Source or target vanished from the list mid-gesture.
    StaleItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderIntent {
    pub item_id: ItemId,
    pub start_index: usize,
    pub finish_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored(IgnoreReason),
    Started { source_id: ItemId },
    /// Indicator to draw for the current hover; `None` hides it.
    Hover(Option<DropIndicator>),
    /// Drop resolved to a real move; apply exactly once.
    Reorder(ReorderIntent),
    /// Drop resolved to the item's own position.
    Settled,
    Cancelled(CancelReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Dragging {
        source_id: ItemId,
        indicator: Option<DropIndicator>,
    },
}

#[derive(Debug)]
pub struct DragReorderController {
    instance: EditorInstanceId,
    axis: Axis,
    state: GestureState,
}

impl DragReorderController {
    pub fn new(instance: EditorInstanceId, axis: Axis) -> Self {
        Self {
            instance,
            axis,
            state: GestureState::Idle,
        }
    }

    pub fn instance(&self) -> EditorInstanceId {
        self.instance
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Item currently flagged as being dragged, if any.
    pub fn dragging_item(&self) -> Option<ItemId> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { source_id, .. } => Some(source_id),
        }
    }

    pub fn indicator(&self) -> Option<DropIndicator> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { indicator, .. } => indicator,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Forces the gesture back to idle without producing an intent.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    pub fn handle<T>(&mut self, event: &DragEvent, list: &OrderedList<T>) -> DragOutcome {
        if event.instance != self.instance {
            debug!(
                instance = %self.instance,
                event_instance = %event.instance,
                "drag: event for another editor ignored"
            );
            return DragOutcome::Ignored(IgnoreReason::ForeignInstance);
        }

        match (self.state, event.phase) {
            (GestureState::Idle, DragPhase::Start) => {
                if list.position_of(event.source_id).is_none() {
                    return DragOutcome::Ignored(IgnoreReason::UnknownSource);
                }
                self.state = GestureState::Dragging {
                    source_id: event.source_id,
                    indicator: None,
                };
                debug!(source_id = %event.source_id, "drag: started");
                DragOutcome::Started {
                    source_id: event.source_id,
                }
            }
            (GestureState::Idle, _) => DragOutcome::Ignored(IgnoreReason::NotDragging),
            (GestureState::Dragging { .. }, DragPhase::Start) => {
                DragOutcome::Ignored(IgnoreReason::AlreadyDragging)
            }
            (GestureState::Dragging { source_id, .. }, _) if source_id != event.source_id => {
                DragOutcome::Ignored(IgnoreReason::SourceMismatch)
            }
            (GestureState::Dragging { source_id, .. }, DragPhase::Over) => {
                let indicator = self.resolve(source_id, event, list).ok().flatten();
                self.state = GestureState::Dragging {
                    source_id,
                    indicator,
                };
                DragOutcome::Hover(indicator)
            }
            (GestureState::Dragging { .. }, DragPhase::Cancel) => {
                self.finish(CancelReason::Aborted)
            }
            (GestureState::Dragging { source_id, .. }, DragPhase::Drop) => {
                if event.target_id.is_none() {
                    return self.finish(CancelReason::OutsideTarget);
                }
                let Some(start_index) = list.position_of(source_id) else {
                    return self.finish(CancelReason::StaleItem);
                };
                match self.resolve(source_id, event, list) {
                    Err(reason) => self.finish(reason),
                    Ok(None) => {
                        self.state = GestureState::Idle;
                        debug!(source_id = %source_id, "drag: dropped in place");
                        DragOutcome::Settled
                    }
                    Ok(Some(indicator)) => {
                        self.state = GestureState::Idle;
                        let intent = ReorderIntent {
                            item_id: source_id,
                            start_index,
                            finish_index: indicator.destination_index,
                        };
                        debug!(
                            source_id = %source_id,
                            start_index,
                            finish_index = intent.finish_index,
                            "drag: dropped"
                        );
                        DragOutcome::Reorder(intent)
                    }
                }
            }
        }
    }

    fn resolve<T>(
        &self,
        source_id: ItemId,
        event: &DragEvent,
        list: &OrderedList<T>,
    ) -> Result<Option<DropIndicator>, CancelReason> {
        let Some(target_id) = event.target_id else {
            return Ok(None);
        };
        let start = list.position_of(source_id).ok_or(CancelReason::StaleItem)?;
        let target = list.position_of(target_id).ok_or(CancelReason::StaleItem)?;
        Ok(engine::drop_indicator(start, target, event.edge, self.axis))
    }

    fn finish(&mut self, reason: CancelReason) -> DragOutcome {
        self.state = GestureState::Idle;
        debug!(?reason, "drag: cancelled");
        DragOutcome::Cancelled(reason)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
