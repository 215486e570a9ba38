pub mod controller;
pub mod editor;
pub mod engine;
pub mod error;
pub mod list;
pub mod registry;

pub use controller::{DragEvent, DragOutcome, DragPhase, DragReorderController, ReorderIntent};
pub use editor::{DropFeedback, ListEditor, MoveSummary, NoFeedback, RotationSink, SavePhase};
pub use engine::{destination_index, drop_indicator, reorder, Axis, DropIndicator, Edge};
pub use error::ReorderError;
pub use list::{DomainRecord, Item, OrderedList};
pub use registry::HandleRegistry;
