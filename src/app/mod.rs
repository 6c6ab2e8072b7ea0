//! Application orchestration layer
//!
//! Interaction state and event dispatch: the paint state machine, the paint
//! controller, the publish/subscribe hub and the session that ties them to
//! the grid configuration.

pub mod controller;
pub mod notifier;
pub mod paint;
pub mod state;

pub use controller::{SketchController, SketchError, SketchSettings};
pub use notifier::{EventKind, Notifier, SketchEvent, SubscriptionId};
pub use paint::{PaintController, PaintDecision};
pub use state::{ColorMode, PaintEvent, PaintState, PenState, StateMachine};
