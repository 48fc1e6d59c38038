pub mod api;
pub mod content;
pub mod core;
pub mod input;
pub mod puzzles;
pub mod views;

// Re-export key types at crate root for convenience
pub use api::types::{GameEvent, Outcome, ViewId};
pub use api::types::{
    CONTROL_BEACON, CONTROL_CELL_BASE, CONTROL_CONFIRM, CONTROL_DIGIT_BASE, CONTROL_NEXT,
    CONTROL_ORB, CONTROL_PREV, CONTROL_RESTART, CONTROL_TRANSMISSION,
};
pub use api::types::{
    EVENT_MILESTONE, EVENT_RESET, EVENT_RESTART, EVENT_TRANSITION, EVENT_WHISPER,
};
pub use api::view::{StageContext, View};
pub use content::script::Script;
pub use crate::core::director::Director;
pub use crate::core::rng::Rng;
pub use crate::core::session::Session;
pub use crate::core::time::StepClock;
pub use crate::core::timeline::{CueId, Fired, Timeline};
pub use input::queue::{InputEvent, InputQueue};
pub use views::ViewSnapshot;
