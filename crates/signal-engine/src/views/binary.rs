use crate::api::types::{GameEvent, Outcome, ViewId, EVENT_RESET};
use crate::api::view::{StageContext, View};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::binary;
use crate::views::ViewSnapshot;

const CUE_HINT: u32 = 1;

const HINT_DELAY_MS: f32 = 5000.0;
const HINT: &str = "Convert 'HELLO' to ASCII binary";

/// The binary transmission: decode the greeting. Misses clear the field.
pub struct BinaryView {
    hint_armed: bool,
    timeline: Timeline,
}

impl BinaryView {
    pub fn new() -> Self {
        Self {
            hint_armed: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for BinaryView {
    fn id(&self) -> ViewId {
        ViewId::Binary
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(HINT_DELAY_MS, CUE_HINT);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            if fired.kind == CUE_HINT {
                self.hint_armed = true;
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Submit { text } = event else {
            return;
        };
        match binary::check_binary(text) {
            Outcome::Success => ctx.advance(ViewId::Archives),
            _ => ctx.emit(GameEvent::new(EVENT_RESET, ViewId::Binary.index() as f32)),
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Binary {
            hint: self.hint_armed.then(|| HINT.to_string()),
            expected_bits: binary::expected_bits(),
        }
    }
}

impl Default for BinaryView {
    fn default() -> Self {
        Self::new()
    }
}
