use crate::api::types::{GameEvent, Outcome, ViewId, EVENT_RESET};
use crate::api::view::{StageContext, View};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::drake;
use crate::views::ViewSnapshot;

const CUE_HINT: u32 = 1;

const HINT_DELAY_MS: f32 = 8000.0;
const HINT: &str = "Multiply all values together";

/// The Drake-equation screen: one numeric answer. Misses clear the field.
pub struct MathView {
    hint_armed: bool,
    timeline: Timeline,
}

impl MathView {
    pub fn new() -> Self {
        Self {
            hint_armed: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for MathView {
    fn id(&self) -> ViewId {
        ViewId::Math
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
        match drake::check_answer(text) {
            Outcome::Success => ctx.advance(ViewId::Testimonials),
            _ => ctx.emit(GameEvent::new(EVENT_RESET, ViewId::Math.index() as f32)),
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Math {
            terms: drake::TERMS.to_vec(),
            hint: self.hint_armed.then(|| HINT.to_string()),
        }
    }
}

impl Default for MathView {
    fn default() -> Self {
        Self::new()
    }
}
