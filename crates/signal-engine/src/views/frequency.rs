use crate::api::types::{
    GameEvent, Outcome, ViewId, CONTROL_DIGIT_BASE, EVENT_RESET,
};
use crate::api::view::{StageContext, View};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::frequency;
use crate::views::ViewSnapshot;

const CUE_ARM: u32 = 1;
const CUE_CLEAR: u32 = 2;

const ARM_DELAY_MS: f32 = 3000.0;
const CLEAR_DELAY_MS: f32 = 1000.0;

/// The tuning dial: four digits keyed in order. A mismatch shows briefly,
/// then the entered digits clear.
pub struct FrequencyView {
    armed: bool,
    entered: Vec<u8>,
    /// A mismatch is waiting out its clear delay; presses are ignored.
    locked: bool,
    timeline: Timeline,
}

impl FrequencyView {
    pub fn new() -> Self {
        Self {
            armed: false,
            entered: Vec::new(),
            locked: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for FrequencyView {
    fn id(&self) -> ViewId {
        ViewId::Frequency
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(ARM_DELAY_MS, CUE_ARM);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_ARM => self.armed = true,
                CUE_CLEAR => {
                    self.entered.clear();
                    self.locked = false;
                }
                _ => {}
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        if !self.armed || self.locked {
            return;
        }
        let Some(digit) = control.checked_sub(CONTROL_DIGIT_BASE).filter(|d| *d < 10) else {
            return;
        };
        self.entered.push(digit as u8);
        match frequency::check_sequence(&self.entered) {
            Outcome::Incomplete => {}
            Outcome::Success => ctx.advance(ViewId::Memory),
            Outcome::Failure => {
                self.locked = true;
                ctx.emit(GameEvent::new(EVENT_RESET, ViewId::Frequency.index() as f32));
                self.timeline.cue_in(CLEAR_DELAY_MS, CUE_CLEAR);
            }
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Frequency {
            armed: self.armed,
            entered: self.entered.clone(),
            slots: frequency::DIAL_SEQUENCE.len(),
            locked: self.locked,
        }
    }
}

impl Default for FrequencyView {
    fn default() -> Self {
        Self::new()
    }
}
