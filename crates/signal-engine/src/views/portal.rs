use crate::api::types::{GameEvent, Outcome, ViewId, EVENT_RESET};
use crate::api::view::{StageContext, View};
use crate::content::script::Script;
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::phrase;
use crate::views::ViewSnapshot;

const CUE_CHAR: u32 = 1;
const CUE_INPUT: u32 = 2;
const CUE_RESTORE: u32 = 3;

const CHAR_STEP_MS: f32 = 200.0;
const INPUT_DELAY_MS: f32 = 2000.0;
const RESTORE_DELAY_MS: f32 = 1000.0;

/// The portal: a scrambled greeting types itself out; the visitor answers
/// with the unscrambled phrase. A miss blanks the phrase and brings it back
/// whole after a pause.
pub struct PortalView {
    scrambled: Vec<char>,
    shown: usize,
    input_armed: bool,
    timeline: Timeline,
}

impl PortalView {
    pub fn new(script: &Script) -> Self {
        Self {
            scrambled: script.scrambled_phrase.chars().collect(),
            shown: 0,
            input_armed: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for PortalView {
    fn id(&self) -> ViewId {
        ViewId::Portal
    }

    fn enter(&mut self, ctx: &mut StageContext) {
        if self.scrambled.is_empty() {
            self.timeline.cue_in(INPUT_DELAY_MS, CUE_INPUT);
            return;
        }
        self.timeline.cue_series(
            self.scrambled.len() as u32,
            CHAR_STEP_MS,
            0.0,
            CUE_CHAR,
            ctx.rng,
        );
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_CHAR => {
                    self.shown = self.shown.max(fired.index as usize + 1);
                    if fired.index as usize == self.scrambled.len() - 1 {
                        self.timeline.cue_in(INPUT_DELAY_MS, CUE_INPUT);
                    }
                }
                CUE_INPUT => self.input_armed = true,
                CUE_RESTORE => {
                    self.shown = self.scrambled.len();
                    self.input_armed = true;
                }
                _ => {}
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Submit { text } = event else {
            return;
        };
        if !self.input_armed {
            return;
        }
        match phrase::check_phrase(text) {
            Outcome::Success => ctx.advance(ViewId::Revelation),
            _ => {
                self.shown = 0;
                self.input_armed = false;
                ctx.emit(GameEvent::new(EVENT_RESET, ViewId::Portal.index() as f32));
                self.timeline.clear();
                self.timeline.cue_in(RESTORE_DELAY_MS, CUE_RESTORE);
            }
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Portal {
            phrase: self.scrambled.iter().take(self.shown).collect(),
            input_armed: self.input_armed,
        }
    }
}
