use crate::api::types::{Outcome, ViewId};
use crate::api::view::{StageContext, View};
use crate::content::script::Script;
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::passkey;
use crate::views::ViewSnapshot;

const CUE_LINE: u32 = 1;
const CUE_INPUT: u32 = 2;

const LINE_STEP_MS: f32 = 400.0;
const LINE_JITTER_MS: f32 = 200.0;
const INPUT_DELAY_MS: f32 = 2000.0;

/// The recovered log terminal: lines print one by one, then the decrypt-key
/// prompt arms.
pub struct LogsView {
    lines: Vec<String>,
    /// Indices of revealed lines, in firing order.
    revealed: Vec<usize>,
    input_armed: bool,
    timeline: Timeline,
}

impl LogsView {
    pub fn new(script: &Script) -> Self {
        Self {
            lines: script.system_logs.clone(),
            revealed: Vec::new(),
            input_armed: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for LogsView {
    fn id(&self) -> ViewId {
        ViewId::Logs
    }

    fn enter(&mut self, ctx: &mut StageContext) {
        if self.lines.is_empty() {
            self.timeline.cue_in(INPUT_DELAY_MS, CUE_INPUT);
            return;
        }
        self.timeline.cue_series(
            self.lines.len() as u32,
            LINE_STEP_MS,
            LINE_JITTER_MS,
            CUE_LINE,
            ctx.rng,
        );
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_LINE => {
                    self.revealed.push(fired.index as usize);
                    // The prompt arms a beat after the final line prints.
                    if fired.index as usize == self.lines.len() - 1 {
                        self.timeline.cue_in(INPUT_DELAY_MS, CUE_INPUT);
                    }
                }
                CUE_INPUT => self.input_armed = true,
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
        // Misses leave the field as typed.
        if passkey::check_passkey(text) == Outcome::Success {
            ctx.advance(ViewId::Cipher);
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Logs {
            lines: self
                .revealed
                .iter()
                .map(|&i| self.lines[i].clone())
                .collect(),
            input_armed: self.input_armed,
        }
    }
}
