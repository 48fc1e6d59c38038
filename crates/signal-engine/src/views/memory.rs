use crate::api::types::{GameEvent, Outcome, ViewId, CONTROL_CELL_BASE, EVENT_RESET};
use crate::api::view::{StageContext, View};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::memory;
use crate::views::ViewSnapshot;

const CUE_SHOW: u32 = 1;
const CUE_HIDE: u32 = 2;
const CUE_REGEN: u32 = 3;
const CUE_NEXT_ROUND: u32 = 4;

const SHOW_DELAY_MS: f32 = 1000.0;
const REGEN_DELAY_MS: f32 = 500.0;
const NEXT_ROUND_DELAY_MS: f32 = 1000.0;

/// Hide delay counted from the pattern showing, stretched per round.
fn hide_delay_ms(round: u32) -> f32 {
    2000.0 + round as f32 * 500.0
}

/// The memory protocol: three rounds of watch-then-repeat over a 3x3 grid.
/// Every re-arm clears pending cues first — the round-change timers must
/// never land on a superseded round.
pub struct MemoryView {
    /// 1-based round number.
    round: u32,
    pattern: Vec<u8>,
    clicks: Vec<u8>,
    pattern_visible: bool,
    /// Cells accept clicks.
    active: bool,
    timeline: Timeline,
}

impl MemoryView {
    pub fn new() -> Self {
        Self {
            round: 1,
            pattern: Vec::new(),
            clicks: Vec::new(),
            pattern_visible: false,
            active: false,
            timeline: Timeline::new(),
        }
    }

    /// Reset the round state, roll a fresh pattern, and schedule the
    /// show/hide cycle.
    fn arm_round(&mut self, ctx: &mut StageContext) {
        self.timeline.clear();
        self.pattern = memory::generate_pattern(self.round, ctx.rng);
        self.clicks.clear();
        self.pattern_visible = false;
        self.active = false;
        self.timeline.cue_in(SHOW_DELAY_MS, CUE_SHOW);
    }
}

impl View for MemoryView {
    fn id(&self) -> ViewId {
        ViewId::Memory
    }

    fn enter(&mut self, ctx: &mut StageContext) {
        self.arm_round(ctx);
    }

    fn tick(&mut self, dt_ms: f32, ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_SHOW => {
                    self.pattern_visible = true;
                    self.timeline.cue_in(hide_delay_ms(self.round), CUE_HIDE);
                }
                CUE_HIDE => {
                    self.pattern_visible = false;
                    self.active = true;
                }
                CUE_REGEN => self.arm_round(ctx),
                CUE_NEXT_ROUND => {
                    self.round += 1;
                    self.arm_round(ctx);
                }
                _ => {}
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        if !self.active {
            return;
        }
        let Some(cell) = control
            .checked_sub(CONTROL_CELL_BASE)
            .filter(|c| *c < memory::GRID_SIZE)
        else {
            return;
        };
        self.clicks.push(cell as u8);
        match memory::check_clicks(&self.pattern, &self.clicks) {
            Outcome::Incomplete => {}
            Outcome::Success => {
                if self.round >= memory::MAX_ROUNDS {
                    ctx.advance(ViewId::Binary);
                } else {
                    self.active = false;
                    self.timeline.clear();
                    self.timeline.cue_in(NEXT_ROUND_DELAY_MS, CUE_NEXT_ROUND);
                }
            }
            Outcome::Failure => {
                self.active = false;
                ctx.emit(GameEvent::new(EVENT_RESET, ViewId::Memory.index() as f32));
                self.timeline.clear();
                self.timeline.cue_in(REGEN_DELAY_MS, CUE_REGEN);
            }
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Memory {
            round: self.round,
            max_rounds: memory::MAX_ROUNDS,
            pattern: self.pattern.clone(),
            pattern_visible: self.pattern_visible,
            active: self.active,
            clicked: self.clicks.clone(),
        }
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}
