use crate::api::types::{
    GameEvent, ViewId, CONTROL_ORB, CONTROL_RESTART, EVENT_RESTART, EVENT_WHISPER,
};
use crate::api::view::{StageContext, View};
use crate::content::script::Script;
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::views::ViewSnapshot;

const CUE_MESSAGE: u32 = 1;
const CUE_HIDDEN: u32 = 2;

const MESSAGE_DELAY_MS: f32 = 2000.0;
const HIDDEN_DELAY_MS: f32 = 15000.0;

/// The terminal screen. The closing message fades in, and much later the
/// hidden affordances do: a restart link, a whisper orb, and the binary
/// watermark. No outgoing transition.
pub struct FinalView {
    message_armed: bool,
    hidden_armed: bool,
    watermark: String,
    whisper_count: u32,
    timeline: Timeline,
}

impl FinalView {
    pub fn new(script: &Script) -> Self {
        Self {
            message_armed: false,
            hidden_armed: false,
            watermark: script.binary_watermark.clone(),
            whisper_count: script.whispers.len() as u32,
            timeline: Timeline::new(),
        }
    }
}

impl View for FinalView {
    fn id(&self) -> ViewId {
        ViewId::Final
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(MESSAGE_DELAY_MS, CUE_MESSAGE);
        self.timeline.cue_in(HIDDEN_DELAY_MS, CUE_HIDDEN);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_MESSAGE => self.message_armed = true,
                CUE_HIDDEN => self.hidden_armed = true,
                _ => {}
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        if !self.hidden_armed {
            return;
        }
        match *control {
            CONTROL_RESTART => {
                // The page reloads itself, which resets the whole session.
                ctx.emit(GameEvent::new(EVENT_RESTART, 0.0));
            }
            CONTROL_ORB if self.whisper_count > 0 => {
                let pick = ctx.rng.next_int(self.whisper_count);
                ctx.emit(GameEvent::new(EVENT_WHISPER, pick as f32));
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Final {
            message_armed: self.message_armed,
            hidden_armed: self.hidden_armed,
            watermark: self.watermark.clone(),
        }
    }
}
