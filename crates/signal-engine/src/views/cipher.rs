use crate::api::types::{Outcome, ViewId};
use crate::api::view::{StageContext, View};
use crate::content::script::Script;
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::cipher;
use crate::views::ViewSnapshot;

const CUE_DECRYPT: u32 = 1;

const DECRYPT_DELAY_MS: f32 = 2000.0;

/// The ROT13 screen: the decrypted message and the location prompt appear
/// together after a short decryption pause.
pub struct CipherView {
    encrypted: String,
    decrypted: String,
    revealed: bool,
    timeline: Timeline,
}

impl CipherView {
    pub fn new(script: &Script) -> Self {
        Self {
            encrypted: script.cipher.encrypted.clone(),
            decrypted: script.cipher.decrypted.clone(),
            revealed: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for CipherView {
    fn id(&self) -> ViewId {
        ViewId::Cipher
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(DECRYPT_DELAY_MS, CUE_DECRYPT);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            if fired.kind == CUE_DECRYPT {
                self.revealed = true;
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Submit { text } = event else {
            return;
        };
        if !self.revealed {
            return;
        }
        // Misses leave the field as typed.
        if cipher::check_location(text) == Outcome::Success {
            ctx.advance(ViewId::Frequency);
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Cipher {
            encrypted: self.encrypted.clone(),
            decrypted: self.revealed.then(|| self.decrypted.clone()),
            input_armed: self.revealed,
        }
    }
}
