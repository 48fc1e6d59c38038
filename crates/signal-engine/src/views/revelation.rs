use crate::api::types::{ViewId, CONTROL_CONFIRM};
use crate::api::view::{StageContext, View};
use crate::content::script::{Phase, Script};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::views::ViewSnapshot;

const CUE_PHASE: u32 = 1;

const PHASE_MS: f32 = 8000.0;

/// The revelation: four narrative phases on a timer, then a manual confirm.
/// The only screen with no failure path.
pub struct RevelationView {
    phases: Vec<Phase>,
    phase: usize,
    confirm_armed: bool,
    timeline: Timeline,
}

impl RevelationView {
    pub fn new(script: &Script) -> Self {
        Self {
            phases: script.revelation_phases.clone(),
            phase: 0,
            confirm_armed: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for RevelationView {
    fn id(&self) -> ViewId {
        ViewId::Revelation
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(PHASE_MS, CUE_PHASE);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            if fired.kind != CUE_PHASE {
                continue;
            }
            if self.phase + 1 < self.phases.len() {
                self.phase += 1;
                self.timeline.cue_in(PHASE_MS, CUE_PHASE);
            } else {
                self.confirm_armed = true;
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        if *control == CONTROL_CONFIRM && self.confirm_armed {
            ctx.advance(ViewId::Final);
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        let (title, lines) = match self.phases.get(self.phase) {
            Some(phase) => (phase.title.clone(), phase.lines.clone()),
            None => (String::new(), Vec::new()),
        };
        ViewSnapshot::Revelation {
            phase: self.phase,
            phase_count: self.phases.len(),
            title,
            lines,
            confirm_armed: self.confirm_armed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GameEvent;
    use crate::core::rng::Rng;
    use crate::core::session::Session;

    struct Rig {
        view: RevelationView,
        session: Session,
        rng: Rng,
        events: Vec<GameEvent>,
    }

    impl Rig {
        fn new() -> Self {
            let script = Script::builtin();
            let mut rig = Rig {
                view: RevelationView::new(&script),
                session: Session::new(),
                rng: Rng::new(1),
                events: Vec::new(),
            };
            let mut ctx = StageContext::new(&mut rig.session, &mut rig.rng, &mut rig.events);
            rig.view.enter(&mut ctx);
            rig
        }

        fn run_ms(&mut self, ms: f32) {
            let mut elapsed = 0.0;
            while elapsed < ms {
                let mut ctx =
                    StageContext::new(&mut self.session, &mut self.rng, &mut self.events);
                self.view.tick(100.0, &mut ctx);
                elapsed += 100.0;
            }
        }

        fn confirm(&mut self) -> Option<ViewId> {
            let mut ctx = StageContext::new(&mut self.session, &mut self.rng, &mut self.events);
            self.view
                .handle(&InputEvent::Press { control: CONTROL_CONFIRM }, &mut ctx);
            ctx.take_advance()
        }
    }

    #[test]
    fn phases_advance_on_the_timer() {
        let mut rig = Rig::new();
        assert_eq!(rig.view.phase, 0);
        rig.run_ms(PHASE_MS + 100.0);
        assert_eq!(rig.view.phase, 1);
        rig.run_ms(PHASE_MS);
        assert_eq!(rig.view.phase, 2);
        rig.run_ms(PHASE_MS);
        assert_eq!(rig.view.phase, 3);
        assert!(!rig.view.confirm_armed);
        rig.run_ms(PHASE_MS);
        // The final phase holds; the confirm arms instead.
        assert_eq!(rig.view.phase, 3);
        assert!(rig.view.confirm_armed);
    }

    #[test]
    fn confirm_only_works_once_armed() {
        let mut rig = Rig::new();
        assert_eq!(rig.confirm(), None);
        rig.run_ms(4.0 * PHASE_MS + 400.0);
        assert_eq!(rig.confirm(), Some(ViewId::Final));
    }
}
