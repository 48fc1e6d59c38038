use crate::api::types::{GameEvent, ViewId, EVENT_TRANSITION};
use crate::api::view::{StageContext, View};
use crate::content::script::Script;
use crate::core::rng::Rng;
use crate::core::session::Session;
use crate::input::queue::InputQueue;
use crate::views::archives::ArchivesView;
use crate::views::binary::BinaryView;
use crate::views::cipher::CipherView;
use crate::views::finale::FinalView;
use crate::views::frequency::FrequencyView;
use crate::views::home::HomeView;
use crate::views::logs::LogsView;
use crate::views::math::MathView;
use crate::views::maze::MazeView;
use crate::views::memory::MemoryView;
use crate::views::portal::PortalView;
use crate::views::revelation::RevelationView;
use crate::views::testimonials::TestimonialsView;
use crate::views::ViewSnapshot;

/// Top-level controller: owns the session, the active view, and the
/// outbound event buffer. Views never see each other; success signals come
/// back through the stage context and the director performs the transition.
pub struct Director {
    session: Session,
    view: Box<dyn View>,
    script: Script,
    rng: Rng,
    events: Vec<GameEvent>,
}

impl Director {
    pub fn new(script: Script, seed: u64) -> Self {
        let mut director = Self {
            session: Session::new(),
            view: Self::build_view(&script, ViewId::Home),
            script,
            rng: Rng::new(seed),
            events: Vec::new(),
        };
        let mut ctx = StageContext::new(
            &mut director.session,
            &mut director.rng,
            &mut director.events,
        );
        director.view.enter(&mut ctx);
        director
    }

    fn build_view(script: &Script, id: ViewId) -> Box<dyn View> {
        match id {
            ViewId::Home => Box::new(HomeView::new(script)),
            ViewId::Logs => Box::new(LogsView::new(script)),
            ViewId::Cipher => Box::new(CipherView::new(script)),
            ViewId::Frequency => Box::new(FrequencyView::new()),
            ViewId::Memory => Box::new(MemoryView::new()),
            ViewId::Binary => Box::new(BinaryView::new()),
            ViewId::Archives => Box::new(ArchivesView::new(script)),
            ViewId::Math => Box::new(MathView::new()),
            ViewId::Testimonials => Box::new(TestimonialsView::new(script)),
            ViewId::Maze => Box::new(MazeView::new()),
            ViewId::Portal => Box::new(PortalView::new(script)),
            ViewId::Revelation => Box::new(RevelationView::new(script)),
            ViewId::Final => Box::new(FinalView::new(script)),
        }
    }

    /// Run one logic step: dispatch pending input to the active view, tick
    /// its timeline, then apply any transition it signaled.
    pub fn update(&mut self, dt_ms: f32, input: &mut InputQueue) {
        let advance = {
            let mut ctx =
                StageContext::new(&mut self.session, &mut self.rng, &mut self.events);
            for event in input.drain() {
                self.view.handle(&event, &mut ctx);
            }
            self.view.tick(dt_ms, &mut ctx);
            ctx.take_advance()
        };
        if let Some(next) = advance {
            self.mount(next);
        }
    }

    /// Tear down the active view and mount `next` fresh. Dropping the old
    /// view drops its timeline, cancelling every pending cue; the new view's
    /// transient puzzle state starts from scratch.
    fn mount(&mut self, next: ViewId) {
        log::info!("view transition: {} -> {}", self.view.id().name(), next.name());
        self.session.transition(next);
        self.events
            .push(GameEvent::new(EVENT_TRANSITION, next.index() as f32));
        self.view = Self::build_view(&self.script, next);
        let mut ctx = StageContext::new(&mut self.session, &mut self.rng, &mut self.events);
        self.view.enter(&mut ctx);
    }

    pub fn current_view(&self) -> ViewId {
        self.session.current()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.view.snapshot()
    }

    /// Events accumulated since the last clear.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Called once per frame, before the logic steps.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        CONTROL_BEACON, CONTROL_CELL_BASE, CONTROL_CONFIRM, CONTROL_DIGIT_BASE, CONTROL_NEXT,
        CONTROL_TRANSMISSION,
    };
    use crate::input::queue::InputEvent;

    struct Rig {
        director: Director,
        input: InputQueue,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                director: Director::new(Script::builtin(), 77),
                input: InputQueue::new(),
            }
        }

        fn run_ms(&mut self, ms: f32) {
            let mut elapsed = 0.0;
            while elapsed < ms {
                self.director.update(10.0, &mut self.input);
                elapsed += 10.0;
            }
        }

        fn press(&mut self, control: u32) {
            self.input.push(InputEvent::Press { control });
            self.director.update(10.0, &mut self.input);
        }

        fn key(&mut self, key_code: u32) {
            self.input.push(InputEvent::KeyDown { key_code });
            self.director.update(10.0, &mut self.input);
        }

        fn submit(&mut self, text: &str) {
            self.input.push(InputEvent::Submit { text: text.into() });
            self.director.update(10.0, &mut self.input);
        }

        fn expect_view(&self, id: ViewId) {
            assert_eq!(self.director.current_view(), id);
        }
    }

    #[test]
    fn wrong_answers_never_advance() {
        let mut rig = Rig::new();
        for _ in 0..8 {
            rig.press(CONTROL_TRANSMISSION);
        }
        rig.press(CONTROL_BEACON);
        rig.expect_view(ViewId::Logs);
        rig.run_ms(20_000.0);
        for wrong in ["", "mulder", "area51", "1000"] {
            rig.submit(wrong);
        }
        rig.expect_view(ViewId::Logs);
    }

    #[test]
    fn transition_events_reach_the_buffer() {
        let mut rig = Rig::new();
        for _ in 0..8 {
            rig.press(CONTROL_TRANSMISSION);
        }
        rig.director.clear_events();
        rig.press(CONTROL_BEACON);
        let kinds: Vec<f32> = rig.director.events().iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&EVENT_TRANSITION));
    }

    #[test]
    fn full_walkthrough_reaches_the_final_screen() {
        let mut rig = Rig::new();

        // Home: poke the title past the beacon threshold, then leave.
        for _ in 0..8 {
            rig.press(CONTROL_TRANSMISSION);
        }
        rig.press(CONTROL_BEACON);
        rig.expect_view(ViewId::Logs);

        // Logs: wait out the printout, then the decrypt key.
        rig.run_ms(20_000.0);
        rig.submit("roswell1947");
        rig.expect_view(ViewId::Cipher);

        // Cipher: wait for the decryption, name the location.
        rig.run_ms(2_500.0);
        rig.submit("area 51");
        rig.expect_view(ViewId::Frequency);

        // Frequency: tune the dial.
        rig.run_ms(3_500.0);
        for digit in [4u32, 6, 2, 5] {
            rig.press(CONTROL_DIGIT_BASE + digit);
        }
        rig.expect_view(ViewId::Memory);

        // Memory: replay each round's pattern from the snapshot.
        for _round in 1..=3 {
            rig.run_ms(6_000.0);
            let ViewSnapshot::Memory { pattern, active, .. } = rig.director.snapshot() else {
                panic!("wrong snapshot");
            };
            assert!(active);
            for cell in pattern {
                rig.press(CONTROL_CELL_BASE + cell as u32);
            }
            rig.run_ms(1_500.0);
        }
        rig.expect_view(ViewId::Binary);

        // Binary: the greeting, with stray whitespace.
        rig.submit("01001000 01000101 01001100 01001100 01001111");
        rig.expect_view(ViewId::Archives);

        // Archives: page through all five documents.
        rig.run_ms(4_000.0);
        for _ in 0..5 {
            rig.press(CONTROL_NEXT);
        }
        rig.expect_view(ViewId::Math);

        // Math: the Drake product.
        rig.submit("1000");
        rig.expect_view(ViewId::Testimonials);

        // Testimonials: page through all six.
        rig.run_ms(5_000.0);
        for _ in 0..6 {
            rig.press(CONTROL_NEXT);
        }
        rig.expect_view(ViewId::Maze);

        // Maze: the known path, then the exit hold.
        rig.run_ms(2_500.0);
        for code in [83, 83, 68, 68, 83, 68, 68, 83] {
            rig.key(code);
        }
        rig.run_ms(1_500.0);
        rig.expect_view(ViewId::Portal);

        // Portal: wait for the phrase, answer it.
        rig.run_ms(8_000.0);
        rig.submit("we come in peace");
        rig.expect_view(ViewId::Revelation);

        // Revelation: four phases, then confirm.
        rig.run_ms(4.0 * 8_000.0 + 500.0);
        rig.press(CONTROL_CONFIRM);
        rig.expect_view(ViewId::Final);

        // Final is terminal: nothing moves it.
        rig.run_ms(30_000.0);
        rig.submit("anything");
        rig.expect_view(ViewId::Final);
    }

    #[test]
    fn a_fresh_director_starts_from_scratch() {
        // The restart affordance reloads the page, which builds a new
        // director: home screen, zero interactions, no leaked puzzle state.
        let mut rig = Rig::new();
        for _ in 0..8 {
            rig.press(CONTROL_TRANSMISSION);
        }
        rig.press(CONTROL_BEACON);
        rig.expect_view(ViewId::Logs);

        let rig = Rig::new();
        rig.expect_view(ViewId::Home);
        assert_eq!(rig.director.session().interactions(), 0);
    }
}
