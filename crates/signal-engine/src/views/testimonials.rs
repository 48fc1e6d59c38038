use crate::api::types::{Outcome, ViewId, CONTROL_NEXT, CONTROL_PREV};
use crate::api::view::{StageContext, View};
use crate::content::script::{Script, Testimony};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::pager::Pager;
use crate::views::ViewSnapshot;

const CUE_NAV: u32 = 1;

const NAV_DELAY_MS: f32 = 4000.0;

/// The whistleblower carousel: six testimonies, whole cards at a time.
pub struct TestimonialsView {
    testimonies: Vec<Testimony>,
    pager: Pager,
    nav_armed: bool,
    timeline: Timeline,
}

impl TestimonialsView {
    pub fn new(script: &Script) -> Self {
        let testimonies = script.testimonies.clone();
        let pager = Pager::new(testimonies.len());
        Self {
            testimonies,
            pager,
            nav_armed: false,
            timeline: Timeline::new(),
        }
    }

    fn current(&self) -> Option<&Testimony> {
        self.testimonies.get(self.pager.index())
    }
}

impl View for TestimonialsView {
    fn id(&self) -> ViewId {
        ViewId::Testimonials
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(NAV_DELAY_MS, CUE_NAV);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            if fired.kind == CUE_NAV {
                self.nav_armed = true;
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        if !self.nav_armed {
            return;
        }
        match *control {
            CONTROL_NEXT => {
                if self.pager.next() == Outcome::Success {
                    ctx.advance(ViewId::Maze);
                }
            }
            CONTROL_PREV => self.pager.prev(),
            _ => {}
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        let (name, role, date, text) = match self.current() {
            Some(t) => (
                t.name.clone(),
                t.role.clone(),
                t.date.clone(),
                t.text.clone(),
            ),
            None => Default::default(),
        };
        ViewSnapshot::Testimonials {
            index: self.pager.index(),
            count: self.pager.count(),
            name,
            role,
            date,
            text,
            nav_armed: self.nav_armed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GameEvent;
    use crate::core::rng::Rng;
    use crate::core::session::Session;

    fn armed() -> TestimonialsView {
        let script = Script::builtin();
        let mut view = TestimonialsView::new(&script);
        let mut session = Session::new();
        let mut rng = Rng::new(1);
        let mut events = Vec::new();
        let mut ctx = StageContext::new(&mut session, &mut rng, &mut events);
        view.enter(&mut ctx);
        view.tick(NAV_DELAY_MS + 10.0, &mut ctx);
        view
    }

    fn press(view: &mut TestimonialsView, control: u32) -> Option<ViewId> {
        let mut session = Session::new();
        let mut rng = Rng::new(1);
        let mut events: Vec<GameEvent> = Vec::new();
        let mut ctx = StageContext::new(&mut session, &mut rng, &mut events);
        view.handle(&InputEvent::Press { control }, &mut ctx);
        ctx.take_advance()
    }

    #[test]
    fn controls_arm_after_four_seconds() {
        let script = Script::builtin();
        let mut view = TestimonialsView::new(&script);
        assert_eq!(press(&mut view, CONTROL_NEXT), None);
        assert_eq!(view.pager.index(), 0);
        let view = armed();
        assert!(view.nav_armed);
    }

    #[test]
    fn walks_the_carousel_then_advances() {
        let mut view = armed();
        let count = view.pager.count();
        assert_eq!(count, 6);
        for _ in 0..count - 1 {
            assert_eq!(press(&mut view, CONTROL_NEXT), None);
        }
        assert_eq!(press(&mut view, CONTROL_NEXT), Some(ViewId::Maze));
    }

    #[test]
    fn prev_floors_at_the_first_testimony() {
        let mut view = armed();
        let _ = press(&mut view, CONTROL_PREV);
        assert_eq!(view.pager.index(), 0);
        let _ = press(&mut view, CONTROL_NEXT);
        let _ = press(&mut view, CONTROL_PREV);
        assert_eq!(view.pager.index(), 0);
    }
}
