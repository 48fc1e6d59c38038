use crate::api::types::{Outcome, ViewId};
use crate::api::view::{StageContext, View};
use crate::core::timeline::Timeline;
use crate::input::queue::InputEvent;
use crate::puzzles::maze::{Maze, Step, LAYOUT};
use crate::views::ViewSnapshot;

const CUE_SHOW: u32 = 1;
const CUE_EXIT: u32 = 2;

const SHOW_DELAY_MS: f32 = 2000.0;
const EXIT_DELAY_MS: f32 = 1000.0;

/// The navigation protocol: steer through the grid with w/a/s/d or arrows.
/// Reaching the exit holds the screen for a beat before moving on.
pub struct MazeView {
    maze: Maze,
    visible: bool,
    solved: bool,
    timeline: Timeline,
}

impl MazeView {
    pub fn new() -> Self {
        Self {
            maze: Maze::new(),
            visible: false,
            solved: false,
            timeline: Timeline::new(),
        }
    }
}

impl View for MazeView {
    fn id(&self) -> ViewId {
        ViewId::Maze
    }

    fn enter(&mut self, _ctx: &mut StageContext) {
        self.timeline.cue_in(SHOW_DELAY_MS, CUE_SHOW);
    }

    fn tick(&mut self, dt_ms: f32, ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_SHOW => self.visible = true,
                CUE_EXIT => ctx.advance(ViewId::Portal),
                _ => {}
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, _ctx: &mut StageContext) {
        let InputEvent::KeyDown { key_code } = event else {
            return;
        };
        if !self.visible || self.solved {
            return;
        }
        let Some(step) = Step::from_key_code(*key_code) else {
            return;
        };
        if self.maze.step(step) == Outcome::Success {
            self.solved = true;
            self.timeline.cue_in(EXIT_DELAY_MS, CUE_EXIT);
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        let pos = self.maze.pos();
        ViewSnapshot::Maze {
            visible: self.visible,
            layout: LAYOUT,
            player: [pos.x, pos.y],
            solved: self.solved,
        }
    }
}

impl Default for MazeView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GameEvent;
    use crate::core::rng::Rng;
    use crate::core::session::Session;

    struct Rig {
        view: MazeView,
        session: Session,
        rng: Rng,
        events: Vec<GameEvent>,
    }

    impl Rig {
        fn new() -> Self {
            let mut rig = Rig {
                view: MazeView::new(),
                session: Session::new(),
                rng: Rng::new(1),
                events: Vec::new(),
            };
            let mut ctx = StageContext::new(&mut rig.session, &mut rig.rng, &mut rig.events);
            rig.view.enter(&mut ctx);
            rig
        }

        fn tick(&mut self, dt_ms: f32) -> Option<ViewId> {
            let mut ctx = StageContext::new(&mut self.session, &mut self.rng, &mut self.events);
            self.view.tick(dt_ms, &mut ctx);
            ctx.take_advance()
        }

        fn key(&mut self, key_code: u32) {
            let mut ctx = StageContext::new(&mut self.session, &mut self.rng, &mut self.events);
            self.view.handle(&InputEvent::KeyDown { key_code }, &mut ctx);
        }
    }

    // s s d d s d d s, as key codes.
    const SOLVING_KEYS: [u32; 8] = [83, 83, 68, 68, 83, 68, 68, 83];

    #[test]
    fn keys_are_ignored_until_the_grid_shows() {
        let mut rig = Rig::new();
        rig.key(83);
        assert!(matches!(
            rig.view.snapshot(),
            ViewSnapshot::Maze { player: [0, 0], visible: false, .. }
        ));
    }

    #[test]
    fn solving_path_advances_after_the_hold() {
        let mut rig = Rig::new();
        let _ = rig.tick(SHOW_DELAY_MS);
        for code in SOLVING_KEYS {
            rig.key(code);
        }
        assert!(rig.view.solved);
        // The transition waits out the hold.
        assert_eq!(rig.tick(500.0), None);
        assert_eq!(rig.tick(600.0), Some(ViewId::Portal));
    }

    #[test]
    fn arrow_keys_work_too() {
        let mut rig = Rig::new();
        let _ = rig.tick(SHOW_DELAY_MS);
        // Down arrow instead of 's' for the first step.
        rig.key(40);
        assert!(matches!(
            rig.view.snapshot(),
            ViewSnapshot::Maze { player: [0, 1], .. }
        ));
    }

    #[test]
    fn wall_bumps_leave_the_player_in_place() {
        let mut rig = Rig::new();
        let _ = rig.tick(SHOW_DELAY_MS);
        for _ in 0..20 {
            rig.key(68); // 'd' into the wall at (1,0)
        }
        assert!(matches!(
            rig.view.snapshot(),
            ViewSnapshot::Maze { player: [0, 0], solved: false, .. }
        ));
    }

    #[test]
    fn keys_after_solving_are_ignored() {
        let mut rig = Rig::new();
        let _ = rig.tick(SHOW_DELAY_MS);
        for code in SOLVING_KEYS {
            rig.key(code);
        }
        rig.key(87);
        assert!(matches!(
            rig.view.snapshot(),
            ViewSnapshot::Maze { player: [4, 4], .. }
        ));
    }
}
