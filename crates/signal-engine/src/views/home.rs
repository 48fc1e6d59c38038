use crate::api::types::{
    GameEvent, ViewId, CONTROL_BEACON, CONTROL_TRANSMISSION, EVENT_MILESTONE,
};
use crate::api::view::{StageContext, View};
use crate::content::script::Script;
use crate::input::queue::InputEvent;
use crate::views::ViewSnapshot;

/// Glitch styling kicks in past this many interactions.
const GLITCH_THRESHOLD: u32 = 15;
/// The beacon to the log terminal appears past this many interactions.
const BEACON_THRESHOLD: u32 = 7;
/// Interaction counts that get a console nod.
const MILESTONES: [u32; 4] = [1, 50, 100, 333];

/// The landing screen: a title that degrades into transmissions as the
/// visitor keeps poking it, until the beacon out appears.
pub struct HomeView {
    script: Script,
    transmission: Option<String>,
    interactions: u32,
}

impl HomeView {
    pub fn new(script: &Script) -> Self {
        Self {
            script: script.clone(),
            transmission: None,
            interactions: 0,
        }
    }

    fn refresh(&mut self) {
        self.transmission = self
            .script
            .transmission(self.interactions)
            .map(str::to_string);
    }
}

impl View for HomeView {
    fn id(&self) -> ViewId {
        ViewId::Home
    }

    fn enter(&mut self, ctx: &mut StageContext) {
        self.interactions = ctx.session.interactions();
        self.refresh();
    }

    fn tick(&mut self, _dt_ms: f32, _ctx: &mut StageContext) {}

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        match *control {
            CONTROL_TRANSMISSION => {
                self.interactions = ctx.session.record_interaction();
                self.refresh();
                if MILESTONES.contains(&self.interactions) {
                    ctx.emit(GameEvent::new(EVENT_MILESTONE, self.interactions as f32));
                }
            }
            CONTROL_BEACON if self.interactions > BEACON_THRESHOLD => {
                ctx.advance(ViewId::Logs);
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Home {
            title: self.script.title.clone(),
            transmission: self.transmission.clone(),
            glitch: self.interactions > GLITCH_THRESHOLD,
            beacon: self.interactions > BEACON_THRESHOLD,
            interactions: self.interactions,
        }
    }
}
