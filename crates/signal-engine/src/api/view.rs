use crate::api::types::{GameEvent, ViewId};
use crate::core::rng::Rng;
use crate::core::session::Session;
use crate::input::queue::InputEvent;
use crate::views::ViewSnapshot;

/// Mutable engine state a view may touch while mounted.
/// The session is only ever reached through here, so views cannot hold on to
/// it across frames.
pub struct StageContext<'a> {
    pub session: &'a mut Session,
    pub rng: &'a mut Rng,
    pub events: &'a mut Vec<GameEvent>,
    advance_to: Option<ViewId>,
}

impl<'a> StageContext<'a> {
    pub fn new(
        session: &'a mut Session,
        rng: &'a mut Rng,
        events: &'a mut Vec<GameEvent>,
    ) -> Self {
        Self {
            session,
            rng,
            events,
            advance_to: None,
        }
    }

    /// Signal that this view's success condition fired. Each view only ever
    /// names its one legal next state.
    pub fn advance(&mut self, to: ViewId) {
        self.advance_to = Some(to);
    }

    /// Take the pending transition, if any. Called by the director after
    /// dispatch.
    pub fn take_advance(&mut self) -> Option<ViewId> {
        self.advance_to.take()
    }

    /// Emit an event to be forwarded to the page.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// The contract every screen fulfills.
pub trait View {
    fn id(&self) -> ViewId;

    /// Arm reveal cues. Called once when the view mounts.
    fn enter(&mut self, ctx: &mut StageContext);

    /// Advance this view's timeline by one logic step.
    fn tick(&mut self, dt_ms: f32, ctx: &mut StageContext);

    /// Interpret one input event.
    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext);

    /// What the page should currently show.
    fn snapshot(&self) -> ViewSnapshot;
}
