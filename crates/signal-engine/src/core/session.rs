use crate::api::types::ViewId;

/// The one long-lived entity of a page load: which screen is active and how
/// many times the home screen has been poked.
///
/// Owned by the director and mutated only through `transition` and
/// `record_interaction`. A page reload destroys it.
#[derive(Debug, Clone)]
pub struct Session {
    current: ViewId,
    interactions: u32,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current: ViewId::Home,
            interactions: 0,
        }
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn interactions(&self) -> u32 {
        self.interactions
    }

    /// Move unconditionally to `to`. The system trusts each view to signal
    /// only its one legal next state; debug builds assert the edge is legal,
    /// release builds do not check.
    pub fn transition(&mut self, to: ViewId) {
        debug_assert!(
            self.current.next() == Some(to),
            "illegal transition {} -> {}",
            self.current.name(),
            to.name()
        );
        self.current = to;
    }

    /// Count one home-screen interaction. Returns the new count.
    pub fn record_interaction(&mut self) -> u32 {
        self.interactions += 1;
        self.interactions
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
