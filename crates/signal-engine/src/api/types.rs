use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// The thirteen screens of the experience, in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Home,
    Logs,
    Cipher,
    Frequency,
    Memory,
    Binary,
    Archives,
    Math,
    Testimonials,
    Maze,
    Portal,
    Revelation,
    Final,
}

impl ViewId {
    pub const ALL: [ViewId; 13] = [
        ViewId::Home,
        ViewId::Logs,
        ViewId::Cipher,
        ViewId::Frequency,
        ViewId::Memory,
        ViewId::Binary,
        ViewId::Archives,
        ViewId::Math,
        ViewId::Testimonials,
        ViewId::Maze,
        ViewId::Portal,
        ViewId::Revelation,
        ViewId::Final,
    ];

    /// The one legal next view, or None for the terminal screen.
    pub fn next(self) -> Option<ViewId> {
        match self {
            ViewId::Home => Some(ViewId::Logs),
            ViewId::Logs => Some(ViewId::Cipher),
            ViewId::Cipher => Some(ViewId::Frequency),
            ViewId::Frequency => Some(ViewId::Memory),
            ViewId::Memory => Some(ViewId::Binary),
            ViewId::Binary => Some(ViewId::Archives),
            ViewId::Archives => Some(ViewId::Math),
            ViewId::Math => Some(ViewId::Testimonials),
            ViewId::Testimonials => Some(ViewId::Maze),
            ViewId::Maze => Some(ViewId::Portal),
            ViewId::Portal => Some(ViewId::Revelation),
            ViewId::Revelation => Some(ViewId::Final),
            ViewId::Final => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Position in the progression, for event payloads.
    pub fn index(self) -> u32 {
        Self::ALL.iter().position(|&v| v == self).unwrap_or(0) as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Logs => "logs",
            ViewId::Cipher => "cipher",
            ViewId::Frequency => "frequency",
            ViewId::Memory => "memory",
            ViewId::Binary => "binary",
            ViewId::Archives => "archives",
            ViewId::Math => "math",
            ViewId::Testimonials => "testimonials",
            ViewId::Maze => "maze",
            ViewId::Portal => "portal",
            ViewId::Revelation => "revelation",
            ViewId::Final => "final",
        }
    }
}

/// Validation outcome of a puzzle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not enough input yet to judge.
    Incomplete,
    /// The success condition fired; the view may signal its transition.
    Success,
    /// A recognized miss; the view applies its local reset policy.
    Failure,
}

/// A game event communicated from Rust to the page via a flat float buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32) -> Self {
        Self {
            kind,
            a,
            b: 0.0,
            c: 0.0,
        }
    }
}

// Game event kinds (Rust → page)

/// The active view changed; `a` is the new view's progression index.
pub const EVENT_TRANSITION: f32 = 1.0;
/// A puzzle miss reset transient input; `a` is the view index. The page
/// clears its text field / plays its shake.
pub const EVENT_RESET: f32 = 2.0;
/// The final screen asked for a restart; the page reloads itself.
pub const EVENT_RESTART: f32 = 3.0;
/// An interaction-count milestone; `a` is the count. Cosmetic console output.
pub const EVENT_MILESTONE: f32 = 4.0;
/// The final screen's orb whispered; `a` indexes the script's whisper list.
pub const EVENT_WHISPER: f32 = 5.0;

// Control codes (page → Rust)

/// The home title / transmission text.
pub const CONTROL_TRANSMISSION: u32 = 1;
/// The hidden beacon that leaves the home screen.
pub const CONTROL_BEACON: u32 = 2;
pub const CONTROL_PREV: u32 = 3;
pub const CONTROL_NEXT: u32 = 4;
/// The revelation screen's confirm control.
pub const CONTROL_CONFIRM: u32 = 5;
pub const CONTROL_RESTART: u32 = 6;
/// The final screen's whisper orb.
pub const CONTROL_ORB: u32 = 7;
/// Dial digits: `CONTROL_DIGIT_BASE + d` for digit `d` in 0..=9.
pub const CONTROL_DIGIT_BASE: u32 = 10;
/// Memory cells: `CONTROL_CELL_BASE + c` for cell `c` in 0..=8.
pub const CONTROL_CELL_BASE: u32 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_is_a_single_chain() {
        // Home is the unique initial state, Final the unique terminal one.
        let mut current = ViewId::Home;
        let mut visited = vec![current];
        while let Some(next) = current.next() {
            assert!(!visited.contains(&next), "cycle at {:?}", next);
            visited.push(next);
            current = next;
        }
        assert_eq!(current, ViewId::Final);
        assert_eq!(visited, ViewId::ALL.to_vec());
    }

    #[test]
    fn only_final_is_terminal() {
        for view in ViewId::ALL {
            assert_eq!(view.is_terminal(), view == ViewId::Final);
        }
    }

    #[test]
    fn index_matches_progression_order() {
        assert_eq!(ViewId::Home.index(), 0);
        assert_eq!(ViewId::Final.index(), 12);
    }
}
