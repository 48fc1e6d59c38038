/// Input event types the engine understands.
/// Generic page-surface data — no view-specific semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A press on an interactive control, identified by control code.
    Press { control: u32 },
    /// A key was pressed (DOM key code).
    KeyDown { key_code: u32 },
    /// A text field was submitted with its current value.
    Submit { text: String },
}

/// A queue of input events.
/// The page writes events into the queue; the engine reads and drains them
/// each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the page via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
