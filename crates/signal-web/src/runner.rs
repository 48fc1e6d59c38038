use signal_engine::{
    Director, GameEvent, InputEvent, InputQueue, Script, StepClock, EVENT_MILESTONE,
};
use wasm_bindgen::JsValue;

/// Wires the puzzle core to the browser frame loop.
///
/// The page pushes DOM events in, calls `tick` from requestAnimationFrame,
/// and reads the view snapshot plus the flat event buffer back out.
pub struct Runner {
    director: Director,
    input: InputQueue,
    clock: StepClock,
    seed: u64,
}

impl Runner {
    pub fn new(script: Script, seed: u64) -> Self {
        Self {
            director: Director::new(script, seed),
            input: InputQueue::new(),
            clock: StepClock::default(),
            seed,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Replace the narrative script and restart the experience. A parse
    /// failure keeps the current script.
    pub fn load_script(&mut self, json: &str) {
        match Script::from_json(json) {
            Ok(script) => {
                self.director = Director::new(script, self.seed);
                self.clock = StepClock::default();
            }
            Err(err) => log::warn!("script rejected, keeping current one: {}", err),
        }
    }

    /// Run one frame: clear last frame's events, step the logic, and print
    /// any console milestones the home screen produced.
    pub fn tick(&mut self, dt_ms: f32) {
        self.director.clear_events();
        let steps = self.clock.accumulate(dt_ms);
        for _ in 0..steps {
            self.director.update(self.clock.step_ms(), &mut self.input);
        }
        for event in self.director.events() {
            if event.kind == EVENT_MILESTONE {
                milestone_console(event.a as u32);
            }
        }
    }

    /// The active view's snapshot as JSON for the page renderer.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.director.snapshot()).unwrap_or_else(|err| {
            log::error!("snapshot serialization failed: {}", err);
            String::from("{}")
        })
    }

    // ---- Event buffer accessors for flat reads from JS ----

    pub fn events_ptr(&self) -> *const f32 {
        self.director.events().as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.director.events().len() as u32
    }

    pub fn event_floats(&self) -> u32 {
        GameEvent::FLOATS as u32
    }
}

/// Styled console nods at interaction-count milestones.
fn milestone_console(count: u32) {
    let (message, style) = match count {
        1 => (
            "%cYou found a loose thread. Keep pulling.",
            "color: #999; font-style: italic;",
        ),
        50 => (
            "%cHalf a century of clicks. The dedication is noted.",
            "color: #0f0; font-family: monospace;",
        ),
        100 => (
            "%cOne hundred. Persistence is a sign of awakening consciousness.",
            "color: #a06ee8; font-family: monospace;",
        ),
        333 => (
            "%c333 - The sacred number. You are being guided.",
            "color: #d4af37; font-family: monospace;",
        ),
        _ => return,
    };
    web_sys::console::log_2(&JsValue::from_str(message), &JsValue::from_str(style));
}
