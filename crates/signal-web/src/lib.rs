pub mod runner;

pub use runner::Runner;

use std::cell::RefCell;

use signal_engine::{InputEvent, Script};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<Runner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    let runner = Runner::new(Script::builtin(), seed);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("signal47: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt_ms: f32) {
    with_runner(|r| r.tick(dt_ms));
}

#[wasm_bindgen]
pub fn game_press(control: u32) {
    with_runner(|r| r.push_input(InputEvent::Press { control }));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_submit(text: &str) {
    with_runner(|r| {
        r.push_input(InputEvent::Submit {
            text: text.to_string(),
        })
    });
}

#[wasm_bindgen]
pub fn game_load_script(json: &str) {
    with_runner(|r| r.load_script(json));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_game_event_floats() -> u32 {
    with_runner(|r| r.event_floats())
}
