pub mod archives;
pub mod binary;
pub mod cipher;
pub mod finale;
pub mod frequency;
pub mod home;
pub mod logs;
pub mod math;
pub mod maze;
pub mod memory;
pub mod portal;
pub mod revelation;
pub mod testimonials;

use serde::Serialize;

use crate::puzzles::drake::DrakeTerm;

/// What the page should currently show for the active view.
/// Serialized to JSON once per frame; the page renders it however it likes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewSnapshot {
    Home {
        title: String,
        /// None before the first interaction: the title shows instead.
        transmission: Option<String>,
        glitch: bool,
        beacon: bool,
        interactions: u32,
    },
    Logs {
        /// Revealed lines, in firing order.
        lines: Vec<String>,
        input_armed: bool,
    },
    Cipher {
        encrypted: String,
        decrypted: Option<String>,
        input_armed: bool,
    },
    Frequency {
        armed: bool,
        entered: Vec<u8>,
        slots: usize,
        /// A mismatch is waiting out its clear delay.
        locked: bool,
    },
    Memory {
        round: u32,
        max_rounds: u32,
        pattern: Vec<u8>,
        pattern_visible: bool,
        /// Cells accept clicks.
        active: bool,
        clicked: Vec<u8>,
    },
    Binary {
        hint: Option<String>,
        expected_bits: usize,
    },
    Archives {
        index: usize,
        count: usize,
        title: String,
        date: String,
        lines: Vec<String>,
        /// How many lines of the current document have printed.
        revealed: usize,
        nav_armed: bool,
    },
    Math {
        terms: Vec<DrakeTerm>,
        hint: Option<String>,
    },
    Testimonials {
        index: usize,
        count: usize,
        name: String,
        role: String,
        date: String,
        text: String,
        nav_armed: bool,
    },
    Maze {
        visible: bool,
        layout: [[u8; 5]; 5],
        player: [i32; 2],
        solved: bool,
    },
    Portal {
        /// Revealed prefix of the scrambled phrase.
        phrase: String,
        input_armed: bool,
    },
    Revelation {
        phase: usize,
        phase_count: usize,
        title: String,
        lines: Vec<String>,
        confirm_armed: bool,
    },
    Final {
        message_armed: bool,
        hidden_armed: bool,
        watermark: String,
    },
}
