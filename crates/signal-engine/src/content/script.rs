use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Narrative script: every piece of display text the screens stage.
/// A builtin script ships with the crate; the bridge may swap in a
/// replacement parsed from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// Home-screen title shown before the first interaction.
    pub title: String,
    /// Terminal log lines, revealed one by one.
    pub system_logs: Vec<String>,
    pub cipher: CipherText,
    pub archive_documents: Vec<Document>,
    pub testimonies: Vec<Testimony>,
    pub revelation_phases: Vec<Phase>,
    /// Cyclic transmission texts for the home counter.
    pub transmissions: Vec<String>,
    /// Fixed overrides at specific interaction counts.
    #[serde(default)]
    pub special_transmissions: HashMap<u32, String>,
    /// The portal's scrambled phrase, revealed character by character.
    pub scrambled_phrase: String,
    /// Messages the final screen's orb can whisper.
    #[serde(default)]
    pub whispers: Vec<String>,
    /// Static binary watermark on the final screen.
    #[serde(default)]
    pub binary_watermark: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherText {
    pub encrypted: String,
    pub decrypted: String,
}

/// One classified document in the archive browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub date: String,
    pub lines: Vec<String>,
}

/// One whistleblower testimony.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimony {
    pub name: String,
    pub role: String,
    pub date: String,
    pub text: String,
}

/// One phase of the revelation sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub title: String,
    pub lines: Vec<String>,
}

impl Script {
    /// Parse a script from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The script bundled with the crate.
    pub fn builtin() -> Self {
        super::builtin::builtin_script()
    }

    /// Transmission text for an interaction count, or None at zero (the
    /// title shows instead). Special overrides win; otherwise the cyclic
    /// list wraps at `(count - 1) mod len`.
    pub fn transmission(&self, count: u32) -> Option<&str> {
        if count == 0 {
            return None;
        }
        if let Some(special) = self.special_transmissions.get(&count) {
            return Some(special);
        }
        if self.transmissions.is_empty() {
            return None;
        }
        let index = ((count - 1) as usize) % self.transmissions.len();
        Some(&self.transmissions[index])
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::builtin()
    }
}
