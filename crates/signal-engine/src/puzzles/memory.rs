use crate::api::types::Outcome;
use crate::core::rng::Rng;

pub const GRID_SIZE: u32 = 9;
pub const MAX_ROUNDS: u32 = 3;

/// Pattern length for a 1-based round number.
pub fn pattern_len(round: u32) -> usize {
    (round + 2) as usize
}

/// Generate a fresh pattern of cell indices for a round. Cells may repeat.
pub fn generate_pattern(round: u32, rng: &mut Rng) -> Vec<u8> {
    (0..pattern_len(round))
        .map(|_| rng.next_int(GRID_SIZE) as u8)
        .collect()
}

/// Judge the clicks made so far against the pattern. Every click must match
/// the pattern cell at its position; the first deviation aborts the round.
pub fn check_clicks(pattern: &[u8], clicks: &[u8]) -> Outcome {
    if clicks
        .iter()
        .zip(pattern.iter())
        .any(|(click, cell)| click != cell)
    {
        return Outcome::Failure;
    }
    if clicks.len() >= pattern.len() {
        Outcome::Success
    } else {
        Outcome::Incomplete
    }
}
