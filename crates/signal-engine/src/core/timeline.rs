// core/timeline.rs
//
// Reveal timeline — schedules staged content cues for the active view.
//
// Usage:
//   let mut timeline = Timeline::new();
//   timeline.cue_series(lines, 400.0, 200.0, CUE_LINE, &mut rng);
//   for fired in timeline.tick(dt_ms) { /* reveal fired.index */ }
//
// Each view owns exactly one timeline. Clearing or dropping it cancels every
// pending cue, so a cue can never fire against a torn-down view.

use std::cmp::Ordering;

use crate::core::rng::Rng;

/// Handle to a pending cue for later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CueId(pub u32);

/// A cue that became due on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    /// View-defined cue kind.
    pub kind: u32,
    /// Position within a series; 0 for single cues.
    pub index: u32,
}

#[derive(Debug, Clone)]
struct Cue {
    id: u32,
    kind: u32,
    index: u32,
    remaining_ms: f32,
}

/// Pending cues for one view, advanced by fixed logic steps.
#[derive(Debug, Default)]
pub struct Timeline {
    cues: Vec<Cue>,
    next_id: u32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a single cue `delay_ms` from now.
    pub fn cue_in(&mut self, delay_ms: f32, kind: u32) -> CueId {
        self.cue_at_index(delay_ms, kind, 0)
    }

    /// Arm a single cue carrying a series index.
    pub fn cue_at_index(&mut self, delay_ms: f32, kind: u32, index: u32) -> CueId {
        let id = self.next_id;
        self.next_id += 1;
        self.cues.push(Cue {
            id,
            kind,
            index,
            remaining_ms: delay_ms.max(0.0),
        });
        CueId(id)
    }

    /// Arm a uniform stagger: cue `i` fires at `i * step_ms` plus a random
    /// jitter in [0, jitter_ms). Returns the handles in series order.
    pub fn cue_series(
        &mut self,
        count: u32,
        step_ms: f32,
        jitter_ms: f32,
        kind: u32,
        rng: &mut Rng,
    ) -> Vec<CueId> {
        (0..count)
            .map(|i| {
                let delay = i as f32 * step_ms + rng.next_f32(jitter_ms);
                self.cue_at_index(delay, kind, i)
            })
            .collect()
    }

    /// Cancel one pending cue. Returns whether it was still pending.
    pub fn cancel(&mut self, id: CueId) -> bool {
        let before = self.cues.len();
        self.cues.retain(|c| c.id != id.0);
        self.cues.len() != before
    }

    /// Cancel every pending cue.
    pub fn clear(&mut self) {
        self.cues.clear();
    }

    /// Number of cues still pending.
    pub fn pending(&self) -> usize {
        self.cues.len()
    }

    /// Advance time and collect the cues that became due, in deadline order
    /// (ties broken by arming order).
    pub fn tick(&mut self, dt_ms: f32) -> Vec<Fired> {
        if self.cues.is_empty() {
            return Vec::new();
        }
        for cue in &mut self.cues {
            cue.remaining_ms -= dt_ms;
        }
        let mut due = Vec::new();
        let mut keep = Vec::new();
        for cue in self.cues.drain(..) {
            if cue.remaining_ms <= 0.0 {
                due.push(cue);
            } else {
                keep.push(cue);
            }
        }
        self.cues = keep;
        // Most-overdue first = earliest deadline first.
        due.sort_by(|a, b| {
            a.remaining_ms
                .partial_cmp(&b.remaining_ms)
                .unwrap_or(Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        due.into_iter()
            .map(|c| Fired {
                kind: c.kind,
                index: c.index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cue_fires_once() {
        let mut tl = Timeline::new();
        tl.cue_in(100.0, 7);
        assert!(tl.tick(50.0).is_empty());
        let fired = tl.tick(60.0);
        assert_eq!(fired, vec![Fired { kind: 7, index: 0 }]);
        assert!(tl.tick(1000.0).is_empty());
        assert_eq!(tl.pending(), 0);
    }

    #[test]
    fn series_fires_in_order() {
        let mut tl = Timeline::new();
        let mut rng = Rng::new(1);
        tl.cue_series(4, 100.0, 0.0, 1, &mut rng);
        // Jump past every deadline in one step: still delivered in order.
        let fired = tl.tick(1000.0);
        let indices: Vec<u32> = fired.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn jitter_keeps_step_ordering_when_smaller_than_step() {
        // jitter < step means nominal order is preserved.
        let mut tl = Timeline::new();
        let mut rng = Rng::new(99);
        tl.cue_series(10, 400.0, 200.0, 1, &mut rng);
        let mut seen = Vec::new();
        for _ in 0..500 {
            for fired in tl.tick(10.0) {
                seen.push(fired.index);
            }
        }
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        assert_eq!(seen, sorted);
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn clear_cancels_everything() {
        let mut tl = Timeline::new();
        let mut rng = Rng::new(1);
        tl.cue_series(8, 10.0, 0.0, 1, &mut rng);
        tl.cue_in(5.0, 2);
        tl.clear();
        assert!(tl.tick(10_000.0).is_empty());
    }

    #[test]
    fn cancel_single_cue() {
        let mut tl = Timeline::new();
        let keep = tl.cue_in(10.0, 1);
        let drop = tl.cue_in(10.0, 2);
        assert!(tl.cancel(drop));
        assert!(!tl.cancel(drop));
        let fired = tl.tick(20.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, 1);
        let _ = keep;
    }

    #[test]
    fn ties_break_by_arming_order() {
        let mut tl = Timeline::new();
        tl.cue_in(50.0, 1);
        tl.cue_in(50.0, 2);
        tl.cue_in(50.0, 3);
        let kinds: Vec<u32> = tl.tick(50.0).iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![1, 2, 3]);
    }
}
