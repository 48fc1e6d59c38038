use glam::IVec2;

use crate::api::types::Outcome;

pub const SIZE: i32 = 5;

/// The navigation grid: 0 = wall, 1 = path, 2 = exit. Row-major, entry at
/// the top-left corner, exit at the bottom-right.
pub const LAYOUT: [[u8; 5]; 5] = [
    [1, 0, 1, 1, 1],
    [1, 0, 1, 0, 1],
    [1, 1, 1, 0, 1],
    [0, 0, 1, 1, 1],
    [1, 1, 1, 0, 2],
];

/// One directional step, from w/a/s/d or the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Map a DOM key code to a step.
    pub fn from_key_code(code: u32) -> Option<Step> {
        match code {
            87 | 38 => Some(Step::Up),    // W, ArrowUp
            83 | 40 => Some(Step::Down),  // S, ArrowDown
            65 | 37 => Some(Step::Left),  // A, ArrowLeft
            68 | 39 => Some(Step::Right), // D, ArrowRight
            _ => None,
        }
    }

    fn delta(self) -> IVec2 {
        match self {
            Step::Up => IVec2::new(0, -1),
            Step::Down => IVec2::new(0, 1),
            Step::Left => IVec2::new(-1, 0),
            Step::Right => IVec2::new(1, 0),
        }
    }
}

/// Player position on the fixed grid.
#[derive(Debug, Clone)]
pub struct Maze {
    pos: IVec2,
}

impl Maze {
    pub fn new() -> Self {
        Self { pos: IVec2::ZERO }
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    fn cell(pos: IVec2) -> u8 {
        LAYOUT[pos.y as usize][pos.x as usize]
    }

    /// Attempt a step. Moves are clamped to the grid; wall cells reject the
    /// move entirely, and entering the exit cell succeeds.
    pub fn step(&mut self, step: Step) -> Outcome {
        let target = (self.pos + step.delta()).clamp(IVec2::ZERO, IVec2::splat(SIZE - 1));
        if Self::cell(target) == 0 {
            return Outcome::Incomplete;
        }
        self.pos = target;
        if Self::cell(target) == 2 {
            Outcome::Success
        } else {
            Outcome::Incomplete
        }
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_reject_moves() {
        let mut maze = Maze::new();
        // (1,0) is a wall: position stays at the entry.
        assert_eq!(maze.step(Step::Right), Outcome::Incomplete);
        assert_eq!(maze.pos(), IVec2::ZERO);
    }

    #[test]
    fn edges_clamp_without_moving() {
        let mut maze = Maze::new();
        assert_eq!(maze.step(Step::Up), Outcome::Incomplete);
        assert_eq!(maze.step(Step::Left), Outcome::Incomplete);
        assert_eq!(maze.pos(), IVec2::ZERO);
    }

    #[test]
    fn known_path_reaches_the_exit() {
        let mut maze = Maze::new();
        let path = [
            Step::Down,
            Step::Down,
            Step::Right,
            Step::Right,
            Step::Down,
            Step::Right,
            Step::Right,
        ];
        for step in path {
            assert_eq!(maze.step(step), Outcome::Incomplete);
        }
        assert_eq!(maze.step(Step::Down), Outcome::Success);
        assert_eq!(maze.pos(), IVec2::new(4, 4));
    }

    #[test]
    fn wall_bumping_never_succeeds() {
        let mut maze = Maze::new();
        for _ in 0..50 {
            assert_eq!(maze.step(Step::Right), Outcome::Incomplete);
        }
        assert_eq!(maze.pos(), IVec2::ZERO);
    }

    #[test]
    fn key_codes_map_to_steps() {
        assert_eq!(Step::from_key_code(87), Some(Step::Up));
        assert_eq!(Step::from_key_code(38), Some(Step::Up));
        assert_eq!(Step::from_key_code(65), Some(Step::Left));
        assert_eq!(Step::from_key_code(39), Some(Step::Right));
        assert_eq!(Step::from_key_code(13), None);
    }
}
