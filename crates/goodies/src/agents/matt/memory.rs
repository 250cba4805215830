//! Where the tracker has been.
use std::collections::BTreeSet;

use arrayvec::ArrayVec;
use maze_core::{MazeConfig, Position};

type History = ArrayVec<Position, { MazeConfig::HISTORY_CAPACITY }>;

/// Recently occupied tiles plus every dead end seen this episode.
///
/// History is bounded: once full, recording a tile evicts the oldest one.
/// Dead ends are never forgotten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitMemory {
    history: History,
    dead_ends: BTreeSet<Position>,
}

impl VisitMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tile the agent is about to leave.
    pub fn record_visit(&mut self, position: Position) {
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(position);
    }

    /// Returns true if the dead end was not already known.
    pub fn record_dead_end(&mut self, position: Position) -> bool {
        self.dead_ends.insert(position)
    }

    pub fn visited_recently(&self, position: Position) -> bool {
        self.history.contains(&position)
    }

    pub fn is_dead_end(&self, position: Position) -> bool {
        self.dead_ends.contains(&position)
    }

    /// Tiles the tracker steers away from.
    pub fn should_avoid(&self, position: Position) -> bool {
        self.visited_recently(position) || self.is_dead_end(position)
    }

    /// Oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn dead_ends(&self) -> &BTreeSet<Position> {
        &self.dead_ends
    }
}
