use arrayvec::ArrayVec;
use maze_core::{MazeConfig, Move, Obstruction, PcgRng, PingResponse, RngSource, choose};

use crate::error::Result;
use crate::goody::{Goody, GoodyKind};

/// Random walker: picks uniformly among the open exits and PING.
///
/// Ignores ping data entirely. Holds no state beyond its random source.
#[derive(Debug, Clone)]
pub struct RandomGoody<R = PcgRng> {
    rng: R,
}

impl<R: RngSource> RandomGoody<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngSource> Goody for RandomGoody<R> {
    fn kind(&self) -> GoodyKind {
        GoodyKind::Random
    }

    fn take_turn(&mut self, obstruction: Obstruction, _ping: Option<&PingResponse>) -> Result<Move> {
        let mut options: ArrayVec<Move, { MazeConfig::MAX_CANDIDATES }> = obstruction
            .open_directions()
            .into_iter()
            .map(Move::from)
            .collect();
        options.push(Move::Ping);

        // PING is always on offer, so the list is never empty.
        let choice = choose(&mut self.rng, &options)
            .copied()
            .unwrap_or(Move::Ping);
        tracing::trace!(?choice, options = options.len(), "random goody move");
        Ok(choice)
    }
}
