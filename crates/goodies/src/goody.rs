//! The per-turn contract between the game loop and a goody.
use maze_core::{Move, Obstruction, PcgRng, PingResponse};

use crate::agents::{MattGoody, RandomGoody, StaticGoody};
use crate::error::Result;

/// A goody decides one move per turn.
///
/// Different implementations can handle:
/// - Fixed placement (targets, decoys)
/// - Random walkers (baselines)
/// - Heuristic trackers that use ping data
pub trait Goody: Send {
    /// Which strategy this agent runs.
    fn kind(&self) -> GoodyKind;

    /// Decide this turn's move.
    ///
    /// # Arguments
    /// * `obstruction` - Directions blocked from the agent's current tile
    /// * `ping` - Ping data, present only on the turn after a broadcast
    ///
    /// # Returns
    /// The move to hand to the engine, or an error if the inputs break the
    /// agent contract
    fn take_turn(&mut self, obstruction: Obstruction, ping: Option<&PingResponse>) -> Result<Move>;
}

impl<G: Goody + ?Sized> Goody for Box<G> {
    fn kind(&self) -> GoodyKind {
        (**self).kind()
    }

    #[inline]
    fn take_turn(&mut self, obstruction: Obstruction, ping: Option<&PingResponse>) -> Result<Move> {
        (**self).take_turn(obstruction, ping)
    }
}

/// Available strategies, parseable from configuration text.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GoodyKind {
    Static,
    Random,
    Matt,
}

impl GoodyKind {
    /// Instantiates a fresh agent of this kind for a new episode.
    ///
    /// `seed` feeds the agent's own [`PcgRng`]; agents that never draw ignore it.
    pub fn build(self, seed: u64) -> Box<dyn Goody> {
        match self {
            GoodyKind::Static => Box::new(StaticGoody),
            GoodyKind::Random => Box::new(RandomGoody::new(PcgRng::seeded(seed))),
            GoodyKind::Matt => Box::new(MattGoody::new(PcgRng::seeded(seed))),
        }
    }
}
