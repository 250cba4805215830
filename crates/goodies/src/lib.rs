//! Decision strategies for goody agents in a maze pursuit game.
//!
//! Every agent implements [`Goody`]: once per turn the external game loop hands
//! it the [`Obstruction`](maze_core::Obstruction) map for its tile and, on the
//! turn after somebody pinged, a [`PingResponse`](maze_core::PingResponse).
//! The agent answers with a single [`Move`](maze_core::Move).
//!
//! # Agents
//!
//! - [`StaticGoody`]: never moves
//! - [`RandomGoody`]: uniform random walk over open exits, occasionally pings
//! - [`MattGoody`]: tracks the last pinged ally, evades a nearby baddy,
//!   remembers recent tiles and dead ends
//!
//! Agents own all of their state; the game loop creates one per episode,
//! calls [`Goody::take_turn`] once per turn and drops it at the end.

pub mod agents;
pub mod error;
pub mod goody;

#[cfg(test)]
pub(crate) mod testing;

pub use agents::matt::{MattConfig, MattGoody, MattPhase, VisitMemory};
pub use agents::random::RandomGoody;
pub use agents::static_goody::StaticGoody;
pub use error::{GoodyError, Result};
pub use goody::{Goody, GoodyKind};
