//! Coordinate model shared by maze agents and the engine that drives them.
//!
//! `maze-core` defines the per-turn vocabulary exchanged between the external
//! maze engine and an agent: grid [`Position`]s, the [`Move`] an agent returns,
//! the [`Obstruction`] map it receives, and the role-tagged [`PingResponse`]
//! delivered the turn after somebody pings. Randomness is injected through
//! [`RngSource`] so decisions stay reproducible under a fixed seed.
pub mod config;
pub mod error;
pub mod movement;
pub mod obstruction;
pub mod ping;
pub mod position;
pub mod rng;

pub use config::MazeConfig;
pub use error::{ErrorSeverity, MazeError};
pub use movement::{Direction, Move, NotDirectional};
pub use obstruction::{Obstruction, OpenDirections};
pub use ping::{AgentId, AgentRole, PingEntry, PingFix, PingResponse, Sighting};
pub use position::Position;
pub use rng::{PcgRng, RngSource, choose, derive_seed};
