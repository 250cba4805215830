//! Role-tagged ping broadcasts.
//!
//! When an agent returns [`Move::Ping`](crate::Move::Ping), the engine reveals
//! it to the other agents on their next turn as a [`PingResponse`]: one
//! [`PingEntry`] per visible agent, with its offset relative to the receiver.
//! Every entry carries an explicit [`AgentRole`] so a receiver can tell allies
//! from adversaries without inspecting the sender.
//!
//! Receivers usually keep the broadcast across turns. [`PingResponse::translate`]
//! anchors the offsets at the receiver's own position at receipt time and
//! yields a [`PingFix`] in absolute coordinates that stays valid as the
//! receiver moves.
use core::fmt;

use crate::position::Position;

/// Opaque identity the engine assigns to each agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side an agent plays on. Tagged by the engine on every broadcast entry.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AgentRole {
    /// Pursuer-side agent; goodies try to meet each other.
    Goody,
    /// Adversary; goodies keep their distance.
    Baddy,
}

/// One agent as seen in a ping response, relative to the receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PingEntry {
    pub agent: AgentId,
    pub role: AgentRole,
    pub offset: Position,
}

impl PingEntry {
    pub fn new(agent: AgentId, role: AgentRole, offset: Position) -> Self {
        Self {
            agent,
            role,
            offset,
        }
    }
}

/// Ping data delivered to an agent the turn after a broadcast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PingResponse {
    entries: Vec<PingEntry>,
}

impl PingResponse {
    pub fn new(entries: Vec<PingEntry>) -> Self {
        Self { entries }
    }

    /// Appends an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, agent: AgentId, role: AgentRole, offset: Position) -> Self {
        self.entries.push(PingEntry::new(agent, role, offset));
        self
    }

    pub fn entries(&self) -> &[PingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offset of the first entry tagged with `role`.
    pub fn offset_of(&self, role: AgentRole) -> Option<Position> {
        self.entries
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.offset)
    }

    /// Converts every offset to absolute coordinates, anchored at `origin`.
    pub fn translate(&self, origin: Position) -> PingFix {
        PingFix {
            sightings: self
                .entries
                .iter()
                .map(|entry| Sighting {
                    agent: entry.agent,
                    role: entry.role,
                    position: origin + entry.offset,
                })
                .collect(),
        }
    }
}

impl FromIterator<PingEntry> for PingResponse {
    fn from_iter<T: IntoIterator<Item = PingEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An agent's last reported position in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sighting {
    pub agent: AgentId,
    pub role: AgentRole,
    pub position: Position,
}

/// Absorbed ping memory in absolute coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PingFix {
    sightings: Vec<Sighting>,
}

impl PingFix {
    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    /// Position of the first sighting tagged with `role`.
    pub fn locate(&self, role: AgentRole) -> Option<Position> {
        self.sightings
            .iter()
            .find(|sighting| sighting.role == role)
            .map(|sighting| sighting.position)
    }

    pub fn ally(&self) -> Option<Position> {
        self.locate(AgentRole::Goody)
    }

    pub fn adversary(&self) -> Option<Position> {
        self.locate(AgentRole::Baddy)
    }
}
