//! Ping-driven pursuit/evasion tracker.
//!
//! Matt keeps an estimate of its own absolute position (relative to where it
//! started) and the last ping fix of the other agents. Each turn it walks this
//! pipeline and stops at the first step that produces a move:
//!
//! 1. **Re-ping**: no fix yet and none delivered, or the fix is stale
//! 2. **Absorb**: translate a delivered ping into absolute coordinates
//! 3. **Evade**: a baddy within the evasion radius; maximize distance from it
//! 4. **Arrival**: standing on the ally's last fix; ping again
//! 5. **Pursue**: minimize distance to the ally's last fix, swapping in a
//!    random exit when the greedy step leads to a recent tile or dead end
//!
//! Candidates are always scanned in [`Direction::ALL`] order (then STAY when
//! evading) and the first optimal one wins.
//!
//! Position bookkeeping trusts the moves Matt hands out, not the engine: if
//! the engine refuses a move, the estimate drifts until the next ping.
mod config;
mod memory;

use std::cmp::Reverse;
use std::collections::BTreeSet;

use arrayvec::ArrayVec;
use maze_core::{
    AgentRole, Direction, MazeConfig, Move, Obstruction, PcgRng, PingFix, PingResponse, Position,
    RngSource, choose,
};
use tracing::{debug, trace, warn};

pub use config::MattConfig;
pub use memory::VisitMemory;

use crate::error::{GoodyError, Result};
use crate::goody::{Goody, GoodyKind};

type Candidates = ArrayVec<Move, { MazeConfig::MAX_CANDIDATES }>;

/// Effective state of the tracker between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MattPhase {
    /// No ping has ever been absorbed; every turn is a PING until one arrives.
    AwaitingFirstPing,
    /// Chasing (or evading) based on the current fix.
    Tracking,
    /// The fix is stale, or already reached with no baddy in range; the next
    /// decision is a PING.
    Repinging,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PingReason {
    FirstContact,
    Stale,
    ReachedFix,
}

/// Targets resolved from the current fix.
#[derive(Clone, Copy, Debug)]
struct Targets {
    ally: Position,
    adversary: Option<Position>,
}

/// The Matt tracker. See the [module docs](self) for the decision pipeline.
#[derive(Debug, Clone)]
pub struct MattGoody<R = PcgRng> {
    config: MattConfig,
    rng: R,
    position: Position,
    memory: VisitMemory,
    ping: Option<PingFix>,
    ping_age: u32,
}

impl<R: RngSource> MattGoody<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(MattConfig::default(), rng)
    }

    pub fn with_config(config: MattConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            position: Position::ORIGIN,
            memory: VisitMemory::new(),
            ping: None,
            ping_age: 0,
        }
    }

    pub fn config(&self) -> &MattConfig {
        &self.config
    }

    /// Own position estimate, relative to the starting tile.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves made since the last absorbed ping.
    pub fn ping_age(&self) -> u32 {
        self.ping_age
    }

    pub fn ping_fix(&self) -> Option<&PingFix> {
        self.ping.as_ref()
    }

    pub fn ally_target(&self) -> Option<Position> {
        self.ping.as_ref().and_then(PingFix::ally)
    }

    pub fn adversary_target(&self) -> Option<Position> {
        self.ping.as_ref().and_then(PingFix::adversary)
    }

    /// Recently left tiles, oldest first.
    pub fn history(&self) -> &[Position] {
        self.memory.history()
    }

    pub fn dead_ends(&self) -> &BTreeSet<Position> {
        self.memory.dead_ends()
    }

    /// What the next turn will do, assuming no new ping is delivered.
    pub fn phase(&self) -> MattPhase {
        match &self.ping {
            None => MattPhase::AwaitingFirstPing,
            Some(_) if self.is_stale() => MattPhase::Repinging,
            Some(fix) if self.threat_near(fix.adversary()).is_some() => MattPhase::Tracking,
            Some(fix) if fix.ally() == Some(self.position) => MattPhase::Repinging,
            Some(_) => MattPhase::Tracking,
        }
    }

    fn is_stale(&self) -> bool {
        self.config
            .ping_staleness
            .is_some_and(|limit| self.ping_age > limit)
    }

    fn broadcast(&mut self, reason: PingReason) -> Move {
        debug!(?reason, position = %self.position, age = self.ping_age, "matt pinging");
        // Arrival asks for fresh data but keeps the staleness clock running.
        if reason != PingReason::ReachedFix {
            self.ping_age = 0;
        }
        Move::Ping
    }

    /// Replaces the stored fix only if the delivered ping resolves to targets.
    fn absorb(&mut self, response: &PingResponse) -> Result<Targets> {
        let fix = response.translate(self.position);
        let targets = self.resolve(&fix)?;
        debug!(
            position = %self.position,
            sightings = fix.sightings().len(),
            "matt absorbed ping"
        );
        self.ping = Some(fix);
        self.ping_age = 0;
        Ok(targets)
    }

    fn targets(&self) -> Result<Targets> {
        match &self.ping {
            Some(fix) => self.resolve(fix),
            None => Err(malformed(AgentRole::Goody)),
        }
    }

    fn resolve(&self, fix: &PingFix) -> Result<Targets> {
        let ally = fix.ally().ok_or_else(|| malformed(AgentRole::Goody))?;
        let adversary = match self.config.evasion_radius {
            Some(_) => Some(
                fix.adversary()
                    .ok_or_else(|| malformed(AgentRole::Baddy))?,
            ),
            None => None,
        };
        Ok(Targets { ally, adversary })
    }

    fn threat_near(&self, adversary: Option<Position>) -> Option<Position> {
        let radius = self.config.evasion_radius?;
        adversary.filter(|threat| self.position.manhattan_distance(*threat) <= radius)
    }

    fn no_candidates(&self) -> GoodyError {
        warn!(position = %self.position, "matt has no candidate moves");
        GoodyError::NoCandidates {
            position: self.position,
        }
    }

    fn evade(&self, open: &[Direction], threat: Position) -> Result<Move> {
        let mut candidates: Candidates = open.iter().copied().map(Move::from).collect();
        candidates.push(Move::Stay);
        let mv = farthest_from(self.position, &candidates, threat)
            .ok_or_else(|| self.no_candidates())?;
        debug!(?mv, %threat, position = %self.position, "matt evading");
        Ok(mv)
    }

    fn pursue(&mut self, open: &[Direction], target: Position) -> Result<Move> {
        let candidates: Candidates = open.iter().copied().map(Move::from).collect();
        let greedy =
            closest_to(self.position, &candidates, target).ok_or_else(|| self.no_candidates())?;

        let destination = self.position + greedy.displacement();
        if !self.memory.should_avoid(destination) {
            debug!(mv = ?greedy, %target, position = %self.position, "matt pursuing");
            return Ok(greedy);
        }

        // The substitute is not checked against the avoidance rule again.
        let fallback = choose(&mut self.rng, &candidates)
            .copied()
            .unwrap_or(greedy);
        debug!(
            ?greedy,
            ?fallback,
            %destination,
            "matt avoiding revisit, taking random exit"
        );
        Ok(fallback)
    }

    fn advance(&mut self, mv: Move) {
        self.memory.record_visit(self.position);
        self.position += mv.displacement();
        self.ping_age = self.ping_age.saturating_add(1);
        trace!(?mv, position = %self.position, age = self.ping_age, "matt moved");
    }
}

impl<R: RngSource> Goody for MattGoody<R> {
    fn kind(&self) -> GoodyKind {
        GoodyKind::Matt
    }

    fn take_turn(&mut self, obstruction: Obstruction, ping: Option<&PingResponse>) -> Result<Move> {
        if self.ping.is_none() && ping.is_none() {
            return Ok(self.broadcast(PingReason::FirstContact));
        }
        if self.is_stale() {
            return Ok(self.broadcast(PingReason::Stale));
        }
        let targets = match ping {
            Some(response) => self.absorb(response)?,
            None => self.targets()?,
        };

        let open = obstruction.open_directions();
        if self.config.track_dead_ends
            && open.len() == 1
            && self.memory.record_dead_end(self.position)
        {
            debug!(position = %self.position, "matt recorded dead end");
        }

        if let Some(threat) = self.threat_near(targets.adversary) {
            let mv = self.evade(&open, threat)?;
            self.advance(mv);
            return Ok(mv);
        }

        if self.position.manhattan_distance(targets.ally) < 1 {
            return Ok(self.broadcast(PingReason::ReachedFix));
        }

        let mv = self.pursue(&open, targets.ally)?;
        self.advance(mv);
        Ok(mv)
    }
}

fn malformed(missing: AgentRole) -> GoodyError {
    warn!(%missing, "ping response lacks a required role");
    GoodyError::MalformedPing { missing }
}

/// First candidate whose destination lies closest to `target`.
fn closest_to(origin: Position, candidates: &[Move], target: Position) -> Option<Move> {
    candidates
        .iter()
        .copied()
        .min_by_key(|mv| (origin + mv.displacement()).manhattan_distance(target))
}

/// First candidate whose destination lies farthest from `threat`.
fn farthest_from(origin: Position, candidates: &[Move], threat: Position) -> Option<Move> {
    candidates
        .iter()
        .copied()
        .min_by_key(|mv| Reverse((origin + mv.displacement()).manhattan_distance(threat)))
}
