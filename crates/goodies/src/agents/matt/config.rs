/// Tunable parameters for [`MattGoody`](super::MattGoody).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MattConfig {
    /// Force a new PING once more than this many moves pass without fresh
    /// ping data. `None` trusts the last ping forever.
    pub ping_staleness: Option<u32>,

    /// Manhattan radius within which a sighted baddy overrides pursuit.
    /// `None` ignores baddies, and ping data need not contain one.
    pub evasion_radius: Option<u32>,

    /// Remember tiles with a single exit and steer away from them.
    pub track_dead_ends: bool,
}

impl MattConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PING_STALENESS: u32 = 5;
    pub const DEFAULT_EVASION_RADIUS: u32 = 3;

    pub fn new() -> Self {
        Self {
            ping_staleness: Some(Self::DEFAULT_PING_STALENESS),
            evasion_radius: Some(Self::DEFAULT_EVASION_RADIUS),
            track_dead_ends: true,
        }
    }

    /// The first-generation tracker: pings once, then chases the last fix
    /// with history avoidance only.
    pub fn legacy() -> Self {
        Self {
            ping_staleness: None,
            evasion_radius: None,
            track_dead_ends: false,
        }
    }

    #[must_use]
    pub fn with_ping_staleness(mut self, turns: Option<u32>) -> Self {
        self.ping_staleness = turns;
        self
    }

    #[must_use]
    pub fn with_evasion_radius(mut self, radius: Option<u32>) -> Self {
        self.evasion_radius = radius;
        self
    }

    #[must_use]
    pub fn with_dead_end_tracking(mut self, enabled: bool) -> Self {
        self.track_dead_ends = enabled;
        self
    }
}

impl Default for MattConfig {
    fn default() -> Self {
        Self::new()
    }
}
