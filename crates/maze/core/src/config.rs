/// Compile-time limits of the maze model.
///
/// These are used as const generic parameters for the fixed-capacity
/// collections agents keep, so they live here rather than in any one agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MazeConfig;

impl MazeConfig {
    /// Number of cardinal directions an agent can step in.
    pub const DIRECTION_COUNT: usize = 4;
    /// Directional moves plus one extra non-directional option (STAY or PING).
    pub const MAX_CANDIDATES: usize = Self::DIRECTION_COUNT + 1;
    /// Recently occupied positions remembered for cycle avoidance.
    pub const HISTORY_CAPACITY: usize = 10;
}
