use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::MazeConfig;
use crate::movement::Direction;

/// Open directions in canonical [`Direction::ALL`] order.
pub type OpenDirections = ArrayVec<Direction, { MazeConfig::DIRECTION_COUNT }>;

bitflags! {
    /// Which cardinal directions are blocked for the agent this turn.
    ///
    /// Supplied fresh by the engine every turn. An empty set means every
    /// direction is open.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Obstruction: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Obstruction {
    /// Flag for a single direction.
    pub const fn of(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }

    /// Builds a map with exactly the given directions blocked.
    pub fn from_blocked<I>(blocked: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        blocked
            .into_iter()
            .fold(Self::empty(), |acc, direction| acc | Self::of(direction))
    }

    /// Builds a map with every direction blocked except the given ones.
    pub fn only_open<I>(open: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        Self::all().difference(Self::from_blocked(open))
    }

    pub fn is_blocked(self, direction: Direction) -> bool {
        self.contains(Self::of(direction))
    }

    pub fn open_directions(self) -> OpenDirections {
        Direction::ALL
            .into_iter()
            .filter(|direction| !self.is_blocked(*direction))
            .collect()
    }
}
