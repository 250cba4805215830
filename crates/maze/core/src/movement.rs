use crate::position::Position;

/// Returned when a non-directional [`Move`] is converted into a [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("move {0} has no direction")]
pub struct NotDirectional(pub Move);

/// One of the four cardinal directions an agent can step in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical candidate order. Every argmin/argmax over directions walks
    /// this array, so the first optimal entry wins ties.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, 1),
            Direction::Down => Position::new(0, -1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The decision an agent hands back to the engine each turn.
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
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    /// Remain on the current tile.
    Stay,
    /// Broadcast own position; other agents see it in next turn's ping response.
    Ping,
}

impl Move {
    /// Displacement the engine applies when the move succeeds.
    ///
    /// `Stay` and `Ping` never displace the agent.
    pub fn displacement(self) -> Position {
        match self.direction() {
            Some(direction) => direction.delta(),
            None => Position::ORIGIN,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Move::Up => Some(Direction::Up),
            Move::Down => Some(Direction::Down),
            Move::Left => Some(Direction::Left),
            Move::Right => Some(Direction::Right),
            Move::Stay | Move::Ping => None,
        }
    }

    pub fn is_directional(self) -> bool {
        self.direction().is_some()
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Move::Up,
            Direction::Down => Move::Down,
            Direction::Left => Move::Left,
            Direction::Right => Move::Right,
        }
    }
}

impl TryFrom<Move> for Direction {
    type Error = NotDirectional;

    fn try_from(mv: Move) -> Result<Self, Self::Error> {
        mv.direction().ok_or(NotDirectional(mv))
    }
}
