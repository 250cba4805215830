//! Minimal stand-in for the maze engine: walls, bodies, ping delivery.
#![allow(dead_code)]

use std::collections::BTreeSet;

use maze_core::{AgentId, AgentRole, Direction, Move, Obstruction, PingResponse, Position};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Copy)]
struct Body {
    id: AgentId,
    role: AgentRole,
    position: Position,
}

/// Grid parsed from text rows: `#` wall, anything else floor.
///
/// The first row is the top of the maze, so `y` grows upwards like the
/// `Up = (0, +1)` convention.
pub struct Arena {
    walls: BTreeSet<Position>,
    width: i32,
    height: i32,
    bodies: Vec<Body>,
    pinged_last_turn: bool,
    pinged_this_turn: bool,
}

impl Arena {
    pub fn parse(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as i32;
        let walls = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                let y = height - 1 - row as i32;
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '#')
                    .map(move |(x, _)| Position::new(x as i32, y))
            })
            .collect();
        Self {
            walls,
            width,
            height,
            bodies: Vec::new(),
            pinged_last_turn: false,
            pinged_this_turn: false,
        }
    }

    pub fn spawn(&mut self, id: AgentId, role: AgentRole, at: Position) {
        assert!(self.is_floor(at), "cannot spawn {id} inside a wall at {at}");
        self.bodies.push(Body {
            id,
            role,
            position: at,
        });
    }

    pub fn is_floor(&self, at: Position) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < self.width && at.y < self.height && !self.walls.contains(&at)
    }

    pub fn position(&self, id: AgentId) -> Position {
        self.body(id).position
    }

    pub fn obstruction(&self, id: AgentId) -> Obstruction {
        let here = self.position(id);
        Obstruction::from_blocked(
            Direction::ALL
                .into_iter()
                .filter(|direction| !self.is_floor(here + direction.delta())),
        )
    }

    /// Everyone else's offset from `id`, if somebody pinged last turn.
    pub fn ping_for(&self, id: AgentId) -> Option<PingResponse> {
        if !self.pinged_last_turn {
            return None;
        }
        let here = self.position(id);
        Some(
            self.bodies
                .iter()
                .filter(|body| body.id != id)
                .map(|body| maze_core::PingEntry::new(body.id, body.role, body.position - here))
                .collect(),
        )
    }

    /// Applies a move, panicking if the agent walks into a wall.
    pub fn apply(&mut self, id: AgentId, mv: Move) {
        let blocked = self.obstruction(id);
        match mv {
            Move::Ping => self.pinged_this_turn = true,
            Move::Stay => {}
            _ => {
                let direction = mv.direction().expect("directional move");
                assert!(
                    !blocked.is_blocked(direction),
                    "{id} tried to move {mv} into a wall at {}",
                    self.position(id)
                );
                let body = self.body_mut(id);
                body.position += direction.delta();
            }
        }
    }

    pub fn end_turn(&mut self) {
        self.pinged_last_turn = self.pinged_this_turn;
        self.pinged_this_turn = false;
    }

    fn body(&self, id: AgentId) -> &Body {
        self.bodies
            .iter()
            .find(|body| body.id == id)
            .expect("unknown agent")
    }

    fn body_mut(&mut self, id: AgentId) -> &mut Body {
        self.bodies
            .iter_mut()
            .find(|body| body.id == id)
            .expect("unknown agent")
    }
}

pub const OPEN_ROOM: &[&str] = &[
    "################",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

pub const WINDING_MAZE: &[&str] = &[
    "###########",
    "#.....#...#",
    "#.###.#.#.#",
    "#.#...#.#.#",
    "#.#.###.#.#",
    "#.#.....#.#",
    "#.#####.#.#",
    "#.......#.#",
    "###########",
];
