use maze_core::{Move, Obstruction, PingResponse};

use crate::error::Result;
use crate::goody::{Goody, GoodyKind};

/// Never leaves its starting tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGoody;

impl Goody for StaticGoody {
    fn kind(&self) -> GoodyKind {
        GoodyKind::Static
    }

    fn take_turn(&mut self, _obstruction: Obstruction, _ping: Option<&PingResponse>) -> Result<Move> {
        Ok(Move::Stay)
    }
}
