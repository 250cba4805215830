//! Errors surfaced by goody agents to the game loop.
//!
//! Neither variant is recovered inside the agent: both mean the turn cannot be
//! decided and the caller has to stop the episode or fix its input.
use maze_core::{AgentRole, ErrorSeverity, MazeError, Position};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GoodyError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GoodyError {
    /// The absorbed ping has no entry tagged with a role the agent needs.
    #[error("ping response has no {missing} entry")]
    MalformedPing { missing: AgentRole },

    /// A distance comparison was asked to pick from zero moves.
    #[error("no candidate moves at {position}")]
    NoCandidates { position: Position },
}

impl MazeError for GoodyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MalformedPing { .. } => ErrorSeverity::Validation,
            Self::NoCandidates { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedPing { .. } => "MALFORMED_PING",
            Self::NoCandidates { .. } => "NO_CANDIDATES",
        }
    }
}
