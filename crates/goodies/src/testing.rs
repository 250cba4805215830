//! Test doubles shared by unit tests.
use maze_core::RngSource;

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub(crate) fn new<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let draws: Vec<u32> = draws.into_iter().collect();
        assert!(!draws.is_empty(), "scripted rng needs at least one draw");
        Self { draws, next: 0 }
    }
}

impl RngSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}
