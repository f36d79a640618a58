use rand::{RngCore, SeedableRng};

use crate::params::Params;

/// Score and lifecycle flags for the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    pub score: u32,
    pub game_over: bool,
    pub game_started: bool,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the physics simulation should advance this tick
    pub fn is_running(&self) -> bool {
        self.game_started && !self.game_over
    }

    pub fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

/// Random number generator
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Params::DEFAULT_SEED)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Events that occurred during the latest tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub pipe_spawned: bool,
    pub pipe_retired: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pipe_spawned = false;
        self.pipe_retired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_status_is_running() {
        let mut status = Status::new();
        assert!(!status.is_running());
        status.game_started = true;
        assert!(status.is_running());
        status.game_over = true;
        assert!(!status.is_running());
    }

    #[test]
    fn test_status_increment_score() {
        let mut status = Status::new();
        status.increment_score();
        status.increment_score();
        assert_eq!(status.score, 2);
    }

    #[test]
    fn test_status_score_saturates() {
        let mut status = Status {
            score: u32::MAX,
            ..Status::new()
        };
        status.increment_score();
        assert_eq!(status.score, u32::MAX);
    }

    #[test]
    fn test_game_rng_is_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(70.0f32..350.0), b.gen_range(70.0f32..350.0));
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.pipe_spawned = true;
        events.pipe_retired = true;

        events.clear();

        assert!(!events.pipe_spawned);
        assert!(!events.pipe_retired);
    }
}
