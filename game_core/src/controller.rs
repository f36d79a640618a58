use hecs::World;
use rand::Rng;

use crate::systems::{apply_jump, bird_velocity, spawn_pipe};
use crate::{
    create_bird, create_pipe_slot, step, Config, ConfigError, Events, Frame, GameRng, Slot,
    Status,
};

/// Owns the canonical game state and is its only mutator.
///
/// Every operation hands back a [`Frame`] by value, so renderers can keep or
/// modify what they receive without touching the simulation.
pub struct GameController<R: Rng = GameRng> {
    config: Config,
    world: World,
    status: Status,
    events: Events,
    rng: R,
    tick: u64,
}

impl GameController<GameRng> {
    /// Validate `config` and start a fresh (not yet started) game with an
    /// entropy-seeded generator
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Same as [`GameController::new`] but reproducible for a given seed
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_rng(config: Config, rng: R) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::debug!("rejected game config: {err}");
            return Err(err);
        }

        let mut controller = Self {
            config,
            world: World::new(),
            status: Status::new(),
            events: Events::new(),
            rng,
            tick: 0,
        };
        controller.new_game();
        Ok(controller)
    }

    /// Discard the current game and build a fresh one that waits for `start`
    pub fn new_game(&mut self) -> Frame {
        self.world.clear();

        let first = spawn_pipe(&self.config, &mut self.rng, true);
        let second = spawn_pipe(&self.config, &mut self.rng, false);
        create_pipe_slot(&mut self.world, Slot::First, first);
        create_pipe_slot(&mut self.world, Slot::Second, second);

        if let Some(physics) = &self.config.physics {
            create_bird(
                &mut self.world,
                physics.bird_spawn(self.config.height),
                physics.bird_size,
            );
        }

        self.status = Status::new();
        self.events = Events::new();
        self.tick = 0;

        log::debug!("new game, first gap at {:.1}", first.gap_top());
        self.frame()
    }

    /// New game with the simulation running
    pub fn start(&mut self) -> Frame {
        self.new_game();
        self.status.game_started = true;
        log::debug!("game started");
        self.frame()
    }

    /// Advance one tick. Without physics the pipes always move; with physics
    /// nothing changes until the game is started, or once it is over.
    pub fn next_frame(&mut self) -> Frame {
        if step(
            &mut self.world,
            &self.config,
            &self.status,
            &mut self.events,
            &mut self.rng,
        ) {
            self.tick += 1;
        }
        self.frame()
    }

    /// Request an upward impulse. Ignored while a previous impulse is still
    /// positive, or when physics is disabled. The bird moves on the next tick.
    pub fn jump(&mut self) {
        let Some(physics) = &self.config.physics else {
            return;
        };
        if !apply_jump(&mut self.world, physics) {
            log::trace!("jump ignored, impulse still in effect");
        }
    }

    /// End the game on behalf of an external collision check
    pub fn report_collision(&mut self) -> Frame {
        if !self.status.game_over {
            log::debug!(
                "collision reported at tick {}, score {}",
                self.tick,
                self.status.score
            );
            self.status.game_over = true;
        }
        self.frame()
    }

    /// Award a point on behalf of an external scorer. Ignored after game over.
    pub fn increment_score(&mut self) -> Frame {
        if !self.status.game_over {
            self.status.increment_score();
        }
        self.frame()
    }

    /// Snapshot of the current state
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.world, &self.config, &self.status, self.tick)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// What happened during the latest advancing tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Remaining upward impulse, `None` without physics
    pub fn velocity(&self) -> Option<f32> {
        bird_velocity(&self.world)
    }

    /// Ticks advanced since the last new game
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
