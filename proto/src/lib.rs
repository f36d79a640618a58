//! Wire format between the flappy engine and out-of-process renderers
//!
//! Uses postcard for efficient binary serialization

use game_core::{Config, ConfigError, Frame, GameController, PipePair};
use postcard::{from_bytes, to_allocvec};
use rand::Rng;

// ============================================================================
// Commands (input layer to engine)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    /// Reset to a fresh game waiting for start
    NewGame,
    /// Reset and begin play
    Start,
    /// Advance one tick
    Tick,
    /// Upward impulse (ignored while one is in effect)
    Jump,
    /// External collision check ended the game
    ReportCollision,
    /// External scorer awarded a point
    IncrementScore,
}

impl Command {
    /// Run the command against a controller and snapshot the result
    pub fn apply<R: Rng>(&self, controller: &mut GameController<R>) -> FrameSnapshot {
        let frame = match self {
            Command::NewGame => controller.new_game(),
            Command::Start => controller.start(),
            Command::Tick => controller.next_frame(),
            Command::Jump => {
                controller.jump();
                controller.frame()
            }
            Command::ReportCollision => controller.report_collision(),
            Command::IncrementScore => controller.increment_score(),
        };
        FrameSnapshot::from(&frame)
    }
}

// ============================================================================
// Frame snapshots (engine to renderer)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipeSnapshot {
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipePairSnapshot {
    pub top_pipe: PipeSnapshot,
    pub bottom_pipe: PipeSnapshot,
    pub show: bool,
    pub left: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BirdSnapshot {
    pub top: f32,
    pub left: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    pub first_pipe: PipePairSnapshot,
    pub second_pipe: PipePairSnapshot,
    pub game_over: bool,
    pub game_started: bool,
    pub width: f32,
    pub height: f32,
    pub score: u32,
    pub tick: u64,
    pub ground_height: Option<f32>,
    pub bird: Option<BirdSnapshot>,
}

impl From<&PipePair> for PipePairSnapshot {
    fn from(pair: &PipePair) -> Self {
        Self {
            top_pipe: PipeSnapshot {
                top: pair.top_pipe.top,
                height: pair.top_pipe.height,
            },
            bottom_pipe: PipeSnapshot {
                top: pair.bottom_pipe.top,
                height: pair.bottom_pipe.height,
            },
            show: pair.show,
            left: pair.left,
            width: pair.width,
        }
    }
}

impl From<&Frame> for FrameSnapshot {
    fn from(frame: &Frame) -> Self {
        Self {
            first_pipe: PipePairSnapshot::from(&frame.first_pipe),
            second_pipe: PipePairSnapshot::from(&frame.second_pipe),
            game_over: frame.game_over,
            game_started: frame.game_started,
            width: frame.width,
            height: frame.height,
            score: frame.score,
            tick: frame.tick,
            ground_height: frame.ground.map(|ground| ground.height),
            bird: frame.bird.map(|bird| BirdSnapshot {
                top: bird.top,
                left: bird.left,
                size: bird.size,
            }),
        }
    }
}

// ============================================================================
// Replay
// ============================================================================

/// A seed plus the commands issued during a game. Replaying against the
/// same config reproduces every frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Replay {
    pub seed: u64,
    pub commands: Vec<Command>,
}

impl Replay {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            commands: Vec::new(),
        }
    }

    pub fn record(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Replay every command, returning the snapshot after each one
    pub fn play(&self, config: Config) -> Result<Vec<FrameSnapshot>, ConfigError> {
        let mut controller = GameController::with_seed(config, self.seed)?;
        Ok(self
            .commands
            .iter()
            .map(|command| command.apply(&mut controller))
            .collect())
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    /// Serialize command to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize command from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl FrameSnapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Replay {
    /// Serialize replay to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize replay from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
