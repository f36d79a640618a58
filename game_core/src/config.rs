use glam::Vec2;

use crate::error::ConfigError;
use crate::params::Params;

/// Bird, ground and gravity tuning. Absent for the physics-less preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub ground_height: f32,
    pub bird_x: f32,
    pub bird_size: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub slow_velocity_by: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ground_height: Params::GROUND_HEIGHT,
            bird_x: Params::BIRD_X,
            bird_size: Params::BIRD_SIZE,
            gravity: Params::GRAVITY,
            jump_velocity: Params::JUMP_VELOCITY,
            slow_velocity_by: Params::SLOW_VELOCITY_BY,
        }
    }
}

impl PhysicsConfig {
    /// Bird position for a new game: fixed x, vertically centred
    pub fn bird_spawn(&self, height: f32) -> Vec2 {
        Vec2::new(self.bird_x, height / 2.0 - self.bird_size / 2.0)
    }

    /// Constant downward drift applied every tick
    pub fn fall_per_tick(&self) -> f32 {
        self.gravity.powi(2)
    }
}

/// Game configuration, immutable for the lifetime of a controller
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub height: f32,
    pub width: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub min_top_for_top_pipe: f32,
    pub max_top_for_top_pipe: f32,
    pub generate_new_pipe_percent: f32,
    pub speed: f32,
    pub physics: Option<PhysicsConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: Params::HEIGHT,
            width: Params::WIDTH,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            min_top_for_top_pipe: Params::MIN_TOP_FOR_TOP_PIPE,
            max_top_for_top_pipe: Params::MAX_TOP_FOR_TOP_PIPE,
            generate_new_pipe_percent: Params::GENERATE_NEW_PIPE_PERCENT,
            speed: Params::SPEED,
            physics: Some(PhysicsConfig::default()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipes only: no bird, no ground, no start gating
    pub fn minimal() -> Self {
        Self {
            pipe_gap: Params::PIPE_GAP_MINIMAL,
            physics: None,
            ..Self::default()
        }
    }

    /// Left edge of a freshly spawned pipe pair
    pub fn spawn_left(&self) -> f32 {
        self.width - self.pipe_width
    }

    /// The other slot may respawn once the leading pipe is left of this
    pub fn respawn_threshold(&self) -> f32 {
        self.width * (1.0 - self.generate_new_pipe_percent)
    }

    /// Check the configuration describes a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut fields = vec![
            ("height", self.height),
            ("width", self.width),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("min_top_for_top_pipe", self.min_top_for_top_pipe),
            ("max_top_for_top_pipe", self.max_top_for_top_pipe),
            ("generate_new_pipe_percent", self.generate_new_pipe_percent),
            ("speed", self.speed),
        ];
        if let Some(physics) = &self.physics {
            fields.extend([
                ("ground_height", physics.ground_height),
                ("bird_x", physics.bird_x),
                ("bird_size", physics.bird_size),
                ("gravity", physics.gravity),
                ("jump_velocity", physics.jump_velocity),
                ("slow_velocity_by", physics.slow_velocity_by),
            ]);
        }
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite { field: *field });
        }

        for (field, value) in [
            ("height", self.height),
            ("width", self.width),
            ("pipe_width", self.pipe_width),
            ("speed", self.speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("pipe_gap", self.pipe_gap),
            ("min_top_for_top_pipe", self.min_top_for_top_pipe),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.min_top_for_top_pipe >= self.max_top_for_top_pipe {
            return Err(ConfigError::EmptyGapRange {
                min: self.min_top_for_top_pipe,
                max: self.max_top_for_top_pipe,
            });
        }
        if self.max_top_for_top_pipe + self.pipe_gap > self.height {
            return Err(ConfigError::GapBelowFloor {
                max_top: self.max_top_for_top_pipe,
                pipe_gap: self.pipe_gap,
                height: self.height,
            });
        }
        if self.pipe_width > self.width {
            return Err(ConfigError::PipeWiderThanPlayfield {
                pipe_width: self.pipe_width,
                width: self.width,
            });
        }
        if self.generate_new_pipe_percent <= 0.0 || self.generate_new_pipe_percent > 1.0 {
            return Err(ConfigError::SpawnPercentOutOfRange {
                value: self.generate_new_pipe_percent,
            });
        }

        if let Some(physics) = &self.physics {
            for (field, value) in [
                ("ground_height", physics.ground_height),
                ("bird_x", physics.bird_x),
                ("gravity", physics.gravity),
                ("jump_velocity", physics.jump_velocity),
                ("slow_velocity_by", physics.slow_velocity_by),
            ] {
                if value < 0.0 {
                    return Err(ConfigError::Negative { field, value });
                }
            }
            if physics.bird_size <= 0.0 {
                return Err(ConfigError::NotPositive {
                    field: "bird_size",
                    value: physics.bird_size,
                });
            }
            if physics.bird_size > self.height {
                return Err(ConfigError::BirdTallerThanPlayfield {
                    bird_size: physics.bird_size,
                    height: self.height,
                });
            }
        }

        Ok(())
    }
}
