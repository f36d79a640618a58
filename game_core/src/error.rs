use std::fmt;

/// Reasons a [`Config`](crate::Config) is rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A field holds NaN or an infinity
    NotFinite { field: &'static str },
    /// A field must be strictly positive
    NotPositive { field: &'static str, value: f32 },
    /// A field must not be negative
    Negative { field: &'static str, value: f32 },
    /// `min_top_for_top_pipe` must be below `max_top_for_top_pipe`
    EmptyGapRange { min: f32, max: f32 },
    /// The lowest possible gap would extend past the playfield floor
    GapBelowFloor { max_top: f32, pipe_gap: f32, height: f32 },
    /// Pipes wider than the playfield cannot spawn on screen
    PipeWiderThanPlayfield { pipe_width: f32, width: f32 },
    /// `generate_new_pipe_percent` must lie in (0, 1]
    SpawnPercentOutOfRange { value: f32 },
    /// The bird does not fit vertically in the playfield
    BirdTallerThanPlayfield { bird_size: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "{field} must be a finite number"),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::EmptyGapRange { min, max } => write!(
                f,
                "min_top_for_top_pipe ({min}) must be less than max_top_for_top_pipe ({max})"
            ),
            Self::GapBelowFloor {
                max_top,
                pipe_gap,
                height,
            } => write!(
                f,
                "max_top_for_top_pipe + pipe_gap ({max_top} + {pipe_gap}) exceeds height {height}"
            ),
            Self::PipeWiderThanPlayfield { pipe_width, width } => {
                write!(f, "pipe_width {pipe_width} exceeds playfield width {width}")
            }
            Self::SpawnPercentOutOfRange { value } => write!(
                f,
                "generate_new_pipe_percent must be in (0, 1] (got {value})"
            ),
            Self::BirdTallerThanPlayfield { bird_size, height } => {
                write!(f, "bird_size {bird_size} exceeds playfield height {height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
