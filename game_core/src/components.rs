use glam::Vec2;

use crate::Config;

/// Identity of one of the two recyclable obstacle slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Update order within a tick
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn other(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// One segment of an obstacle column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub top: f32,    // Vertical offset of the segment start
    pub height: f32, // Vertical extent
}

/// Pipe pair component - one obstacle column with a gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    pub top_pipe: Pipe,
    pub bottom_pipe: Pipe,
    pub show: bool, // Hidden slots are absent from the playfield
    pub left: f32,  // Leading edge, decreases while shown
    pub width: f32,
}

impl PipePair {
    /// Build a pair at the spawn edge with the gap starting at `gap_top`
    pub fn new(config: &Config, gap_top: f32, show: bool) -> Self {
        Self {
            top_pipe: Pipe {
                top: 0.0,
                height: gap_top,
            },
            bottom_pipe: Pipe {
                top: gap_top + config.pipe_gap,
                height: config.height,
            },
            show,
            left: config.spawn_left(),
            width: config.pipe_width,
        }
    }

    /// Upper edge of the gap
    pub fn gap_top(&self) -> f32 {
        self.top_pipe.height
    }

    /// Lower edge of the gap
    pub fn gap_bottom(&self) -> f32 {
        self.bottom_pipe.top
    }

    /// Trailing edge of the column
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// True once the column has scrolled fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.left <= -self.width
    }
}

/// Bird component - the player-controlled body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2,  // x = left (fixed), y = top
    pub size: f32,
}

impl Bird {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }
}

/// Upward impulse still in effect (positive = up)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub f32);
