use hecs::World;

use crate::systems::pipe_in;
use crate::{Bird, Config, PipePair, Slot, Status};

/// Player body as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdView {
    pub top: f32,
    pub left: f32,
    pub size: f32,
}

/// Ground strip drawn along the bottom of the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub height: f32,
}

/// Render-ready snapshot of the game after one operation.
///
/// A frame is a value: mutating it never affects the controller it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub first_pipe: PipePair,
    pub second_pipe: PipePair,
    pub game_over: bool,
    pub game_started: bool,
    pub width: f32,
    pub height: f32,
    pub score: u32,
    pub tick: u64,
    pub ground: Option<Ground>,
    pub bird: Option<BirdView>,
}

impl Frame {
    /// Build a snapshot from the world. Missing slots capture as hidden pairs.
    pub fn capture(world: &World, config: &Config, status: &Status, tick: u64) -> Self {
        let slot = |slot: Slot| {
            pipe_in(world, slot).unwrap_or_else(|| {
                log::warn!("{slot:?} pipe slot missing from world, capturing as hidden");
                PipePair::new(config, config.min_top_for_top_pipe, false)
            })
        };

        let bird = world
            .query::<&Bird>()
            .iter()
            .next()
            .map(|(_e, bird)| BirdView {
                top: bird.pos.y,
                left: bird.pos.x,
                size: bird.size,
            });

        Self {
            first_pipe: slot(Slot::First),
            second_pipe: slot(Slot::Second),
            game_over: status.game_over,
            game_started: status.game_started,
            width: config.width,
            height: config.height,
            score: status.score,
            tick,
            ground: config.physics.map(|physics| Ground {
                height: physics.ground_height,
            }),
            bird,
        }
    }

    /// Both slots in update order
    pub fn pipes(&self) -> [&PipePair; 2] {
        [&self.first_pipe, &self.second_pipe]
    }

    /// Slots currently on the playfield
    pub fn visible_pipes(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes().into_iter().filter(|pipe| pipe.show)
    }

    pub fn pipe(&self, slot: Slot) -> &PipePair {
        match slot {
            Slot::First => &self.first_pipe,
            Slot::Second => &self.second_pipe,
        }
    }
}
