pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use frame::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use rand::Rng;
use systems::*;

/// Advance the flappy simulation by one tick.
///
/// Returns false when the tick was gated (physics enabled and the game is
/// not running) and nothing changed.
pub fn step<R: Rng>(
    world: &mut World,
    config: &Config,
    status: &Status,
    events: &mut Events,
    rng: &mut R,
) -> bool {
    if config.physics.is_some() && !status.is_running() {
        return false;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Scroll, retire and respawn both pipe slots
    move_pipes(world, config, rng, events);

    // 2. Decay impulse and move the bird
    if let Some(physics) = &config.physics {
        apply_gravity(world, physics);
    }

    true
}

/// Helper to create a pipe slot entity
pub fn create_pipe_slot(world: &mut World, slot: Slot, pipe: PipePair) -> hecs::Entity {
    world.spawn((slot, pipe))
}

/// Helper to create the bird entity, at rest
pub fn create_bird(world: &mut World, pos: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Bird::new(pos, size), Velocity::default()))
}
