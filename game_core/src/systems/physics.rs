use hecs::World;

use crate::{Bird, PhysicsConfig, Velocity};

/// Decay any upward impulse, then move the bird by gravity minus the impulse
pub fn apply_gravity(world: &mut World, physics: &PhysicsConfig) {
    for (_entity, (bird, velocity)) in world.query_mut::<(&mut Bird, &mut Velocity)>() {
        // May overshoot below zero on the last decay step; not clamped
        if velocity.0 > 0.0 {
            velocity.0 -= physics.slow_velocity_by;
        }

        bird.pos.y += physics.fall_per_tick() - velocity.0;
    }
}

/// Add a jump impulse unless one is still in effect. Returns true if applied.
pub fn apply_jump(world: &mut World, physics: &PhysicsConfig) -> bool {
    let mut applied = false;
    for (_entity, velocity) in world.query_mut::<&mut Velocity>() {
        if velocity.0 <= 0.0 {
            velocity.0 += physics.jump_velocity;
            applied = true;
        }
    }
    applied
}

/// Current impulse of the bird, if one exists
pub fn bird_velocity(world: &World) -> Option<f32> {
    world
        .query::<&Velocity>()
        .iter()
        .next()
        .map(|(_e, velocity)| velocity.0)
}
