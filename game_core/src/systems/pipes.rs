use hecs::World;
use rand::Rng;

use crate::{Config, Events, PipePair, Slot};

/// Generate a pipe pair at the spawn edge with a random gap offset
pub fn spawn_pipe<R: Rng>(config: &Config, rng: &mut R, show: bool) -> PipePair {
    let gap_top = rng.gen_range(config.min_top_for_top_pipe..config.max_top_for_top_pipe);
    PipePair::new(config, gap_top, show)
}

/// Outcome of moving one slot for a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PipeMove {
    /// Scrolled (or left alone while hidden)
    Moved(PipePair),
    /// Scrolled past the left edge and is now hidden
    Retired(PipePair),
    /// Hidden slot replaced with a fresh pair at the spawn edge
    Spawned(PipePair),
}

impl PipeMove {
    pub fn pipe(&self) -> PipePair {
        match *self {
            PipeMove::Moved(pipe) | PipeMove::Retired(pipe) | PipeMove::Spawned(pipe) => pipe,
        }
    }
}

/// Advance one slot by a tick, using the other slot to decide on respawn
pub fn move_pipe<R: Rng>(
    mut pipe: PipePair,
    other: &PipePair,
    config: &Config,
    rng: &mut R,
) -> PipeMove {
    if pipe.show && pipe.left <= -config.pipe_width {
        pipe.show = false;
        return PipeMove::Retired(pipe);
    }

    if pipe.show {
        pipe.left -= config.speed;
    }

    if other.show && other.left < config.respawn_threshold() && !pipe.show {
        return PipeMove::Spawned(spawn_pipe(config, rng, true));
    }

    PipeMove::Moved(pipe)
}

/// Current pipe pair held by `slot`
pub fn pipe_in(world: &World, slot: Slot) -> Option<PipePair> {
    world
        .query::<(&Slot, &PipePair)>()
        .iter()
        .find_map(|(_e, (s, pipe))| (*s == slot).then_some(*pipe))
}

/// Move both slots. The second slot sees the first slot's updated state.
pub fn move_pipes<R: Rng>(world: &mut World, config: &Config, rng: &mut R, events: &mut Events) {
    for slot in Slot::ALL {
        let (Some(pipe), Some(other)) = (pipe_in(world, slot), pipe_in(world, slot.other()))
        else {
            continue;
        };

        let moved = move_pipe(pipe, &other, config, rng);
        match moved {
            PipeMove::Retired(_) => {
                log::trace!("{slot:?} pipe retired");
                events.pipe_retired = true;
            }
            PipeMove::Spawned(pipe) => {
                log::trace!("{slot:?} pipe spawned, gap at {:.1}", pipe.gap_top());
                events.pipe_spawned = true;
            }
            PipeMove::Moved(_) => {}
        }

        for (_entity, (s, pipe)) in world.query_mut::<(&Slot, &mut PipePair)>() {
            if *s == slot {
                *pipe = moved.pipe();
                break;
            }
        }
    }
}
