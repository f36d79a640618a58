/// Default tuning parameters for the flappy playfield
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const HEIGHT: f32 = 800.0;
    pub const WIDTH: f32 = 400.0;

    // Pipes
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 170.0;
    pub const PIPE_GAP_MINIMAL: f32 = 150.0; // no-physics preset
    pub const MIN_TOP_FOR_TOP_PIPE: f32 = 70.0;
    pub const MAX_TOP_FOR_TOP_PIPE: f32 = 350.0;
    pub const GENERATE_NEW_PIPE_PERCENT: f32 = 0.7; // of width crossed before respawn
    pub const SPEED: f32 = 1.0; // units per tick

    // Ground
    pub const GROUND_HEIGHT: f32 = 20.0;

    // Bird
    pub const BIRD_X: f32 = 40.0;
    pub const BIRD_SIZE: f32 = 20.0;

    // Physics
    pub const GRAVITY: f32 = 1.5; // squared each tick
    pub const JUMP_VELOCITY: f32 = 10.0;
    pub const SLOW_VELOCITY_BY: f32 = 0.23; // per tick while velocity > 0

    // Seed used by `GameRng::default`
    pub const DEFAULT_SEED: u64 = 12345;
}
