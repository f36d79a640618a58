pub mod physics;
pub mod pipes;

pub use physics::*;
pub use pipes::*;
