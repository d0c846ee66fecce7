//! Application framework for the air roll trainer.
//!
//! Provides the fixed-timestep game loop and the [`Session`] that assembles
//! a vehicle and a target ball from loaded configuration.

pub mod game_loop;
pub mod session;

pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use session::{Session, air_roll_direction, rotation_tuning, stick_config};
