//! The target ball: hit-window/chase-timeout state machine, snap and flow
//! motion policies, and the spawn bounds they sample from.

mod ball;
mod bounds;
mod motion;

pub use ball::{BallParams, BallTarget, BallTick};
pub use bounds::SpawnBounds;
pub use motion::{FlowMotion, FlowPath, MotionPolicy, RepositionBand};
