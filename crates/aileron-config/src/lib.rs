//! Configuration system for the air roll trainer.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BallConfig, BallMode, CameraConfig, CameraMode, Config, DebugConfig, InputConfig,
    StickTopology, TuningPreset, VehicleConfig, WorldConfig,
};
pub use error::ConfigError;
