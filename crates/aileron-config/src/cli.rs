//! Command-line argument parsing for the air roll trainer.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{BallMode, CameraMode, Config, TuningPreset};

/// Shared command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
pub struct CliArgs {
    /// Simulation speed multiplier.
    #[arg(long)]
    pub game_speed: Option<f32>,

    /// Rotation tuning preset.
    #[arg(long, value_enum)]
    pub preset: Option<TuningPreset>,

    /// Vehicle body skin.
    #[arg(long)]
    pub body: Option<String>,

    /// Camera tracking mode.
    #[arg(long, value_enum)]
    pub camera: Option<CameraMode>,

    /// Ball relocation behavior.
    #[arg(long, value_enum)]
    pub ball_mode: Option<BallMode>,

    /// Enable or disable the chase timeout.
    #[arg(long)]
    pub timeout: Option<bool>,

    /// RNG seed for ball placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.game_speed {
            self.world.game_speed = speed;
        }
        if let Some(preset) = args.preset {
            self.vehicle.preset = preset;
        }
        if let Some(ref body) = args.body {
            self.vehicle.body = body.clone();
        }
        if let Some(mode) = args.camera {
            self.camera.mode = mode;
        }
        if let Some(mode) = args.ball_mode {
            self.ball.mode = mode;
        }
        if let Some(enabled) = args.timeout {
            self.ball.timeout_enabled = enabled;
        }
        if let Some(seed) = args.seed {
            self.ball.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
