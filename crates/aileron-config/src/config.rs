//! Trainer settings with tuned defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level trainer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Simulation-wide settings.
    pub world: WorldConfig,
    /// Vehicle body and rotation tuning.
    pub vehicle: VehicleConfig,
    /// Follow camera settings.
    pub camera: CameraConfig,
    /// Target ball behavior.
    pub ball: BallConfig,
    /// Stick shaping and air roll settings.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Simulation speed multiplier (1.0 = real time, 0.5 = half speed).
    pub game_speed: f32,
}

/// Named rotation tuning presets. `Custom` reads the three tuning fields
/// on [`VehicleConfig`]; the named presets ignore them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TuningPreset {
    /// Stock handling close to the real game.
    #[default]
    Standard,
    /// High acceleration, heavy drag. Twitchy but fast to settle.
    Snappy,
    /// Use `rotation_speed` / `air_drag_coefficient` / `max_rotation_speed`.
    Custom,
}

/// Vehicle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VehicleConfig {
    /// Body skin to activate at startup.
    pub body: String,
    /// Rotation tuning preset.
    pub preset: TuningPreset,
    /// Angular acceleration in rad/s² (used by the `Custom` preset).
    pub rotation_speed: f32,
    /// Per-tick angular velocity retention in (0, 1] (used by `Custom`).
    pub air_drag_coefficient: f32,
    /// Angular speed cap per axis in rad/s (used by `Custom`).
    pub max_rotation_speed: f32,
    /// Scale multiplier for the rotation axis ring indicator.
    pub indicator_scale: f32,
}

/// Which point the follow camera tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum CameraMode {
    /// Orbit the vehicle while looking at the ball.
    #[default]
    TargetLocked,
    /// Sit behind the vehicle's nose, ignoring the ball.
    Free,
}

/// Follow camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Distance behind the vehicle.
    pub distance: f32,
    /// Height above the vehicle.
    pub height: f32,
    /// Tracking mode at startup.
    pub mode: CameraMode,
}

/// How the ball relocates and whether it drifts between hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum BallMode {
    /// Teleport anywhere in bounds after each hit.
    #[default]
    Random,
    /// Teleport into the high far band after each hit.
    High,
    /// Drift continuously along random curves; never teleport.
    Flowing,
}

/// Target ball configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    /// Bounding radius of the ball.
    pub radius: f32,
    /// Seconds of continuous contact required to score a hit.
    pub hit_window: f32,
    /// Seconds without a hit before the ball relocates itself.
    pub chase_timeout: f32,
    /// Arm the chase timeout.
    pub timeout_enabled: bool,
    /// Relocation/drift behavior.
    pub mode: BallMode,
    /// Drift speed in units/s (`Flowing` mode).
    pub flow_speed: f32,
    /// Control point scatter distance for drift curves (`Flowing` mode).
    pub flow_wander: f32,
    /// Low corner of the spawn volume.
    pub bounds_min: [f32; 3],
    /// High corner of the spawn volume.
    pub bounds_max: [f32; 3],
    /// RNG seed. Equal seeds and inputs give identical runs.
    pub seed: u64,
}

/// Deadzone shapes for raw stick input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum StickTopology {
    /// Per-axis deadzone. Matches the real game's feel.
    #[default]
    Cross,
    /// Radial deadzone on the stick vector.
    Circle,
    /// Remap the circular stick range onto the full square first.
    Square,
}

/// Stick shaping and air roll configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Deadzone threshold in [0, 1).
    pub deadzone: f32,
    /// Post-deadzone sensitivity multiplier.
    pub sensitivity: f32,
    /// Deadzone shape.
    pub topology: StickTopology,
    /// Bind the air roll button to left roll (false = right roll).
    pub air_roll_left: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Emit a trace event for every simulation tick. Very noisy.
    pub log_ticks: bool,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self { game_speed: 1.0 }
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            body: "octane".to_string(),
            preset: TuningPreset::Standard,
            rotation_speed: 21.0,
            air_drag_coefficient: 0.975,
            max_rotation_speed: 10.0,
            indicator_scale: 1.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            distance: 6.0,
            height: 4.0,
            mode: CameraMode::TargetLocked,
        }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            hit_window: 1.0,
            chase_timeout: 2.0,
            timeout_enabled: false,
            mode: BallMode::Random,
            flow_speed: 4.0,
            flow_wander: 6.0,
            bounds_min: [-15.0, 1.0, -15.0],
            bounds_max: [15.0, 12.0, 15.0],
            seed: 7,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            deadzone: 0.10,
            sensitivity: 1.0,
            topology: StickTopology::Cross,
            air_roll_left: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_ticks: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Sanity-check the loaded values.
    ///
    /// Returns one human-readable warning per suspect field. Out-of-range
    /// values are not fatal; every consumer clamps at the point of use, so
    /// a bad file still produces a running (if odd-feeling) trainer.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.world.game_speed.is_finite() || self.world.game_speed < 0.0 {
            warnings.push(format!(
                "world.game_speed should be finite and non-negative, got {}",
                self.world.game_speed
            ));
        }

        if !self.vehicle.rotation_speed.is_finite() || self.vehicle.rotation_speed < 0.0 {
            warnings.push(format!(
                "vehicle.rotation_speed should be finite and non-negative, got {}",
                self.vehicle.rotation_speed
            ));
        }
        if !self.vehicle.air_drag_coefficient.is_finite()
            || !(0.0..=1.0).contains(&self.vehicle.air_drag_coefficient)
        {
            warnings.push(format!(
                "vehicle.air_drag_coefficient should be within [0, 1], got {}",
                self.vehicle.air_drag_coefficient
            ));
        }
        if !self.vehicle.max_rotation_speed.is_finite() || self.vehicle.max_rotation_speed <= 0.0 {
            warnings.push(format!(
                "vehicle.max_rotation_speed should be a positive number, got {}",
                self.vehicle.max_rotation_speed
            ));
        }
        if !self.vehicle.indicator_scale.is_finite() || self.vehicle.indicator_scale <= 0.0 {
            warnings.push(format!(
                "vehicle.indicator_scale should be a positive number, got {}",
                self.vehicle.indicator_scale
            ));
        }

        if !self.camera.fov_degrees.is_finite()
            || self.camera.fov_degrees <= 0.0
            || self.camera.fov_degrees >= 180.0
        {
            warnings.push(format!(
                "camera.fov_degrees should be within (0, 180), got {}",
                self.camera.fov_degrees
            ));
        }
        if !self.camera.distance.is_finite() || !self.camera.height.is_finite() {
            warnings.push(format!(
                "camera.distance/height should be finite, got {} / {}",
                self.camera.distance, self.camera.height
            ));
        }

        if !self.ball.radius.is_finite() || self.ball.radius <= 0.0 {
            warnings.push(format!(
                "ball.radius should be a positive number, got {}",
                self.ball.radius
            ));
        }
        if !self.ball.hit_window.is_finite() || self.ball.hit_window <= 0.0 {
            warnings.push(format!(
                "ball.hit_window should be a positive number, got {}",
                self.ball.hit_window
            ));
        }
        if self.ball.timeout_enabled
            && (!self.ball.chase_timeout.is_finite() || self.ball.chase_timeout <= 0.0)
        {
            warnings.push(format!(
                "ball.chase_timeout should be a positive number when the timeout is enabled, got {}",
                self.ball.chase_timeout
            ));
        }
        if self.ball.mode == BallMode::Flowing
            && (!self.ball.flow_speed.is_finite() || self.ball.flow_speed <= 0.0)
        {
            warnings.push(format!(
                "ball.flow_speed should be a positive number in Flowing mode, got {}",
                self.ball.flow_speed
            ));
        }
        let bounds_finite = self
            .ball
            .bounds_min
            .iter()
            .chain(self.ball.bounds_max.iter())
            .all(|v| v.is_finite());
        if !bounds_finite {
            warnings.push("ball.bounds_min/bounds_max should be finite".to_string());
        } else if self
            .ball
            .bounds_min
            .iter()
            .zip(self.ball.bounds_max.iter())
            .any(|(lo, hi)| lo > hi)
        {
            warnings.push(format!(
                "ball.bounds_min should not exceed ball.bounds_max on any axis, got {:?} / {:?}",
                self.ball.bounds_min, self.ball.bounds_max
            ));
        }

        if !self.input.deadzone.is_finite() || !(0.0..1.0).contains(&self.input.deadzone) {
            warnings.push(format!(
                "input.deadzone should be within [0, 1), got {}",
                self.input.deadzone
            ));
        }
        if !self.input.sensitivity.is_finite() || self.input.sensitivity <= 0.0 {
            warnings.push(format!(
                "input.sensitivity should be a positive number, got {}",
                self.input.sensitivity
            ));
        }

        warnings
    }
}
