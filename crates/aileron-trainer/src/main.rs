//! Headless training runs for the air roll trainer.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides,
//! initializes structured logging, then flies a canned maneuver through the
//! fixed-timestep loop for a set number of seconds. Hits and chase timeouts
//! are logged as they land, with a session summary at the end.
//!
//! Run with: `cargo run -p aileron-trainer -- --script tornado --seconds 60`

mod platform;
mod script;

use clap::Parser;
use tracing::{debug, info, trace, warn};

use aileron_app::{FIXED_DT, GameLoop, Session};
use aileron_config::{CliArgs, Config};
use aileron_control::SkinRegistry;
use aileron_input::FlightInputs;

use crate::script::ManeuverScript;

/// Trainer binary arguments.
#[derive(Parser, Debug)]
#[command(name = "aileron-trainer", about = "Headless air roll trainer")]
struct TrainerArgs {
    #[command(flatten)]
    cli: CliArgs,

    /// Seconds of wall-clock time to simulate.
    #[arg(long, default_value_t = 30.0)]
    seconds: f64,

    /// Maneuver script to fly.
    #[arg(long, value_enum, default_value_t = ManeuverScript::Spin)]
    script: ManeuverScript,
}

fn main() {
    let args = TrainerArgs::parse();

    // A --config directory keeps everything (settings and logs) in one
    // place; otherwise the OS-conventional locations are used.
    let (config_dir, log_dir) = match &args.cli.config {
        Some(dir) => (dir.clone(), dir.join("logs")),
        None => match platform::PlatformDirs::resolve_and_create() {
            Ok(dirs) => (dirs.config_dir, dirs.log_dir),
            Err(e) => {
                eprintln!("Failed to initialize platform directories: {e}");
                std::process::exit(1);
            }
        },
    };

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args.cli);

    aileron_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    for warning in config.validate() {
        warn!("config: {warning}");
    }

    info!("Aileron air roll trainer");
    info!(
        "Preset: {:?} | Camera: {:?} | Ball: {:?} | Speed: {}x | Seed: {}",
        config.vehicle.preset,
        config.camera.mode,
        config.ball.mode,
        config.world.game_speed,
        config.ball.seed,
    );

    // Body catalog. Handles stand in for meshes in the headless build.
    let mut skins: SkinRegistry<&'static str> = SkinRegistry::new();
    skins.register("octane", "meshes/octane.glb");
    skins.register("fennec", "meshes/fennec.glb");
    skins.register("dominus", "meshes/dominus.glb");
    if skins.switch_to(&config.vehicle.body) {
        debug!(body = %config.vehicle.body, "vehicle body selected");
    }

    let stick = aileron_app::stick_config(&config.input);
    let air_roll = aileron_app::air_roll_direction(&config.input);
    let log_ticks = config.debug.log_ticks;
    let maneuver = args.script;

    let mut session = Session::from_config(&config);
    let mut game_loop = GameLoop::new();
    game_loop.set_time_scale(f64::from(config.world.game_speed));

    let total_frames = (args.seconds.max(0.0) / FIXED_DT).round() as u64;
    info!("Flying {:?} for {} frames", maneuver, total_frames);

    let mut hits = 0u64;
    let mut timeouts = 0u64;
    let mut last_pose = session.update_camera(0.0);

    for _ in 0..total_frames {
        let mut render_dt = 0.0f64;
        game_loop.tick_with_frame_time(
            FIXED_DT,
            |dt, sim_time| {
                let sample = maneuver.sample(sim_time as f32);
                let shaped = aileron_input::shape(sample.stick, &stick);
                let roll = air_roll.roll_axis(sample.air_roll_held);
                let inputs = FlightInputs::from_stick(shaped, roll);

                if log_ticks {
                    trace!(
                        pitch = inputs.pitch,
                        yaw = inputs.yaw,
                        roll = inputs.roll,
                        "tick inputs"
                    );
                }

                let tick = session.tick(inputs, dt as f32);
                if tick.hit_completed {
                    hits += 1;
                    info!(
                        "Hit {} completed at t={:.2}s",
                        session.ball().hit_count(),
                        sim_time
                    );
                }
                if tick.timed_out {
                    timeouts += 1;
                    debug!("Ball chase timed out at t={:.2}s", sim_time);
                }
            },
            |_, frame_dt| render_dt = frame_dt,
        );
        // The camera runs on the render cadence with the unscaled delta, so
        // a slowed simulation still gets full-speed camera smoothing.
        last_pose = session.update_camera(render_dt as f32);
    }

    let vehicle = session.vehicle();
    info!(
        "Run complete: {} frames, {} updates, {:.1}s simulated, {} hits, {} timeouts",
        game_loop.frame_count(),
        game_loop.update_count(),
        game_loop.total_sim_time(),
        hits,
        timeouts,
    );
    info!(
        "Vehicle: orientation={:?} (norm {:.6}), angular velocity={:?}",
        vehicle.orientation(),
        vehicle.orientation().length(),
        vehicle.angular_velocity(),
    );
    info!(
        "Camera at {:?} looking at {:?}; ball at {:?}",
        last_pose.position,
        last_pose.look_at,
        session.ball().position(),
    );
}
