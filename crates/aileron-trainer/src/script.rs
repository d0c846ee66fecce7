//! Canned control maneuvers for headless training runs.
//!
//! Each script turns a simulation time into the raw sample a controller
//! would produce: a stick deflection plus the air roll button. The samples
//! go through the full shaping pipeline before they reach the vehicle, so a
//! scripted run exercises exactly the code a live device would.

use glam::Vec2;

/// A canned control pattern the trainer can fly without a device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ManeuverScript {
    /// Hold the air roll binding with a centered stick. The nose stays
    /// fixed while the vehicle corkscrews in place.
    #[default]
    Spin,
    /// Air roll held while the stick traces a full circle. The classic
    /// tornado drill; the nose sweeps a cone through the spawn volume.
    Tornado,
    /// Slow pitch-and-yaw weave with no roll at all.
    Sweep,
}

/// One raw control sample: stick deflection plus the air roll button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSample {
    /// Raw stick deflection, before deadzone shaping.
    pub stick: Vec2,
    /// Whether the air roll binding is held this sample.
    pub air_roll_held: bool,
}

impl ManeuverScript {
    /// Sample the script at a simulation time in seconds.
    pub fn sample(self, time: f32) -> ControlSample {
        match self {
            Self::Spin => ControlSample {
                stick: Vec2::ZERO,
                air_roll_held: true,
            },
            Self::Tornado => {
                // One full stick revolution every two seconds.
                let phase = time * std::f32::consts::PI;
                ControlSample {
                    stick: Vec2::new(phase.sin(), phase.cos()),
                    air_roll_held: true,
                }
            }
            Self::Sweep => ControlSample {
                stick: Vec2::new(
                    (time * 0.8).sin() * 0.6,
                    (time * 0.4).cos() * 0.4,
                ),
                air_roll_held: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_holds_roll_with_centered_stick() {
        for t in [0.0, 0.5, 7.3] {
            let sample = ManeuverScript::Spin.sample(t);
            assert_eq!(sample.stick, Vec2::ZERO);
            assert!(sample.air_roll_held);
        }
    }

    #[test]
    fn test_tornado_traces_the_unit_circle() {
        for t in [0.0, 0.25, 1.1, 3.9] {
            let sample = ManeuverScript::Tornado.sample(t);
            assert!((sample.stick.length() - 1.0).abs() < 1e-5);
            assert!(sample.air_roll_held);
        }
        // Half a revolution apart, the stick points the opposite way.
        let a = ManeuverScript::Tornado.sample(0.3).stick;
        let b = ManeuverScript::Tornado.sample(1.3).stick;
        assert!((a + b).length() < 1e-5);
    }

    #[test]
    fn test_sweep_never_rolls() {
        for t in [0.0, 2.0, 11.4] {
            let sample = ManeuverScript::Sweep.sample(t);
            assert!(!sample.air_roll_held);
            assert!(sample.stick.length() <= 1.0);
        }
    }

    #[test]
    fn test_samples_are_deterministic() {
        for script in [
            ManeuverScript::Spin,
            ManeuverScript::Tornado,
            ManeuverScript::Sweep,
        ] {
            assert_eq!(script.sample(4.2), script.sample(4.2));
        }
    }
}
