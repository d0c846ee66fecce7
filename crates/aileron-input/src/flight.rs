//! Flight-control axis assembly from digital and analog sources.

use glam::Vec2;

/// Which way a held air-roll binding rolls the vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AirRollDirection {
    #[default]
    Left,
    Right,
}

impl AirRollDirection {
    /// Flip between left and right.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Full roll deflection while the binding is held, zero otherwise.
    pub fn roll_axis(self, held: bool) -> f32 {
        if !held {
            return 0.0;
        }
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Pitch/yaw/roll control deflections, each in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightInputs {
    /// Positive pitches the nose up.
    pub pitch: f32,
    /// Positive yaws the nose left.
    pub yaw: f32,
    /// Positive rolls clockwise as seen from behind the vehicle.
    pub roll: f32,
}

impl FlightInputs {
    pub const NEUTRAL: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Map a shaped stick sample plus an air-roll axis onto flight axes.
    ///
    /// Stick up pitches up. Stick right must yaw right, hence the sign flip
    /// on the yaw axis (positive yaw turns the nose left).
    pub fn from_stick(shaped: Vec2, roll: f32) -> Self {
        Self {
            pitch: shaped.y,
            yaw: -shaped.x,
            roll,
        }
    }

    /// Merge two sources per axis: `self` wins on every axis where it is
    /// deflected, `fallback` fills in the rest.
    #[must_use]
    pub fn or(self, fallback: FlightInputs) -> Self {
        Self {
            pitch: if self.pitch != 0.0 { self.pitch } else { fallback.pitch },
            yaw: if self.yaw != 0.0 { self.yaw } else { fallback.yaw },
            roll: if self.roll != 0.0 { self.roll } else { fallback.roll },
        }
    }

    /// True when every axis is centered.
    pub fn is_neutral(&self) -> bool {
        self.pitch == 0.0 && self.yaw == 0.0 && self.roll == 0.0
    }
}

/// Pressed state for the six digital flight keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyPairs {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

impl KeyPairs {
    /// Collapse each key pair into a `-1/0/+1` axis. Opposing keys cancel.
    pub fn axes(&self) -> FlightInputs {
        FlightInputs {
            pitch: digital_axis(self.pitch_up, self.pitch_down),
            yaw: digital_axis(self.yaw_left, self.yaw_right),
            roll: digital_axis(self.roll_right, self.roll_left),
        }
    }
}

fn digital_axis(positive: bool, negative: bool) -> f32 {
    f32::from(positive) - f32::from(negative)
}
