//! Input shaping for the aileron trainer.
//!
//! The host samples devices and hands raw values in; this crate turns them
//! into clean flight-control axes. Analog sticks pass through a configurable
//! deadzone topology plus sensitivity, digital key pairs collapse to
//! `-1/0/+1` axes, and the two sources merge per axis with the digital side
//! taking priority.

mod flight;
mod shaper;

pub use flight::{AirRollDirection, FlightInputs, KeyPairs};
pub use shaper::{DeadzoneTopology, StickConfig, shape};
