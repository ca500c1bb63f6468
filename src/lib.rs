#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbFader`**: the tick-driven pipeline; owns all per-tick state and feeds the driver
//! - **`GammaTable`**: precomputed correction curve, built once before the first tick
//! - **`PhaseCounter`** / **`PhaseFields`**: free-running 28-bit counter and the
//!   color-select, direction, and fade fields decoded from it
//! - **`ColorSelect`** / **`Direction`**: per-channel gate bits and ramp direction
//! - **`ChannelValues`**: registered 16-bit target intensity per channel
//! - **`PwmCounter`** / **`Pulses`**: shared 16-bit PWM counter and the boolean
//!   pulse outputs it produces
//! - **`RgbDriver`**: trait to implement for your LED driver hardware
//! - **`DriverConfig`**: fixed enable/current settings passed once at initialization
//!
//! Call `tick()` once per timer period; one full PWM period is 65536 ticks and
//! a full fade cycle is 2^28 ticks. When implementing `RgbDriver` for your
//! hardware, route the three boolean pulses to your channel outputs at the
//! same tick rate.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod gamma;
pub mod phase;
pub mod intensity;
pub mod pwm;
pub mod driver;
pub mod fader;

pub use gamma::{DEFAULT_GAMMA, GammaError, GammaTable};
pub use phase::{ColorSelect, Direction, PhaseCounter, PhaseFields};
pub use intensity::ChannelValues;
pub use pwm::{Pulses, PwmCounter};
pub use driver::{CurrentMode, CurrentSteps, DriverConfig, RgbDriver};
pub use fader::RgbFader;
