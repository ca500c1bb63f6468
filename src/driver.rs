//! Hardware driver boundary.
//!
//! The fade pipeline produces three boolean pulse trains; the physical LED
//! driver consumes them together with fixed enable and current-limit
//! settings. Implement [`RgbDriver`] for your hardware.

use crate::pwm::Pulses;

/// Per-channel drive strength in driver current steps.
///
/// On-chip constant-current LED drivers stack a small number of fixed
/// current sources per channel (the iCE40 RGB driver exposes six); one step
/// is the minimum drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentSteps(u8);

impl CurrentSteps {
    /// Minimum allowed drive current, a single step.
    pub const MIN: Self = Self(1);

    /// Maximum drive current, all six steps.
    pub const MAX: Self = Self(6);

    /// Creates a drive strength, clamped to the supported step range.
    pub const fn new(steps: u8) -> Self {
        if steps > Self::MAX.0 {
            Self::MAX
        } else {
            Self(steps)
        }
    }

    /// Returns the number of enabled current steps.
    pub const fn steps(self) -> u8 {
        self.0
    }
}

/// Per-step current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CurrentMode {
    /// Each enabled step drives its full rated current.
    Full,

    /// Each enabled step drives half its rated current.
    Half,
}

/// Fixed driver settings, passed once at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Per-step current mode.
    pub current_mode: CurrentMode,

    /// Red channel drive strength.
    pub red_current: CurrentSteps,

    /// Green channel drive strength.
    pub green_current: CurrentSteps,

    /// Blue channel drive strength.
    pub blue_current: CurrentSteps,
}

impl Default for DriverConfig {
    /// Half-current mode at minimum drive on every channel.
    fn default() -> Self {
        Self {
            current_mode: CurrentMode::Half,
            red_current: CurrentSteps::MIN,
            green_current: CurrentSteps::MIN,
            blue_current: CurrentSteps::MIN,
        }
    }
}

/// Trait for abstracting the physical RGB LED driver.
///
/// Implement this for your hardware (GPIO bit-banging, an on-chip
/// constant-current driver, a simulator). Handle any hardware errors
/// internally - these methods cannot fail.
pub trait RgbDriver {
    /// Applies the fixed settings and asserts the enable line.
    ///
    /// Called exactly once, before the first tick. The enable line stays
    /// asserted for the process lifetime.
    fn enable(&mut self, config: &DriverConfig);

    /// Presents one tick's pulse outputs, synchronized across channels.
    fn write(&mut self, pulses: Pulses);
}
