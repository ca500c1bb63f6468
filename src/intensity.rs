//! Per-channel target intensity computation.

use crate::gamma::GammaTable;
use crate::phase::{Direction, PhaseFields};

/// Target PWM intensities for the three channels.
///
/// Sixteen-bit values where `u16::MAX` is full duty. The fader registers
/// these with a one-tick delay, so they always reflect the previous tick's
/// decoded fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelValues {
    /// Red channel target intensity.
    pub red: u16,

    /// Green channel target intensity.
    pub green: u16,

    /// Blue channel target intensity.
    pub blue: u16,
}

impl ChannelValues {
    /// All channels off.
    pub const OFF: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Computes the target intensities for one set of decoded fields.
    ///
    /// A gated-off channel is forced to zero, not gamma-corrected zero. A
    /// falling ramp uses the bitwise complement of the gamma value, so the
    /// descending curve mirrors the ascending one.
    pub fn compute(fields: PhaseFields, table: &GammaTable) -> Self {
        let raw = table.fade_value(fields.fade);

        Self {
            red: channel_value(fields.color.red(), fields.direction, raw),
            green: channel_value(fields.color.green(), fields.direction, raw),
            blue: channel_value(fields.color.blue(), fields.direction, raw),
        }
    }
}

fn channel_value(enabled: bool, direction: Direction, raw: u16) -> u16 {
    if !enabled {
        return 0;
    }

    match direction {
        Direction::Rising => raw,
        Direction::Falling => !raw,
    }
}
