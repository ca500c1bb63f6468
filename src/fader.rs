//! Tick-driven breathing fade pipeline.
//!
//! Provides [`RgbFader`] which owns the whole generation pipeline: the
//! phase counter, the gamma table, the registered channel intensities, and
//! the shared PWM counter. Each [`tick`](RgbFader::tick) performs one
//! synchronous update in fixed order and hands the resulting pulses to the
//! driver.

use crate::driver::{DriverConfig, RgbDriver};
use crate::gamma::GammaTable;
use crate::intensity::ChannelValues;
use crate::phase::PhaseCounter;
use crate::pwm::{Pulses, PwmCounter};
use palette::Srgb;

/// Drives an RGB LED through a gamma-corrected breathing fade.
///
/// The pipeline is a chain of register stages updated once per tick:
/// the phase counter advances, the decoded fields select and shape each
/// channel's target intensity through the gamma table, and the shared PWM
/// counter turns the intensities into boolean pulses. Intensities and
/// pulses are registered with a one-tick delay, so each stage sees the
/// previous tick's outputs - the same timing a synchronous hardware
/// pipeline would have. At steady state this skew is invisible: the
/// decoded fields only change once every 65536 ticks.
///
/// # Type Parameters
/// * `D` - LED driver implementation type
pub struct RgbFader<D: RgbDriver> {
    driver: D,
    gamma: GammaTable,
    phase: PhaseCounter,
    values: ChannelValues,
    pwm: PwmCounter,
    pulses: Pulses,
}

impl<D: RgbDriver> RgbFader<D> {
    /// Creates a fader starting at phase zero.
    ///
    /// Applies the driver's fixed settings and asserts its enable line
    /// before the first tick. At phase zero no channel is gated on, so the
    /// output starts dark.
    pub fn new(driver: D, gamma: GammaTable, config: &DriverConfig) -> Self {
        Self::with_phase(driver, gamma, config, 0)
    }

    /// Creates a fader with the pipeline settled at an arbitrary phase.
    ///
    /// The intensity and pulse registers hold the values they would have
    /// after running at this phase, so the output is steady from the first
    /// tick. Intended for host-side previews and tests; hardware
    /// deployments start at phase zero.
    pub fn with_phase(mut driver: D, gamma: GammaTable, config: &DriverConfig, phase: u32) -> Self {
        let phase = PhaseCounter::at(phase);
        let values = ChannelValues::compute(phase.fields(), &gamma);
        let pwm = PwmCounter::new();
        let pulses = Pulses::compare(pwm, values);

        driver.enable(config);
        driver.write(pulses);

        Self {
            driver,
            gamma,
            phase,
            values,
            pwm,
            pulses,
        }
    }

    /// Advances the pipeline one tick and writes the new pulses to the
    /// driver.
    ///
    /// Every stage samples the previous tick's registers before any
    /// register commits: the pulse comparison uses the previous counter and
    /// intensities, and the intensities are recomputed from the previous
    /// phase. Call once per timer period from a single context; must not be
    /// reentered.
    pub fn tick(&mut self) -> Pulses {
        let next_pulses = Pulses::compare(self.pwm, self.values);
        let next_values = ChannelValues::compute(self.phase.fields(), &self.gamma);

        self.phase.advance();
        self.pwm.advance();
        self.values = next_values;
        self.pulses = next_pulses;

        self.driver.write(self.pulses);
        self.pulses
    }

    /// Returns the current phase counter value.
    pub fn phase(&self) -> u32 {
        self.phase.value()
    }

    /// Returns the registered per-channel target intensities.
    ///
    /// These reflect the previous tick's decoded fields.
    pub fn channel_values(&self) -> ChannelValues {
        self.values
    }

    /// Returns the pulse outputs presented to the driver on the last tick.
    pub fn pulses(&self) -> Pulses {
        self.pulses
    }

    /// Returns the target color as duty-cycle fractions.
    ///
    /// For hardware with its own PWM peripheral this view can replace the
    /// per-tick pulses: program the three duty cycles whenever the
    /// intensities change, at most once every
    /// [`FADE_HOLD_TICKS`](crate::phase::FADE_HOLD_TICKS) ticks.
    pub fn target_color(&self) -> Srgb {
        Srgb::new(
            f32::from(self.values.red) / f32::from(u16::MAX),
            f32::from(self.values.green) / f32::from(u16::MAX),
            f32::from(self.values.blue) / f32::from(u16::MAX),
        )
    }

    /// Returns the gamma table in use.
    pub fn gamma(&self) -> &GammaTable {
        &self.gamma
    }

    /// Returns a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
