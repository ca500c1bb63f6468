//! Shared test infrastructure for rgb-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use heapless::Vec;
use rgb_fader::{DriverConfig, Pulses, RgbDriver};

/// Mock driver that counts asserted ticks per channel and records the
/// configuration it was enabled with
pub struct MockDriver {
    config: Option<DriverConfig>,
    enable_calls: u32,
    writes: u64,
    red_on: u64,
    green_on: u64,
    blue_on: u64,
    history: Vec<Pulses, 32>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            config: None,
            enable_calls: 0,
            writes: 0,
            red_on: 0,
            green_on: 0,
            blue_on: 0,
            history: Vec::new(),
        }
    }

    /// Configuration captured from the enable call, if any
    pub fn config(&self) -> Option<DriverConfig> {
        self.config
    }

    pub fn enable_calls(&self) -> u32 {
        self.enable_calls
    }

    /// Total number of pulse writes received
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Asserted-tick counts per channel as (red, green, blue)
    pub fn on_counts(&self) -> (u64, u64, u64) {
        (self.red_on, self.green_on, self.blue_on)
    }

    /// The first pulse writes received (bounded capture)
    pub fn history(&self) -> &[Pulses] {
        &self.history
    }
}

impl RgbDriver for MockDriver {
    fn enable(&mut self, config: &DriverConfig) {
        self.config = Some(*config);
        self.enable_calls += 1;
    }

    fn write(&mut self, pulses: Pulses) {
        self.writes += 1;
        if pulses.red {
            self.red_on += 1;
        }
        if pulses.green {
            self.green_on += 1;
        }
        if pulses.blue {
            self.blue_on += 1;
        }
        let _ = self.history.push(pulses);
    }
}

/// Phase value with the given gate bits, direction bit, and fade index
pub fn phase_at(color_bits: u32, falling: bool, fade: u32) -> u32 {
    (color_bits << 25) | (u32::from(falling) << 24) | (fade << 16)
}
