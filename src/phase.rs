//! Free-running phase counter and field decoding.
//!
//! The 28-bit phase counter is the sole source of time in the system. Its
//! top three bits gate the color channels, the next bit picks the ramp
//! direction, and the middle eight bits index the gamma table. The low
//! 16 bits act as an implicit clock divider: the decoded fields change only
//! once every [`FADE_HOLD_TICKS`] ticks.

/// Width of the phase counter in bits.
pub const PHASE_WIDTH: u32 = 28;

/// Width of the fade index field in bits.
pub const FADE_WIDTH: u32 = 8;

/// Number of distinct fade index values.
pub const FADE_STEPS: usize = 1 << FADE_WIDTH;

/// Number of ticks before the phase counter wraps back to zero.
pub const PHASE_PERIOD: u32 = 1 << PHASE_WIDTH;

/// Number of ticks the decoded fields hold before the fade index advances.
pub const FADE_HOLD_TICKS: u32 = 1 << FADE_SHIFT;

const PHASE_MASK: u32 = PHASE_PERIOD - 1;
const COLOR_SHIFT: u32 = PHASE_WIDTH - 3;
const DIRECTION_BIT: u32 = PHASE_WIDTH - 4;
const FADE_SHIFT: u32 = PHASE_WIDTH - 4 - FADE_WIDTH;

/// The free-running 28-bit phase counter.
///
/// Increments by exactly one every tick and wraps modulo 2^28. Never reset
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseCounter(u32);

impl PhaseCounter {
    /// Creates a counter starting at zero.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a counter starting at an arbitrary phase, masked to 28 bits.
    ///
    /// Hardware deployments start at zero; this is for host-side previews
    /// and tests.
    pub const fn at(phase: u32) -> Self {
        Self(phase & PHASE_MASK)
    }

    /// Advances one tick, wrapping modulo 2^28.
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) & PHASE_MASK;
    }

    /// Returns the current counter value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Decodes the fields at the current phase.
    pub const fn fields(self) -> PhaseFields {
        PhaseFields::decode(self.0)
    }
}

/// Three-bit channel gate decoded from the top of the phase counter.
///
/// Each bit independently enables one channel; this is not a one-hot
/// selector, and all eight combinations occur over a full counter period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSelect(u8);

impl ColorSelect {
    /// Creates a gate from the low three bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Returns the raw gate bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the red channel is gated on.
    pub const fn red(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Returns true if the green channel is gated on.
    pub const fn green(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Returns true if the blue channel is gated on.
    pub const fn blue(self) -> bool {
        self.0 & 0b100 != 0
    }
}

/// Ramp direction decoded from the phase counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Gamma value used directly; brightness ramps up.
    Rising,

    /// Gamma value complemented; brightness ramps down.
    Falling,
}

/// The fields decoded from one phase counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseFields {
    /// Per-channel gate bits.
    pub color: ColorSelect,

    /// Ramp direction.
    pub direction: Direction,

    /// Index into the gamma table.
    pub fade: u8,
}

impl PhaseFields {
    /// Extracts the fields from a raw phase value.
    ///
    /// Pure and stateless; bits above the field layout are ignored.
    pub const fn decode(phase: u32) -> Self {
        let color = ColorSelect::from_bits((phase >> COLOR_SHIFT) as u8);
        let direction = if (phase >> DIRECTION_BIT) & 1 == 0 {
            Direction::Rising
        } else {
            Direction::Falling
        };
        let fade = (phase >> FADE_SHIFT) as u8;

        Self {
            color,
            direction,
            fade,
        }
    }
}
