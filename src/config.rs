//! Transform and engine configuration.
//!
//! A [`SimConfig`] is an immutable description of one pipeline instantiation:
//! transform length exponent, direction, the scaling value the per-stage
//! schedule is derived from, and the [`EngineConfig`] handed to the engine's
//! `create` operation. Configurations are plain values, so differently
//! configured pipelines can coexist in one process.

/// Inverse is for running the Inverse Fast Fourier Transform (IFFT).
/// Forward is for running the regular FFT.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    /// Leave the exponent term in the twiddle factor alone
    #[default]
    Forward,
    /// Multiply the exponent term in the twiddle factor by -1
    Inverse,
}

impl Direction {
    /// Wire encoding submitted to the engine: 0 for forward, 1 for inverse.
    #[must_use]
    pub fn flag(self) -> u32 {
        match self {
            Self::Forward => 0,
            Self::Inverse => 1,
        }
    }

    /// Sign of the twiddle-factor exponent.
    pub(crate) fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}

/// Engine architecture variant.
///
/// The variant determines how many butterfly stages the core decomposes the
/// transform into, and with it the length of the scaling schedule: the
/// radix-2 variants run one stage per bit of the length exponent, the
/// radix-4-based variants fold two bits into each stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Architecture {
    /// Radix-4 burst I/O
    Radix4Burst,
    /// Radix-2 burst I/O
    Radix2Burst,
    /// Pipelined, streaming I/O
    #[default]
    PipelinedStreaming,
    /// Radix-2 lite burst I/O
    Radix2Lite,
}

impl Architecture {
    /// Whether this variant decomposes into radix-2 stages.
    #[must_use]
    pub fn is_radix2(self) -> bool {
        matches!(self, Self::Radix2Burst | Self::Radix2Lite)
    }

    /// Number of butterfly stages for a transform of length `1 << nfft`.
    #[must_use]
    pub fn stage_count(self, nfft: u32) -> usize {
        if self.is_radix2() {
            nfft as usize
        } else {
            // radix-4 or radix-2^2
            ((nfft + 1) / 2) as usize
        }
    }
}

/// Static engine parameters, fixed at state creation.
///
/// The bit widths are informational when `floating_point` is set; the
/// capability flags describe what the core was generated with, not what a
/// particular invocation uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest supported length exponent.
    pub max_nfft: u32,
    /// Butterfly decomposition variant.
    pub arch: Architecture,
    /// Whether the transform length can vary per invocation.
    pub runtime_length: bool,
    /// Input sample width in bits (fixed-point mode only).
    pub input_width: u32,
    /// Twiddle factor width in bits (fixed-point mode only).
    pub twiddle_width: u32,
    /// Per-stage scaling support.
    pub scaling: bool,
    /// Block-floating-point support.
    pub block_floating_point: bool,
    /// Rounding (as opposed to truncation) after scaling.
    pub rounding: bool,
    /// Double-precision floating-point datapath.
    pub floating_point: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_nfft: 10,
            arch: Architecture::PipelinedStreaming,
            runtime_length: false,
            input_width: 32,
            twiddle_width: 25,
            scaling: true,
            block_floating_point: true,
            rounding: true,
            floating_point: true,
        }
    }
}

/// One pipeline instantiation: length, direction, scaling value, engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Length exponent; the transform covers `1 << nfft` samples.
    pub nfft: u32,
    /// Transform direction.
    pub direction: Direction,
    /// Packed scaling value the per-stage schedule is derived from.
    /// Zero means no stage scales its output down.
    pub scaling: u32,
    /// Parameters handed to the engine's `create` operation.
    pub engine: EngineConfig,
}

impl Default for SimConfig {
    /// The 1024-point forward instantiation with an all-zero schedule.
    fn default() -> Self {
        Self::new(10, Direction::Forward)
    }
}

impl SimConfig {
    /// Create a configuration for a `1 << nfft`-point transform.
    ///
    /// # Panics
    ///
    /// Panics if `nfft` is zero or exceeds the default engine ceiling.
    #[must_use]
    pub fn new(nfft: u32, direction: Direction) -> Self {
        let engine = EngineConfig::default();
        assert!(nfft > 0 && nfft <= engine.max_nfft);

        Self {
            nfft,
            direction,
            scaling: 0,
            engine,
        }
    }

    /// Replace the packed scaling value.
    #[must_use]
    pub fn with_scaling(mut self, scaling: u32) -> Self {
        self.scaling = scaling;
        self
    }

    /// Replace the transform direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Transform length in samples.
    #[must_use]
    pub fn samples(&self) -> usize {
        1 << self.nfft
    }

    /// Number of butterfly stages the engine runs for this length.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.engine.arch.stage_count(self.nfft)
    }
}

/// Per-stage scaling schedule derived from a packed scaling value.
///
/// Each stage may scale its output down by 0 to 3 bits; stage `s` reads bits
/// `2s..2s + 2` of `scaling`, so stage 0 consumes the least-significant pair.
#[must_use]
pub fn scaling_schedule(scaling: u32, stages: usize) -> Vec<u32> {
    let mut schedule = Vec::with_capacity(stages);
    let mut remaining = scaling;

    for _ in 0..stages {
        schedule.push(remaining & 0x3);
        remaining >>= 2;
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_count_per_architecture() {
        assert_eq!(Architecture::Radix2Burst.stage_count(10), 10);
        assert_eq!(Architecture::Radix2Lite.stage_count(10), 10);
        assert_eq!(Architecture::PipelinedStreaming.stage_count(10), 5);
        assert_eq!(Architecture::Radix4Burst.stage_count(10), 5);

        // odd exponents round up on the radix-4 paths
        assert_eq!(Architecture::PipelinedStreaming.stage_count(9), 5);
        assert_eq!(Architecture::Radix4Burst.stage_count(3), 2);
    }

    #[test]
    fn schedule_is_all_zero_for_zero_scaling() {
        assert_eq!(scaling_schedule(0, 5), vec![0; 5]);
    }

    #[test]
    fn schedule_consumes_two_bits_per_stage_lsb_first() {
        // stage 0 <- 0b01, stage 1 <- 0b11, stage 2 <- 0b10, rest zero
        let schedule = scaling_schedule(0b10_11_01, 5);
        assert_eq!(schedule, vec![1, 3, 2, 0, 0]);
    }

    #[test]
    fn schedule_is_deterministic() {
        let stages = Architecture::PipelinedStreaming.stage_count(10);
        let first = scaling_schedule(0b01_10, stages);
        let second = scaling_schedule(0b01_10, stages);
        assert_eq!(first, second);
    }

    #[test]
    fn default_config_is_the_1024_point_instantiation() {
        let config = SimConfig::default();
        assert_eq!(config.samples(), 1024);
        assert_eq!(config.stage_count(), 5);
        assert_eq!(config.direction.flag(), 0);
        assert!(config.engine.floating_point);
    }

    #[test]
    #[should_panic]
    fn rejects_length_above_engine_ceiling() {
        let _ = SimConfig::new(11, Direction::Forward);
    }
}
