//! Split-component data layouts exchanged with the engine.
//!
//! The engine consumes and produces parallel `reals`/`imags` buffers rather
//! than interleaved complex values. Output buffers are indexed in bit-reversed
//! order relative to natural frequency order; see [`crate::marshal`] for the
//! conversions on both ends.

use std::collections::TryReserveError;

use crate::config::Direction;

/// Marshalled input for one engine invocation.
#[derive(Debug)]
pub struct EngineInputs {
    /// Real components, in caller index order.
    pub reals: Vec<f64>,
    /// Imaginary components, in caller index order.
    pub imags: Vec<f64>,
    /// One 0-3 bit scale-down entry per butterfly stage, stage 0 first.
    pub scaling_schedule: Vec<u32>,
    /// Length exponent of this transform.
    pub nfft: u32,
    /// Transform direction.
    pub direction: Direction,
}

impl EngineInputs {
    /// Transform length in samples.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.reals.len()
    }
}

/// Raw engine output, bit-reversed relative to natural frequency order.
#[derive(Debug)]
pub struct EngineOutputs {
    /// Real components.
    pub reals: Vec<f64>,
    /// Imaginary components.
    pub imags: Vec<f64>,
}

impl EngineOutputs {
    /// Pre-sized, zero-filled component buffers for a transform of
    /// `samples` points.
    ///
    /// # Errors
    ///
    /// Fails if either component buffer cannot be reserved.
    pub fn with_samples(samples: usize) -> Result<Self, TryReserveError> {
        let mut reals = try_buffer(samples)?;
        let mut imags = try_buffer(samples)?;
        reals.resize(samples, 0.0);
        imags.resize(samples, 0.0);

        Ok(Self { reals, imags })
    }

    /// Transform length in samples.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.reals.len()
    }
}

/// An empty `Vec` with `len` elements of capacity, or an allocation error
/// instead of an abort when the reservation fails.
pub(crate) fn try_buffer<T>(len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    Ok(buffer)
}
