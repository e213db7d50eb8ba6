use std::collections::TryReserveError;

use thiserror::Error;

use crate::engine::StatusCode;

/// Errors the simulation pipeline can produce.
///
/// None of these are recovered locally: an error aborts the invocation after
/// all buffers and the engine state have been released, and no partial output
/// is returned.
#[derive(Debug, Error)]
pub enum FftError {
    /// The input signal length does not match the configured transform size.
    #[error("input has {actual} samples, transform is configured for {expected}")]
    InvalidLength {
        /// Configured transform size in samples.
        expected: usize,
        /// Length of the signal that was submitted.
        actual: usize,
    },
    /// A component buffer could not be allocated.
    #[error("couldn't allocate memory for input and output data arrays")]
    Allocation(#[from] TryReserveError),
    /// The computation engine reported a failure; the code is engine-defined.
    #[error("an error occurred when simulating the FFT core: return code {0}")]
    Simulation(StatusCode),
}
