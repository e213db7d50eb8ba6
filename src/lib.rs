//! Marshalling pipeline for driving bit-accurate FFT core simulations.
//!
//! The crate converts an ordered complex signal into the split-component
//! layout a transform computation engine consumes, derives the transform
//! parameters (length exponent, per-stage scaling schedule, direction),
//! invokes the engine synchronously, and converts the engine's bit-reversed
//! output back into a natural-order complex spectrum.
//!
//! The engine itself is a pluggable collaborator behind the
//! [`Engine`] lifecycle trait; [`ReferenceEngine`] is a pure-software
//! implementation with the same output ordering a pipelined hardware core
//! produces.
//!
//! # Example
//!
//! ```
//! use fftsim::{transform, Complex64};
//!
//! let mut signal = vec![Complex64::new(0.0, 0.0); 1024];
//! signal[0].re = 1.0;
//!
//! // A unit impulse transforms to a flat spectrum.
//! let spectrum = transform(&signal)?;
//! assert_eq!(spectrum.len(), 1024);
//! assert!((spectrum[511].re - 1.0).abs() < 1e-12);
//! # Ok::<(), fftsim::FftError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod marshal;
pub mod reference;

mod kernels;
mod twiddles;

pub use num_complex::Complex64;

pub use crate::config::{Architecture, Direction, EngineConfig, SimConfig};
pub use crate::engine::{run_engine, Engine, StatusCode};
pub use crate::error::FftError;
pub use crate::layout::{EngineInputs, EngineOutputs};
pub use crate::marshal::{bit_reverse, demarshal_outputs, marshal_inputs};
pub use crate::reference::ReferenceEngine;

/// One engine plus one immutable configuration.
///
/// Each [`execute`](Self::execute) call owns its buffers and its own engine
/// state handle, so a pipeline can be shared across threads whenever the
/// engine hands out independent states.
pub struct FftPipeline<E: Engine> {
    engine: E,
    config: SimConfig,
}

impl<E: Engine> FftPipeline<E> {
    /// Bind an engine to a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configured length exponent is zero or exceeds the
    /// engine ceiling.
    pub fn new(engine: E, config: SimConfig) -> Self {
        assert!(config.nfft > 0 && config.nfft <= config.engine.max_nfft);
        Self { engine, config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Transform length in samples.
    pub fn samples(&self) -> usize {
        self.config.samples()
    }

    /// Transform `signal` and return the spectrum in natural frequency
    /// order.
    ///
    /// Marshal, simulate, demarshal; all buffers and the engine state are
    /// scoped to this call.
    ///
    /// # Errors
    ///
    /// [`FftError::InvalidLength`] if `signal` is not exactly
    /// [`samples`](Self::samples) long, [`FftError::Allocation`] if a buffer
    /// cannot be reserved, [`FftError::Simulation`] if the engine fails.
    pub fn execute(&self, signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
        let inputs = marshal_inputs(signal, &self.config)?;
        let outputs = run_engine(&self.engine, &self.config.engine, &inputs)?;
        demarshal_outputs(&outputs, self.config.nfft)
    }
}

/// One-shot 1024-point forward transform on the reference engine.
///
/// # Errors
///
/// See [`FftPipeline::execute`].
pub fn transform(signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    FftPipeline::new(ReferenceEngine::new(), SimConfig::default()).execute(signal)
}
