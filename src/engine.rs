//! The engine lifecycle contract and the adapter that drives it.
//!
//! A computation engine is consumed through three operations: `create`
//! allocates engine-internal state for one invocation, `simulate` runs the
//! transform synchronously, `destroy` releases the state. [`run_engine`] is
//! the adapter around that contract: it scopes the state to the call with a
//! guard so `destroy` runs exactly once on every exit path, pre-sizes the
//! output layout, and turns a non-zero status into a typed error.
//!
//! Alternate engines (fixed-point cores, other architecture variants, the
//! pure-software [`crate::reference::ReferenceEngine`]) substitute behind the
//! same trait.

use log::{debug, trace};

use crate::config::EngineConfig;
use crate::error::FftError;
use crate::layout::{EngineInputs, EngineOutputs};

/// Engine-defined result of a `simulate` call. Zero is success; any other
/// value is a failure whose meaning is opaque to the pipeline.
pub type StatusCode = i32;

/// The status code engines return on success.
pub const STATUS_OK: StatusCode = 0;

/// A bit-accurate transform computation engine.
///
/// `simulate` is a pure function of (state, input layout): it must fill the
/// pre-sized output layout and report a status, with no other observable
/// effects. States are never shared between invocations; each caller gets
/// its own from `create` and hands it back through `destroy`.
pub trait Engine {
    /// Engine-internal state, scoped to one invocation.
    type State;

    /// Allocate engine state for one invocation lifetime.
    ///
    /// # Errors
    ///
    /// Implementations fail here when state resources cannot be acquired.
    fn create(&self, config: &EngineConfig) -> Result<Self::State, FftError>;

    /// Run the transform, filling `outputs`. The returned status is only
    /// meaningful as zero/non-zero to callers.
    fn simulate(
        &self,
        state: &mut Self::State,
        inputs: &EngineInputs,
        outputs: &mut EngineOutputs,
    ) -> StatusCode;

    /// Release state obtained from `create`. Called exactly once per
    /// successful `create`, on every exit path.
    fn destroy(&self, state: Self::State) {
        drop(state);
    }
}

/// Returns engine state to `destroy` when the invocation ends, however it
/// ends.
struct StateGuard<'a, E: Engine> {
    engine: &'a E,
    state: Option<E::State>,
}

impl<'a, E: Engine> StateGuard<'a, E> {
    fn new(engine: &'a E, state: E::State) -> Self {
        Self {
            engine,
            state: Some(state),
        }
    }

    fn simulate(&mut self, inputs: &EngineInputs, outputs: &mut EngineOutputs) -> StatusCode {
        // state is present from construction until drop
        let state = self.state.as_mut().expect("engine state already released");
        self.engine.simulate(state, inputs, outputs)
    }
}

impl<E: Engine> Drop for StateGuard<'_, E> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            self.engine.destroy(state);
        }
    }
}

/// Drive one engine invocation: acquire state, pre-size the output layout,
/// simulate, release state.
///
/// # Errors
///
/// [`FftError::Allocation`] if the output buffers cannot be reserved,
/// [`FftError::Simulation`] carrying the status code if the engine reports
/// a failure. State is destroyed before either error propagates.
pub fn run_engine<E: Engine>(
    engine: &E,
    config: &EngineConfig,
    inputs: &EngineInputs,
) -> Result<EngineOutputs, FftError> {
    let mut guard = StateGuard::new(engine, engine.create(config)?);
    let mut outputs = EngineOutputs::with_samples(inputs.samples())?;

    debug!(
        "running {}-point simulation: arch={:?} nfft={} direction={} max_nfft={}",
        inputs.samples(),
        config.arch,
        inputs.nfft,
        inputs.direction.flag(),
        config.max_nfft,
    );
    trace!("scaling schedule: {:?}", inputs.scaling_schedule);

    let status = guard.simulate(inputs, &mut outputs);
    if status != STATUS_OK {
        return Err(FftError::Simulation(status));
    }

    Ok(outputs)
}
