//! Pure-software reference engine.
//!
//! A radix-2 decimation-in-frequency cascade over split component buffers.
//! Input is consumed in natural order and the result is left in bit-reversed
//! order, which is exactly the output contract the demarshaller corrects
//! for — no bit-reversal pass runs inside the engine. Useful as a stand-in
//! for a hardware bit-accurate model and for exercising the pipeline in
//! tests.

use crate::config::{Direction, EngineConfig};
use crate::engine::{Engine, StatusCode, STATUS_OK};
use crate::error::FftError;
use crate::kernels::{fft_chunk_2, fft_chunk_4, fft_chunk_n};
use crate::layout::{EngineInputs, EngineOutputs};
use crate::twiddles::{filter_twiddles, generate_twiddles};

/// Transform length exceeds the configured ceiling, or the layout buffer
/// lengths disagree with the length exponent.
pub const STATUS_BAD_LENGTH: StatusCode = 1;

/// The configuration requests a fixed-point datapath, which this engine
/// does not implement.
pub const STATUS_UNSUPPORTED_MODE: StatusCode = 2;

/// Double-precision reference implementation of the engine contract.
#[derive(Debug, Default)]
pub struct ReferenceEngine;

impl ReferenceEngine {
    /// Create a reference engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Per-invocation state: the configuration accepted at creation.
pub struct ReferenceState {
    config: EngineConfig,
}

impl Engine for ReferenceEngine {
    type State = ReferenceState;

    fn create(&self, config: &EngineConfig) -> Result<ReferenceState, FftError> {
        Ok(ReferenceState {
            config: config.clone(),
        })
    }

    fn simulate(
        &self,
        state: &mut ReferenceState,
        inputs: &EngineInputs,
        outputs: &mut EngineOutputs,
    ) -> StatusCode {
        if !state.config.floating_point {
            return STATUS_UNSUPPORTED_MODE;
        }

        let samples = inputs.samples();
        if inputs.nfft > state.config.max_nfft
            || samples != 1 << inputs.nfft
            || inputs.imags.len() != samples
            || outputs.samples() != samples
        {
            return STATUS_BAD_LENGTH;
        }

        outputs.reals.copy_from_slice(&inputs.reals);
        outputs.imags.copy_from_slice(&inputs.imags);
        dif_in_place(
            &mut outputs.reals,
            &mut outputs.imags,
            inputs.nfft,
            inputs.direction,
        );

        STATUS_OK
    }
}

/// DIF stage cascade, from the widest butterflies down to size 2. The
/// inverse direction conjugates the twiddles and is unnormalized; callers
/// divide by N to undo a forward transform.
fn dif_in_place(reals: &mut [f64], imags: &mut [f64], nfft: u32, direction: Direction) {
    let n = nfft as usize;
    if n == 0 {
        return;
    }

    let dist = 1 << (n - 1);
    let chunk_size = dist << 1;
    let (mut twiddles_re, mut twiddles_im) = generate_twiddles(dist, direction);

    if chunk_size > 4 {
        fft_chunk_n(reals, imags, &twiddles_re, &twiddles_im, dist);
    } else if chunk_size == 4 {
        fft_chunk_4(reals, imags, direction);
    } else if chunk_size == 2 {
        fft_chunk_2(reals, imags);
    }

    for t in (0..n - 1).rev() {
        let dist = 1 << t;
        let chunk_size = dist << 1;

        if chunk_size > 4 {
            filter_twiddles(&mut twiddles_re, &mut twiddles_im);
            fft_chunk_n(reals, imags, &twiddles_re, &twiddles_im, dist);
        } else if chunk_size == 4 {
            fft_chunk_4(reals, imags, direction);
        } else if chunk_size == 2 {
            fft_chunk_2(reals, imags);
        }
    }
}
