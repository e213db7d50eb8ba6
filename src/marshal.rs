//! Conversions between caller-facing complex samples and engine layouts.
//!
//! The input marshaller splits an ordered complex signal into the parallel
//! component buffers the engine reads, preserving index order, and attaches
//! the derived scaling schedule. The output demarshaller rebuilds complex
//! samples from the engine's component buffers, undoing the bit-reversed
//! addressing the pipelined core leaves its results in.

use std::collections::TryReserveError;

use bytemuck::cast_slice;
use log::trace;
use num_complex::Complex64;

use crate::config::{scaling_schedule, SimConfig};
use crate::error::FftError;
use crate::layout::{try_buffer, EngineInputs, EngineOutputs};

/// Marshal a complex signal into the engine's input layout.
///
/// Position `i` of the signal maps to position `i` of both component buffers;
/// no reordering happens on input.
///
/// # Errors
///
/// [`FftError::InvalidLength`] if `signal` is not exactly the configured
/// transform length, [`FftError::Allocation`] if a component buffer cannot
/// be reserved.
pub fn marshal_inputs(signal: &[Complex64], config: &SimConfig) -> Result<EngineInputs, FftError> {
    let samples = config.samples();
    if signal.len() != samples {
        return Err(FftError::InvalidLength {
            expected: samples,
            actual: signal.len(),
        });
    }

    let (reals, imags) = split_components(signal)?;
    let scaling_schedule = scaling_schedule(config.scaling, config.stage_count());
    trace!(
        "marshalled {samples} samples, scaling schedule {:?}",
        scaling_schedule
    );

    Ok(EngineInputs {
        reals,
        imags,
        scaling_schedule,
        nfft: config.nfft,
        direction: config.direction,
    })
}

/// Demarshal engine output into complex samples in natural frequency order.
///
/// The pipelined core emits its results bit-reversed: output index `i` holds
/// natural frequency index `bit_reverse(i, nfft)`. The gather below is the
/// inverse of that permutation.
///
/// # Errors
///
/// [`FftError::Allocation`] if the result buffer cannot be reserved.
pub fn demarshal_outputs(outputs: &EngineOutputs, nfft: u32) -> Result<Vec<Complex64>, FftError> {
    let samples = outputs.samples();
    let mut spectrum = try_buffer(samples)?;

    for index in 0..samples {
        let addr = bit_reverse(index, nfft);
        spectrum.push(Complex64::new(outputs.reals[addr], outputs.imags[addr]));
    }

    Ok(spectrum)
}

/// Reverse the low `bits` bits of `index`.
#[must_use]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return index;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Separates interleaved `[re, im, re, im, ..]` components into
/// `([re, ..], [im, ..])`, preserving order.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
fn split_components(signal: &[Complex64]) -> Result<(Vec<f64>, Vec<f64>), TryReserveError> {
    let components: &[f64] = cast_slice(signal);

    let mut reals = try_buffer(signal.len())?;
    let mut imags = try_buffer(signal.len())?;
    for pair in components.chunks_exact(2) {
        reals.push(pair[0]);
        imags.push(pair[1]);
    }

    Ok((reals, imags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Direction;

    fn gen_signal(samples: usize) -> Vec<Complex64> {
        (0..samples)
            .map(|i| Complex64::new(i as f64, -(i as f64)))
            .collect()
    }

    #[test]
    fn marshal_preserves_index_order() {
        let config = SimConfig::new(3, Direction::Forward);
        let signal = gen_signal(8);

        let inputs = marshal_inputs(&signal, &config).unwrap();

        assert_eq!(inputs.samples(), 8);
        assert_eq!(inputs.nfft, 3);
        for (i, sample) in signal.iter().enumerate() {
            assert_eq!(inputs.reals[i], sample.re);
            assert_eq!(inputs.imags[i], sample.im);
        }
    }

    #[test]
    fn marshal_rejects_wrong_length() {
        let config = SimConfig::new(3, Direction::Forward);
        let signal = gen_signal(7);

        match marshal_inputs(&signal, &config) {
            Err(FftError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("expected InvalidLength, got {other:?}"),
        }
    }

    #[test]
    fn marshal_attaches_schedule_of_stage_count_length() {
        let config = SimConfig::new(10, Direction::Forward).with_scaling(0b10_01);
        let inputs = marshal_inputs(&gen_signal(1024), &config).unwrap();

        assert_eq!(inputs.scaling_schedule, vec![1, 2, 0, 0, 0]);
    }

    #[test]
    fn split_matches_naive_unzip() {
        let signal = gen_signal(130);
        let (naive_re, naive_im): (Vec<f64>, Vec<f64>) =
            signal.iter().map(|z| (z.re, z.im)).unzip();

        let (reals, imags) = split_components(&signal).unwrap();
        assert_eq!(reals, naive_re);
        assert_eq!(imags, naive_im);
    }

    #[test]
    fn bit_reverse_known_values() {
        // 3 bits: 0b001 <-> 0b100, 0b011 <-> 0b110
        assert_eq!(bit_reverse(0, 3), 0);
        assert_eq!(bit_reverse(1, 3), 4);
        assert_eq!(bit_reverse(3, 3), 6);
        assert_eq!(bit_reverse(5, 3), 5);
        assert_eq!(bit_reverse(1, 10), 512);
        assert_eq!(bit_reverse(0b11_0000_0101, 10), 0b10_1000_0011);
    }

    #[test]
    fn bit_reverse_is_an_involution_and_bijection() {
        for bits in [3_u32, 4, 10] {
            let samples = 1 << bits;
            let mut seen = vec![false; samples];

            for index in 0..samples {
                let addr = bit_reverse(index, bits);
                assert_eq!(bit_reverse(addr, bits), index);
                assert!(!seen[addr]);
                seen[addr] = true;
            }
        }
    }

    #[test]
    fn demarshal_gathers_from_bit_reversed_addresses() {
        // Engine layout holding value k at position bit_reverse(k, 3) must
        // come back out as 0..8 in natural order.
        let mut outputs = EngineOutputs::with_samples(8).unwrap();
        for k in 0..8 {
            outputs.reals[bit_reverse(k, 3)] = k as f64;
            outputs.imags[bit_reverse(k, 3)] = -(k as f64);
        }

        let spectrum = demarshal_outputs(&outputs, 3).unwrap();
        for (k, z) in spectrum.iter().enumerate() {
            assert_eq!(z.re, k as f64);
            assert_eq!(z.im, -(k as f64));
        }
    }
}
