pub extern crate rustfft;

// export rustfft so tests and benches share one reference FFT
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that both components of two complex numbers are approximately
/// equal.
///
/// # Panics
///
/// Panics if either component of `actual` is too far from `expected`
#[track_caller]
pub fn assert_complex_closeness(actual: Complex64, expected: Complex64, epsilon: f64) {
    assert_float_closeness(actual.re, expected.re, epsilon);
    assert_float_closeness(actual.im, expected.im, epsilon);
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_signal_stays_in_range() {
        let n = 1 << 12;
        let mut reals = vec![0.0; n];
        let mut imags = vec![0.0; n];

        gen_random_signal::<f64>(&mut reals, &mut imags);

        assert!(reals.iter().chain(imags.iter()).all(|v| v.abs() < 1.0));
        // an all-zero buffer means the generator did nothing
        assert!(reals.iter().any(|&v| v != 0.0));
    }
}
