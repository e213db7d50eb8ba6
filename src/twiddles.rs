//! Twiddle factor generation for the reference engine.

use std::f64::consts::PI;

use crate::config::Direction;

/// Roots of unity for the widest butterfly stage, built with a rotation
/// recurrence instead of `dist` separate `sin_cos` evaluations.
///
/// # Panics
///
/// Panics if `dist` is zero.
pub(crate) fn generate_twiddles(dist: usize, direction: Direction) -> (Vec<f64>, Vec<f64>) {
    let mut twiddles_re = vec![0.0; dist];
    let mut twiddles_im = vec![0.0; dist];
    twiddles_re[0] = 1.0;

    let angle = direction.sign() * PI / (dist as f64);
    let (st, ct) = angle.sin_cos();
    let (mut w_re, mut w_im) = (1.0, 0.0);

    twiddles_re
        .iter_mut()
        .skip(1)
        .zip(twiddles_im.iter_mut().skip(1))
        .for_each(|(re, im)| {
            let temp = w_re;
            w_re = w_re * ct - w_im * st;
            w_im = temp * st + w_im * ct;
            *re = w_re;
            *im = w_im;
        });

    (twiddles_re, twiddles_im)
}

/// Keep every other twiddle. A stage at distance `d` uses `exp(sign*i*PI*k/d)`
/// for `k < d`; the next stage down needs the even-indexed subset.
pub(crate) fn filter_twiddles(twiddles_re: &mut Vec<f64>, twiddles_im: &mut Vec<f64>) {
    assert_eq!(twiddles_re.len(), twiddles_im.len());
    let half = twiddles_re.len() / 2;

    for k in 0..half {
        twiddles_re[k] = twiddles_re[2 * k];
        twiddles_im[k] = twiddles_im[2 * k];
    }
    twiddles_re.truncate(half);
    twiddles_im.truncate(half);
}
