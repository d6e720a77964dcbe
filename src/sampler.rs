//! Uniform and discrete-Gaussian sampling over `Z_q`.

use rand::{CryptoRng, RngCore};
use rand_distr::{Distribution, Normal};

use crate::error::Error;
use crate::poly::Polynomial;

/// Draws a length-n polynomial with coefficients uniform over `{0, ..., q-1}`.
///
/// Uses rejection sampling against the smallest power-of-two mask `>= q` so
/// that no residue class is over-represented (the naive `draw % q` pattern
/// is biased whenever `q` is not itself a power of two).
pub fn uniform<R: RngCore + CryptoRng>(n: usize, q: u64, rng: &mut R) -> Result<Polynomial, Error> {
    if q < 2 {
        return Err(Error::InvalidParameter(format!(
            "q = {q} must be at least 2"
        )));
    }

    let bits = 64 - (q - 1).leading_zeros();
    let mask = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };

    let mut rejections = 0u32;
    let coeffs = (0..n)
        .map(|_| loop {
            let candidate = rng.next_u64() & mask;
            if candidate < q {
                break candidate;
            }
            rejections += 1;
        })
        .collect();

    tracing::trace!(target: "rlwe_scheme::sampler", n, q, rejections, "uniform sample drawn");
    Ok(Polynomial::new(coeffs))
}

/// Draws a length-n error polynomial from a centered Gaussian of standard
/// deviation `sigma`, rounded to the nearest integer and reduced mod q.
pub fn gaussian_error<R: RngCore + CryptoRng>(
    n: usize,
    q: u64,
    sigma: f64,
    rng: &mut R,
) -> Result<Polynomial, Error> {
    if !(sigma > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "sigma = {sigma} must be positive"
        )));
    }
    let normal = Normal::new(0.0, sigma)
        .map_err(|e| Error::InvalidParameter(format!("sigma = {sigma} is invalid: {e}")))?;

    let coeffs: Vec<i64> = (0..n)
        .map(|_| normal.sample(rng).round() as i64)
        .collect();

    tracing::trace!(target: "rlwe_scheme::sampler", n, q, sigma, "gaussian sample drawn");
    Ok(Polynomial::from_signed(&coeffs, q))
}
