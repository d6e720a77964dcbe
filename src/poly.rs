//! Arithmetic in `R_q = Z_q[x] / (x^n + 1)`.
//!
//! A [`Polynomial`] is a fixed-length, value-semantic vector of coefficients
//! in `[0, q)`. Every operation here returns a new polynomial; none alias
//! their inputs. Length and range invariants are caller responsibilities: a
//! violation is a programmer error, checked with `debug_assert!`, not a
//! `Result`.

use crate::modint::mod_q;

/// A length-n vector of coefficients in `[0, q)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial(Vec<u64>);

impl Polynomial {
    /// Wraps a coefficient vector as-is. Callers are responsible for the
    /// `[0, q)` range invariant; use [`Polynomial::from_signed`] to lift
    /// arbitrary signed samples instead.
    pub fn new(coeffs: Vec<u64>) -> Self {
        Polynomial(coeffs)
    }

    /// The all-zero polynomial of length `n`.
    pub fn zero(n: usize) -> Self {
        Polynomial(vec![0; n])
    }

    /// Lifts small signed integers (e.g. error samples) into `[0, q)`.
    pub fn from_signed(coeffs: &[i64], q: u64) -> Self {
        Polynomial(coeffs.iter().map(|&c| mod_q(c as i128, q)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn coeffs(&self) -> &[u64] {
        &self.0
    }

    pub fn into_coeffs(self) -> Vec<u64> {
        self.0
    }
}

/// `c[i] = (a[i] + b[i]) mod q`.
pub fn add(a: &Polynomial, b: &Polynomial, q: u64) -> Polynomial {
    debug_assert_eq!(a.len(), b.len());
    let coeffs = a
        .0
        .iter()
        .zip(&b.0)
        .map(|(&x, &y)| mod_q(x as i128 + y as i128, q))
        .collect();
    Polynomial(coeffs)
}

/// `c[i] = (a[i] - b[i]) mod q`, canonical `[0, q)` result.
pub fn sub(a: &Polynomial, b: &Polynomial, q: u64) -> Polynomial {
    debug_assert_eq!(a.len(), b.len());
    let coeffs = a
        .0
        .iter()
        .zip(&b.0)
        .map(|(&x, &y)| mod_q(x as i128 - y as i128, q))
        .collect();
    Polynomial(coeffs)
}

/// `c[i] = (q - a[i]) mod q`, so `neg(0) == 0`.
pub fn neg(a: &Polynomial, q: u64) -> Polynomial {
    let coeffs = a.0.iter().map(|&x| mod_q(-(x as i128), q)).collect();
    Polynomial(coeffs)
}

/// Multiplication modulo `x^n + 1`: negacyclic convolution.
///
/// For each ordered pair `(i, j)`, the product `a[i] * b[j]` contributes to
/// position `k = (i + j) mod n` with sign `+1` if `i + j < n` and `-1`
/// otherwise — `x^n ≡ -1` in this ring, so wrap-around terms flip sign
/// instead of needing any division. Accumulation happens in `i128`: the
/// widest partial sum is bounded by `n * (q - 1)^2`, far inside `i128`
/// range for any `(n, q)` this crate accepts.
pub fn mul_negacyclic(a: &Polynomial, b: &Polynomial, q: u64) -> Polynomial {
    let n = a.len();
    debug_assert_eq!(n, b.len());

    let mut acc = vec![0i128; n];
    for (i, &ai) in a.0.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let ai = ai as i128;
        for (j, &bj) in b.0.iter().enumerate() {
            if bj == 0 {
                continue;
            }
            let term = ai * bj as i128;
            let k = (i + j) % n;
            if i + j < n {
                acc[k] += term;
            } else {
                acc[k] -= term;
            }
        }
    }

    Polynomial(acc.into_iter().map(|c| mod_q(c, q)).collect())
}
