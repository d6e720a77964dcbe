//! Public and private key types, each self-contained enough to encrypt or
//! decrypt without an external scheme handle.

use rand::{CryptoRng, RngCore};

use crate::ciphertext::Ciphertext;
use crate::error::Error;
use crate::message::BinaryMessage;
use crate::poly::{self, Polynomial};
use crate::sampler;

/// `(a, b)`: `a` uniform, `b = -(a*s + e) mod q` for the generating party's
/// private `s` and a freshly sampled small `e`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) a: Polynomial,
    pub(crate) b: Polynomial,
    pub(crate) n: usize,
    pub(crate) q: u64,
    pub(crate) sigma: f64,
}

impl PublicKey {
    pub fn a(&self) -> &Polynomial {
        &self.a
    }

    pub fn b(&self) -> &Polynomial {
        &self.b
    }

    /// Encrypts a binary message of length exactly `n` under this key.
    ///
    /// Samples fresh `r`, `e1`, `e2` (in that order) and computes
    /// `c1 = a*r + e1`, `c2 = b*r + e2 + [q/2]*m`.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        m: &BinaryMessage,
    ) -> Result<Ciphertext, Error> {
        if m.len() != self.n {
            return Err(Error::InvalidInput(format!(
                "message length {} does not match n = {}",
                m.len(),
                self.n
            )));
        }

        let r = sampler::gaussian_error(self.n, self.q, self.sigma, rng)?;
        let e1 = sampler::gaussian_error(self.n, self.q, self.sigma, rng)?;
        let e2 = sampler::gaussian_error(self.n, self.q, self.sigma, rng)?;

        let q_div_2 = self.q / 2;
        let scaled: Vec<u64> = m
            .bits()
            .iter()
            .map(|&bit| (bit as u64) * q_div_2 % self.q)
            .collect();
        let m_scaled = Polynomial::new(scaled);

        let c1 = poly::add(&poly::mul_negacyclic(&self.a, &r, self.q), &e1, self.q);
        let br = poly::mul_negacyclic(&self.b, &r, self.q);
        let c2 = poly::add(&poly::add(&br, &e2, self.q), &m_scaled, self.q);

        tracing::debug!(target: "rlwe_scheme::keys", n = self.n, q = self.q, "encrypted message");
        Ok(Ciphertext { c1, c2 })
    }
}

/// The private polynomial `s` used to decrypt ciphertexts produced under
/// the matching [`PublicKey`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub(crate) s: Polynomial,
    pub(crate) n: usize,
    pub(crate) q: u64,
}

impl PrivateKey {
    pub fn s(&self) -> &Polynomial {
        &self.s
    }

    /// Decrypts a ciphertext, recovering a length-n binary message.
    ///
    /// Computes `v = c2 + c1*s` and applies the decision window
    /// `(⌊q/4⌋, ⌊3q/4⌋)`: coefficients strictly inside it decode to `1`,
    /// ties at either boundary decode to `0`.
    ///
    /// Never fails on ciphertext content — a noisy coefficient simply
    /// decodes to the nearer bit, which may differ from the original
    /// plaintext bit. That is a probabilistic-correctness concern, not an
    /// error.
    pub fn decrypt(&self, ct: &Ciphertext) -> Result<BinaryMessage, Error> {
        if ct.c1.len() != self.n || ct.c2.len() != self.n {
            return Err(Error::InvalidInput(format!(
                "ciphertext length does not match n = {}",
                self.n
            )));
        }

        let c1_s = poly::mul_negacyclic(&ct.c1, &self.s, self.q);
        let v = poly::add(&ct.c2, &c1_s, self.q);

        let q4 = self.q / 4;
        let q34 = 3 * self.q / 4;
        let bits = v
            .coeffs()
            .iter()
            .map(|&c| if c > q4 && c < q34 { 1 } else { 0 })
            .collect();

        tracing::debug!(target: "rlwe_scheme::keys", n = self.n, q = self.q, "decrypted ciphertext");
        BinaryMessage::new(bits)
    }
}
