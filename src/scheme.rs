//! The `RlweScheme`: parameterized by `(n, q, sigma)`, exposing `keygen`,
//! `encrypt`/`decrypt` convenience wrappers, and the string<->binary-message
//! codec. Parameters are validated once at construction and carried as
//! plain runtime fields rather than compile-time type parameters, so a
//! single binary can run the scheme at multiple sizes.

use rand::{CryptoRng, RngCore};

use crate::ciphertext::Ciphertext;
use crate::error::Error;
use crate::keys::{PrivateKey, PublicKey};
use crate::message::{self, BinaryMessage};
use crate::poly;
use crate::sampler;

/// Recommended default parameters: decryption failure probability per bit
/// well below `2^-40` empirically.
pub const DEFAULT_N: usize = 1024;
pub const DEFAULT_Q: u64 = 40961;
pub const DEFAULT_SIGMA: f64 = 3.2;

/// A validated `(n, q, sigma)` parameter set for the scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheme {
    n: usize,
    q: u64,
    sigma: f64,
}

impl Scheme {
    /// Validates and constructs a parameter set.
    ///
    /// `n` must be a positive power of two, `q >= 2`, `sigma > 0` — any
    /// violation is an [`Error::InvalidParameter`], never a panic.
    ///
    /// ```rust
    /// use rlwe_scheme::Scheme;
    ///
    /// let scheme = Scheme::new(1024, 40961, 3.2).unwrap();
    /// let mut rng = rand::rngs::OsRng;
    /// let (pk, sk) = scheme.keygen(&mut rng).unwrap();
    ///
    /// let message = scheme.encode_message("Hello, Ring-LWE cryptography!");
    /// let ciphertext = scheme.encrypt(&mut rng, &pk, &message).unwrap();
    /// let recovered = scheme.decrypt(&sk, &ciphertext).unwrap();
    /// assert_eq!(scheme.decode_message(&recovered), "Hello, Ring-LWE cryptography!");
    /// ```
    pub fn new(n: usize, q: u64, sigma: f64) -> Result<Self, Error> {
        if n == 0 || !n.is_power_of_two() {
            return Err(Error::InvalidParameter(format!(
                "n = {n} is not a positive power of two"
            )));
        }
        if q < 2 {
            return Err(Error::InvalidParameter(format!(
                "q = {q} must be at least 2"
            )));
        }
        if !(sigma > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "sigma = {sigma} must be positive"
            )));
        }
        Ok(Scheme { n, q, sigma })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Generates a fresh `(PublicKey, PrivateKey)` pair.
    ///
    /// Samples `a` (uniform), then `s`, then `e` (both Gaussian), in that
    /// fixed order, so a deterministic RNG always produces the same key
    /// pair for a given seed.
    pub fn keygen<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(PublicKey, PrivateKey), Error> {
        let a = sampler::uniform(self.n, self.q, rng)?;
        let s = sampler::gaussian_error(self.n, self.q, self.sigma, rng)?;
        let e = sampler::gaussian_error(self.n, self.q, self.sigma, rng)?;

        let a_s = poly::mul_negacyclic(&a, &s, self.q);
        let b = poly::neg(&poly::add(&a_s, &e, self.q), self.q);

        tracing::debug!(target: "rlwe_scheme::scheme", n = self.n, q = self.q, "generated key pair");

        Ok((
            PublicKey {
                a,
                b,
                n: self.n,
                q: self.q,
                sigma: self.sigma,
            },
            PrivateKey {
                s,
                n: self.n,
                q: self.q,
            },
        ))
    }

    /// Convenience wrapper around [`PublicKey::encrypt`].
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        pk: &PublicKey,
        m: &BinaryMessage,
    ) -> Result<Ciphertext, Error> {
        pk.encrypt(rng, m)
    }

    /// Convenience wrapper around [`PrivateKey::decrypt`].
    pub fn decrypt(&self, sk: &PrivateKey, ct: &Ciphertext) -> Result<BinaryMessage, Error> {
        sk.decrypt(ct)
    }

    /// Encodes a UTF-8 string as a length-n binary message: its bytes become
    /// bits (LSB-first), copied into a zero-initialized length-n vector up
    /// to `min(8 * bytes.len(), n)` positions. Excess bits are truncated,
    /// not an error.
    pub fn encode_message(&self, s: &str) -> BinaryMessage {
        let bits = message::bytes_to_bits(s.as_bytes());
        let mut padded = vec![0u8; self.n];
        let take = bits.len().min(self.n);
        padded[..take].copy_from_slice(&bits[..take]);
        BinaryMessage::new(padded).expect("bytes_to_bits only ever produces 0/1 entries")
    }

    /// Decodes a length-n binary message back to a string: groups bits into
    /// bytes, decodes as UTF-8 dropping invalid byte sequences (rather than
    /// substituting a replacement character), and strips a single trailing
    /// run of NUL bytes.
    pub fn decode_message(&self, m: &BinaryMessage) -> String {
        let bytes = message::bits_to_bytes(m.bits());
        let decoded = message::decode_utf8_dropping_invalid(&bytes);
        decoded.trim_end_matches('\u{0}').to_string()
    }
}

impl Default for Scheme {
    /// The recommended `(n=1024, q=40961, sigma=3.2)` parameter set. These
    /// constants are valid by construction.
    fn default() -> Self {
        Scheme::new(DEFAULT_N, DEFAULT_Q, DEFAULT_SIGMA)
            .expect("default parameters are valid by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn rejects_non_power_of_two_n() {
        assert!(Scheme::new(1000, 40961, 3.2).is_err());
        assert!(Scheme::new(0, 40961, 3.2).is_err());
    }

    #[test]
    fn rejects_bad_q_and_sigma() {
        assert!(Scheme::new(1024, 1, 3.2).is_err());
        assert!(Scheme::new(1024, 40961, 0.0).is_err());
        assert!(Scheme::new(1024, 40961, -1.0).is_err());
    }

    #[test]
    fn encode_empty_string_is_all_zero() {
        let scheme = Scheme::default();
        let m = scheme.encode_message("");
        assert_eq!(m.bits(), vec![0u8; scheme.n()].as_slice());
    }

    #[test]
    fn decode_all_zero_is_empty_string() {
        let scheme = Scheme::default();
        let m = BinaryMessage::zeros(scheme.n());
        assert_eq!(scheme.decode_message(&m), "");
    }

    #[test]
    fn excess_bits_beyond_n_are_truncated() {
        let scheme = Scheme::new(16, 97, 1.0).unwrap();
        let long = "this string is much longer than sixteen bits";
        let m = scheme.encode_message(long);
        assert_eq!(m.len(), 16);
    }

    #[test]
    fn end_to_end_default_parameters_round_trip() {
        let scheme = Scheme::default();
        let mut rng = ChaCha20Rng::seed_from_u64(1234);
        let (pk, sk) = scheme.keygen(&mut rng).unwrap();

        let plaintext = "Hello, Ring-LWE cryptography!";
        let message = scheme.encode_message(plaintext);
        let ciphertext = scheme.encrypt(&mut rng, &pk, &message).unwrap();
        let recovered = scheme.decrypt(&sk, &ciphertext).unwrap();

        assert_eq!(scheme.decode_message(&recovered), plaintext);
    }

    #[test]
    fn encrypt_decrypt_recovers_message_with_high_probability() {
        let scheme = Scheme::default();
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let mut failures = 0;
        let trials = 50;

        for _ in 0..trials {
            let (pk, sk) = scheme.keygen(&mut rng).unwrap();
            let message = BinaryMessage::random(&mut rng, scheme.n());
            let ciphertext = scheme.encrypt(&mut rng, &pk, &message).unwrap();
            let recovered = scheme.decrypt(&sk, &ciphertext).unwrap();
            if recovered != message {
                failures += 1;
            }
        }

        assert_eq!(failures, 0, "{failures}/{trials} trials failed to round-trip");
    }
}
