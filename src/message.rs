//! Bit-level codec between byte strings and binary polynomials.

use crate::error::Error;

/// A length-n vector of bits in `{0, 1}`, the plaintext/decrypted-plaintext
/// representation carried by [`crate::Scheme::encrypt`] /
/// [`crate::Scheme::decrypt`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMessage(Vec<u8>);

impl BinaryMessage {
    /// Validates that every entry is `0` or `1`. Does not check length
    /// against any particular `n` — callers crossing into [`crate::Scheme`]
    /// get that check from the scheme itself, which is the only place that
    /// knows `n`.
    pub fn new(bits: Vec<u8>) -> Result<Self, Error> {
        if let Some(&bad) = bits.iter().find(|&&b| b != 0 && b != 1) {
            return Err(Error::InvalidInput(format!(
                "message coefficient must be 0 or 1, got {bad}"
            )));
        }
        Ok(BinaryMessage(bits))
    }

    /// The all-zero message of length `n`.
    pub fn zeros(n: usize) -> Self {
        BinaryMessage(vec![0; n])
    }

    /// A uniformly random binary message of length `n`.
    pub fn random<R: rand::Rng>(rng: &mut R, n: usize) -> Self {
        BinaryMessage((0..n).map(|_| rng.gen_range(0u8..2)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.0
    }
}

/// Emits bits `(b>>0)&1, (b>>1)&1, ..., (b>>7)&1` for each byte in order.
/// Output length is exactly `8 * bytes.len()`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &b in bytes {
        for i in 0..8 {
            bits.push((b >> i) & 1);
        }
    }
    bits
}

/// Groups bits into LSB-first runs of 8; a trailing run shorter than 8 bits
/// is silently dropped. Output length is `bits.len() / 8`.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | (bit << i))
        })
        .collect()
}

/// Decodes `bytes` as UTF-8, dropping each invalid byte subsequence instead
/// of substituting a replacement character. Scans successive maximal valid
/// prefixes via `str::from_utf8`; on an error, everything up to the error
/// is kept, the single offending byte is skipped, and the scan resumes.
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                out.push_str(std::str::from_utf8(&rest[..valid_up_to]).unwrap());
                let skip = valid_up_to + 1;
                if skip >= rest.len() {
                    break;
                }
                rest = &rest[skip..];
            }
        }
    }
    out
}
