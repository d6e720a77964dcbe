//! Error kinds surfaced by the scheme's public operations.

/// Errors returned by [`crate::Scheme`] and the types it produces.
///
/// `InvalidParameter` and `InvalidInput` are caller bugs: malformed
/// construction arguments or malformed data crossing a component boundary.
/// `RandomnessUnavailable` means the injected randomness source itself
/// failed; callers may retry once entropy is available again. Decryption
/// returning the wrong plaintext because of accumulated noise is not an
/// error of this crate — see [`crate::PrivateKey::decrypt`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Construction of a [`crate::Scheme`] (or a polynomial passed across a
    /// component boundary) was rejected: `n` not a power of two, `q < 2`,
    /// `sigma <= 0`, or a per-call length mismatch against `n`.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A supplied polynomial or message had the wrong length, a coefficient
    /// outside `[0, q)`, or a binary message bit outside `{0, 1}`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying random source produced an error.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}
