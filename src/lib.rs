//! Textbook Ring-LWE public-key encryption over `Z_q[x] / (x^n + 1)`.
//!
//! Three operations built on negacyclic polynomial arithmetic: [`Scheme::keygen`],
//! [`PublicKey::encrypt`], [`PrivateKey::decrypt`], plus a byte/bit codec so
//! arbitrary UTF-8 strings can be carried end to end as binary polynomials.
//!
//! This is a demonstrator of the RLWE primitive, not a standardized KEM —
//! it makes no IND-CCA, constant-time, or side-channel claims.

mod ciphertext;
pub use ciphertext::Ciphertext;
mod error;
pub use error::Error;
mod keys;
pub use keys::{PrivateKey, PublicKey};
mod message;
pub use message::BinaryMessage;
pub(crate) mod modint;
pub(crate) mod poly;
pub use poly::Polynomial;
pub(crate) mod sampler;
mod scheme;
pub use scheme::{Scheme, DEFAULT_N, DEFAULT_Q, DEFAULT_SIGMA};
