//! Defines the `Ciphertext` produced by [`crate::PublicKey::encrypt`].

use crate::poly::Polynomial;

/// Ciphertext produced by encryption: the pair `(c1, c2)` of length-n
/// polynomials over `Z_q`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) c1: Polynomial,
    pub(crate) c2: Polynomial,
}

impl Ciphertext {
    pub fn c1(&self) -> &Polynomial {
        &self.c1
    }

    pub fn c2(&self) -> &Polynomial {
        &self.c2
    }
}
