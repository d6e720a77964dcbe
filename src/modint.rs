//! Canonical reduction of signed integers modulo `q`.

/// Reduces `x` into the canonical range `[0, q)`.
///
/// `i128` is wide enough to hold any intermediate value this crate produces
/// (the widest is an accumulated negacyclic product, see
/// [`crate::poly::mul_negacyclic`]), so every call site can defer reduction
/// to this single function instead of reasoning about overflow locally.
#[inline]
pub(crate) fn mod_q(x: i128, q: u64) -> u64 {
    debug_assert!(q > 0);
    x.rem_euclid(q as i128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_negative_values() {
        assert_eq!(mod_q(-1, 97), 96);
        assert_eq!(mod_q(-97, 97), 0);
        assert_eq!(mod_q(-98, 97), 96);
    }

    #[test]
    fn reduces_positive_values() {
        assert_eq!(mod_q(0, 97), 0);
        assert_eq!(mod_q(96, 97), 96);
        assert_eq!(mod_q(97, 97), 0);
        assert_eq!(mod_q(196, 97), 2);
    }

    #[test]
    fn additive_homomorphism_holds_for_arbitrary_signed_operands() {
        let q = 40961u64;
        for (a, b) in [(-5i128, 3i128), (12345, -67890), (-1, -1), (0, 0)] {
            let direct = mod_q(a + b, q);
            let staged = mod_q(mod_q(a, q) as i128 + mod_q(b, q) as i128, q);
            assert_eq!(direct, staged);
        }
    }
}
