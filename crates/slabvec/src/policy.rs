//! Power-of-two capacity sizing policy.
//!
//! All sizing arithmetic for [`SlabVec`](crate::SlabVec) lives here:
//! rounding requested capacities up to a power of two, and deciding when
//! a removal should shrink the buffer.
//!
//! The shrink rule: a removal triggers a shrink iff the *new* length is an
//! exact power of two. [`is_pot`] reports `false` for 0, so a container
//! that empties out keeps its last capacity of 1 — capacity never drops
//! below 1 once storage exists. Shrinking only on power-of-two lengths
//! bounds steady-state memory to at most 2× the live bytes while leaving
//! pop itself amortised O(1).

/// Smallest power of two greater than or equal to `n`, with a floor of 1.
///
/// `next_pot(0)` and `next_pot(1)` are both 1. Saturates at `usize::MAX`
/// if `n` exceeds the largest representable power of two; the subsequent
/// byte-count multiplication is checked, so the saturated value surfaces
/// as an allocation failure rather than a wrap.
pub fn next_pot(n: usize) -> usize {
    n.max(1).checked_next_power_of_two().unwrap_or(usize::MAX)
}

/// Whether `n` is an exact power of two. `is_pot(0)` is `false`.
pub fn is_pot(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn next_pot_small_values() {
        assert_eq!(next_pot(0), 1);
        assert_eq!(next_pot(1), 1);
        assert_eq!(next_pot(2), 2);
        assert_eq!(next_pot(3), 4);
        assert_eq!(next_pot(4), 4);
        assert_eq!(next_pot(5), 8);
        assert_eq!(next_pot(1000), 1024);
    }

    #[test]
    fn next_pot_saturates_instead_of_wrapping() {
        assert_eq!(next_pot(usize::MAX), usize::MAX);
        assert_eq!(next_pot((usize::MAX >> 1) + 2), usize::MAX);
    }

    #[test]
    fn is_pot_edge_cases() {
        assert!(!is_pot(0));
        assert!(is_pot(1));
        assert!(is_pot(2));
        assert!(!is_pot(3));
        assert!(is_pot(4));
        assert!(!is_pot(6));
        assert!(is_pot(1 << 40));
    }

    proptest! {
        #[test]
        fn next_pot_is_a_power_of_two_at_least_n(n in 0usize..=1 << 40) {
            let p = next_pot(n);
            prop_assert!(is_pot(p));
            prop_assert!(p >= n.max(1));
        }

        #[test]
        fn next_pot_is_tight(n in 2usize..=1 << 40) {
            // No smaller power of two fits: half of the result is below n.
            let p = next_pot(n);
            prop_assert!(p / 2 < n);
        }

        #[test]
        fn powers_of_two_are_next_pot_fixpoints(shift in 0u32..63) {
            let p = 1usize << shift;
            prop_assert_eq!(next_pot(p), p);
        }
    }
}
