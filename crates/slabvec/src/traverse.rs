//! Generic traversal over live slots.
//!
//! The traversal operations never learn the element type: callbacks
//! receive each slot as a byte slice of `element_size` bytes, in index
//! order. Borrow rules enforce the iteration contracts: a mutating
//! callback cannot resize the container it is iterating, and a filter's
//! source and destination cannot be the same container.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use crate::error::SlabError;
use crate::slab::SlabVec;

impl SlabVec {
    /// Apply `f` to every live slot in index order, mutably.
    ///
    /// The callback may rewrite the slot's bytes in place but cannot
    /// change the container's length or capacity.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut [u8]),
    {
        let es = self.element_size();
        for slot in self.as_bytes_mut().chunks_exact_mut(es) {
            f(slot);
        }
    }

    /// Append every slot for which `predicate` holds onto `dest`,
    /// in index order.
    ///
    /// `dest` keeps whatever it already contained and grows as needed.
    /// Returns [`SlabError::ElementSizeMismatch`] if the two containers
    /// disagree on element width.
    pub fn filter_into<P>(&self, dest: &mut SlabVec, mut predicate: P) -> Result<(), SlabError>
    where
        P: FnMut(&[u8]) -> bool,
    {
        if dest.element_size() != self.element_size() {
            return Err(SlabError::ElementSizeMismatch {
                expected: self.element_size(),
                actual: dest.element_size(),
            });
        }
        for slot in self.iter() {
            if predicate(slot) {
                dest.push_bytes(slot)?;
            }
        }
        Ok(())
    }

    /// Left-to-right fold: call `binop(slot, &mut acc)` for every live
    /// slot in index order, threading one accumulator through all calls,
    /// and return the accumulator.
    pub fn fold<A, F>(&self, mut acc: A, mut binop: F) -> A
    where
        F: FnMut(&[u8], &mut A),
    {
        for slot in self.iter() {
            binop(slot, &mut acc);
        }
        acc
    }

    /// Iterate the live slots as `&[u8]` element slices.
    pub fn iter(&self) -> Slots<'_> {
        Slots {
            inner: self.as_bytes().chunks_exact(self.element_size()),
        }
    }
}

/// Borrowing iterator over a container's live slots.
///
/// Yields one `&[u8]` of `element_size` bytes per live element, in index
/// order. Created by [`SlabVec::iter`].
#[derive(Clone, Debug)]
pub struct Slots<'a> {
    inner: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Slots<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Slots<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Slots<'_> {}
impl FusedIterator for Slots<'_> {}

impl<'a> IntoIterator for &'a SlabVec {
    type Item = &'a [u8];
    type IntoIter = Slots<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn from_i32s(ns: &[i32]) -> SlabVec {
        let bytes: Vec<u8> = ns.iter().flat_map(|n| n.to_ne_bytes()).collect();
        SlabVec::from_bytes(&bytes, 4).unwrap()
    }

    fn to_i32(slot: &[u8]) -> i32 {
        let mut b = [0u8; 4];
        b.copy_from_slice(slot);
        i32::from_ne_bytes(b)
    }

    #[test]
    fn for_each_mut_rewrites_every_slot_in_order() {
        let mut v = from_i32s(&[1, 2, 3, 4]);
        let mut seen = Vec::new();
        v.for_each_mut(|slot| {
            let n = to_i32(slot);
            seen.push(n);
            slot.copy_from_slice(&(n * 10).to_ne_bytes());
        });
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(v.iter().map(to_i32).collect::<Vec<_>>(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn filter_into_appends_matches_after_existing_contents() {
        let src = from_i32s(&[1, -2, 3, -4, 5]);
        let mut dest = from_i32s(&[100]);
        src.filter_into(&mut dest, |slot| to_i32(slot) > 0).unwrap();
        assert_eq!(
            dest.iter().map(to_i32).collect::<Vec<_>>(),
            vec![100, 1, 3, 5]
        );
        // Source is untouched.
        assert_eq!(src.len(), 5);
    }

    #[test]
    fn filter_into_with_always_true_copies_everything() {
        let src = from_i32s(&[7, 8, 9]);
        let mut dest = SlabVec::new(4).unwrap();
        src.filter_into(&mut dest, |_| true).unwrap();
        assert_eq!(dest.len(), src.len());
        assert_eq!(dest.as_bytes(), src.as_bytes());
    }

    #[test]
    fn filter_into_rejects_mismatched_element_sizes() {
        let src = from_i32s(&[1]);
        let mut dest = SlabVec::new(8).unwrap();
        assert_eq!(
            src.filter_into(&mut dest, |_| true).unwrap_err(),
            SlabError::ElementSizeMismatch {
                expected: 4,
                actual: 8
            }
        );
        assert_eq!(dest.len(), 0);
    }

    #[test]
    fn fold_sums_left_to_right() {
        let v = from_i32s(&[1, 2, 3, 4, 5]);
        let sum = v.fold(0i32, |slot, acc| *acc += to_i32(slot));
        assert_eq!(sum, 15);
    }

    #[test]
    fn fold_on_empty_returns_the_accumulator() {
        let v = SlabVec::new(4).unwrap();
        assert_eq!(v.fold(41i32, |_, acc| *acc += 1), 41);
    }

    #[test]
    fn iter_is_exact_size_and_double_ended() {
        let v = from_i32s(&[1, 2, 3]);
        let it = v.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.rev().map(to_i32).collect::<Vec<_>>(), vec![3, 2, 1]);

        let mut total = 0;
        for slot in &v {
            total += to_i32(slot);
        }
        assert_eq!(total, 6);
    }

    proptest! {
        #[test]
        fn filter_partitions_the_source(ns in prop::collection::vec(any::<i32>(), 0..64)) {
            let src = from_i32s(&ns);
            let mut kept = SlabVec::new(4).unwrap();
            let mut dropped = SlabVec::new(4).unwrap();
            src.filter_into(&mut kept, |s| to_i32(s) % 2 == 0).unwrap();
            src.filter_into(&mut dropped, |s| to_i32(s) % 2 != 0).unwrap();
            prop_assert_eq!(kept.len() + dropped.len(), src.len());

            // Relative order within each partition is preserved.
            let evens: Vec<i32> = ns.iter().copied().filter(|n| n % 2 == 0).collect();
            prop_assert_eq!(kept.iter().map(to_i32).collect::<Vec<_>>(), evens);
        }

        #[test]
        fn fold_agrees_with_a_plain_sum(ns in prop::collection::vec(any::<i32>(), 0..64)) {
            let v = from_i32s(&ns);
            let sum = v.fold(0i64, |slot, acc| *acc += to_i32(slot) as i64);
            prop_assert_eq!(sum, ns.iter().map(|&n| n as i64).sum::<i64>());
        }
    }
}
