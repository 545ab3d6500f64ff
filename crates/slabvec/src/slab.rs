//! The container record: metadata plus owned byte storage.
//!
//! A [`SlabVec`] couples four metadata fields (element width, slot
//! capacity, cached byte count, live length) with a `Vec<u8>` buffer that
//! is kept at exactly `capacity * element_size` bytes. All growth and
//! shrink decisions route through the power-of-two rules in
//! [`policy`](crate::policy); every reallocation goes through a single
//! private path that builds the replacement buffer in full before swapping
//! it in, so the metadata and the buffer can never disagree.

use std::fmt;

use crate::error::SlabError;
use crate::policy;

/// A type-erased growable vector over contiguous byte storage.
///
/// Elements are opaque fixed-width byte runs; the width is chosen at
/// construction and fixed for the container's lifetime. The first
/// `length` slots of the buffer are live, in index order. Storage beyond
/// the live prefix is reserved capacity whose contents are unspecified.
///
/// Invariants, upheld after every operation:
/// - `bytes_alloc == capacity * element_size`
/// - the buffer holds exactly `bytes_alloc` bytes
/// - `length <= capacity`
/// - `element_size >= 1`
pub struct SlabVec {
    /// Byte width of one element. At least 1, fixed for the lifetime.
    element_size: usize,
    /// Number of element slots currently reserved.
    capacity: usize,
    /// `capacity * element_size`, cached for fast space checks.
    bytes_alloc: usize,
    /// Number of live elements.
    length: usize,
    /// Backing storage, kept at exactly `bytes_alloc` bytes.
    buf: Vec<u8>,
}

impl SlabVec {
    /// Create an empty container for elements of `element_size` bytes.
    ///
    /// No storage is reserved; the first push allocates capacity 2.
    pub fn new(element_size: usize) -> Result<Self, SlabError> {
        if element_size == 0 {
            return Err(SlabError::ZeroElementSize);
        }
        Ok(Self {
            element_size,
            capacity: 0,
            bytes_alloc: 0,
            length: 0,
            buf: Vec::new(),
        })
    }

    /// Create an empty container with room for at least `initial_size`
    /// elements.
    ///
    /// Capacity is rounded up to the next power of two, minimum 1. The
    /// reserved storage is zero-filled.
    pub fn with_capacity(element_size: usize, initial_size: usize) -> Result<Self, SlabError> {
        let mut v = Self::new(element_size)?;
        v.reallocate(policy::next_pot(initial_size))?;
        Ok(v)
    }

    /// Create a container holding a copy of `bytes`, interpreted as
    /// consecutive `element_size`-byte elements.
    ///
    /// Returns [`SlabError::InvalidInput`] if `bytes` is not a whole
    /// number of elements. Capacity is the next power of two at or above
    /// the element count.
    pub fn from_bytes(bytes: &[u8], element_size: usize) -> Result<Self, SlabError> {
        if element_size == 0 {
            return Err(SlabError::ZeroElementSize);
        }
        if bytes.len() % element_size != 0 {
            return Err(SlabError::InvalidInput {
                byte_len: bytes.len(),
                element_size,
            });
        }
        let mut v = Self::with_capacity(element_size, bytes.len() / element_size)?;
        v.buf[..bytes.len()].copy_from_slice(bytes);
        v.length = bytes.len() / element_size;
        Ok(v)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Byte width of one element.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Number of element slots currently reserved.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total reserved storage in bytes (`capacity * element_size`).
    pub fn bytes_alloc(&self) -> usize {
        self.bytes_alloc
    }

    /// The live prefix of the buffer: `length * element_size` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.length * self.element_size]
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        let live = self.length * self.element_size;
        &mut self.buf[..live]
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&[u8], SlabError> {
        self.check_index(index)?;
        let start = index * self.element_size;
        Ok(&self.buf[start..start + self.element_size])
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut [u8], SlabError> {
        self.check_index(index)?;
        let start = index * self.element_size;
        Ok(&mut self.buf[start..start + self.element_size])
    }

    /// Append one slot and return it for the caller to write.
    ///
    /// Grows the buffer (doubling capacity) when full. The returned slot
    /// holds whatever bytes the buffer last held at that position; fresh
    /// storage is zero-filled.
    pub fn push(&mut self) -> Result<&mut [u8], SlabError> {
        if !self.has_space() {
            self.grow()?;
        }
        self.length += 1;
        // A capacity-1 buffer is exhausted by the length increment itself,
        // so the space check runs again after it.
        if !self.has_space() {
            self.grow()?;
        }
        let start = (self.length - 1) * self.element_size;
        Ok(&mut self.buf[start..start + self.element_size])
    }

    /// Append a copy of `element`.
    ///
    /// Returns [`SlabError::ElementSizeMismatch`] if `element` is not
    /// exactly one element wide.
    pub fn push_bytes(&mut self, element: &[u8]) -> Result<(), SlabError> {
        self.check_width(element.len())?;
        self.push()?.copy_from_slice(element);
        Ok(())
    }

    /// Remove the last element.
    ///
    /// Returns [`SlabError::Empty`] on a container with no live elements.
    /// Shrinks the buffer if the new length is a power of two.
    pub fn pop_back(&mut self) -> Result<(), SlabError> {
        if self.length == 0 {
            return Err(SlabError::Empty);
        }
        self.length -= 1;
        self.shrink_after_removal()
    }

    /// Remove the first element, shifting the rest one slot toward
    /// index 0.
    ///
    /// This is the design's only always-O(n) removal: every remaining
    /// live byte moves. Returns [`SlabError::Empty`] on an empty
    /// container. Shrinks the buffer if the new length is a power of two.
    pub fn pop_front(&mut self) -> Result<(), SlabError> {
        if self.length == 0 {
            return Err(SlabError::Empty);
        }
        self.length -= 1;
        let es = self.element_size;
        let live = self.length * es;
        self.buf.copy_within(es..es + live, 0);
        self.shrink_after_removal()
    }

    /// Remove the element at `index`, shifting the suffix left one slot.
    ///
    /// Returns [`SlabError::IndexOutOfRange`] if `index >= len()` — an
    /// empty container reports `IndexOutOfRange` for any index. The last
    /// index behaves exactly as [`pop_back`](Self::pop_back). Shrinks the
    /// buffer if the new length is a power of two.
    pub fn pop_at(&mut self, index: usize) -> Result<(), SlabError> {
        self.check_index(index)?;
        if index == self.length - 1 {
            return self.pop_back();
        }
        let old_len = self.length;
        self.length -= 1;
        let es = self.element_size;
        self.buf
            .copy_within((index + 1) * es..old_len * es, index * es);
        self.shrink_after_removal()
    }

    /// Overwrite every live slot with a copy of `default_element`.
    ///
    /// Length and capacity are unchanged. Returns
    /// [`SlabError::ElementSizeMismatch`] if the default is not exactly
    /// one element wide.
    pub fn fill(&mut self, default_element: &[u8]) -> Result<(), SlabError> {
        self.check_width(default_element.len())?;
        let es = self.element_size;
        for slot in self.as_bytes_mut().chunks_exact_mut(es) {
            slot.copy_from_slice(default_element);
        }
        Ok(())
    }

    /// Force capacity down to the next power of two at or above the live
    /// length (1 when empty), regardless of the removal-time shrink rule.
    pub fn shrink_to_fit(&mut self) -> Result<(), SlabError> {
        self.reallocate(policy::next_pot(self.length))
    }

    /// `true` iff at least one reserved slot is unoccupied.
    fn has_space(&self) -> bool {
        self.bytes_alloc - self.length * self.element_size > 0
    }

    /// Double capacity (0 jumps straight to 2) and reallocate.
    fn grow(&mut self) -> Result<(), SlabError> {
        let new_capacity = if self.capacity == 0 {
            2
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(SlabError::AllocationFailed {
                    requested: usize::MAX,
                })?
        };
        self.reallocate(new_capacity)
    }

    /// Shrink the buffer to exactly fit if the new length is a power of
    /// two. Length 0 never shrinks, so capacity stays at 1 or above once
    /// storage exists.
    fn shrink_after_removal(&mut self) -> Result<(), SlabError> {
        if policy::is_pot(self.length) {
            self.reallocate(self.length)?;
        }
        Ok(())
    }

    /// The single reallocation path, shared by grow, shrink, and
    /// [`shrink_to_fit`](Self::shrink_to_fit).
    ///
    /// Builds a fresh exact-size buffer, copies the live prefix, then
    /// swaps it in. On failure the record is untouched, so the metadata
    /// invariants hold whether or not the reallocation succeeds.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), SlabError> {
        let new_bytes = new_capacity
            .checked_mul(self.element_size)
            .ok_or(SlabError::AllocationFailed {
                requested: usize::MAX,
            })?;
        let live = self.length * self.element_size;
        debug_assert!(live <= new_bytes, "reallocation below the live prefix");

        let mut next = Vec::new();
        next.try_reserve_exact(new_bytes)
            .map_err(|_| SlabError::AllocationFailed {
                requested: new_bytes,
            })?;
        next.extend_from_slice(&self.buf[..live]);
        next.resize(new_bytes, 0);

        self.buf = next;
        self.capacity = new_capacity;
        self.bytes_alloc = new_bytes;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), SlabError> {
        if index >= self.length {
            return Err(SlabError::IndexOutOfRange {
                index,
                length: self.length,
            });
        }
        Ok(())
    }

    fn check_width(&self, actual: usize) -> Result<(), SlabError> {
        if actual != self.element_size {
            return Err(SlabError::ElementSizeMismatch {
                expected: self.element_size,
                actual,
            });
        }
        Ok(())
    }
}

impl Clone for SlabVec {
    /// An independent copy with capacity rounded to the next power of two
    /// at or above the live length. Storage is disjoint from the source.
    fn clone(&self) -> Self {
        let capacity = policy::next_pot(self.length);
        let bytes_alloc = capacity * self.element_size;
        let live = self.length * self.element_size;
        let mut buf = vec![0u8; bytes_alloc];
        buf[..live].copy_from_slice(&self.buf[..live]);
        Self {
            element_size: self.element_size,
            capacity,
            bytes_alloc,
            length: self.length,
            buf,
        }
    }
}

impl fmt::Debug for SlabVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlabVec")
            .field("element_size", &self.element_size)
            .field("capacity", &self.capacity)
            .field("length", &self.length)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}
