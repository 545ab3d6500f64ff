//! Type-erased growable vector over contiguous byte storage.
//!
//! A [`SlabVec`] is a single contiguous byte buffer that holds elements of
//! any uniform size. The element's shape is described purely by a byte
//! width chosen at construction; the container never learns the concrete
//! type. Callers move data in and out as byte slices and traverse the
//! live elements through per-slot callbacks (map/filter/fold).
//!
//! # Architecture
//!
//! ```text
//! SlabVec (record: element_size, capacity, bytes_alloc, length)
//! ├── Vec<u8> buffer, kept at exactly capacity * element_size bytes
//! ├── policy — power-of-two sizing (grow by doubling,
//! │            shrink when length lands on a power of two)
//! └── traverse — for_each_mut / filter_into / fold / Slots iterator
//! ```
//!
//! # Capacity behaviour
//!
//! Growth doubles capacity on overflow, so N pushes cost amortised O(1)
//! each with O(log N) reallocations. Removal shrinks the buffer only when
//! the new length is an exact power of two, which bounds steady-state
//! memory to at most 2× the live bytes without reallocating on every pop.
//!
//! # Safety
//!
//! The buffer is an owned `Vec<u8>` and every slot access is a bounds-
//! checked sub-slice, so the crate carries no `unsafe` code at all.
//! Reinterpreting slot bytes as a concrete type is the caller's business,
//! typically via `to_ne_bytes`/`from_ne_bytes` or a layout-safe cast crate.
//!
//! # Quick start
//!
//! ```rust
//! use slabvec::SlabVec;
//!
//! let mut v = SlabVec::new(4).unwrap(); // 4-byte elements
//! for n in [9i32, -2, 1, 2] {
//!     v.push_bytes(&n.to_ne_bytes()).unwrap();
//! }
//! v.pop_front().unwrap();
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.get(0).unwrap(), (-2i32).to_ne_bytes());
//!
//! let sum = v.fold(0i32, |slot, acc| {
//!     let mut b = [0u8; 4];
//!     b.copy_from_slice(slot);
//!     *acc += i32::from_ne_bytes(b);
//! });
//! assert_eq!(sum, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod slab;
pub mod traverse;

// Public re-exports for the primary API surface.
pub use error::SlabError;
pub use slab::SlabVec;
pub use traverse::Slots;
