//! Zero-initialized contiguous buffers.
//!
//! Provides the two standard shapes of zeroed allocation:
//!
//! ```text
//! RawZeroed        (raw.rs)  — alloc_zeroed behind an owning handle;
//! │                            count × size bytes, released once on Drop
//! ZeroedBuf<T>     (buf.rs)  — Vec-backed managed container; release is
//! │                            automatic, zero value comes from ZeroElem
//! └── ZeroElem     (elem.rs) — sealed trait: types whose all-zero byte
//!                              pattern is their zero value
//! ```
//!
//! Both paths guarantee that every element reads zero before first write,
//! that a zero-length request is a valid empty buffer, and that an
//! overflowing `count * size` surfaces as [`AllocError::SizeOverflow`]
//! rather than a panic.
//!
//! # Safety
//!
//! `unsafe` is confined to the `raw` module. Every `unsafe` block carries
//! a `// SAFETY:` comment and the module's tests are written to run under
//! Miri. The rest of the crate denies `unsafe_code`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buf;
pub mod elem;
pub mod error;
pub mod raw;

// Public re-exports for the primary API surface.
pub use buf::ZeroedBuf;
pub use elem::ZeroElem;
pub use error::AllocError;
pub use raw::RawZeroed;
