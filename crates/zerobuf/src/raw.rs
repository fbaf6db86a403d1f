//! Raw zero-initialized allocation with manual-style lifetime.
//!
//! [`RawZeroed`] is the `calloc` analogue: it asks the global allocator for
//! `count * size` bytes of zeroed memory and owns the result until dropped.
//! Unlike `calloc`/`free` the release cannot be forgotten or doubled — the
//! handle is affine and `Drop` deallocates exactly once.
//!
//! This is the only module in the crate permitted to contain `unsafe`.
//! Each `unsafe` block has a `// SAFETY:` comment, and the tests below are
//! written to run under Miri.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;
use std::slice;

use crate::error::AllocError;

/// Alignment of untyped [`RawZeroed`] regions, in bytes.
///
/// Matches the `calloc` contract of being suitably aligned for any
/// fundamental type. Typed regions from [`RawZeroed::for_elements`] use
/// the element's own alignment instead.
pub const MAX_ALIGN: usize = 16;

/// An owned, contiguous, zero-initialized memory region.
///
/// Every byte reads zero until written. A zero-size request yields a valid
/// empty handle that never touches the allocator (allocating a zero-size
/// layout is undefined behavior, so it is skipped on both the alloc and
/// dealloc side).
///
/// The handle is not `Clone`: ownership of the region is unique, so the
/// backing memory is released exactly once, by `Drop`.
pub struct RawZeroed {
    /// Start of the region. Dangling (and never dereferenced for writes
    /// beyond length zero) when `layout.size() == 0`.
    ptr: NonNull<u8>,
    /// The layout the region was allocated with; reused for deallocation.
    layout: Layout,
}

impl RawZeroed {
    /// Allocate a zeroed region of `count` elements of `size` bytes each.
    ///
    /// The region is `count * size` bytes, aligned to [`MAX_ALIGN`].
    /// Returns [`AllocError::SizeOverflow`] if the product overflows or
    /// exceeds the `isize::MAX` layout limit, and
    /// [`AllocError::OutOfMemory`] if the allocator returns null.
    pub fn new(count: usize, size: usize) -> Result<Self, AllocError> {
        let bytes = count
            .checked_mul(size)
            .ok_or(AllocError::SizeOverflow { count, size })?;
        let layout = Layout::from_size_align(bytes, MAX_ALIGN)
            .map_err(|_| AllocError::SizeOverflow { count, size })?;
        Self::alloc_layout(layout)
    }

    /// Allocate a zeroed region sized and aligned for `count` elements of `T`.
    pub fn for_elements<T>(count: usize) -> Result<Self, AllocError> {
        let layout = Layout::array::<T>(count).map_err(|_| AllocError::SizeOverflow {
            count,
            size: mem::size_of::<T>(),
        })?;
        Self::alloc_layout(layout)
    }

    fn alloc_layout(layout: Layout) -> Result<Self, AllocError> {
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                layout,
            });
        }
        // SAFETY: layout.size() is nonzero (checked above) and the layout
        // was validated by `Layout`'s constructors.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(AllocError::OutOfMemory {
            bytes: layout.size(),
        })?;
        Ok(Self { ptr, layout })
    }

    /// Length of the region in bytes.
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.layout.size() == 0
    }

    /// View the region as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for reads of `layout.size()` bytes for the
        // lifetime of `self` (or dangling with length zero, which
        // `from_raw_parts` permits). No mutable access can coexist with the
        // returned borrow.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.layout.size()) }
    }

    /// View the region as a mutable byte slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: `ptr` is valid for reads and writes of `layout.size()`
        // bytes, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.layout.size()) }
    }
}

// SAFETY: RawZeroed uniquely owns its heap region; moving it to another
// thread moves the only handle.
unsafe impl Send for RawZeroed {}

// SAFETY: shared references only permit reads of plain bytes; mutation
// requires `&mut RawZeroed`, which the borrow checker makes exclusive.
unsafe impl Sync for RawZeroed {}

impl Drop for RawZeroed {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: `ptr` was returned by `alloc_zeroed` with exactly
            // this layout and has not been deallocated (Drop runs once).
            unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) };
        }
    }
}

impl std::fmt::Debug for RawZeroed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawZeroed")
            .field("len", &self.layout.size())
            .field("align", &self.layout.align())
            .finish()
    }
}
