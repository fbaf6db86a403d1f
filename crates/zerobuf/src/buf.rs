//! Safe, automatically managed zero-initialized storage.
//!
//! [`ZeroedBuf`] is the managed alternative to [`crate::raw::RawZeroed`]:
//! same contiguous zeroed storage, no manual release. The backing `Vec`
//! frees itself on drop, and the zero value comes from the element's
//! [`ZeroElem`] impl rather than from raw byte-filling.

use std::mem;
use std::ops::{Deref, DerefMut};

use crate::elem::ZeroElem;
use crate::error::AllocError;

/// A contiguous, zero-initialized, automatically released buffer of `T`.
///
/// Construction guarantees every element equals `T::ZERO` until written.
/// `Deref`s to `[T]`, so indexing, iteration, and slicing work directly.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroedBuf<T: ZeroElem> {
    data: Vec<T>,
}

impl<T: ZeroElem> ZeroedBuf<T> {
    /// Create a buffer of `count` zeroed elements.
    ///
    /// Aborts the process on allocation failure, like any `Vec`
    /// construction. Use [`ZeroedBuf::try_new`] to get an error instead.
    pub fn new(count: usize) -> Self {
        Self {
            data: vec![T::ZERO; count],
        }
    }

    /// Create a buffer of `count` zeroed elements, reporting failure.
    ///
    /// Returns [`AllocError::SizeOverflow`] if `count` elements exceed the
    /// `isize::MAX`-byte layout limit, and [`AllocError::OutOfMemory`] if
    /// the allocator declines the reservation.
    pub fn try_new(count: usize) -> Result<Self, AllocError> {
        let size = mem::size_of::<T>();
        let bytes = count
            .checked_mul(size)
            .filter(|&b| b <= isize::MAX as usize)
            .ok_or(AllocError::SizeOverflow { count, size })?;
        let mut data = Vec::new();
        data.try_reserve_exact(count)
            .map_err(|_| AllocError::OutOfMemory { bytes })?;
        data.resize(count, T::ZERO);
        Ok(Self { data })
    }

    /// Adopt an existing vector, zeroing its contents in place.
    ///
    /// The vector's capacity is preserved, so this is the cheap way to
    /// recycle an allocation into a fresh zeroed buffer.
    pub fn from_vec(mut data: Vec<T>) -> Self {
        data.fill(T::ZERO);
        Self { data }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the buffer as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Reset every element to `T::ZERO` without reallocating.
    pub fn fill_zero(&mut self) {
        self.data.fill(T::ZERO);
    }

    /// Consume the buffer, returning the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: ZeroElem> Default for ZeroedBuf<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: ZeroElem> Deref for ZeroedBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T: ZeroElem> DerefMut for ZeroedBuf<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
