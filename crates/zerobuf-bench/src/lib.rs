//! Benchmark profiles for zerobuf.
//!
//! Provides the shared size grid the `alloc_ops` benches iterate over, so
//! raw and managed paths are measured at identical request sizes.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Element counts covered by the allocation benches.
///
/// Spans the interesting regimes: tiny (allocator fast path), page-sized,
/// and large enough that the OS hands back pre-zeroed pages (where
/// `alloc_zeroed` can skip the memset entirely).
pub const BENCH_COUNTS: &[usize] = &[64, 1_024, 65_536, 1_048_576];

/// Fixed element size used by the untyped raw benches, in bytes.
pub const BENCH_ELEM_SIZE: usize = 4;
