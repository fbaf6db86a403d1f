//! Criterion micro-benchmarks for raw and managed zeroed allocation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zerobuf::{RawZeroed, ZeroedBuf};
use zerobuf_bench::{BENCH_COUNTS, BENCH_ELEM_SIZE};

/// Raw `alloc_zeroed` path: allocate, touch first and last byte, drop.
fn bench_raw_zeroed(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_zeroed");
    for &count in BENCH_COUNTS {
        group.bench_function(format!("{count}x{BENCH_ELEM_SIZE}"), |b| {
            b.iter(|| {
                let mut region =
                    RawZeroed::new(black_box(count), black_box(BENCH_ELEM_SIZE)).unwrap();
                let slice = region.as_mut_slice();
                slice[0] = 1;
                slice[slice.len() - 1] = 1;
                black_box(region);
            });
        });
    }
    group.finish();
}

/// Managed path: `ZeroedBuf::new`, touch first and last element, drop.
fn bench_zeroed_buf(c: &mut Criterion) {
    let mut group = c.benchmark_group("zeroed_buf");
    for &count in BENCH_COUNTS {
        group.bench_function(format!("{count}xu32"), |b| {
            b.iter(|| {
                let mut buf: ZeroedBuf<u32> = ZeroedBuf::new(black_box(count));
                buf[0] = 1;
                let last = buf.len() - 1;
                buf[last] = 1;
                black_box(buf);
            });
        });
    }
    group.finish();
}

/// Allocation reuse: re-zero an existing buffer instead of reallocating.
fn bench_fill_zero_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_zero_reuse");
    for &count in BENCH_COUNTS {
        let mut buf: ZeroedBuf<u32> = ZeroedBuf::new(count);
        group.bench_function(format!("{count}xu32"), |b| {
            b.iter(|| {
                buf[0] = 1;
                buf.fill_zero();
                black_box(&buf);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_raw_zeroed,
    bench_zeroed_buf,
    bench_fill_zero_reuse
);
criterion_main!(benches);
