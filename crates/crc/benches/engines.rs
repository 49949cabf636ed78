//! Engine benchmarks.
//!
//! Run: `cargo bench -p crc-engine -- engines`
//!
//! This benchmarks:
//! - `CrcOptimal` (table-driven) for 12-, 16-, 32- and 64-bit catalogue CRCs
//! - `CrcBasic` (bit-at-a-time) on the same parameters, as the baseline

use core::hint::black_box;

use crc::{
  CrcBasic, CrcParams,
  catalog::{CRC_12_UMTS, CRC_16_IBM_3740, CRC_32_ISO_HDLC, CRC_64_XZ, Crc12Umts, Crc16CcittFalse, Crc32, Crc64Xz},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 5] = [64, 256, 1024, 4096, 65536];

fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

/// Benchmark the table-driven engine.
fn bench_optimal(c: &mut Criterion) {
  eprintln!("optimal backend: {}", Crc32::backend_name());

  macro_rules! group {
    ($name:literal, $ty:ty) => {{
      let mut group = c.benchmark_group(concat!("optimal/", $name));
      for size in SIZES {
        let data = make_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
          b.iter(|| black_box(<$ty>::checksum_of(black_box(data))));
        });
      }
      group.finish();
    }};
  }

  group!("crc12-umts", Crc12Umts);
  group!("crc16-ccitt-false", Crc16CcittFalse);
  group!("crc32", Crc32);
  group!("crc64-xz", Crc64Xz);
}

/// Benchmark the runtime engine. Inputs stay small: it is eight times slower
/// per byte by construction.
fn bench_basic(c: &mut Criterion) {
  eprintln!("basic backend: {}", CrcBasic::<u64>::backend_name());

  let cases: [(&str, CrcParams); 4] = [
    ("crc12-umts", CRC_12_UMTS),
    ("crc16-ccitt-false", CRC_16_IBM_3740),
    ("crc32", CRC_32_ISO_HDLC),
    ("crc64-xz", CRC_64_XZ),
  ];

  for (name, params) in cases {
    let Ok(base) = CrcBasic::<u64>::from_params(&params) else {
      continue;
    };
    let mut group = c.benchmark_group(format!("basic/{name}"));
    for size in &SIZES[..3] {
      let data = make_data(*size);
      group.throughput(Throughput::Bytes(*size as u64));
      group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
        b.iter(|| {
          let mut crc = base;
          crc.process_bytes(black_box(data));
          black_box(crc.checksum())
        });
      });
    }
    group.finish();
  }
}

criterion_group!(benches, bench_optimal, bench_basic);
criterion_main!(benches);
