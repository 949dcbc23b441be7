//! Benchmarks for literal decoding, encoding and offset mapping.
//!
//! Run with: `cargo bench -p the-literal --bench literal`

use divan::{
  Bencher,
  black_box,
};
use the_literal::{
  decode,
  encode,
};

fn main() {
  divan::main();
}

const PLAIN: &str = "the quick brown fox jumps over the lazy dog";
const ESCAPED: &str = r#"tab\tnewline\n\x41\101\U0001F600 \"quoted\" \\ done"#;

fn long_plain() -> String {
  PLAIN.repeat(64)
}

fn long_escaped() -> String {
  ESCAPED.repeat(64)
}

// `decode` benchmarks.

mod decoding {
  use super::*;

  #[divan::bench]
  fn plain_short(bencher: Bencher) {
    bencher.bench(|| decode(black_box(PLAIN)).unwrap());
  }

  #[divan::bench]
  fn escaped_short(bencher: Bencher) {
    bencher.bench(|| decode(black_box(ESCAPED)).unwrap());
  }

  #[divan::bench]
  fn plain_long(bencher: Bencher) {
    let text = long_plain();
    bencher.bench(|| decode(black_box(&text)).unwrap());
  }

  #[divan::bench]
  fn escaped_long(bencher: Bencher) {
    let text = long_escaped();
    bencher.bench(|| decode(black_box(&text)).unwrap());
  }
}

// `encode` benchmarks.

mod encoding {
  use super::*;

  #[divan::bench]
  fn plain(bencher: Bencher) {
    let text = long_plain();
    bencher.bench(|| encode(black_box(&text)));
  }

  #[divan::bench]
  fn controls(bencher: Bencher) {
    let text = "\u{1}\u{7}\n\u{200b}\u{e000}x".repeat(64);
    bencher.bench(|| encode(black_box(&text)));
  }
}

// `OffsetMap::to_raw` benchmarks.

mod mapping {
  use super::*;

  #[divan::bench]
  fn every_offset(bencher: Bencher) {
    let raw = long_escaped();
    let decoded = decode(&raw).unwrap();
    let len = decoded.text.chars().count();
    let host = 1..raw.chars().count() + 1;
    bencher.bench(|| {
      (0..=len)
        .filter_map(|offset| decoded.offsets.to_raw(black_box(offset), host.clone()))
        .count()
    });
  }
}
