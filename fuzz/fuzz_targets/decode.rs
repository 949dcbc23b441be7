#![no_main]

use libfuzzer_sys::fuzz_target;
use the_literal::{
  OffsetMap,
  decode,
};

fuzz_target!(|data: &[u8]| {
  let Ok(raw) = std::str::from_utf8(data) else {
    return;
  };
  let raw_len = raw.chars().count();

  let Ok(decoded) = decode(raw) else {
    return;
  };
  let decoded_len = decoded.text.chars().count();
  let OffsetMap::Escaped { entries } = &decoded.offsets else {
    panic!("interpreted literal produced a verbatim map");
  };
  assert_eq!(entries.len(), raw_len + 1);

  // Boundaries are anchored in order and end at the end of the body.
  let anchored: Vec<usize> = entries.iter().map_while(|entry| *entry).collect();
  assert_eq!(anchored.len(), decoded_len + 1);
  assert!(anchored.windows(2).all(|pair| pair[0] < pair[1]));
  assert_eq!(anchored.last(), Some(&raw_len));

  let host = 1..raw_len + 1;
  for offset in 0..=decoded_len + 1 {
    if let Some(mapped) = decoded.offsets.to_raw(offset, host.clone()) {
      assert!(host.start <= mapped && mapped <= host.end);
    }
  }
});
