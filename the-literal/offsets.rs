//! Mapping between decoded offsets and raw literal offsets.

use std::ops::Range;

/// Correspondence between the chars of a decoded literal and the raw body it
/// was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetMap {
  /// Raw literal: decoded text is the body itself.
  Verbatim { len: usize },
  /// Interpreted literal. `entries[d]` is the raw offset of decoded boundary
  /// `d`; there is one slot per raw char plus one, and slots past the end of
  /// the decoded text stay `None`.
  Escaped { entries: Box<[Option<usize>]> },
}

impl OffsetMap {
  /// The map of an interpreted body of `len` chars that contains no escapes.
  pub fn identity(len: usize) -> Self {
    Self::Escaped {
      entries: (0..=len).map(Some).collect(),
    }
  }

  /// Raw offset of decoded boundary `decoded`, relative to the body.
  pub fn get(&self, decoded: usize) -> Option<usize> {
    match self {
      Self::Verbatim { len } => (decoded <= *len).then_some(decoded),
      Self::Escaped { entries } => entries.get(decoded).copied().flatten(),
    }
  }

  /// Translates a decoded offset into an offset inside `host`, the range the
  /// body occupies in its host text.
  ///
  /// Raw literals clamp and always succeed. Interpreted literals return `None`
  /// when `decoded` has no anchored boundary. The result never leaves `host`.
  pub fn to_raw(&self, decoded: usize, host: Range<usize>) -> Option<usize> {
    let host_len = host.end.saturating_sub(host.start);
    let raw = match self {
      Self::Verbatim { .. } => decoded,
      Self::Escaped { entries } => entries.get(decoded).copied().flatten()?,
    };
    Some(raw.min(host_len) + host.start)
  }

  /// Decoded boundary that raw offset `raw` corresponds to, or `None` when
  /// `raw` sits inside a multi-char escape.
  pub fn to_decoded(&self, raw: usize) -> Option<usize> {
    match self {
      Self::Verbatim { len } => (raw <= *len).then_some(raw),
      Self::Escaped { entries } => {
        entries
          .iter()
          .map_while(|entry| *entry)
          .position(|offset| offset == raw)
      },
    }
  }

  /// Number of decoded chars the map covers.
  pub fn decoded_len(&self) -> usize {
    match self {
      Self::Verbatim { len } => *len,
      Self::Escaped { entries } => {
        entries
          .iter()
          .take_while(|entry| entry.is_some())
          .count()
          .saturating_sub(1)
      },
    }
  }
}

/// Maps a decoded offset back into the host text. See [`OffsetMap::to_raw`].
#[inline]
pub fn map_decoded_to_raw(map: &OffsetMap, decoded: usize, host: Range<usize>) -> Option<usize> {
  map.to_raw(decoded, host)
}
