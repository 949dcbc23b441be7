//! Editing support for text injected into string literals.
//!
//! An editor that lets users search or edit the decoded value of a literal
//! works on the decoded text and needs every position it reports mapped back
//! into the literal as written. [`LiteralEscaper`] owns that round trip for a
//! single literal token.
//!
//! # Example
//!
//! ```
//! use the_literal::{LiteralEscaper, StringLiteral};
//!
//! let literal = StringLiteral::new(r#""tab\there""#).unwrap();
//! let mut escaper = LiteralEscaper::new(literal);
//! let range = escaper.relevant_text_range();
//!
//! let decoded = escaper.decode(range.clone()).unwrap();
//! assert_eq!(decoded, "tab\there");
//!
//! // "here" starts at decoded offset 4, after the two-char `\t` escape.
//! assert_eq!(escaper.offset_in_host(4, range), Some(6));
//! ```
use std::ops::Range;

use thiserror::Error;

use crate::{
  LiteralKind,
  decode::{
    DecodeError,
    decode_literal_with,
  },
  literal::StringLiteral,
  offsets::OffsetMap,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  #[error("range {start}..{end} is not inside a literal of {len} chars")]
  InvalidRange { start: usize, end: usize, len: usize },
  #[error(transparent)]
  Decode(#[from] DecodeError),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct LiteralEscaper<'a> {
  host:    StringLiteral<'a>,
  /// Map of the last successful decode of an interpreted host.
  offsets: Option<OffsetMap>,
}

impl<'a> LiteralEscaper<'a> {
  pub fn new(host: StringLiteral<'a>) -> Self {
    Self {
      host,
      offsets: None,
    }
  }

  /// The part of the host that holds editable content.
  #[inline]
  pub fn relevant_text_range(&self) -> Range<usize> {
    self.host.content_range()
  }

  /// Both literal forms are edited as a single line.
  #[inline]
  pub fn is_one_line(&self) -> bool {
    true
  }

  /// Decodes the host text inside `range` and remembers how to map back.
  pub fn decode(&mut self, range: Range<usize>) -> Result<String> {
    let mut out = String::new();
    self.decode_with(range, &mut out)?;
    Ok(out)
  }

  pub fn decode_with(&mut self, range: Range<usize>, buf: &mut String) -> Result<()> {
    self.offsets = None;
    self.check_range(&range)?;

    let sub_text = self.host.slice(range);
    let offsets = decode_literal_with(self.host.kind(), sub_text, buf)?;
    if !self.host.is_raw() {
      self.offsets = Some(offsets);
    }
    Ok(())
  }

  /// Maps a decoded offset into the host, given the same `range` that was
  /// decoded.
  ///
  /// Returns `None` for offsets with no exact counterpart in the host and
  /// when the last decode of an interpreted literal did not succeed.
  pub fn offset_in_host(&self, decoded: usize, range: Range<usize>) -> Option<usize> {
    match self.host.kind() {
      LiteralKind::Raw => {
        OffsetMap::Verbatim {
          len: range.len(),
        }
        .to_raw(decoded, range)
      },
      LiteralKind::Interpreted => self.offsets.as_ref()?.to_raw(decoded, range),
    }
  }

  fn check_range(&self, range: &Range<usize>) -> Result<()> {
    let len = self.host.len_chars();
    if range.start > range.end || range.end > len {
      tracing::debug!(?range, len, "rejecting range outside string literal");
      return Err(Error::InvalidRange {
        start: range.start,
        end:   range.end,
        len,
      });
    }
    Ok(())
  }
}
