//! Decoding of string literal bodies into their logical text.
//!
//! Decoding produces the text a literal stands for together with an
//! [`OffsetMap`] that anchors every decoded char boundary to the raw offset it
//! came from. All offsets are counted in chars.

use thiserror::Error;

use crate::{
  LiteralKind,
  escape::{
    EscapeClass,
    octal_digit,
    single_letter_value,
  },
  offsets::OffsetMap,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
  #[error("malformed escape sequence '{sequence}' at offset {offset}")]
  MalformedEscape { offset: usize, sequence: String },
  #[error("escape sequence '{sequence}' at offset {offset} is not allowed in a literal")]
  ForbiddenEscapeValue { offset: usize, sequence: String },
  #[error("unterminated escape sequence at offset {offset}")]
  UnterminatedEscape { offset: usize },
}

impl DecodeError {
  /// Char offset of the backslash that starts the offending escape.
  pub fn offset(&self) -> usize {
    match self {
      Self::MalformedEscape { offset, .. }
      | Self::ForbiddenEscapeValue { offset, .. }
      | Self::UnterminatedEscape { offset } => *offset,
    }
  }
}

type Result<T> = std::result::Result<T, DecodeError>;

/// The result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
  pub text:    String,
  pub offsets: OffsetMap,
}

/// Decodes the body of an interpreted (double-quoted) literal.
pub fn decode(raw: &str) -> Result<Decoded> {
  decode_literal(LiteralKind::Interpreted, raw)
}

/// Decodes `raw` according to the literal's kind. Raw literals never fail.
pub fn decode_literal(kind: LiteralKind, raw: &str) -> Result<Decoded> {
  let mut text = String::with_capacity(raw.len());
  let offsets = decode_literal_with(kind, raw, &mut text)?;
  Ok(Decoded { text, offsets })
}

/// Like [`decode`] but appends the decoded text to `buf`.
///
/// The returned map is relative to the first char this call appends. On
/// failure `buf` holds whatever was decoded before the bad escape and must not
/// be shown as the literal's value.
pub fn decode_with(raw: &str, buf: &mut String) -> Result<OffsetMap> {
  decode_literal_with(LiteralKind::Interpreted, raw, buf)
}

/// Like [`decode_literal`] but appends the decoded text to `buf`.
///
/// Raw bodies get a [`OffsetMap::Verbatim`] map, interpreted bodies an
/// [`OffsetMap::Escaped`] one relative to the first char this call appends.
pub fn decode_literal_with(kind: LiteralKind, raw: &str, buf: &mut String) -> Result<OffsetMap> {
  match kind {
    LiteralKind::Raw => {
      buf.push_str(raw);
      Ok(OffsetMap::Verbatim {
        len: raw.chars().count(),
      })
    },
    LiteralKind::Interpreted if !raw.contains('\\') => {
      buf.push_str(raw);
      Ok(OffsetMap::identity(raw.chars().count()))
    },
    LiteralKind::Interpreted => {
      Decoder::new(raw, buf).run().inspect_err(|err| {
        tracing::trace!(%err, "failed to decode string literal");
      })
    },
  }
}

struct Decoder<'a> {
  chars:   Vec<char>,
  /// Raw offset of the next char to consume.
  index:   usize,
  /// Decoded chars emitted so far.
  decoded: usize,
  entries: Vec<Option<usize>>,
  buf:     &'a mut String,
}

impl<'a> Decoder<'a> {
  fn new(raw: &str, buf: &'a mut String) -> Self {
    let chars: Vec<char> = raw.chars().collect();
    let entries = vec![None; chars.len() + 1];
    Self {
      chars,
      index: 0,
      decoded: 0,
      entries,
      buf,
    }
  }

  fn run(mut self) -> Result<OffsetMap> {
    while let Some(&ch) = self.chars.get(self.index) {
      let start = self.index;
      self.index += 1;

      // decoded <= start here, so both slots are within raw_len + 1.
      self.entries[self.decoded] = Some(start);
      self.entries[self.decoded + 1] = Some(self.index);

      if ch != '\\' {
        self.emit(ch);
        continue;
      }

      let value = self.escape(start)?;
      self.emit(value);
      self.entries[self.decoded] = Some(self.index);
    }

    Ok(OffsetMap::Escaped {
      entries: self.entries.into_boxed_slice(),
    })
  }

  fn emit(&mut self, ch: char) {
    self.buf.push(ch);
    self.decoded += 1;
  }

  /// Consumes the escape whose backslash sits at `start`.
  fn escape(&mut self, start: usize) -> Result<char> {
    let Some(&introducer) = self.chars.get(self.index) else {
      return Err(DecodeError::UnterminatedEscape { offset: start });
    };
    self.index += 1;

    match EscapeClass::from_introducer(introducer) {
      Some(EscapeClass::SingleLetter) => {
        single_letter_value(introducer).ok_or_else(|| self.malformed(start))
      },
      Some(EscapeClass::Octal) => Ok(self.octal(introducer)),
      Some(class @ EscapeClass::Hex) => {
        let value = self.hex_digits(start, class)?;
        // Two hex digits always fit in a byte.
        Ok(char::from(value as u8))
      },
      Some(class @ (EscapeClass::ShortUnicode | EscapeClass::LongUnicode)) => {
        self.unicode(start, class)
      },
      _ => Err(self.malformed(start)),
    }
  }

  /// Octal escapes take up to three digits when the lead digit is 0-3 and up
  /// to two otherwise, so the value always fits in a byte.
  fn octal(&mut self, lead: char) -> char {
    let mut value = octal_digit(lead).unwrap_or_default();
    let max_digits = if lead <= '3' { 3 } else { 2 };

    for _ in 1..max_digits {
      match self.chars.get(self.index).copied().and_then(octal_digit) {
        Some(digit) => {
          value = value * 8 + digit;
          self.index += 1;
        },
        None => break,
      }
    }

    char::from(value as u8)
  }

  fn unicode(&mut self, start: usize, class: EscapeClass) -> Result<char> {
    let end = self.index + class.hex_digits().unwrap_or_default();
    if end > self.chars.len() {
      self.index = self.chars.len();
      return Err(self.malformed(start));
    }
    if matches!(self.chars.get(self.index), Some('+' | '-')) {
      self.index = end;
      return Err(self.forbidden(start));
    }

    let value = self.hex_digits(start, class)?;
    // Line breaks may not be smuggled into a single-line literal.
    if value == 0x0A || value == 0x0D {
      return Err(self.forbidden(start));
    }
    char::from_u32(value).ok_or_else(|| self.forbidden(start))
  }

  /// Consumes exactly the number of hex digits `class` requires.
  fn hex_digits(&mut self, start: usize, class: EscapeClass) -> Result<u32> {
    let count = class.hex_digits().unwrap_or_default();
    let end = self.index + count;
    if end > self.chars.len() {
      self.index = self.chars.len();
      return Err(self.malformed(start));
    }

    let mut value = 0u32;
    for &ch in &self.chars[self.index..end] {
      let Some(digit) = ch.to_digit(16) else {
        self.index = end;
        return Err(self.malformed(start));
      };
      value = (value << 4) | digit;
    }

    self.index = end;
    Ok(value)
  }

  fn sequence(&self, start: usize) -> String {
    self.chars[start..self.index.min(self.chars.len())].iter().collect()
  }

  fn malformed(&self, start: usize) -> DecodeError {
    DecodeError::MalformedEscape {
      offset:   start,
      sequence: self.sequence(start),
    }
  }

  fn forbidden(&self, start: usize) -> DecodeError {
    DecodeError::ForbiddenEscapeValue {
      offset:   start,
      sequence: self.sequence(start),
    }
  }
}
