//! The backslash escape grammar shared by the decoder and the encoder.
//!
//! Escapes follow Go's rune literal syntax: single-letter escapes, octal
//! (`\123`), two-digit hex (`\x41`), and the short (`\u` and four hex digits) and
//! long (`\U0001F600`) Unicode forms.

/// How a stretch of raw literal text maps to decoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeClass {
  /// A plain character, copied through.
  Identity,
  /// `\n`, `\t`, `\\` and friends.
  SingleLetter,
  /// `\7`, `\17` or `\177`.
  Octal,
  /// `\xFF`.
  Hex,
  /// `\u` followed by four hex digits.
  ShortUnicode,
  /// `\U0010FFFF`.
  LongUnicode,
}

impl EscapeClass {
  /// Classifies the character that follows a backslash.
  pub const fn from_introducer(ch: char) -> Option<EscapeClass> {
    match ch {
      '0'..='7' => Some(Self::Octal),
      'x' => Some(Self::Hex),
      'u' => Some(Self::ShortUnicode),
      'U' => Some(Self::LongUnicode),
      _ if single_letter_value(ch).is_some() => Some(Self::SingleLetter),
      _ => None,
    }
  }

  /// Number of hex digits following the introducer, for the numeric forms
  /// that take a fixed count.
  #[inline]
  pub const fn hex_digits(&self) -> Option<usize> {
    match self {
      Self::Hex => Some(2),
      Self::ShortUnicode => Some(4),
      Self::LongUnicode => Some(8),
      _ => None,
    }
  }

  /// Width of the raw form in chars. Octal escapes vary between 2 and 4.
  #[inline]
  pub const fn raw_len(&self) -> Option<usize> {
    match self {
      Self::Identity => Some(1),
      Self::SingleLetter => Some(2),
      Self::Octal => None,
      Self::Hex => Some(4),
      Self::ShortUnicode => Some(6),
      Self::LongUnicode => Some(10),
    }
  }
}

/// The character a single-letter escape stands for, given the char after the
/// backslash.
#[inline]
pub const fn single_letter_value(ch: char) -> Option<char> {
  match ch {
    'a' => Some('\u{0007}'),
    'b' => Some('\u{0008}'),
    'f' => Some('\u{000C}'),
    'n' => Some('\n'),
    'r' => Some('\r'),
    't' => Some('\t'),
    'v' => Some('\u{000B}'),
    '\\' => Some('\\'),
    '\'' => Some('\''),
    '"' => Some('"'),
    // A backslash before a line break continues the literal with the break.
    '\n' => Some('\n'),
    _ => None,
  }
}

/// The two-char escape written for `ch`, if it has one.
///
/// A newline is always written as `\n`, never as an escaped line break.
#[inline]
pub const fn single_letter_escape(ch: char) -> Option<&'static str> {
  match ch {
    '\u{0007}' => Some("\\a"),
    '\u{0008}' => Some("\\b"),
    '\u{000C}' => Some("\\f"),
    '\n' => Some("\\n"),
    '\r' => Some("\\r"),
    '\t' => Some("\\t"),
    '\u{000B}' => Some("\\v"),
    '\\' => Some("\\\\"),
    '\'' => Some("\\'"),
    '"' => Some("\\\""),
    _ => None,
  }
}

#[inline]
pub(crate) const fn octal_digit(ch: char) -> Option<u32> {
  match ch {
    '0'..='7' => Some(ch as u32 - '0' as u32),
    _ => None,
  }
}
