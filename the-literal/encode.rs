//! Escaping of logical text into the body of an interpreted literal.

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

use crate::escape::single_letter_escape;

/// Escapes `text` so that it can be written between double quotes.
pub fn encode(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  encode_with(text, &mut res);
  res
}

pub fn encode_with(text: &str, buf: &mut String) {
  for ch in text.chars() {
    if let Some(escape) = single_letter_escape(ch) {
      buf.push_str(escape);
    } else if char_needs_unicode_escape(ch) {
      push_unicode_escape(ch, buf);
    } else {
      buf.push(ch);
    }
  }
}

/// Encodes `text` and wraps it in double quotes.
pub fn quote(text: &str) -> String {
  let mut res = String::with_capacity(text.len() + 2);
  res.push('"');
  encode_with(text, &mut res);
  res.push('"');
  res
}

/// Whether `ch` is invisible or meaningless enough that it is written as a
/// Unicode escape instead of verbatim.
#[inline]
pub fn char_needs_unicode_escape(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::Control
      | GeneralCategory::Format
      | GeneralCategory::PrivateUse
      | GeneralCategory::Unassigned
  )
}

/// Writes the short form for code points that fit four hex digits and the
/// long form for everything above.
fn push_unicode_escape(ch: char, buf: &mut String) {
  let code = u32::from(ch);
  let escape = if code <= 0xFFFF {
    format!("\\u{code:04X}")
  } else {
    format!("\\U{code:08X}")
  };
  buf.push_str(&escape);
}
