use std::ops::Range;

/// The two string literal forms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
  /// Double-quoted, backslash escapes are interpreted.
  #[default]
  Interpreted,
  /// Backtick-quoted, the body is taken verbatim.
  Raw,
}

impl LiteralKind {
  #[inline]
  pub const fn delimiter(&self) -> char {
    match self {
      Self::Interpreted => '"',
      Self::Raw => '`',
    }
  }

  #[inline]
  pub const fn from_delimiter(ch: char) -> Option<LiteralKind> {
    match ch {
      '"' => Some(Self::Interpreted),
      '`' => Some(Self::Raw),
      _ => None,
    }
  }
}

/// A complete string literal token, delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLiteral<'a> {
  text:      &'a str,
  kind:      LiteralKind,
  len_chars: usize,
}

impl<'a> StringLiteral<'a> {
  /// Returns `None` unless `text` opens with a literal delimiter.
  pub fn new(text: &'a str) -> Option<Self> {
    let kind = LiteralKind::from_delimiter(text.chars().next()?)?;
    Some(Self {
      text,
      kind,
      len_chars: text.chars().count(),
    })
  }

  #[inline]
  pub fn text(&self) -> &'a str {
    self.text
  }

  #[inline]
  pub fn kind(&self) -> LiteralKind {
    self.kind
  }

  #[inline]
  pub fn is_raw(&self) -> bool {
    self.kind == LiteralKind::Raw
  }

  #[inline]
  pub fn len_chars(&self) -> usize {
    self.len_chars
  }

  /// Char range of the body between the delimiters. A literal that is still
  /// missing its closing delimiter runs to the end of the token.
  pub fn content_range(&self) -> Range<usize> {
    let closed = self.len_chars >= 2 && self.text.ends_with(self.kind.delimiter());
    // A lone `"\"` ends in its delimiter only because it is escaped.
    let closed = closed && !(self.kind == LiteralKind::Interpreted && self.ends_in_escape());
    let end = if closed {
      self.len_chars - 1
    } else {
      self.len_chars
    };
    1..end
  }

  pub fn body(&self) -> &'a str {
    self.slice(self.content_range())
  }

  /// The text of a char range of the token. Out of range ends are clamped.
  pub fn slice(&self, range: Range<usize>) -> &'a str {
    let start = self.byte_offset(range.start);
    let end = self.byte_offset(range.end.max(range.start));
    &self.text[start..end]
  }

  fn byte_offset(&self, char_idx: usize) -> usize {
    self
      .text
      .char_indices()
      .nth(char_idx)
      .map_or(self.text.len(), |(idx, _)| idx)
  }

  /// Whether the final delimiter is preceded by an odd run of backslashes.
  fn ends_in_escape(&self) -> bool {
    let inner = &self.text[..self.text.len() - 1];
    // Skip the opening delimiter so it is never counted.
    let inner = inner.get(1..).unwrap_or_default();
    inner.chars().rev().take_while(|&ch| ch == '\\').count() % 2 == 1
  }
}
