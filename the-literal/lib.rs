//! Decoding, encoding and position mapping for Go string literals.

pub mod decode;
pub mod encode;
pub mod escape;
pub mod escaper;
pub mod literal;
pub mod offsets;

pub use decode::{
  DecodeError,
  Decoded,
  decode,
  decode_literal,
};
pub use encode::{
  encode,
  quote,
};
pub use escaper::{
  Error as EscaperError,
  LiteralEscaper,
};
pub use literal::{
  LiteralKind,
  StringLiteral,
};
pub use offsets::{
  OffsetMap,
  map_decoded_to_raw,
};
