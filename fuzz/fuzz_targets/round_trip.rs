#![no_main]

use libfuzzer_sys::fuzz_target;
use the_literal::{
  LiteralEscaper,
  StringLiteral,
  decode,
  encode,
  quote,
};

fuzz_target!(|text: String| {
  let encoded = encode(&text);
  let decoded = decode(&encoded).expect("encoder output must decode");
  assert_eq!(decoded.text, text);

  let quoted = quote(&text);
  let literal = StringLiteral::new(&quoted).expect("quoted text is a literal");
  let mut escaper = LiteralEscaper::new(literal);
  let range = escaper.relevant_text_range();
  assert_eq!(escaper.decode(range).expect("quoted text must decode"), text);
});
