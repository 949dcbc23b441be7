use std::io::{
  Read,
  Write,
};

use eyre::{
  Result,
  WrapErr,
  eyre,
};
use the_literal::{
  LiteralEscaper,
  LiteralKind,
  StringLiteral,
  decode_literal,
  encode,
  quote,
};

use crate::{
  cli::Command,
  config::Config,
};

pub fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
  match command {
    Command::Decode { body, raw, input } => {
      let input = input_or_stdin(input)?;
      let decoded = if body {
        let kind = if raw {
          LiteralKind::Raw
        } else {
          config.kind.into()
        };
        decode_literal(kind, &input)
          .wrap_err("failed to decode literal body")?
          .text
      } else {
        decode_token(&input)?
      };
      writeln!(out, "{decoded}")?;
    },
    Command::Encode {
      quote: quoted,
      input,
    } => {
      let input = input_or_stdin(input)?;
      let encoded = if quoted || config.quote {
        quote(&input)
      } else {
        encode(&input)
      };
      writeln!(out, "{encoded}")?;
    },
    Command::Map { literal, offsets } => {
      let host = parse_literal(&literal)?;
      let mut escaper = LiteralEscaper::new(host);
      let range = escaper.relevant_text_range();
      escaper
        .decode(range.clone())
        .wrap_err("failed to decode literal")?;

      for offset in offsets {
        match escaper.offset_in_host(offset, range.clone()) {
          Some(host_offset) => writeln!(out, "{offset} -> {host_offset}")?,
          None => writeln!(out, "{offset} -> -")?,
        }
      }
    },
  }

  Ok(())
}

fn parse_literal(text: &str) -> Result<StringLiteral<'_>> {
  StringLiteral::new(text).ok_or_else(|| eyre!("not a string literal: {text}"))
}

fn decode_token(text: &str) -> Result<String> {
  let host = parse_literal(text)?;
  let mut escaper = LiteralEscaper::new(host);
  let range = escaper.relevant_text_range();
  escaper.decode(range).wrap_err("failed to decode literal")
}

/// Uses `input` if given, else all of stdin minus one trailing line break.
fn input_or_stdin(input: Option<String>) -> Result<String> {
  if let Some(input) = input {
    return Ok(input);
  }

  let mut buf = String::new();
  std::io::stdin()
    .read_to_string(&mut buf)
    .wrap_err("failed to read stdin")?;
  Ok(strip_line_break(buf))
}

fn strip_line_break(mut text: String) -> String {
  if text.ends_with('\n') {
    text.pop();
    if text.ends_with('\r') {
      text.pop();
    }
  }
  text
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::config::BodyKind;

  fn run_to_string(command: Command, config: &Config) -> Result<String> {
    let mut out = Vec::new();
    run(command, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
  }

  #[test]
  fn decode_literal_token() {
    let output = run_to_string(
      Command::Decode {
        body:  false,
        raw:   false,
        input: Some(r#""a\tb\x41""#.to_string()),
      },
      &Config::default(),
    )
    .unwrap();
    assert_eq!(output, "a\tbA\n");
  }

  #[test]
  fn decode_body_uses_configured_kind() {
    let command = || Command::Decode {
      body:  true,
      raw:   false,
      input: Some(r"a\tb".to_string()),
    };
    let interpreted = run_to_string(command(), &Config::default()).unwrap();
    assert_eq!(interpreted, "a\tb\n");

    let config = Config {
      kind:  BodyKind::Raw,
      quote: false,
    };
    let raw = run_to_string(command(), &config).unwrap();
    assert_eq!(raw, "a\\tb\n");
  }

  #[test]
  fn decode_reports_bad_input() {
    let config = Config::default();
    assert!(
      run_to_string(
        Command::Decode {
          body:  false,
          raw:   false,
          input: Some("plain".to_string()),
        },
        &config
      )
      .is_err()
    );
    assert!(
      run_to_string(
        Command::Decode {
          body:  true,
          raw:   false,
          input: Some(r"\q".to_string()),
        },
        &config
      )
      .is_err()
    );
  }

  #[test]
  fn encode_and_quote() {
    let encode = |quote| Command::Encode {
      quote,
      input: Some("say \"hi\"\n".to_string()),
    };
    let config = Config::default();
    assert_eq!(
      run_to_string(encode(false), &config).unwrap(),
      "say \\\"hi\\\"\\n\n"
    );
    assert_eq!(
      run_to_string(encode(true), &config).unwrap(),
      "\"say \\\"hi\\\"\\n\"\n"
    );

    let config = Config {
      kind:  BodyKind::Interpreted,
      quote: true,
    };
    assert_eq!(
      run_to_string(encode(false), &config).unwrap(),
      "\"say \\\"hi\\\"\\n\"\n"
    );
  }

  #[test]
  fn map_offsets() {
    let output = run_to_string(
      Command::Map {
        literal: r#""a\x41b""#.to_string(),
        offsets: vec![0, 2, 3, 9],
      },
      &Config::default(),
    )
    .unwrap();
    assert_eq!(output, "0 -> 1\n2 -> 6\n3 -> 7\n9 -> -\n");
  }

  #[test]
  fn stdin_line_break_is_stripped() {
    assert_eq!(strip_line_break("abc\n".to_string()), "abc");
    assert_eq!(strip_line_break("abc\r\n".to_string()), "abc");
    assert_eq!(strip_line_break("abc\n\n".to_string()), "abc\n");
    assert_eq!(strip_line_break("abc".to_string()), "abc");
  }
}
