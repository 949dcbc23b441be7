use std::path::PathBuf;

use clap::{
  ArgAction,
  Parser,
  Subcommand,
};

#[derive(Parser, Debug)]
#[command(
  name = "the-literal",
  about = "Decode, encode and map Go string literals",
  long_about = None,
  version
)]
pub struct Cli {
  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count, global = true)]
  pub verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE", global = true)]
  pub log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
  pub config_file: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
  /// Print the value a literal stands for
  Decode {
    /// Treat the input as a literal body, without delimiters
    #[arg(long)]
    body: bool,

    /// Decode the body as a raw (backtick) literal
    #[arg(long, requires = "body")]
    raw: bool,

    /// Literal to decode; read from stdin when omitted
    input: Option<String>,
  },

  /// Escape text for use inside double quotes
  Encode {
    /// Wrap the output in double quotes
    #[arg(long)]
    quote: bool,

    /// Text to encode; read from stdin when omitted
    input: Option<String>,
  },

  /// Map decoded offsets of a literal back to offsets in the literal
  Map {
    /// Complete literal token, delimiters included
    literal: String,

    /// Decoded char offsets to map
    #[arg(required = true)]
    offsets: Vec<usize>,
  },
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn parse_decode() {
    let cli = Cli::try_parse_from(["the-literal", "-vv", "decode", "--body", "--raw", "a"]).unwrap();
    assert_eq!(cli.verbosity, 2);
    assert_eq!(cli.command, Command::Decode {
      body:  true,
      raw:   true,
      input: Some("a".to_string()),
    });
  }

  #[test]
  fn raw_requires_body() {
    assert!(Cli::try_parse_from(["the-literal", "decode", "--raw", "a"]).is_err());
  }

  #[test]
  fn parse_map() {
    let cli = Cli::try_parse_from(["the-literal", "map", "\"a\"", "0", "1"]).unwrap();
    assert_eq!(cli.command, Command::Map {
      literal: "\"a\"".to_string(),
      offsets: vec![0, 1],
    });
    assert!(Cli::try_parse_from(["the-literal", "map", "\"a\""]).is_err());
  }

  #[test]
  fn global_options_after_subcommand() {
    let cli =
      Cli::try_parse_from(["the-literal", "encode", "-c", "conf.toml", "--log", "out.log"]).unwrap();
    assert_eq!(cli.config_file, Some(PathBuf::from("conf.toml")));
    assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    assert_eq!(cli.command, Command::Encode {
      quote: false,
      input: None,
    });
  }
}
