//! User configuration, read from `config.toml`.

use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use eyre::{
  Result,
  WrapErr,
};
use serde::Deserialize;
use the_literal::LiteralKind;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyKind {
  #[default]
  Interpreted,
  Raw,
}

impl From<BodyKind> for LiteralKind {
  fn from(kind: BodyKind) -> Self {
    match kind {
      BodyKind::Interpreted => LiteralKind::Interpreted,
      BodyKind::Raw => LiteralKind::Raw,
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Literal kind assumed for `decode --body` input.
  pub kind:  BodyKind,
  /// Whether `encode` wraps its output in double quotes.
  pub quote: bool,
}

impl Config {
  /// Loads `explicit` if given, else the user config file when one exists.
  pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
      return Self::from_file(path);
    }

    match config_file() {
      Some(path) if path.exists() => Self::from_file(&path),
      _ => {
        log::debug!("no user config found, using defaults");
        Ok(Config::default())
      },
    }
  }

  pub fn from_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
      .wrap_err_with(|| format!("failed to read config file '{}'", path.display()))?;
    let config = toml::from_str(&text)
      .wrap_err_with(|| format!("failed to parse config file '{}'", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
  }
}

pub fn config_dir() -> Option<PathBuf> {
  if let Ok(dir) = std::env::var("THE_LITERAL_CONFIG_DIR") {
    return Some(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().ok()?;
  Some(strategy.config_dir().join("the-literal"))
}

pub fn config_file() -> Option<PathBuf> {
  config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn parse_full_config() {
    let config: Config = toml::from_str("kind = \"raw\"\nquote = true\n").unwrap();
    assert_eq!(config, Config {
      kind:  BodyKind::Raw,
      quote: true,
    });
    assert_eq!(LiteralKind::from(config.kind), LiteralKind::Raw);
  }

  #[test]
  fn missing_fields_use_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(LiteralKind::from(config.kind), LiteralKind::Interpreted);
  }

  #[test]
  fn unknown_fields_are_rejected() {
    assert!(toml::from_str::<Config>("quoted = true").is_err());
    assert!(toml::from_str::<Config>("kind = \"verbatim\"").is_err());
  }

  #[test]
  fn explicit_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load(Some(dir.path().join("missing.toml").as_path())).is_err());

    let path = dir.path().join("config.toml");
    fs::write(&path, "quote = true").unwrap();
    let config = Config::load(Some(path.as_path())).unwrap();
    assert!(config.quote);
    assert_eq!(config.kind, BodyKind::Interpreted);
  }
}
