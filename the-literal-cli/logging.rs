use std::path::Path;

use eyre::{
  Result,
  WrapErr,
};

fn level_for(verbosity: u8) -> log::LevelFilter {
  match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  }
}

/// Routes log records (and `tracing` events forwarded as records) to the log
/// file when one is given, else to stderr.
pub fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
  let base_config = fern::Dispatch::new()
    .level(level_for(verbosity))
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    });

  let base_config = match log_file {
    Some(path) => {
      let file = fern::log_file(path)
        .wrap_err_with(|| format!("failed to open log file '{}'", path.display()))?;
      base_config.chain(file)
    },
    None => base_config.chain(std::io::stderr()),
  };

  base_config.apply().wrap_err("failed to install logger")
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn verbosity_levels() {
    assert_eq!(level_for(0), log::LevelFilter::Warn);
    assert_eq!(level_for(1), log::LevelFilter::Info);
    assert_eq!(level_for(2), log::LevelFilter::Debug);
    assert_eq!(level_for(3), log::LevelFilter::Trace);
    assert_eq!(level_for(9), log::LevelFilter::Trace);
  }
}
