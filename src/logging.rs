use super::*;

/// Sends log records to `path`, since the terminal is taken over while
/// typing. `RUST_LOG` overrides the default level.
pub(crate) fn init(path: &Path) -> Result {
  let file = File::create(path)
    .map_err(|error| anyhow!("failed to create log file `{}`: {error}", path.display()))?;

  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("quotype=debug"))
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init()?;

  Ok(())
}
