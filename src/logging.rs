use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, writing to stderr
///
/// `level` is an `EnvFilter` directive. `RUST_LOG` takes precedence when set.
pub fn init_tracing(level: &str) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) if !directive.is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(level),
    }
    .context("invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
