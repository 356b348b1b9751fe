//! Logging setup on the tracing stack. `RUST_LOG` takes precedence over the
//! configured level.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
