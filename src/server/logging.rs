use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. Keeps per-query sqlx output out of the log.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Initializes the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
