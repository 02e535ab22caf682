use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr diagnostics subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Colors are
/// disabled when `NO_COLOR` is set. Returns `false` when a global
/// subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_color = std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color)
                .with_target(false),
        )
        .try_init()
        .is_ok()
}
