use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "riskfolio=info,warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// If a global subscriber is already installed it stays in place and the
/// failure is reported on stderr.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init();
    if let Err(e) = installed {
        eprintln!("tracing subscriber not installed: {e}");
    }
}
