use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_names(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// Directive used when `RUST_LOG` is unset. Matches every `county*` target.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "county=debug" } else { "county=warn" }
}
