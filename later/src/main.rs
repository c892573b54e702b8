mod app;
mod arguments;

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `LATER_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("LATER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    std::process::exit(app::run());
}
