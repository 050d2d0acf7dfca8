use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "activities_roster=info,tower_http=info";

/// Falls back to `DEFAULT_FILTER` when `RUST_LOG` is unset or invalid.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt().with_env_filter(filter).init();
}
