//! Logging setup built on `tracing-subscriber`.

/// Default filter used by [`init`].
///
/// The resize engine logs every distribution phase at `trace`, so the table
/// crate is kept at `debug` unless asked otherwise.
pub const DEFAULT_FILTER: &str = "info,tabula_table=debug";

/// Install a global fmt subscriber with the default filter.
///
/// `RUST_LOG` takes precedence when it is set.
pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    init_with_filter(&filter);
}

/// Install a global fmt subscriber with an explicit filter directive.
///
/// Does nothing if a global subscriber was already installed, so tests and
/// examples can call this freely.
pub fn init_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
