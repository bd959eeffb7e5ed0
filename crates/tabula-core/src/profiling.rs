//! Profiling utilities based on the `puffin` crate.

use std::sync::OnceLock;

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Global profiling server instance.
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Default address for the puffin HTTP server.
pub const DEFAULT_PROFILING_ADDR: &str = "127.0.0.1:8585";

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use tabula_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            puffin::set_scopes_on(true);

            match puffin_http::Server::new(DEFAULT_PROFILING_ADDR) {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://{}", DEFAULT_PROFILING_ADDR);
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Hosts call this once per UI tick so resize work is grouped by tick.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
