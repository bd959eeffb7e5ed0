//! Tabula Core
//!
//! Shared plumbing for the Tabula crates: hash collections, logging setup and
//! profiling hooks.

pub mod alloc;
pub mod logging;

#[cfg(feature = "profiling")]
pub mod profiling;

/// No-op profiling macros used when the `profiling` feature is disabled.
#[cfg(not(feature = "profiling"))]
pub mod profiling {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __tabula_profile_noop {
        ($($tt:tt)*) => {};
    }

    pub use crate::__tabula_profile_noop as profile_function;
    pub use crate::__tabula_profile_noop as profile_scope;

    /// Mark the start of a new frame (no-op without the `profiling` feature).
    #[inline]
    pub fn new_frame() {}
}
