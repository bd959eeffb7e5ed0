//! Collection types used across Tabula.
//!
//! Re-exports the AHash-backed hash collections so every crate in the
//! workspace hashes column identities the same way.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet};
