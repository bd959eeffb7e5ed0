//! Column identity.
//!
//! A [`ColumnId`] names a column independently of where it sits in the
//! table. Drag deltas are keyed by it, so they follow a column when other
//! columns are inserted, removed or reordered, and a column declared again
//! under the same key is the same column to the engine.

use std::fmt;

/// Identity of a column, hashed from its key.
///
/// The key is the column title unless it was overridden with
/// [`Column::with_id`](crate::Column::with_id). Hashing is deterministic, so
/// IDs can be built in `const` context and compared across tables.
///
/// # Example
/// ```
/// use tabula_table::{Column, ColumnId};
///
/// const PRICE: ColumnId = ColumnId::new("price");
///
/// assert_eq!(Column::new("price").id(), PRICE);
/// assert_eq!(Column::new("Price (EUR)").with_id("price").id(), PRICE);
/// assert_ne!(Column::new("Price").id(), PRICE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(u64);

impl ColumnId {
    /// Identity of the column keyed by `key`.
    pub const fn new(key: &str) -> Self {
        Self(fnv1a(key.as_bytes()))
    }
}

// 64-bit FNV-1a.
const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u64).wrapping_mul(0x0000_0100_0000_01b3);
        i += 1;
    }
    hash
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_decides_identity() {
        assert_eq!(ColumnId::new("price"), ColumnId::from("price"));
        assert_ne!(ColumnId::new("price"), ColumnId::new("Price"));
        assert_ne!(ColumnId::new("a"), ColumnId::new("b"));
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(format!("{}", ColumnId::new("")), "#cbf29ce484222325");
    }
}
