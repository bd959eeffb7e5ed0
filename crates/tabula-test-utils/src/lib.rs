//! Test utilities for Tabula.
//!
//! This crate provides table fixtures and a recording content measurer for
//! testing the resize engine without a real text renderer.
//!
//! # Overview
//!
//! - [`fixtures`] - Ready-made tables, item trees and width assertions
//! - `MockMeasurer` - A [`ContentMeasurer`](tabula_table::ContentMeasurer)
//!   that records every call (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use tabula_table::{Column, FlatTable, TableAdapter, Viewport};
//! use tabula_test_utils::MockMeasurer;
//!
//! let measurer = MockMeasurer::new(10.0);
//! let mut table = FlatTable::new([Column::new("Name")])
//!     .unwrap()
//!     .with_items(["ab".to_string(), "abcd".to_string()])
//!     .with_measurer(measurer.clone());
//!
//! let ids = table.content_columns();
//! assert_eq!(table.fit_columns_to_content(&ids, 50), 1);
//! assert_eq!(measurer.count_cell_measures(), 2);
//! # }
//! ```

pub mod fixtures;
#[cfg(feature = "mock")]
pub mod mock_measurer;

pub use fixtures::*;
#[cfg(feature = "mock")]
pub use mock_measurer::*;
