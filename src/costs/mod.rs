//! Level Cost Engine
//!
//! This module holds the per-level cost tables and the range aggregator that
//! sums them. It is pure: no I/O, no shared mutable state, nothing that can
//! block.
//!
//! ## Module Structure
//!
//! - `table.rs` - `CostTable` construction (formula or explicit entries)
//! - `aggregate.rs` - Summation over a half-open level interval
//!
//! ## Quick Start
//!
//! ```rust
//! use crate::costs::{aggregate::aggregate, table::CostTable};
//!
//! let table = CostTable::build(230, 100.0, 1.5)?;
//! assert_eq!(aggregate(&table, 1, 3), 382);
//! assert_eq!(aggregate(&table, 10, 1), 0);
//! ```

pub mod aggregate;
pub mod table;

/// A level within an entity class. Levels start at 1.
pub type Level = u32;

/// A resource amount (food, stone, wood, ruby).
pub type Cost = u64;
