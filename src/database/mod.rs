//! In-Memory Catalog Storage
//!
//! The catalog is seeded once at startup and never written again. There is no
//! database connection: every table lives in memory and is rebuilt from the
//! seed data and the configured formula constants on each start.
//!
//! ## Module Structure
//!
//! - `catalog.rs` - `Catalog` (read side) and `CatalogBuilder` (seed-time inserts)
//! - `seed.rs` - Heroes, pets, castle levels and castle unlocks
//!
//! ## Quick Start
//!
//! ```rust
//! use crate::{config::CatalogConfig, database::seed::seed, utils::levels::LevelRange};
//!
//! let catalog = seed(&CatalogConfig::default())?;
//! let range = LevelRange::new(1, 3, catalog.caps().hero)?;
//! assert_eq!(catalog.calculate_hero_food(range).food, 382);
//! ```

pub mod catalog;
pub mod seed;
