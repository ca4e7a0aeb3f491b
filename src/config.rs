//! Catalog configuration.
//!
//! Values are read from the `catalog` key of Rocket's figment, so they can be
//! set in `Rocket.toml` under `[default.catalog]` or overridden with
//! `ROCKET_CATALOG`. Anything left out falls back to the game's defaults.

use rocket::figment::Figment;
use serde::Deserialize;

/// Formula constants for one entity class.
///
/// The food needed to level up from `level` is
/// `floor(food_base * level^food_exponent)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LevelCurve {
    pub max_level: u32,
    pub food_base: f64,
    pub food_exponent: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub hero: LevelCurve,
    pub pet: LevelCurve,
    pub castle_max_level: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            hero: LevelCurve {
                max_level: 230,
                food_base: 100.0,
                food_exponent: 1.5,
            },
            pet: LevelCurve {
                max_level: 60,
                food_base: 80.0,
                food_exponent: 1.5,
            },
            castle_max_level: 15,
        }
    }
}

impl CatalogConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, anyhow::Error> {
        let config = figment.focus("catalog").extract::<CatalogConfig>()?;
        Ok(config)
    }
}
