//! The in-memory catalog.
//!
//! `CatalogBuilder` collects seed-time inserts and assigns ids; `build` turns
//! the result into an immutable `Catalog` together with every cost table.
//! After that nothing changes, so the catalog is shared behind an `Arc`
//! without locks.

use std::sync::Arc;

use log::{info, warn};

use crate::{
    config::{CatalogConfig, LevelCurve},
    costs::{
        Cost, Level,
        aggregate::aggregate,
        table::{CostEntry, CostTable, TableError},
    },
    models::{
        calculation::{CastleCostCalculation, FoodCalculation},
        castle_level::{CastleLevel, NewCastleLevel},
        castle_unlock::{CastleUnlock, NewCastleUnlock},
        hero::{Hero, NewHero},
        pet::{NewPet, Pet},
    },
    utils::levels::LevelRange,
};

pub type SharedCatalog = Arc<Catalog>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCaps {
    pub hero: Level,
    pub pet: Level,
    pub castle: Level,
}

#[derive(Debug)]
struct CastleCosts {
    stone: CostTable,
    wood: CostTable,
    ruby: CostTable,
}

#[derive(Debug)]
pub struct Catalog {
    heroes: Vec<Hero>,
    pets: Vec<Pet>,
    castle_levels: Vec<CastleLevel>,
    castle_unlocks: Vec<CastleUnlock>,
    hero_food: CostTable,
    pet_food: CostTable,
    castle_costs: CastleCosts,
    caps: LevelCaps,
}

impl Catalog {
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn hero(&self, id: i32) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.id == id)
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, id: i32) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn castle_levels(&self) -> &[CastleLevel] {
        &self.castle_levels
    }

    /// Looks a castle level up by its level number, not its id.
    pub fn castle_level(&self, level: Level) -> Option<&CastleLevel> {
        self.castle_levels
            .iter()
            .find(|castle_level| Level::try_from(castle_level.level) == Ok(level))
    }

    pub fn castle_unlocks(&self) -> &[CastleUnlock] {
        &self.castle_unlocks
    }

    pub fn castle_unlocks_by_level(&self, level: Level) -> Vec<CastleUnlock> {
        self.castle_unlocks
            .iter()
            .filter(|unlock| Level::try_from(unlock.castle_level) == Ok(level))
            .cloned()
            .collect()
    }

    pub fn hero_food_table(&self) -> &CostTable {
        &self.hero_food
    }

    pub fn pet_food_table(&self) -> &CostTable {
        &self.pet_food
    }

    pub fn calculate_hero_food(&self, range: LevelRange) -> FoodCalculation {
        FoodCalculation::new(range, aggregate(&self.hero_food, range.start(), range.end()))
    }

    pub fn calculate_pet_food(&self, range: LevelRange) -> FoodCalculation {
        FoodCalculation::new(range, aggregate(&self.pet_food, range.start(), range.end()))
    }

    /// Resources to build every castle level above `start` up to and
    /// including `end`. Each castle level row holds the cost of reaching that
    /// level, so the summed interval is `[start + 1, end + 1)`.
    pub fn calculate_castle_cost(&self, range: LevelRange) -> CastleCostCalculation {
        let (start, end) = (range.start() + 1, range.end() + 1);
        CastleCostCalculation {
            start_level: range.start,
            end_level: range.end,
            stone: aggregate(&self.castle_costs.stone, start, end),
            wood: aggregate(&self.castle_costs.wood, start, end),
            ruby: aggregate(&self.castle_costs.ruby, start, end),
        }
    }

    pub fn caps(&self) -> LevelCaps {
        self.caps
    }
}

/// Collects catalog rows before the catalog is frozen. Ids start at 1 and
/// increase by one per insert, separately for each kind of row.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    heroes: Vec<Hero>,
    pets: Vec<Pet>,
    castle_levels: Vec<CastleLevel>,
    castle_unlocks: Vec<CastleUnlock>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_hero(&mut self, hero: NewHero) -> &Hero {
        let hero = hero.with_id(next_id(&self.heroes));
        self.heroes.push(hero);
        &self.heroes[self.heroes.len() - 1]
    }

    pub fn insert_pet(&mut self, pet: NewPet) -> &Pet {
        let pet = pet.with_id(next_id(&self.pets));
        self.pets.push(pet);
        &self.pets[self.pets.len() - 1]
    }

    pub fn insert_castle_level(&mut self, castle_level: NewCastleLevel) -> &CastleLevel {
        let castle_level = castle_level.with_id(next_id(&self.castle_levels));
        self.castle_levels.push(castle_level);
        &self.castle_levels[self.castle_levels.len() - 1]
    }

    pub fn insert_castle_unlock(&mut self, unlock: NewCastleUnlock) -> &CastleUnlock {
        let unlock = unlock.with_id(next_id(&self.castle_unlocks));
        self.castle_unlocks.push(unlock);
        &self.castle_unlocks[self.castle_unlocks.len() - 1]
    }

    /// Freezes the rows and builds the food tables from `config` and the
    /// castle resource tables from the inserted castle levels.
    pub fn build(self, config: &CatalogConfig) -> Result<Catalog, TableError> {
        let hero_food = food_table("hero", &config.hero)?;
        let pet_food = food_table("pet", &config.pet)?;
        let castle_costs = CastleCosts {
            stone: castle_table("stone", &self.castle_levels, |level| level.stone)?,
            wood: castle_table("wood", &self.castle_levels, |level| level.wood)?,
            ruby: castle_table("ruby", &self.castle_levels, |level| level.ruby)?,
        };
        info!(
            "[CatalogBuilder::build] {} heroes, {} pets, {} castle levels, {} castle unlocks",
            self.heroes.len(),
            self.pets.len(),
            self.castle_levels.len(),
            self.castle_unlocks.len()
        );

        Ok(Catalog {
            heroes: self.heroes,
            pets: self.pets,
            castle_levels: self.castle_levels,
            castle_unlocks: self.castle_unlocks,
            hero_food,
            pet_food,
            castle_costs,
            caps: LevelCaps {
                hero: config.hero.max_level,
                pet: config.pet.max_level,
                castle: config.castle_max_level,
            },
        })
    }
}

fn next_id<T>(rows: &[T]) -> i32 {
    rows.len() as i32 + 1
}

fn food_table(class: &str, curve: &LevelCurve) -> Result<CostTable, TableError> {
    let table = CostTable::build(curve.max_level, curve.food_base, curve.food_exponent)?;
    info!(
        "[food_table] Built {} food table: levels 1..={}, base {}, exponent {}",
        class,
        table.max_level(),
        curve.food_base,
        curve.food_exponent
    );
    Ok(table)
}

fn castle_table(
    resource_name: &str,
    castle_levels: &[CastleLevel],
    resource: impl Fn(&CastleLevel) -> i32,
) -> Result<CostTable, TableError> {
    // A negative level maps to 0, which from_entries rejects. Negative
    // amounts cost nothing.
    let entries = castle_levels.iter().map(|castle_level| CostEntry {
        level: Level::try_from(castle_level.level).unwrap_or(0),
        cost: Cost::try_from(resource(castle_level)).unwrap_or(0),
    });
    let table = CostTable::from_entries(entries)?;
    if table.is_empty() {
        warn!("[castle_table] No castle levels for {}, costs will be 0", resource_name);
    }
    Ok(table)
}
