use juniper::{FieldError, FieldResult, graphql_object};
use serde::Serialize;

use crate::{
    costs::{Cost, Level, table::CostEntry},
    utils::levels::LevelRange,
};

/// Food needed to level a hero or pet from `start_level` to `end_level`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FoodCalculation {
    pub start_level: Level,
    pub end_level: Level,
    pub food: Cost,
}

impl FoodCalculation {
    pub fn new(range: LevelRange, food: Cost) -> Self {
        Self {
            start_level: range.start,
            end_level: range.end,
            food,
        }
    }
}

// GraphQL has no unsigned or 64-bit integer, so levels go out as Int and
// totals as Float, which is exact below 2^53.
#[graphql_object]
impl FoodCalculation {
    fn start_level(&self) -> FieldResult<i32> {
        graphql_int(self.start_level)
    }

    fn end_level(&self) -> FieldResult<i32> {
        graphql_int(self.end_level)
    }

    fn food(&self) -> f64 {
        self.food as f64
    }
}

/// Castle resources needed to build from `start_level` up to `end_level`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CastleCostCalculation {
    pub start_level: Level,
    pub end_level: Level,
    pub stone: Cost,
    pub wood: Cost,
    pub ruby: Cost,
}

#[graphql_object]
impl CastleCostCalculation {
    fn start_level(&self) -> FieldResult<i32> {
        graphql_int(self.start_level)
    }

    fn end_level(&self) -> FieldResult<i32> {
        graphql_int(self.end_level)
    }

    fn stone(&self) -> f64 {
        self.stone as f64
    }

    fn wood(&self) -> f64 {
        self.wood as f64
    }

    fn ruby(&self) -> f64 {
        self.ruby as f64
    }
}

/// One row of a food table: the food needed to level up from `level`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct FoodRequirement {
    pub level: Level,
    pub food: Cost,
}

impl From<CostEntry> for FoodRequirement {
    fn from(entry: CostEntry) -> Self {
        Self {
            level: entry.level,
            food: entry.cost,
        }
    }
}

#[graphql_object]
impl FoodRequirement {
    fn level(&self) -> FieldResult<i32> {
        graphql_int(self.level)
    }

    fn food(&self) -> f64 {
        self.food as f64
    }
}

fn graphql_int(level: Level) -> FieldResult<i32> {
    i32::try_from(level)
        .map_err(|_| FieldError::from(format!("Level {level} does not fit in a GraphQL Int")))
}
