use juniper::FieldError;
use log::warn;

use crate::{
    costs::Level,
    graphql::{Ctx, level_range},
    models::{
        calculation::CastleCostCalculation, castle_level::CastleLevel,
        castle_unlock::CastleUnlock,
    },
    utils::levels::validate_level,
};

pub struct CastleQueryType;

#[juniper::graphql_object(context = Ctx)]
impl CastleQueryType {
    fn levels(ctx: &Ctx) -> Vec<CastleLevel> {
        ctx.catalog().castle_levels().to_vec()
    }

    fn level(ctx: &Ctx, level: i32) -> Result<CastleLevel, FieldError> {
        let level = castle_level_arg(ctx, level)?;
        match ctx.catalog().castle_level(level) {
            Some(castle_level) => Ok(castle_level.clone()),
            None => Err(FieldError::from("Castle level not found")),
        }
    }

    /// All unlocks, or only those of `level` when given.
    fn unlocks(ctx: &Ctx, level: Option<i32>) -> Result<Vec<CastleUnlock>, FieldError> {
        match level {
            Some(level) => {
                let level = castle_level_arg(ctx, level)?;
                Ok(ctx.catalog().castle_unlocks_by_level(level))
            }
            None => Ok(ctx.catalog().castle_unlocks().to_vec()),
        }
    }

    fn cost_calculation(
        ctx: &Ctx,
        start_level: i32,
        end_level: i32,
    ) -> Result<CastleCostCalculation, FieldError> {
        let catalog = ctx.catalog();
        let range = level_range(
            "CastleQueryType::cost_calculation",
            start_level,
            end_level,
            catalog.caps().castle,
        )?;
        Ok(catalog.calculate_castle_cost(range))
    }
}

fn castle_level_arg(ctx: &Ctx, level: i32) -> Result<Level, FieldError> {
    validate_level(i64::from(level), ctx.catalog().caps().castle).map_err(|e| {
        warn!("[CastleQueryType] Rejected castle level: {}", e);
        FieldError::from("Invalid castle level")
    })
}
