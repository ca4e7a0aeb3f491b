use juniper::FieldError;

use crate::{
    graphql::{Ctx, level_range},
    models::{
        calculation::{FoodCalculation, FoodRequirement},
        hero::Hero,
    },
};

pub struct HeroQueryType;

#[juniper::graphql_object(context = Ctx)]
impl HeroQueryType {
    fn list(ctx: &Ctx) -> Vec<Hero> {
        ctx.catalog().heroes().to_vec()
    }

    fn hero(ctx: &Ctx, id: i32) -> Result<Hero, FieldError> {
        match ctx.catalog().hero(id) {
            Some(hero) => Ok(hero.clone()),
            None => Err(FieldError::from("Hero not found")),
        }
    }

    fn food_calculation(
        ctx: &Ctx,
        start_level: i32,
        end_level: i32,
    ) -> Result<FoodCalculation, FieldError> {
        let catalog = ctx.catalog();
        let range = level_range(
            "HeroQueryType::food_calculation",
            start_level,
            end_level,
            catalog.caps().hero,
        )?;
        Ok(catalog.calculate_hero_food(range))
    }

    fn food_requirements(ctx: &Ctx) -> Vec<FoodRequirement> {
        ctx.catalog()
            .hero_food_table()
            .entries()
            .map(FoodRequirement::from)
            .collect()
    }
}
