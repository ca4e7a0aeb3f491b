use juniper::FieldError;

use crate::{
    graphql::{Ctx, level_range},
    models::{
        calculation::{FoodCalculation, FoodRequirement},
        pet::Pet,
    },
};

pub struct PetQueryType;

#[juniper::graphql_object(context = Ctx)]
impl PetQueryType {
    fn list(ctx: &Ctx) -> Vec<Pet> {
        ctx.catalog().pets().to_vec()
    }

    fn pet(ctx: &Ctx, id: i32) -> Result<Pet, FieldError> {
        match ctx.catalog().pet(id) {
            Some(pet) => Ok(pet.clone()),
            None => Err(FieldError::from("Pet not found")),
        }
    }

    fn food_calculation(
        ctx: &Ctx,
        start_level: i32,
        end_level: i32,
    ) -> Result<FoodCalculation, FieldError> {
        let catalog = ctx.catalog();
        let range = level_range(
            "PetQueryType::food_calculation",
            start_level,
            end_level,
            catalog.caps().pet,
        )?;
        Ok(catalog.calculate_pet_food(range))
    }

    fn food_requirements(ctx: &Ctx) -> Vec<FoodRequirement> {
        ctx.catalog()
            .pet_food_table()
            .entries()
            .map(FoodRequirement::from)
            .collect()
    }
}
