use log::warn;
use rocket::{State, serde::json::Json};

use crate::{
    api::errors::ApiError,
    database::catalog::SharedCatalog,
    models::{
        calculation::{FoodCalculation, FoodRequirement},
        pet::Pet,
    },
    utils::levels::LevelRangeQuery,
};

#[get("/pets/food-calculation?<query..>")]
pub fn food_calculation(
    query: LevelRangeQuery,
    catalog: &State<SharedCatalog>,
) -> Result<Json<FoodCalculation>, ApiError> {
    let range = match query.validate(catalog.caps().pet) {
        Ok(range) => range,
        Err(e) => {
            warn!("[pets::food_calculation] Rejected {:?}: {}", query, e);
            return Err(ApiError::BadRequest("Invalid level range"));
        }
    };
    Ok(Json(catalog.calculate_pet_food(range)))
}

#[get("/pets/food-requirements")]
pub fn food_requirements(catalog: &State<SharedCatalog>) -> Json<Vec<FoodRequirement>> {
    Json(
        catalog
            .pet_food_table()
            .entries()
            .map(FoodRequirement::from)
            .collect(),
    )
}

#[get("/pets")]
pub fn list(catalog: &State<SharedCatalog>) -> Json<Vec<Pet>> {
    Json(catalog.pets().to_vec())
}

#[get("/pets/<id>")]
pub fn show(id: &str, catalog: &State<SharedCatalog>) -> Result<Json<Pet>, ApiError> {
    let id = match id.trim().parse::<i32>() {
        Ok(id) => id,
        Err(e) => {
            warn!("[pets::show] Invalid pet id {:?}: {}", id, e);
            return Err(ApiError::BadRequest("Invalid pet ID"));
        }
    };
    match catalog.pet(id) {
        Some(pet) => Ok(Json(pet.clone())),
        None => Err(ApiError::NotFound("Pet not found")),
    }
}
