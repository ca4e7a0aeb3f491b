use log::warn;
use rocket::{State, serde::json::Json};

use crate::{
    api::errors::ApiError,
    database::catalog::SharedCatalog,
    models::{
        calculation::{FoodCalculation, FoodRequirement},
        hero::Hero,
    },
    utils::levels::LevelRangeQuery,
};

// Declared ahead of `/heroes/<id>`; the static path also outranks it.
#[get("/heroes/food-calculation?<query..>")]
pub fn food_calculation(
    query: LevelRangeQuery,
    catalog: &State<SharedCatalog>,
) -> Result<Json<FoodCalculation>, ApiError> {
    let range = match query.validate(catalog.caps().hero) {
        Ok(range) => range,
        Err(e) => {
            warn!("[heroes::food_calculation] Rejected {:?}: {}", query, e);
            return Err(ApiError::BadRequest("Invalid level range"));
        }
    };
    Ok(Json(catalog.calculate_hero_food(range)))
}

#[get("/heroes/food-requirements")]
pub fn food_requirements(catalog: &State<SharedCatalog>) -> Json<Vec<FoodRequirement>> {
    Json(
        catalog
            .hero_food_table()
            .entries()
            .map(FoodRequirement::from)
            .collect(),
    )
}

#[get("/heroes")]
pub fn list(catalog: &State<SharedCatalog>) -> Json<Vec<Hero>> {
    Json(catalog.heroes().to_vec())
}

#[get("/heroes/<id>")]
pub fn show(id: &str, catalog: &State<SharedCatalog>) -> Result<Json<Hero>, ApiError> {
    let id = match id.trim().parse::<i32>() {
        Ok(id) => id,
        Err(e) => {
            warn!("[heroes::show] Invalid hero id {:?}: {}", id, e);
            return Err(ApiError::BadRequest("Invalid hero ID"));
        }
    };
    match catalog.hero(id) {
        Some(hero) => Ok(Json(hero.clone())),
        None => Err(ApiError::NotFound("Hero not found")),
    }
}
