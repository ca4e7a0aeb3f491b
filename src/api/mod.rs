use rocket::{Catcher, Route};

pub mod castle;
pub mod errors;
pub mod heroes;
pub mod pets;

pub fn routes() -> Vec<Route> {
    routes![
        heroes::food_calculation,
        heroes::food_requirements,
        heroes::list,
        heroes::show,
        pets::food_calculation,
        pets::food_requirements,
        pets::list,
        pets::show,
        castle::levels,
        castle::cost_calculation,
        castle::level,
        castle::unlocks,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![errors::not_found, errors::unprocessable, errors::internal_error]
}
