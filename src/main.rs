#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::{Build, Rocket};
use rocket_cors::CorsOptions;

use crate::{config::CatalogConfig, database::catalog::SharedCatalog};

mod api;
mod config;
mod costs;
mod database;
mod graphql;
mod models;
mod utils;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    // Building first installs Rocket's logger, so seeding is logged too.
    let rocket = rocket::build();
    let config = CatalogConfig::from_figment(rocket.figment())?;
    let catalog = database::seed::seed(&config)?;

    mount(rocket, Arc::new(catalog))?.launch().await?;
    Ok(())
}

/// Mounts the REST API under `/api` and GraphQL under `/graphql`, with the
/// catalog as managed state.
pub fn mount(rocket: Rocket<Build>, catalog: SharedCatalog) -> anyhow::Result<Rocket<Build>> {
    let cors = CorsOptions::default().to_cors()?;

    Ok(rocket
        .mount("/api", api::routes())
        .mount("/graphql", graphql::routes())
        .register("/", api::catchers())
        .manage(catalog)
        .attach(cors))
}
