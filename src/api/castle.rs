use log::warn;
use rocket::{State, serde::json::Json};

use crate::{
    api::errors::ApiError,
    costs::Level,
    database::catalog::SharedCatalog,
    models::{
        calculation::CastleCostCalculation, castle_level::CastleLevel,
        castle_unlock::CastleUnlock,
    },
    utils::levels::{LevelRangeQuery, parse_level, validate_level},
};

#[get("/castle-levels")]
pub fn levels(catalog: &State<SharedCatalog>) -> Json<Vec<CastleLevel>> {
    Json(catalog.castle_levels().to_vec())
}

#[get("/castle-levels/cost-calculation?<query..>")]
pub fn cost_calculation(
    query: LevelRangeQuery,
    catalog: &State<SharedCatalog>,
) -> Result<Json<CastleCostCalculation>, ApiError> {
    let range = match query.validate(catalog.caps().castle) {
        Ok(range) => range,
        Err(e) => {
            warn!("[castle::cost_calculation] Rejected {:?}: {}", query, e);
            return Err(ApiError::BadRequest("Invalid level range"));
        }
    };
    Ok(Json(catalog.calculate_castle_cost(range)))
}

#[get("/castle-levels/<level>")]
pub fn level(level: &str, catalog: &State<SharedCatalog>) -> Result<Json<CastleLevel>, ApiError> {
    let level = castle_level_param(level, catalog.caps().castle)?;
    match catalog.castle_level(level) {
        Some(castle_level) => Ok(Json(castle_level.clone())),
        None => Err(ApiError::NotFound("Castle level not found")),
    }
}

/// All unlocks, or only those of `level` when it is given and non-empty.
#[get("/castle-unlocks?<level>")]
pub fn unlocks(
    level: Option<&str>,
    catalog: &State<SharedCatalog>,
) -> Result<Json<Vec<CastleUnlock>>, ApiError> {
    match level.filter(|level| !level.is_empty()) {
        Some(level) => {
            let level = castle_level_param(level, catalog.caps().castle)?;
            Ok(Json(catalog.castle_unlocks_by_level(level)))
        }
        None => Ok(Json(catalog.castle_unlocks().to_vec())),
    }
}

fn castle_level_param(raw: &str, cap: Level) -> Result<Level, ApiError> {
    match parse_level(Some(raw)).and_then(|level| validate_level(level, cap)) {
        Ok(level) => Ok(level),
        Err(e) => {
            warn!("[castle::castle_level_param] Rejected {:?}: {}", raw, e);
            Err(ApiError::BadRequest("Invalid castle level"))
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::http::Status;
    use serde_json::Value;

    use crate::api::testing::client;

    #[test]
    fn test_levels() {
        let client = client();
        let response = client.get("/api/castle-levels").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body.as_array().unwrap().len(), 15);
        assert_eq!(body[1]["buildTime"], "4h");
        assert_eq!(body[1]["requiredLevel"], 1);
    }

    #[test]
    fn test_level() {
        let client = client();
        let response = client.get("/api/castle-levels/6").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["level"], 6);
        assert_eq!(body["stone"], 4800);
        assert_eq!(body["wood"], 24000);
        assert_eq!(body["ruby"], 800);

        for level in ["0", "16", "six"] {
            let response = client.get(format!("/api/castle-levels/{level}")).dispatch();
            assert_eq!(response.status(), Status::BadRequest, "{level}");
            let body: Value = response.into_json().unwrap();
            assert_eq!(body["message"], "Invalid castle level");
        }
    }

    #[test]
    fn test_cost_calculation() {
        let client = client();
        let response = client
            .get("/api/castle-levels/cost-calculation?startLevel=1&endLevel=3")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["startLevel"], 1);
        assert_eq!(body["endLevel"], 3);
        assert_eq!(body["stone"], 900);
        assert_eq!(body["wood"], 4500);
        assert_eq!(body["ruby"], 150);

        let response = client
            .get("/api/castle-levels/cost-calculation?startLevel=3&endLevel=16")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn test_unlocks() {
        let client = client();
        let response = client.get("/api/castle-unlocks").dispatch();
        let body: Value = response.into_json().unwrap();
        assert_eq!(body.as_array().unwrap().len(), 28);

        let response = client.get("/api/castle-unlocks?level=").dispatch();
        let body: Value = response.into_json().unwrap();
        assert_eq!(body.as_array().unwrap().len(), 28);

        let response = client.get("/api/castle-unlocks?level=6").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        let unlocks = body.as_array().unwrap();
        assert_eq!(unlocks.len(), 5);
        assert!(unlocks.iter().all(|unlock| unlock["castleLevel"] == 6));
        assert_eq!(unlocks[2]["nameEn"], "Pet Sanctuary");
        assert_eq!(unlocks[3]["categoryEn"], "Research");

        let response = client.get("/api/castle-unlocks?level=1").dispatch();
        let body: Value = response.into_json().unwrap();
        assert!(body.as_array().unwrap().is_empty());

        let response = client.get("/api/castle-unlocks?level=40").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["message"], "Invalid castle level");
    }

    #[test]
    fn test_unknown_route() {
        let client = client();
        let response = client.get("/api/dragons").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["message"], "Not found");
    }
}
