use juniper::{Context, EmptyMutation, EmptySubscription, FieldError, RootNode, graphql_object};
use juniper_rocket::{GraphQLRequest, GraphQLResponse};
use log::warn;
use rocket::{Route, State, get, post, response::content::RawHtml};

use crate::{
    costs::Level,
    database::catalog::{Catalog, SharedCatalog},
    graphql::{castle::CastleQueryType, heroes::HeroQueryType, pets::PetQueryType},
    utils::levels::{LevelRange, LevelRangeError},
};

pub mod castle;
pub mod heroes;
pub mod pets;

pub fn routes() -> Vec<Route> {
    routes![graphiql, get_graphql, post_graphql]
}

pub struct Ctx {
    pub catalog: SharedCatalog,
}

impl Context for Ctx {}

impl Ctx {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub struct Query;

#[graphql_object(context = Ctx)]
impl Query {
    fn heroes() -> HeroQueryType {
        HeroQueryType
    }

    fn pets() -> PetQueryType {
        PetQueryType
    }

    fn castle() -> CastleQueryType {
        CastleQueryType
    }
}

pub type Schema = RootNode<'static, Query, EmptyMutation<Ctx>, EmptySubscription<Ctx>>;

pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}

#[get("/graphiql")]
pub fn graphiql() -> RawHtml<String> {
    juniper_rocket::graphiql_source("/graphql", None)
}

#[get("/?<request..>")]
pub async fn get_graphql(
    request: GraphQLRequest,
    catalog: &State<SharedCatalog>,
) -> GraphQLResponse {
    let ctx = Ctx {
        catalog: catalog.inner().clone(),
    };
    request.execute(&schema(), &ctx).await
}

#[post("/", data = "<request>")]
pub async fn post_graphql(
    request: GraphQLRequest,
    catalog: &State<SharedCatalog>,
) -> GraphQLResponse {
    let ctx = Ctx {
        catalog: catalog.inner().clone(),
    };
    request.execute(&schema(), &ctx).await
}

/// Validates GraphQL `startLevel`/`endLevel` arguments the same way the REST
/// query parameters are validated.
pub(crate) fn level_range(
    scope: &str,
    start_level: i32,
    end_level: i32,
    cap: Level,
) -> Result<LevelRange, FieldError> {
    LevelRange::new(i64::from(start_level), i64::from(end_level), cap).map_err(
        |e: LevelRangeError| {
            warn!("[{}] Rejected level range: {}", scope, e);
            FieldError::from("Invalid level range")
        },
    )
}
