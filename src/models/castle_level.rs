use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

/// Requirements for building one castle level.
///
/// `stone`, `wood` and `ruby` are the cost of reaching `level` from
/// `level - 1`, and `required_level` is the castle level that must already be
/// built.
#[derive(Debug, Serialize, Deserialize, GraphQLObject, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CastleLevel {
    pub id: i32,
    pub level: i32,
    pub stone: i32,
    pub wood: i32,
    pub ruby: i32,
    pub build_time: String,
    pub required_level: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct NewCastleLevel {
    pub level: i32,
    pub stone: i32,
    pub wood: i32,
    pub ruby: i32,
    pub build_time: &'static str,
    pub required_level: i32,
}

impl NewCastleLevel {
    pub fn with_id(self, id: i32) -> CastleLevel {
        CastleLevel {
            id,
            level: self.level,
            stone: self.stone,
            wood: self.wood,
            ruby: self.ruby,
            build_time: self.build_time.to_string(),
            required_level: self.required_level,
        }
    }
}
