use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, GraphQLObject, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CastleUnlock {
    pub id: i32,
    pub castle_level: i32,
    pub name: String,
    pub name_en: String,
    pub category: String,
    pub category_en: String,
    /// CSS background class for the unlock badge.
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCategory {
    Buildings,
    Research,
}

impl UnlockCategory {
    pub fn name(&self) -> &'static str {
        match self {
            UnlockCategory::Buildings => "Edificios",
            UnlockCategory::Research => "Investigaciones",
        }
    }

    pub fn name_en(&self) -> &'static str {
        match self {
            UnlockCategory::Buildings => "Buildings",
            UnlockCategory::Research => "Research",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            UnlockCategory::Buildings => "bg-hero-blue",
            UnlockCategory::Research => "bg-energy-red",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NewCastleUnlock {
    pub castle_level: i32,
    pub name: &'static str,
    pub name_en: &'static str,
    pub category: UnlockCategory,
}

impl NewCastleUnlock {
    pub fn with_id(self, id: i32) -> CastleUnlock {
        CastleUnlock {
            id,
            castle_level: self.castle_level,
            name: self.name.to_string(),
            name_en: self.name_en.to_string(),
            category: self.category.name().to_string(),
            category_en: self.category.name_en().to_string(),
            color: self.category.color().to_string(),
        }
    }
}
