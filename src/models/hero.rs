use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, GraphQLObject, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub name_en: String,
    pub faction: String,
    pub faction_en: String,
    pub rarity: String,
    pub rarity_en: String,
    pub stars: i32,
    pub image: String,
    /// CSS gradient classes used by the hero card.
    pub background_class: String,
}

/// A hero as inserted at seed time, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: &'static str,
    pub name_en: &'static str,
    pub faction: &'static str,
    pub faction_en: &'static str,
    pub rarity: &'static str,
    pub rarity_en: &'static str,
    pub stars: i32,
    pub image: &'static str,
    pub background_class: &'static str,
}

impl NewHero {
    pub fn with_id(self, id: i32) -> Hero {
        Hero {
            id,
            name: self.name.to_string(),
            name_en: self.name_en.to_string(),
            faction: self.faction.to_string(),
            faction_en: self.faction_en.to_string(),
            rarity: self.rarity.to_string(),
            rarity_en: self.rarity_en.to_string(),
            stars: self.stars,
            image: self.image.to_string(),
            background_class: self.background_class.to_string(),
        }
    }
}
