use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, GraphQLObject, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub name_en: String,

    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub pet_type: String,

    pub type_en: String,
    pub rarity: String,
    pub rarity_en: String,
    pub stars: i32,
    pub image: String,
    pub background_class: String,
}

#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: &'static str,
    pub name_en: &'static str,
    pub pet_type: &'static str,
    pub type_en: &'static str,
    pub rarity: &'static str,
    pub rarity_en: &'static str,
    pub stars: i32,
    pub image: &'static str,
    pub background_class: &'static str,
}

impl NewPet {
    pub fn with_id(self, id: i32) -> Pet {
        Pet {
            id,
            name: self.name.to_string(),
            name_en: self.name_en.to_string(),
            pet_type: self.pet_type.to_string(),
            type_en: self.type_en.to_string(),
            rarity: self.rarity.to_string(),
            rarity_en: self.rarity_en.to_string(),
            stars: self.stars,
            image: self.image.to_string(),
            background_class: self.background_class.to_string(),
        }
    }
}
