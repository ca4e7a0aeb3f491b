//! Seed data for the catalog.
//!
//! Heroes, pets, castle levels and unlocks as published on the game wiki. The
//! food tables are generated from the configured curves in
//! `CatalogBuilder::build`.

use crate::{
    config::CatalogConfig,
    costs::table::TableError,
    database::catalog::{Catalog, CatalogBuilder},
    models::{
        castle_level::NewCastleLevel,
        castle_unlock::{NewCastleUnlock, UnlockCategory},
        hero::NewHero,
        pet::NewPet,
    },
};

/// `(level, stone, wood, ruby, build time, required level)`
const CASTLE_LEVELS: [(i32, i32, i32, i32, &str, i32); 15] = [
    (1, 0, 0, 0, "0h", 0),
    (2, 300, 1_500, 50, "4h", 1),
    (3, 600, 3_000, 100, "8h", 2),
    (4, 1_200, 6_000, 200, "12h", 3),
    (5, 2_400, 12_000, 400, "16h", 4),
    (6, 4_800, 24_000, 800, "24h", 5),
    (7, 9_600, 48_000, 1_600, "36h", 6),
    (8, 19_200, 96_000, 3_200, "48h", 7),
    (9, 38_400, 192_000, 6_400, "60h", 8),
    (10, 76_800, 384_000, 12_800, "72h", 9),
    (11, 153_600, 768_000, 25_600, "96h", 10),
    (12, 307_200, 1_536_000, 51_200, "120h", 11),
    (13, 614_400, 3_072_000, 102_400, "144h", 12),
    (14, 1_228_800, 6_144_000, 204_800, "168h", 13),
    (15, 2_457_600, 12_288_000, 409_600, "192h", 14),
];

const CASTLE_UNLOCKS: [(i32, &str, &str, UnlockCategory); 28] = [
    (2, "Muro Nivel 2", "Wall Level 2", UnlockCategory::Buildings),
    (2, "Cuartel Nivel 2", "Barracks Level 2", UnlockCategory::Buildings),
    (2, "Recolección de Recursos +5%", "Resource Gathering +5%", UnlockCategory::Research),
    (3, "Academia de Héroes", "Hero Academy", UnlockCategory::Buildings),
    (3, "Mercado Nivel 1", "Market Level 1", UnlockCategory::Buildings),
    (3, "Entrenamiento de Infantería +5%", "Infantry Training +5%", UnlockCategory::Research),
    (4, "Torre de Guardia Nivel 3", "Watch Tower Level 3", UnlockCategory::Buildings),
    (4, "Fundición Nivel 3", "Foundry Level 3", UnlockCategory::Buildings),
    (4, "Producción de Madera +10%", "Wood Production +10%", UnlockCategory::Research),
    (5, "Laboratorio Nivel 3", "Laboratory Level 3", UnlockCategory::Buildings),
    (5, "Asedio Nivel 1", "Siege Workshop Level 1", UnlockCategory::Buildings),
    (5, "Producción de Piedra +10%", "Stone Production +10%", UnlockCategory::Research),
    (6, "Torre de Arqueros Nivel 5", "Archer Tower Level 5", UnlockCategory::Buildings),
    (6, "Herrería Nivel 5", "Smithy Level 5", UnlockCategory::Buildings),
    (6, "Santuario de Mascotas", "Pet Sanctuary", UnlockCategory::Buildings),
    (6, "Armadura Mejorada", "Improved Armor", UnlockCategory::Research),
    (6, "Producción de Alimentos +15%", "Food Production +15%", UnlockCategory::Research),
    (7, "Muro Nivel 7", "Wall Level 7", UnlockCategory::Buildings),
    (7, "Cuartel Avanzado", "Advanced Barracks", UnlockCategory::Buildings),
    (7, "Velocidad de Investigación +10%", "Research Speed +10%", UnlockCategory::Research),
    (8, "Academia de Héroes Nivel 5", "Hero Academy Level 5", UnlockCategory::Buildings),
    (8, "Producción de Hierro +15%", "Iron Production +15%", UnlockCategory::Research),
    (8, "Velocidad de Construcción +10%", "Building Speed +10%", UnlockCategory::Research),
    (9, "Mina de Cristal", "Crystal Mine", UnlockCategory::Buildings),
    (9, "Altar de Invocación", "Summoning Altar", UnlockCategory::Buildings),
    (10, "Torre de Magia", "Magic Tower", UnlockCategory::Buildings),
    (10, "Poder de Héroe +15%", "Hero Power +15%", UnlockCategory::Research),
    (10, "Velocidad de Entrenamiento +20%", "Training Speed +20%", UnlockCategory::Research),
];

/// Builds the catalog served at startup.
pub fn seed(config: &CatalogConfig) -> Result<Catalog, TableError> {
    let mut builder = CatalogBuilder::new();
    seed_heroes(&mut builder);
    seed_pets(&mut builder);

    for (level, stone, wood, ruby, build_time, required_level) in CASTLE_LEVELS {
        builder.insert_castle_level(NewCastleLevel {
            level,
            stone,
            wood,
            ruby,
            build_time,
            required_level,
        });
    }
    for (castle_level, name, name_en, category) in CASTLE_UNLOCKS {
        builder.insert_castle_unlock(NewCastleUnlock {
            castle_level,
            name,
            name_en,
            category,
        });
    }

    builder.build(config)
}

fn seed_heroes(builder: &mut CatalogBuilder) {
    builder.insert_hero(NewHero {
        name: "Knight",
        name_en: "Knight",
        faction: "Liga",
        faction_en: "League",
        rarity: "Legendario",
        rarity_en: "Legendary",
        stars: 5,
        image: "https://cdn-icons-png.flaticon.com/512/5338/5338106.png",
        background_class: "from-hero-blue to-purple-600",
    });
    builder.insert_hero(NewHero {
        name: "Pyromancer",
        name_en: "Pyromancer",
        faction: "Naturaleza",
        faction_en: "Nature",
        rarity: "Mítico",
        rarity_en: "Mythic",
        stars: 5,
        image: "https://cdn-icons-png.flaticon.com/512/5338/5338031.png",
        background_class: "from-purple-600 to-pink-500",
    });
    builder.insert_hero(NewHero {
        name: "Ranger",
        name_en: "Ranger",
        faction: "Liga",
        faction_en: "League",
        rarity: "Épico",
        rarity_en: "Epic",
        stars: 4,
        image: "https://cdn-icons-png.flaticon.com/512/5338/5338093.png",
        background_class: "from-green-600 to-teal-500",
    });
    builder.insert_hero(NewHero {
        name: "Warrior",
        name_en: "Warrior",
        faction: "Horda",
        faction_en: "Horde",
        rarity: "Raro",
        rarity_en: "Rare",
        stars: 3,
        image: "https://cdn-icons-png.flaticon.com/512/5338/5338070.png",
        background_class: "from-red-600 to-energy-red",
    });
}

fn seed_pets(builder: &mut CatalogBuilder) {
    builder.insert_pet(NewPet {
        name: "Dragón de Fuego",
        name_en: "Fire Dragon",
        pet_type: "Ataque",
        type_en: "Attack",
        rarity: "Mítico",
        rarity_en: "Mythic",
        stars: 5,
        image: "https://cdn-icons-png.flaticon.com/512/6119/6119003.png",
        background_class: "from-yellow-500 to-gold",
    });
    builder.insert_pet(NewPet {
        name: "Lobo Helado",
        name_en: "Ice Wolf",
        pet_type: "Soporte",
        type_en: "Support",
        rarity: "Legendario",
        rarity_en: "Legendary",
        stars: 5,
        image: "https://cdn-icons-png.flaticon.com/512/616/616596.png",
        background_class: "from-blue-400 to-hero-blue",
    });
    builder.insert_pet(NewPet {
        name: "Tortuga de Piedra",
        name_en: "Stone Turtle",
        pet_type: "Defensa",
        type_en: "Defense",
        rarity: "Épico",
        rarity_en: "Epic",
        stars: 4,
        image: "https://cdn-icons-png.flaticon.com/512/7127/7127195.png",
        background_class: "from-green-300 to-green-500",
    });
    builder.insert_pet(NewPet {
        name: "Águila Veloz",
        name_en: "Swift Eagle",
        pet_type: "Ataque",
        type_en: "Attack",
        rarity: "Raro",
        rarity_en: "Rare",
        stars: 3,
        image: "https://cdn-icons-png.flaticon.com/512/4371/4371234.png",
        background_class: "from-gray-400 to-gray-600",
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let catalog = seed(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.heroes().len(), 4);
        assert_eq!(catalog.pets().len(), 4);
        assert_eq!(catalog.castle_levels().len(), 15);
        assert_eq!(catalog.castle_unlocks().len(), 28);
    }

    #[test]
    fn test_seed_lookups() {
        let catalog = seed(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.hero(2).map(|hero| hero.name.as_str()), Some("Pyromancer"));
        assert_eq!(catalog.pet(4).map(|pet| pet.name_en.as_str()), Some("Swift Eagle"));
        assert!(catalog.hero(5).is_none());
        assert_eq!(catalog.castle_unlocks_by_level(6).len(), 5);
        assert_eq!(catalog.castle_level(15).map(|level| level.ruby), Some(409_600));
    }

    #[test]
    fn test_seed_castle_costs() {
        let catalog = seed(&CatalogConfig::default()).unwrap();
        let caps = catalog.caps();
        assert_eq!(caps.castle, 15);

        let range = crate::utils::levels::LevelRange::new(1, 15, caps.castle).unwrap();
        let cost = catalog.calculate_castle_cost(range);
        // Level costs double from 300 stone at level 2: 300 * (2^14 - 1).
        assert_eq!(cost.stone, 300 * 16_383);
        assert_eq!(cost.wood, 1_500 * 16_383);
        assert_eq!(cost.ruby, 50 * 16_383);
    }
}
