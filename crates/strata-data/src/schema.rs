//! Serde data-file structs for game content definitions.
//!
//! These structs define the on-disk format for planets, manager
//! templates, and miner skins. They are deserialized from RON, JSON, or
//! TOML data files and then resolved into catalog types by the loader.

use serde::Deserialize;

use strata_core::catalog::Rarity;
use strata_core::manager::{ManagerEffect, ManagerGrade};

/// Top-level content file: one document holds all three tables.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    /// Planet list. The first entry is the starting planet.
    pub planets: Vec<PlanetData>,
    #[serde(default)]
    pub managers: Vec<ManagerData>,
    #[serde(default)]
    pub skins: Vec<SkinData>,
}

/// A planet definition in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetData {
    pub name: String,
    /// Net worth required to unlock. 0 = available from the start.
    #[serde(default)]
    pub unlock_cost: f64,
    pub multiplier: f64,
}

/// A manager template definition in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct ManagerData {
    pub name: String,
    pub grade: ManagerGrade,
    pub effect: ManagerEffect,
    pub multiplier: f64,
    pub active_secs: u64,
    pub cooldown_secs: u64,
}

/// A miner skin definition in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct SkinData {
    pub name: String,
    pub rarity: Rarity,
    pub multiplier: f64,
    pub price_premium: f64,
    pub price_currency: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ron() {
        let data: CatalogData = ron::from_str(
            r#"(
                planets: [
                    (name: "base_world", multiplier: 1.0),
                    (name: "farcaster_world", unlock_cost: 1000000.0, multiplier: 2.0),
                ],
                managers: [
                    (
                        name: "junior_miner",
                        grade: junior,
                        effect: speed,
                        multiplier: 2.0,
                        active_secs: 30,
                        cooldown_secs: 300,
                    ),
                ],
                skins: [
                    (
                        name: "neon_driller",
                        rarity: common,
                        multiplier: 3.0,
                        price_premium: 0.2,
                        price_currency: 2000000.0,
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(data.planets.len(), 2);
        assert_eq!(data.planets[0].unlock_cost, 0.0);
        assert_eq!(data.managers[0].grade, ManagerGrade::Junior);
        assert_eq!(data.skins[0].rarity, Rarity::Common);
    }

    #[test]
    fn parses_json() {
        let data: CatalogData = serde_json::from_str(
            r#"{
                "planets": [
                    {"name": "base_world", "multiplier": 1.0}
                ],
                "managers": [
                    {
                        "name": "senior_executive",
                        "grade": "senior",
                        "effect": "cost",
                        "multiplier": 0.1,
                        "active_secs": 60,
                        "cooldown_secs": 600
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(data.managers[0].effect, ManagerEffect::Cost);
        assert!(data.skins.is_empty());
    }

    #[test]
    fn parses_toml() {
        let data: CatalogData = toml::from_str(
            r#"
                [[planets]]
                name = "base_world"
                multiplier = 1.0

                [[skins]]
                name = "satoshi_rocket"
                rarity = "mythic"
                multiplier = 28.0
                price_premium = 2.0
                price_currency = 20000000.0
            "#,
        )
        .unwrap();

        assert_eq!(data.skins[0].multiplier, 28.0);
    }
}
