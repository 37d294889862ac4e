//! The stock game content, in code.
//!
//! Identical to `data/catalog.ron`; clients that ship without a data
//! directory use this. Keep the two in sync.

use strata_core::catalog::{
    Catalog, CatalogBuilder, ManagerTemplateDef, PlanetDef, Rarity, SkinDef,
};
use strata_core::manager::{ManagerEffect, ManagerGrade};

/// Build the stock catalog: 5 planets, 3 manager templates, 10 skins.
pub fn builtin_catalog() -> Catalog {
    let mut b = CatalogBuilder::new();

    for (name, unlock_cost, multiplier) in [
        ("base_world", 0.0, 1.0),
        ("farcaster_world", 1_000_000.0, 2.0),
        ("x_miners_world", 50_000_000.0, 4.0),
        ("satoshi_world", 500_000_000.0, 8.0),
        ("voiddrillers_world", 0.0, 1.0),
    ] {
        b.register_planet(PlanetDef {
            name: name.into(),
            unlock_cost,
            multiplier,
        });
    }

    b.register_manager(ManagerTemplateDef {
        name: "junior_miner".into(),
        grade: ManagerGrade::Junior,
        effect: ManagerEffect::Speed,
        multiplier: 2.0,
        active_secs: 30,
        cooldown_secs: 300,
    });
    b.register_manager(ManagerTemplateDef {
        name: "senior_executive".into(),
        grade: ManagerGrade::Senior,
        effect: ManagerEffect::Cost,
        multiplier: 0.1,
        active_secs: 60,
        cooldown_secs: 600,
    });
    b.register_manager(ManagerTemplateDef {
        name: "executive_overlord".into(),
        grade: ManagerGrade::Executive,
        effect: ManagerEffect::Auto,
        multiplier: 1.5,
        active_secs: 120,
        cooldown_secs: 900,
    });

    for (name, rarity, multiplier, price_premium, price_currency) in [
        ("neon_driller", Rarity::Common, 3.0, 0.2, 2_000_000.0),
        ("cyber_rig", Rarity::Rare, 4.0, 0.4, 4_000_000.0),
        ("quantum_extractor", Rarity::Rare, 6.0, 0.6, 6_000_000.0),
        ("mech_overlord", Rarity::Epic, 8.0, 0.8, 8_000_000.0),
        ("astro_forge", Rarity::Epic, 10.0, 1.0, 10_000_000.0),
        ("dark_matter_rig", Rarity::Legendary, 12.0, 1.2, 12_000_000.0),
        ("cyberpunk_slicer", Rarity::Legendary, 14.0, 1.4, 14_000_000.0),
        ("plasma_core_drill", Rarity::Legendary, 18.0, 1.6, 16_000_000.0),
        ("satoshi_comet", Rarity::Mythic, 22.0, 1.8, 18_000_000.0),
        ("satoshi_rocket", Rarity::Mythic, 28.0, 2.0, 20_000_000.0),
    ] {
        b.register_skin(SkinDef {
            name: name.into(),
            rarity,
            multiplier,
            price_premium,
            price_currency,
        });
    }

    b.build()
}
