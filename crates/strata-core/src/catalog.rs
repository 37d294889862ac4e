//! Immutable content catalog: planets, miner skins, manager templates.
//!
//! Content is registered through a [`CatalogBuilder`] at startup and
//! then frozen; the engine only ever reads it. Ids are assigned in
//! registration order, with a name index for data files that reference
//! content by name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::id::{ManagerTemplateId, PlanetId, SkinId};
use crate::manager::{ManagerEffect, ManagerGrade};

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// A planet the player can unlock and travel to. Unlocking is gated on
/// lifetime net worth; the current planet's multiplier applies to all
/// realized production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDef {
    pub name: String,
    /// Net worth required to unlock. 0 = available from the start.
    pub unlock_cost: f64,
    /// Global production multiplier while this planet is current.
    pub multiplier: f64,
}

/// Rarity tier of a miner skin. Cosmetic ordering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// A cosmetic miner skin with a production multiplier. Purchasable for
/// premium currency or spendable currency; payment itself is handled by
/// an external collaborator before [`mint`](crate::engine::Engine::mint_skin)
/// is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinDef {
    pub name: String,
    pub rarity: Rarity,
    /// Global production multiplier while equipped.
    pub multiplier: f64,
    /// Price in the premium/fiat-equivalent unit.
    pub price_premium: f64,
    /// Price in spendable game currency.
    pub price_currency: f64,
}

/// A manager template. Assigning it to a sector stamps out a fresh
/// [`Manager`](crate::manager::Manager) instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerTemplateDef {
    pub name: String,
    pub grade: ManagerGrade,
    pub effect: ManagerEffect,
    pub multiplier: f64,
    pub active_secs: u64,
    pub cooldown_secs: u64,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for constructing an immutable [`Catalog`].
/// Register everything, then freeze with [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    planets: Vec<PlanetDef>,
    planet_name_to_id: HashMap<String, PlanetId>,
    skins: Vec<SkinDef>,
    skin_name_to_id: HashMap<String, SkinId>,
    managers: Vec<ManagerTemplateDef>,
    manager_name_to_id: HashMap<String, ManagerTemplateId>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a planet. The first planet registered is the starting
    /// planet. Returns its id.
    pub fn register_planet(&mut self, def: PlanetDef) -> PlanetId {
        let id = PlanetId(self.planets.len() as u32);
        self.planet_name_to_id.insert(def.name.clone(), id);
        self.planets.push(def);
        id
    }

    /// Register a miner skin. Returns its id.
    pub fn register_skin(&mut self, def: SkinDef) -> SkinId {
        let id = SkinId(self.skins.len() as u32);
        self.skin_name_to_id.insert(def.name.clone(), id);
        self.skins.push(def);
        id
    }

    /// Register a manager template. Returns its id.
    pub fn register_manager(&mut self, def: ManagerTemplateDef) -> ManagerTemplateId {
        let id = ManagerTemplateId(self.managers.len() as u32);
        self.manager_name_to_id.insert(def.name.clone(), id);
        self.managers.push(def);
        id
    }

    /// Freeze the catalog.
    pub fn build(self) -> Catalog {
        Catalog {
            planets: self.planets,
            planet_name_to_id: self.planet_name_to_id,
            skins: self.skins,
            skin_name_to_id: self.skin_name_to_id,
            managers: self.managers,
            manager_name_to_id: self.manager_name_to_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Frozen content tables. The engine holds one for the lifetime of a
/// session and only reads it.
#[derive(Debug, Clone)]
pub struct Catalog {
    planets: Vec<PlanetDef>,
    planet_name_to_id: HashMap<String, PlanetId>,
    skins: Vec<SkinDef>,
    skin_name_to_id: HashMap<String, SkinId>,
    managers: Vec<ManagerTemplateDef>,
    manager_name_to_id: HashMap<String, ManagerTemplateId>,
}

impl Catalog {
    pub fn planet(&self, id: PlanetId) -> Option<&PlanetDef> {
        self.planets.get(id.0 as usize)
    }

    pub fn planet_id(&self, name: &str) -> Option<PlanetId> {
        self.planet_name_to_id.get(name).copied()
    }

    pub fn planets(&self) -> impl Iterator<Item = (PlanetId, &PlanetDef)> {
        self.planets
            .iter()
            .enumerate()
            .map(|(i, p)| (PlanetId(i as u32), p))
    }

    /// The starting planet: the first one registered. Always in every
    /// player's unlocked set.
    pub fn starting_planet(&self) -> PlanetId {
        PlanetId(0)
    }

    pub fn skin(&self, id: SkinId) -> Option<&SkinDef> {
        self.skins.get(id.0 as usize)
    }

    pub fn skin_id(&self, name: &str) -> Option<SkinId> {
        self.skin_name_to_id.get(name).copied()
    }

    pub fn skins(&self) -> impl Iterator<Item = (SkinId, &SkinDef)> {
        self.skins
            .iter()
            .enumerate()
            .map(|(i, s)| (SkinId(i as u32), s))
    }

    pub fn manager(&self, id: ManagerTemplateId) -> Option<&ManagerTemplateDef> {
        self.managers.get(id.0 as usize)
    }

    pub fn manager_id(&self, name: &str) -> Option<ManagerTemplateId> {
        self.manager_name_to_id.get(name).copied()
    }

    pub fn managers(&self) -> impl Iterator<Item = (ManagerTemplateId, &ManagerTemplateDef)> {
        self.managers
            .iter()
            .enumerate()
            .map(|(i, m)| (ManagerTemplateId(i as u32), m))
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn skin_count(&self) -> usize {
        self.skins.len()
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }
}
