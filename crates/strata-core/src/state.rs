//! The owned game state.
//!
//! One flat struct holding every persistent field of a player's
//! economy. The engine owns it exclusively and mutates it through the
//! operations in [`engine`](crate::engine); there is no ambient global
//! store. The struct serializes as a plain JSON record with stable
//! field names (see [`snapshot`](crate::snapshot)).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::balance::{INITIAL_ELEVATOR_COST, INITIAL_SHAFT_COST, INITIAL_WAREHOUSE_COST};
use crate::id::{PlanetId, SectorId, ShaftId, SkinId};
use crate::manager::Manager;
use crate::stage::{Elevator, Shaft, Stage, Warehouse};

// ---------------------------------------------------------------------------
// Global boost
// ---------------------------------------------------------------------------

/// A time-bounded multiplier on total realized production. At most one
/// exists; activating a new boost overwrites the old one, no stacking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalBoost {
    pub multiplier: f64,
    pub expires_at_ms: u64,
}

impl GlobalBoost {
    /// Multiplier contributed right now; 1 once expired.
    pub fn factor(&self, now_ms: u64) -> f64 {
        if now_ms < self.expires_at_ms {
            self.multiplier
        } else {
            1.0
        }
    }
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// Every persistent field of a player's economy.
///
/// Invariants maintained by the engine:
/// - all monetary/rate fields are finite and non-negative
/// - `net_worth` never decreases except on explicit reset
/// - shaft ids are a contiguous ascending sequence starting at 1
/// - at most one manager per sector
/// - `equipped_skin` is always in `owned_skins`
/// - `unlocked_planets` always contains the starting planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Spendable currency. Spent by upgrades, replenished by ticks.
    pub currency: f64,
    /// Lifetime earnings. Gates planet unlocks; never spent down.
    pub net_worth: f64,
    /// Premium currency, granted by external reward flows.
    pub gems: f64,

    pub shafts: Vec<Shaft>,
    pub elevator: Elevator,
    pub warehouse: Warehouse,

    /// Assigned managers, at most one per sector.
    pub managers: Vec<Manager>,

    pub current_planet: PlanetId,
    pub unlocked_planets: BTreeSet<PlanetId>,

    pub owned_skins: BTreeSet<SkinId>,
    pub equipped_skin: Option<SkinId>,

    /// Overwrite-only global production boost.
    pub global_boost: Option<GlobalBoost>,

    /// Wall-clock ms of the last tick or reconciliation.
    pub last_save_ms: u64,
    /// Realized production rate observed on the last tick.
    pub production_rate: f64,
    /// Stage that constrained the last tick, if anything flowed.
    pub bottleneck: Option<Stage>,
}

impl GameState {
    /// A fresh game: one level-1 shaft, level-1 elevator and warehouse,
    /// empty balances, standing on the starting planet.
    pub fn new(starting_planet: PlanetId, now_ms: u64) -> Self {
        Self {
            currency: 0.0,
            net_worth: 0.0,
            gems: 0.0,
            shafts: vec![Shaft::new(ShaftId(1), INITIAL_SHAFT_COST)],
            elevator: Elevator::new(INITIAL_ELEVATOR_COST),
            warehouse: Warehouse::new(INITIAL_WAREHOUSE_COST),
            managers: Vec::new(),
            current_planet: starting_planet,
            unlocked_planets: BTreeSet::from([starting_planet]),
            owned_skins: BTreeSet::new(),
            equipped_skin: None,
            global_boost: None,
            last_save_ms: now_ms,
            production_rate: 0.0,
            bottleneck: None,
        }
    }

    pub fn shaft(&self, id: ShaftId) -> Option<&Shaft> {
        self.shafts.iter().find(|s| s.id == id)
    }

    pub fn shaft_mut(&mut self, id: ShaftId) -> Option<&mut Shaft> {
        self.shafts.iter_mut().find(|s| s.id == id)
    }

    /// Id the next shaft-unlock would create.
    pub fn next_shaft_id(&self) -> ShaftId {
        ShaftId(self.shafts.len() as u32 + 1)
    }

    pub fn manager_for(&self, sector: SectorId) -> Option<&Manager> {
        self.managers.iter().find(|m| m.sector == sector)
    }

    pub fn manager_for_mut(&mut self, sector: SectorId) -> Option<&mut Manager> {
        self.managers.iter_mut().find(|m| m.sector == sector)
    }

    /// Bind `manager` to its sector, replacing any prior occupant.
    pub fn bind_manager(&mut self, manager: Manager) {
        self.managers.retain(|m| m.sector != manager.sector);
        self.managers.push(manager);
    }
}
