//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these
//! helpers are available in unit tests, integration tests, and
//! benchmarks (via the `test-utils` feature).

use std::cell::Cell;
use std::rc::Rc;

use crate::catalog::{Catalog, CatalogBuilder, ManagerTemplateDef, PlanetDef, Rarity, SkinDef};
use crate::clock::Clock;
use crate::engine::Engine;
use crate::manager::{ManagerEffect, ManagerGrade};

// ===========================================================================
// Manual clock
// ===========================================================================

/// A hand-driven clock. Clones share the same underlying time, so a
/// test can keep a handle while the engine owns its copy.
#[derive(Debug, Clone)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    /// Jump to an absolute time. May go backwards; the engine must
    /// tolerate that.
    pub fn set(&self, ms: u64) {
        self.0.set(ms);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance_ms(secs * 1000);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

// ===========================================================================
// Test catalog
// ===========================================================================

/// A catalog mirroring the stock game content, trimmed to what tests
/// exercise: four planets, four manager templates, three skins.
pub fn test_catalog() -> Catalog {
    let mut b = CatalogBuilder::new();

    b.register_planet(PlanetDef {
        name: "base_world".into(),
        unlock_cost: 0.0,
        multiplier: 1.0,
    });
    b.register_planet(PlanetDef {
        name: "farcaster_world".into(),
        unlock_cost: 1_000_000.0,
        multiplier: 2.0,
    });
    b.register_planet(PlanetDef {
        name: "x_miners_world".into(),
        unlock_cost: 50_000_000.0,
        multiplier: 4.0,
    });
    b.register_planet(PlanetDef {
        name: "satoshi_world".into(),
        unlock_cost: 500_000_000.0,
        multiplier: 8.0,
    });

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
    b.register_manager(ManagerTemplateDef {
        name: "shift_foreman".into(),
        grade: ManagerGrade::Senior,
        effect: ManagerEffect::Speed,
        multiplier: 3.0,
        active_secs: 30,
        cooldown_secs: 300,
    });

    b.register_skin(SkinDef {
        name: "neon_driller".into(),
        rarity: Rarity::Common,
        multiplier: 3.0,
        price_premium: 0.2,
        price_currency: 2_000_000.0,
    });
    b.register_skin(SkinDef {
        name: "cyber_rig".into(),
        rarity: Rarity::Rare,
        multiplier: 4.0,
        price_premium: 0.4,
        price_currency: 4_000_000.0,
    });
    b.register_skin(SkinDef {
        name: "satoshi_rocket".into(),
        rarity: Rarity::Mythic,
        multiplier: 28.0,
        price_premium: 2.0,
        price_currency: 20_000_000.0,
    });

    b.build()
}

// ===========================================================================
// Engine fixture
// ===========================================================================

/// A fresh engine on the test catalog, plus a handle to its clock.
pub fn test_engine(start_ms: u64) -> (Engine<ManualClock>, ManualClock) {
    let clock = ManualClock::new(start_ms);
    let engine = Engine::new(test_catalog(), clock.clone());
    (engine, clock)
}
