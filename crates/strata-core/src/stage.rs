//! Pipeline stages: shafts, elevator, warehouse.
//!
//! Each stage computes an instantaneous output capacity (throughput, in
//! currency/sec) from its level, multiplicity, and base coefficient:
//!
//! ```text
//! level * multiplicity * base * PRODUCTION_GROWTH^(level - 1) * sector_mult * boost
//! ```
//!
//! Multiplicity is the worker count for shafts and 1 for the elevator
//! and warehouse. Locked shafts contribute zero. The per-shaft boost is
//! a purchased temporary doubler; the elevator and warehouse have no
//! per-stage boost.

use serde::{Deserialize, Serialize};

use crate::balance::{
    ELEVATOR_BASE_RATE, PRODUCTION_GROWTH, SHAFT_BASE_RATE, WAREHOUSE_BASE_RATE,
};
use crate::id::ShaftId;

// ---------------------------------------------------------------------------
// Stage label
// ---------------------------------------------------------------------------

/// One of the three pipeline stages. Used to label the bottleneck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Shafts,
    Elevator,
    Warehouse,
}

// ---------------------------------------------------------------------------
// Temporary boost
// ---------------------------------------------------------------------------

/// A purchased, time-bounded multiplier on a single shaft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftBoost {
    pub multiplier: f64,
    pub expires_at_ms: u64,
}

impl ShaftBoost {
    /// Multiplier contributed right now: the configured value while the
    /// boost is live, 1 once expired.
    pub fn factor(&self, now_ms: u64) -> f64 {
        if now_ms < self.expires_at_ms {
            self.multiplier
        } else {
            1.0
        }
    }
}

// ---------------------------------------------------------------------------
// Shaft
// ---------------------------------------------------------------------------

/// An extraction shaft. Created at game start (shaft 1) or by the
/// shaft-unlock mutator; never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shaft {
    pub id: ShaftId,
    /// Upgrade level, >= 1.
    pub level: u32,
    /// Hired workers, >= 1.
    pub workers: u32,
    /// Price of the next upgrade.
    pub upgrade_cost: f64,
    pub unlocked: bool,
    /// Purchased temporary boost, if any.
    pub boost: Option<ShaftBoost>,
}

impl Shaft {
    /// A fresh level-1 shaft with one worker.
    pub fn new(id: ShaftId, upgrade_cost: f64) -> Self {
        Self {
            id,
            level: 1,
            workers: 1,
            upgrade_cost,
            unlocked: true,
            boost: None,
        }
    }

    /// Output capacity of this shaft given its sector multiplier.
    /// Locked shafts produce nothing.
    pub fn throughput(&self, now_ms: u64, sector_mult: f64) -> f64 {
        if !self.unlocked {
            return 0.0;
        }
        let workers = self.workers.max(1) as f64;
        let boost = self.boost.map_or(1.0, |b| b.factor(now_ms));
        self.level as f64
            * workers
            * SHAFT_BASE_RATE
            * PRODUCTION_GROWTH.powi(self.level as i32 - 1)
            * sector_mult
            * boost
    }
}

// ---------------------------------------------------------------------------
// Elevator / Warehouse
// ---------------------------------------------------------------------------

/// The elevator stage. Singleton; exists for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elevator {
    pub level: u32,
    pub upgrade_cost: f64,
}

impl Elevator {
    pub fn new(upgrade_cost: f64) -> Self {
        Self {
            level: 1,
            upgrade_cost,
        }
    }

    /// Lift capacity given the elevator sector multiplier.
    pub fn throughput(&self, sector_mult: f64) -> f64 {
        self.level as f64
            * ELEVATOR_BASE_RATE
            * PRODUCTION_GROWTH.powi(self.level as i32 - 1)
            * sector_mult
    }
}

/// The warehouse stage. Singleton; exists for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub level: u32,
    pub upgrade_cost: f64,
}

impl Warehouse {
    pub fn new(upgrade_cost: f64) -> Self {
        Self {
            level: 1,
            upgrade_cost,
        }
    }

    /// Storage throughput given the warehouse sector multiplier.
    pub fn throughput(&self, sector_mult: f64) -> f64 {
        self.level as f64
            * WAREHOUSE_BASE_RATE
            * PRODUCTION_GROWTH.powi(self.level as i32 - 1)
            * sector_mult
    }
}
