//! Managers: sector-bound timed modifiers.
//!
//! A manager is created when a template from the catalog is assigned to
//! a sector (replacing any manager already bound there) and lives until
//! it is replaced. Its only mutable field is the activation timestamp;
//! everything else is copied from the template at assignment time.
//!
//! # Activation lifecycle
//!
//! ```text
//! Ready --trigger--> Active (active_secs) --> CoolingDown (cooldown_secs) --> Ready
//! ```
//!
//! `last_activated_ms == 0` means "never activated": the manager is
//! immediately triggerable and contributes no timed effect. Triggering
//! is rejected while the manager is active or cooling down, and is
//! always rejected for the passive [`ManagerGrade::Junior`] grade.

use serde::{Deserialize, Serialize};

use crate::id::{ManagerTemplateId, SectorId};

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// Behavioral grade of a manager. Determines the always-on base bonus
/// contributed to the bound sector and whether the manager can be
/// triggered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerGrade {
    /// Passive grade: a small always-on bonus, never triggerable.
    Junior,
    /// Cost-discount grade: no production bonus of its own; its timed
    /// effect discounts upgrade prices instead.
    Senior,
    /// Auto grade: a larger always-on bonus.
    Executive,
}

impl ManagerGrade {
    /// Always-on multiplier this grade contributes to its sector.
    pub fn base_bonus(self) -> f64 {
        match self {
            ManagerGrade::Junior => 1.2,
            ManagerGrade::Senior => 1.0,
            ManagerGrade::Executive => 1.3,
        }
    }
}

/// What a manager's configured multiplier applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerEffect {
    /// Multiplies sector production while the activation window is open.
    Speed,
    /// Discounts upgrade cost while the activation window is open.
    /// The multiplier is a price factor, e.g. 0.1 pays 10% of list.
    Cost,
    /// Multiplies sector production permanently, not time-gated.
    Auto,
}

// ---------------------------------------------------------------------------
// Manager instance
// ---------------------------------------------------------------------------

/// A manager bound to a sector. At most one manager exists per sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    /// Catalog template this manager was created from.
    pub template: ManagerTemplateId,
    /// Behavioral grade (base bonus, triggerability).
    pub grade: ManagerGrade,
    /// What the configured multiplier applies to.
    pub effect: ManagerEffect,
    /// Effect strength. A production factor for `Speed`/`Auto`, a
    /// price factor for `Cost`.
    pub multiplier: f64,
    /// Seconds the ability stays active after a trigger.
    pub active_secs: u64,
    /// Seconds of cooldown after the active window closes.
    pub cooldown_secs: u64,
    /// The sector this manager is bound to.
    pub sector: SectorId,
    /// Wall-clock ms of the last trigger. 0 = never activated.
    pub last_activated_ms: u64,
}

/// Derived activation status, for UI and trigger gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerStatus {
    /// Triggerable now.
    Ready,
    /// Ability is running.
    Active { remaining_ms: u64 },
    /// Ability finished; waiting out the cooldown.
    CoolingDown { remaining_ms: u64 },
}

impl Manager {
    /// Whether the timed ability window is currently open.
    ///
    /// A never-activated manager is not active, and a clock that has
    /// regressed past `last_activated_ms` reads as expired.
    pub fn is_active(&self, now_ms: u64) -> bool {
        self.last_activated_ms != 0
            && now_ms >= self.last_activated_ms
            && now_ms - self.last_activated_ms < self.active_secs * 1000
    }

    /// Whether the manager may be triggered: the full active + cooldown
    /// cycle has elapsed and the grade is not passive.
    ///
    /// Never-activated managers are immediately ready, and a clock that
    /// has regressed past `last_activated_ms` reads the cycle as
    /// expired, matching [`status`](Self::status).
    pub fn is_ready(&self, now_ms: u64) -> bool {
        if self.grade == ManagerGrade::Junior {
            return false;
        }
        if self.last_activated_ms == 0 {
            return true;
        }
        now_ms < self.last_activated_ms || now_ms >= self.ready_at_ms()
    }

    /// Wall-clock ms at which the current cycle completes.
    pub fn ready_at_ms(&self) -> u64 {
        self.last_activated_ms + (self.active_secs + self.cooldown_secs) * 1000
    }

    /// Derived status relative to `now_ms`.
    pub fn status(&self, now_ms: u64) -> ManagerStatus {
        if self.is_active(now_ms) {
            let active_end = self.last_activated_ms + self.active_secs * 1000;
            ManagerStatus::Active {
                remaining_ms: active_end - now_ms,
            }
        } else if self.last_activated_ms != 0
            && now_ms >= self.last_activated_ms
            && now_ms < self.ready_at_ms()
        {
            ManagerStatus::CoolingDown {
                remaining_ms: self.ready_at_ms() - now_ms,
            }
        } else {
            ManagerStatus::Ready
        }
    }

    /// Instantaneous production multiplier this manager contributes to
    /// its sector: grade base bonus, times the configured multiplier if
    /// the effect applies right now. Pure read.
    pub fn production_multiplier(&self, now_ms: u64) -> f64 {
        let mut m = self.grade.base_bonus();
        match self.effect {
            ManagerEffect::Speed if self.is_active(now_ms) => m *= self.multiplier,
            ManagerEffect::Auto => m *= self.multiplier,
            _ => {}
        }
        m
    }

    /// Price factor applied to upgrades in this manager's sector.
    /// 1.0 unless the effect is `Cost` and the window is open.
    pub fn cost_discount(&self, now_ms: u64) -> f64 {
        if self.effect == ManagerEffect::Cost && self.is_active(now_ms) {
            self.multiplier
        } else {
            1.0
        }
    }
}
