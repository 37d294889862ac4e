//! The economy engine: owns the game state and orchestrates the tick
//! pipeline, mutators, and offline reconciliation.
//!
//! # Architecture
//!
//! The `Engine` owns:
//! - A [`GameState`] (balances, stages, managers, ownership sets)
//! - A frozen [`Catalog`] (planets, skins, manager templates)
//! - A [`Clock`] for every timed-window comparison
//!
//! An external driver calls [`tick`](Engine::tick) at a bounded cadence
//! with elapsed seconds. Mutators are invoked independently from UI
//! actions and only change ownership/modifier state; the next tick
//! picks the changes up. All operations run synchronously on one
//! logical thread; callers in multi-threaded targets must serialize
//! access.
//!
//! # Precondition gating
//!
//! Mutators never fail loudly. If a precondition does not hold
//! (insufficient funds, unknown target, window not elapsed) the mutator
//! returns `false` and changes nothing. The game loop retries naturally
//! by being called again next frame.

use crate::balance::{
    BASE_HIRE_COST, COST_GROWTH, HIRE_COST_GROWTH, INITIAL_SHAFT_COST, NEW_SHAFT_COST_GROWTH,
    OFFLINE_THRESHOLD_SECS, PRODUCTION_DAMPING, SHAFT_BOOST_COST, SHAFT_BOOST_DURATION_MS,
    SHAFT_BOOST_MULTIPLIER,
};
use crate::catalog::Catalog;
use crate::clock::Clock;
use crate::id::{ManagerTemplateId, PlanetId, SectorId, ShaftId, SkinId};
use crate::manager::{Manager, ManagerStatus};
use crate::pipeline;
use crate::stage::{Shaft, ShaftBoost, Stage};
use crate::state::{GameState, GlobalBoost};

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The economy engine. Generic over the clock so tests drive time
/// deterministically; production code uses
/// [`SystemClock`](crate::clock::SystemClock).
#[derive(Debug)]
pub struct Engine<C: Clock> {
    /// The full owned economy state.
    pub state: GameState,

    /// Frozen content tables.
    catalog: Catalog,

    /// Wall-clock source.
    clock: C,
}

impl<C: Clock> Engine<C> {
    /// Start a fresh game on the catalog's starting planet. Every
    /// planet with a zero unlock cost starts in the unlocked set.
    pub fn new(catalog: Catalog, clock: C) -> Self {
        let state = Self::fresh_state(&catalog, clock.now_ms());
        Self {
            state,
            catalog,
            clock,
        }
    }

    /// Resume from a restored state (see [`snapshot`](crate::snapshot)).
    pub fn from_state(state: GameState, catalog: Catalog, clock: C) -> Self {
        Self {
            state,
            catalog,
            clock,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -----------------------------------------------------------------------
    // Tick pipeline
    // -----------------------------------------------------------------------

    /// Advance the economy by `dt_secs` elapsed seconds.
    ///
    /// Runs resolver -> throughput -> bottleneck -> ledger. No-op for
    /// non-finite or non-positive `dt_secs`; arbitrarily large values
    /// are fine (a single extrapolated credit, no step replay).
    pub fn tick(&mut self, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        let now = self.clock.now_ms();

        let shaft_total: f64 = self
            .state
            .shafts
            .iter()
            .map(|s| s.throughput(now, self.manager_multiplier(SectorId::Shaft(s.id), now)))
            .sum();
        let elevator = self
            .state
            .elevator
            .throughput(self.manager_multiplier(SectorId::Elevator, now));
        let warehouse = self
            .state
            .warehouse
            .throughput(self.manager_multiplier(SectorId::Warehouse, now));

        let result = pipeline::resolve(shaft_total, elevator, warehouse);

        let planet_mult = self
            .catalog
            .planet(self.state.current_planet)
            .map_or(1.0, |p| p.multiplier);
        let boost_mult = self
            .state
            .global_boost
            .map_or(1.0, |b| b.factor(now));
        let skin_mult = self
            .state
            .equipped_skin
            .and_then(|id| self.catalog.skin(id))
            .map_or(1.0, |s| s.multiplier);

        let rate = result.realized * planet_mult * boost_mult * skin_mult * PRODUCTION_DAMPING;
        let earned = rate * dt_secs;

        self.state.currency += earned;
        self.state.net_worth += earned;
        self.state.production_rate = rate;
        self.state.bottleneck = result.bottleneck;
        self.state.last_save_ms = now;
    }

    // -----------------------------------------------------------------------
    // Offline reconciliation
    // -----------------------------------------------------------------------

    /// Reconcile a session gap: credit a single-shot extrapolation of
    /// the last observed production rate over the elapsed wall-clock
    /// time and return the earnings.
    ///
    /// Gaps of [`OFFLINE_THRESHOLD_SECS`] or less earn nothing and
    /// change nothing. This is deliberately an approximation from the
    /// last known rate, not a replay of missed ticks.
    pub fn resume(&mut self) -> f64 {
        let now = self.clock.now_ms();
        let elapsed_secs = now.saturating_sub(self.state.last_save_ms) as f64 / 1000.0;
        if elapsed_secs <= OFFLINE_THRESHOLD_SECS {
            return 0.0;
        }

        let earnings = self.state.production_rate * elapsed_secs;
        self.state.currency += earnings;
        self.state.net_worth += earnings;
        self.state.last_save_ms = now;
        earnings
    }

    // -----------------------------------------------------------------------
    // Stage mutators
    // -----------------------------------------------------------------------

    /// Upgrade a shaft: level +1, next cost grows geometrically. The
    /// price actually paid honors an active cost-discount manager.
    pub fn upgrade_shaft(&mut self, id: ShaftId) -> bool {
        let now = self.clock.now_ms();
        let discount = self.cost_discount(SectorId::Shaft(id), now);
        let cost = match self.state.shaft(id) {
            Some(s) => s.upgrade_cost * discount,
            None => return false,
        };
        if self.state.currency < cost {
            return false;
        }
        self.state.currency -= cost;
        if let Some(s) = self.state.shaft_mut(id) {
            s.level += 1;
            s.upgrade_cost = (s.upgrade_cost * COST_GROWTH).floor();
        }
        true
    }

    /// Upgrade the elevator. Same cost/discount rules as shafts.
    pub fn upgrade_elevator(&mut self) -> bool {
        let now = self.clock.now_ms();
        let discount = self.cost_discount(SectorId::Elevator, now);
        let cost = self.state.elevator.upgrade_cost * discount;
        if self.state.currency < cost {
            return false;
        }
        self.state.currency -= cost;
        self.state.elevator.level += 1;
        self.state.elevator.upgrade_cost = (self.state.elevator.upgrade_cost * COST_GROWTH).floor();
        true
    }

    /// Upgrade the warehouse. Same cost/discount rules as shafts.
    pub fn upgrade_warehouse(&mut self) -> bool {
        let now = self.clock.now_ms();
        let discount = self.cost_discount(SectorId::Warehouse, now);
        let cost = self.state.warehouse.upgrade_cost * discount;
        if self.state.currency < cost {
            return false;
        }
        self.state.currency -= cost;
        self.state.warehouse.level += 1;
        self.state.warehouse.upgrade_cost =
            (self.state.warehouse.upgrade_cost * COST_GROWTH).floor();
        true
    }

    /// Hire one more worker for a shaft.
    pub fn hire_worker(&mut self, id: ShaftId) -> bool {
        let cost = match self.hire_cost(id) {
            Some(c) => c,
            None => return false,
        };
        if self.state.currency < cost {
            return false;
        }
        self.state.currency -= cost;
        if let Some(s) = self.state.shaft_mut(id) {
            s.workers += 1;
        }
        true
    }

    /// Unlock the next shaft in the sequence at level 1 with one worker.
    pub fn unlock_shaft(&mut self) -> bool {
        let next = self.state.next_shaft_id();
        let cost = self.shaft_unlock_cost();
        if self.state.currency < cost {
            return false;
        }
        self.state.currency -= cost;
        let upgrade_cost = INITIAL_SHAFT_COST * NEW_SHAFT_COST_GROWTH.powi(next.0 as i32);
        self.state.shafts.push(Shaft::new(next, upgrade_cost));
        true
    }

    /// Purchase a temporary drill boost for one shaft (spendable
    /// currency; doubles output for a fixed real-time window).
    pub fn purchase_shaft_boost(&mut self, id: ShaftId) -> bool {
        if self.state.shaft(id).is_none() {
            return false;
        }
        if self.state.currency < SHAFT_BOOST_COST {
            return false;
        }
        let now = self.clock.now_ms();
        self.state.currency -= SHAFT_BOOST_COST;
        if let Some(s) = self.state.shaft_mut(id) {
            s.boost = Some(ShaftBoost {
                multiplier: SHAFT_BOOST_MULTIPLIER,
                expires_at_ms: now + SHAFT_BOOST_DURATION_MS,
            });
        }
        true
    }

    // -----------------------------------------------------------------------
    // Manager mutators
    // -----------------------------------------------------------------------

    /// Stamp a fresh manager from a catalog template onto a sector,
    /// replacing any manager already bound there. The new manager
    /// starts never-activated: immediately triggerable, no timed effect.
    pub fn assign_manager(&mut self, template: ManagerTemplateId, sector: SectorId) -> bool {
        let def = match self.catalog.manager(template) {
            Some(d) => d,
            None => return false,
        };
        if let SectorId::Shaft(id) = sector {
            if self.state.shaft(id).is_none() {
                return false;
            }
        }
        let manager = Manager {
            template,
            grade: def.grade,
            effect: def.effect,
            multiplier: def.multiplier,
            active_secs: def.active_secs,
            cooldown_secs: def.cooldown_secs,
            sector,
            last_activated_ms: 0,
        };
        self.state.bind_manager(manager);
        true
    }

    /// Trigger the ability of the manager bound to `sector`. Succeeds
    /// exactly once per full active + cooldown cycle; passive managers
    /// are never triggerable.
    pub fn trigger_manager(&mut self, sector: SectorId) -> bool {
        let now = self.clock.now_ms();
        let m = match self.state.manager_for_mut(sector) {
            Some(m) => m,
            None => return false,
        };
        if !m.is_ready(now) {
            return false;
        }
        m.last_activated_ms = now;
        true
    }

    // -----------------------------------------------------------------------
    // Planet mutators
    // -----------------------------------------------------------------------

    /// Unlock a planet once lifetime net worth reaches its threshold.
    /// Deducts nothing; net worth is a gate, not a price.
    pub fn unlock_planet(&mut self, id: PlanetId) -> bool {
        let def = match self.catalog.planet(id) {
            Some(d) => d,
            None => return false,
        };
        if self.state.unlocked_planets.contains(&id) {
            return false;
        }
        if self.state.net_worth < def.unlock_cost {
            return false;
        }
        self.state.unlocked_planets.insert(id);
        true
    }

    /// Travel to an unlocked planet. Swaps the global multiplier only;
    /// stage levels are kept intact (travel is not a prestige reset).
    pub fn travel_to_planet(&mut self, id: PlanetId) -> bool {
        if !self.state.unlocked_planets.contains(&id) {
            return false;
        }
        self.state.current_planet = id;
        true
    }

    // -----------------------------------------------------------------------
    // Skin mutators
    // -----------------------------------------------------------------------

    /// Add a recognized, not-yet-owned skin to the owned set. Payment
    /// is authorized by an external collaborator before this is called.
    pub fn mint_skin(&mut self, id: SkinId) -> bool {
        if self.catalog.skin(id).is_none() {
            return false;
        }
        self.state.owned_skins.insert(id)
    }

    /// Equip an owned skin, or pass `None` to unequip.
    pub fn equip_skin(&mut self, id: Option<SkinId>) -> bool {
        match id {
            None => {
                self.state.equipped_skin = None;
                true
            }
            Some(id) => {
                if !self.state.owned_skins.contains(&id) {
                    return false;
                }
                self.state.equipped_skin = Some(id);
                true
            }
        }
    }

    // -----------------------------------------------------------------------
    // Boost / reward mutators
    // -----------------------------------------------------------------------

    /// Spend premium currency on a global boost. Overwrites any boost
    /// already running; boosts never stack. Rejects non-finite or
    /// negative amounts so the gem balance stays finite and
    /// non-negative.
    pub fn buy_boost(&mut self, gem_cost: f64, multiplier: f64, duration_secs: u64) -> bool {
        if !gem_cost.is_finite() || gem_cost < 0.0 {
            return false;
        }
        if !multiplier.is_finite() || multiplier < 0.0 {
            return false;
        }
        if self.state.gems < gem_cost {
            return false;
        }
        self.state.gems -= gem_cost;
        self.activate_global_boost(multiplier, duration_secs);
        true
    }

    /// Activate a global boost without payment (reward path). Overwrites
    /// any boost already running. A non-finite or negative multiplier
    /// would let a later tick drain balances, so it is silently ignored.
    pub fn activate_global_boost(&mut self, multiplier: f64, duration_secs: u64) {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return;
        }
        let now = self.clock.now_ms();
        self.state.global_boost = Some(GlobalBoost {
            multiplier,
            expires_at_ms: now + duration_secs * 1000,
        });
    }

    /// Instantly credit `production_rate * seconds` to both balances.
    /// A granted reward; no cost, no gate beyond a sane duration.
    pub fn instant_warp(&mut self, seconds: f64) -> f64 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0.0;
        }
        let earnings = self.state.production_rate * seconds;
        self.state.currency += earnings;
        self.state.net_worth += earnings;
        earnings
    }

    /// Credit premium currency earned through external reward flows.
    pub fn grant_gems(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.state.gems += amount;
        }
    }

    /// Wipe everything back to a fresh game on the starting planet.
    /// The only operation allowed to reduce net worth.
    pub fn reset_progress(&mut self) {
        self.state = Self::fresh_state(&self.catalog, self.clock.now_ms());
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Instantaneous multiplier contributed by the manager bound to
    /// `sector`; 1 when the sector has no manager. Pure read.
    pub fn sector_multiplier(&self, sector: SectorId) -> f64 {
        self.manager_multiplier(sector, self.clock.now_ms())
    }

    /// Activation status of the manager bound to `sector`.
    pub fn manager_status(&self, sector: SectorId) -> Option<ManagerStatus> {
        let now = self.clock.now_ms();
        self.state.manager_for(sector).map(|m| m.status(now))
    }

    /// The price the next upgrade of `sector` would actually charge,
    /// after any active cost-discount manager. `None` for unknown shafts.
    pub fn effective_upgrade_cost(&self, sector: SectorId) -> Option<f64> {
        let now = self.clock.now_ms();
        let discount = self.cost_discount(sector, now);
        let base = match sector {
            SectorId::Shaft(id) => self.state.shaft(id)?.upgrade_cost,
            SectorId::Elevator => self.state.elevator.upgrade_cost,
            SectorId::Warehouse => self.state.warehouse.upgrade_cost,
        };
        Some(base * discount)
    }

    /// Price of the next worker on a shaft. `None` for unknown shafts.
    pub fn hire_cost(&self, id: ShaftId) -> Option<f64> {
        let shaft = self.state.shaft(id)?;
        Some(
            10f64.powi(id.0 as i32)
                * BASE_HIRE_COST
                * HIRE_COST_GROWTH.powi(shaft.workers as i32),
        )
    }

    /// Price of unlocking the next shaft in the sequence.
    pub fn shaft_unlock_cost(&self) -> f64 {
        let next = self.state.next_shaft_id();
        INITIAL_SHAFT_COST * 10f64.powi(next.0 as i32 - 1)
    }

    pub fn currency(&self) -> f64 {
        self.state.currency
    }

    pub fn net_worth(&self) -> f64 {
        self.state.net_worth
    }

    pub fn gems(&self) -> f64 {
        self.state.gems
    }

    /// Realized production rate observed on the last tick.
    pub fn production_rate(&self) -> f64 {
        self.state.production_rate
    }

    /// Stage that constrained the last tick, if anything flowed.
    pub fn bottleneck(&self) -> Option<Stage> {
        self.state.bottleneck
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn fresh_state(catalog: &Catalog, now_ms: u64) -> GameState {
        let mut state = GameState::new(catalog.starting_planet(), now_ms);
        for (id, planet) in catalog.planets() {
            if planet.unlock_cost <= 0.0 {
                state.unlocked_planets.insert(id);
            }
        }
        state
    }

    fn manager_multiplier(&self, sector: SectorId, now_ms: u64) -> f64 {
        self.state
            .manager_for(sector)
            .map_or(1.0, |m| m.production_multiplier(now_ms))
    }

    fn cost_discount(&self, sector: SectorId, now_ms: u64) -> f64 {
        self.state
            .manager_for(sector)
            .map_or(1.0, |m| m.cost_discount(now_ms))
    }
}
