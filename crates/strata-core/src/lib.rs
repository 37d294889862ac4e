//! Strata Core -- the economy engine for idle mining games.
//!
//! This crate provides the production pipeline, timed-modifier state
//! machine, cost-gated mutators, and offline reconciliation that a
//! Strata game client drives. It owns no rendering, networking, or
//! payment logic; those live in external collaborators that read the
//! engine's state and invoke its mutating operations.
//!
//! # Tick Pipeline
//!
//! Each call to [`engine::Engine::tick`] advances the economy by the
//! given number of elapsed seconds through four steps:
//!
//! 1. **Resolve** -- Compute the per-sector multiplier from any manager
//!    bound to each sector (base grade bonus x timed-ability effect).
//! 2. **Throughput** -- Compute each pipeline stage's output capacity
//!    (shafts, elevator, warehouse) from level, workers, and modifiers.
//! 3. **Bottleneck** -- Take the minimum of the three stages; the
//!    weakest stage caps realized production and is reported as the
//!    bottleneck.
//! 4. **Ledger** -- Scale by planet, global-boost, and skin multipliers
//!    plus a damping constant, then credit balances for the elapsed time.
//!
//! Mutators (upgrade, hire, assign, equip, ...) run independently of the
//! tick and only change ownership/modifier state, never production math
//! directly. Every mutator is a guarded transition: if its precondition
//! fails it is a no-op, never an error (the game loop simply retries
//! next frame).
//!
//! # Key Types
//!
//! - [`engine::Engine`] -- Main entry point; owns the game state and
//!   orchestrates ticks, mutators, and offline reconciliation.
//! - [`state::GameState`] -- The full owned economy state, serializable
//!   as a flat JSON record via [`snapshot`].
//! - [`catalog::Catalog`] -- Immutable content tables (planets, skins,
//!   manager templates), frozen at startup.
//! - [`manager::Manager`] -- A sector-bound modifier with an activation
//!   window and cooldown.
//! - [`clock::Clock`] -- Injectable wall-clock source so every timed
//!   window is deterministic under test.

pub mod balance;
pub mod catalog;
pub mod clock;
pub mod engine;
pub mod id;
pub mod manager;
pub mod pipeline;
pub mod snapshot;
pub mod stage;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
