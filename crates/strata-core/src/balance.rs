//! Economy tuning constants.
//!
//! Every balance knob lives here so designers have one place to look.
//! Changing any of these changes observable progression pacing but not
//! engine semantics.

/// Upgrade cost of the first shaft, and the base of the shaft-unlock
/// cost curve.
pub const INITIAL_SHAFT_COST: f64 = 100.0;

/// Initial elevator upgrade cost.
pub const INITIAL_ELEVATOR_COST: f64 = 500.0;

/// Initial warehouse upgrade cost.
pub const INITIAL_WAREHOUSE_COST: f64 = 1000.0;

/// Geometric growth applied to a stage's upgrade cost on every upgrade.
pub const COST_GROWTH: f64 = 1.7;

/// Geometric growth applied to a stage's output per level.
pub const PRODUCTION_GROWTH: f64 = 1.3;

/// Base output coefficient per shaft level-worker unit (ore/sec).
pub const SHAFT_BASE_RATE: f64 = 10.0;

/// Base elevator throughput coefficient (ore/sec).
pub const ELEVATOR_BASE_RATE: f64 = 20.0;

/// Base warehouse throughput coefficient (ore/sec).
pub const WAREHOUSE_BASE_RATE: f64 = 30.0;

/// Base cost of hiring a worker, before the per-shaft and per-worker
/// scaling. Hire cost is `10^shaft_id * BASE_HIRE_COST * 1.5^workers`.
pub const BASE_HIRE_COST: f64 = 500.0;

/// Per-worker geometric growth of the hire cost.
pub const HIRE_COST_GROWTH: f64 = 1.5;

/// Per-shaft geometric growth of a newly unlocked shaft's first
/// upgrade cost: shaft `n` starts at `INITIAL_SHAFT_COST * 1.5^n`.
pub const NEW_SHAFT_COST_GROWTH: f64 = 1.5;

/// Final damping applied to realized production. Keeps pacing slightly
/// below the raw pipeline minimum.
pub const PRODUCTION_DAMPING: f64 = 0.9;

/// Offline gaps at or under this many seconds earn nothing, so rapid
/// session toggling is not rewarded.
pub const OFFLINE_THRESHOLD_SECS: f64 = 60.0;

/// Spendable-currency price of a per-shaft drill boost.
pub const SHAFT_BOOST_COST: f64 = 5000.0;

/// Output multiplier of a purchased per-shaft drill boost.
pub const SHAFT_BOOST_MULTIPLIER: f64 = 2.0;

/// Duration of a purchased per-shaft drill boost, in milliseconds.
pub const SHAFT_BOOST_DURATION_MS: u64 = 60 * 60 * 1000;
