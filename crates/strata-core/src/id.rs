use serde::{Deserialize, Serialize};

/// Identifies a mine shaft. Shaft ids form a contiguous ascending
/// sequence starting at 1; the next shaft to unlock is always
/// `current count + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShaftId(pub u32);

/// Identifies a planet in the catalog. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanetId(pub u32);

/// Identifies a miner skin in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkinId(pub u32);

/// Identifies a manager template in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagerTemplateId(pub u32);

/// A sector a manager can be bound to. Each shaft is its own sector;
/// the elevator and warehouse are singleton sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorId {
    Shaft(ShaftId),
    Elevator,
    Warehouse,
}
