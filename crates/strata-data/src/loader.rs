//! Resolution pipeline: reads a content file, validates it, builds the
//! frozen catalog.
//!
//! Format is detected from the file extension (RON / JSON / TOML). The
//! whole catalog lives in one document; content names must be unique
//! within their table because data files and saves reference content by
//! name and id respectively.

use std::path::{Path, PathBuf};

use strata_core::catalog::{
    Catalog, CatalogBuilder, ManagerTemplateDef, PlanetDef, SkinDef,
};

use crate::schema::CatalogData;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during content loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A duplicate content name was found within one table.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    /// The planet table is empty; there is no starting planet.
    #[error("content defines no planets")]
    NoPlanets,

    /// A multiplier or cost was not a finite non-negative number.
    #[error("invalid {field} for {kind} '{name}': must be finite and non-negative")]
    InvalidNumber {
        kind: &'static str,
        name: String,
        field: &'static str,
    },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported content file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Loading
// ===========================================================================

/// Read a content file and resolve it into a frozen catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    let data: CatalogData = match format {
        Format::Ron => ron::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        Format::Json => serde_json::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        Format::Toml => toml::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
    };

    resolve(data)
}

/// Validate parsed content and freeze it into a catalog.
pub fn resolve(data: CatalogData) -> Result<Catalog, DataLoadError> {
    if data.planets.is_empty() {
        return Err(DataLoadError::NoPlanets);
    }

    let mut builder = CatalogBuilder::new();

    let mut seen = std::collections::HashSet::new();
    for planet in &data.planets {
        check_unique(&mut seen, "planet", &planet.name)?;
        check_number("planet", &planet.name, "multiplier", planet.multiplier)?;
        check_number("planet", &planet.name, "unlock_cost", planet.unlock_cost)?;
        builder.register_planet(PlanetDef {
            name: planet.name.clone(),
            unlock_cost: planet.unlock_cost,
            multiplier: planet.multiplier,
        });
    }

    let mut seen = std::collections::HashSet::new();
    for manager in &data.managers {
        check_unique(&mut seen, "manager", &manager.name)?;
        check_number("manager", &manager.name, "multiplier", manager.multiplier)?;
        builder.register_manager(ManagerTemplateDef {
            name: manager.name.clone(),
            grade: manager.grade,
            effect: manager.effect,
            multiplier: manager.multiplier,
            active_secs: manager.active_secs,
            cooldown_secs: manager.cooldown_secs,
        });
    }

    let mut seen = std::collections::HashSet::new();
    for skin in &data.skins {
        check_unique(&mut seen, "skin", &skin.name)?;
        check_number("skin", &skin.name, "multiplier", skin.multiplier)?;
        check_number("skin", &skin.name, "price_premium", skin.price_premium)?;
        check_number("skin", &skin.name, "price_currency", skin.price_currency)?;
        builder.register_skin(SkinDef {
            name: skin.name.clone(),
            rarity: skin.rarity,
            multiplier: skin.multiplier,
            price_premium: skin.price_premium,
            price_currency: skin.price_currency,
        });
    }

    Ok(builder.build())
}

fn check_unique(
    seen: &mut std::collections::HashSet<String>,
    kind: &'static str,
    name: &str,
) -> Result<(), DataLoadError> {
    if !seen.insert(name.to_string()) {
        return Err(DataLoadError::DuplicateName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

fn check_number(
    kind: &'static str,
    name: &str,
    field: &'static str,
    value: f64,
) -> Result<(), DataLoadError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DataLoadError::InvalidNumber {
            kind,
            name: name.to_string(),
            field,
        });
    }
    Ok(())
}
