//! Competitor brand catalog.
//!
//! The watched brands live in a YAML file so the list can change without a
//! rebuild. The loader validates the catalog up front; lookups are
//! case-insensitive because brand names arrive from CLI input.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One watched competitor brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Display name, also used as the provider query term.
    pub name: String,
    /// Free-form operator note (segment, market, ...).
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandConfig>,
}

impl BrandsFile {
    /// Find a brand by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&BrandConfig> {
        self.brands
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// All catalog names, in file order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.name.as_str()).collect()
    }
}

/// Load and validate the brand catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty catalog, blank name, case-insensitive duplicate).
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    if brands_file.brands.is_empty() {
        return Err(ConfigError::Validation(
            "brand catalog must contain at least one brand".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        let lower_name = brand.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }
    }

    Ok(())
}
