// src/domain/district.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{PipelineError, PipelineResult};
use crate::store::{JsonFileStore, Store, Table};

/// `region -> district`, one row per region.
pub type RegionDistrictTable = Table<String, String>;

/// One district in the reference file. Both `{"regions": [...]}` and a bare
/// list are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictEntry {
    Record { regions: Vec<String> },
    Regions(Vec<String>),
}

impl DistrictEntry {
    pub fn regions(&self) -> &[String] {
        match self {
            DistrictEntry::Record { regions } | DistrictEntry::Regions(regions) => regions,
        }
    }
}

/// Reads the static district reference file and explodes it by region.
/// The file is required.
pub fn load_districts(path: &Path) -> PipelineResult<RegionDistrictTable> {
    let store: JsonFileStore<String, DistrictEntry> = JsonFileStore::new(path);
    let mapping = store
        .load_all()?
        .ok_or_else(|| PipelineError::MissingDistricts(path.to_path_buf()))?;

    Ok(explode_districts(&mapping))
}

/// A region listed under two districts keeps the first one.
pub fn explode_districts(mapping: &Table<String, DistrictEntry>) -> RegionDistrictTable {
    let mut lookup = RegionDistrictTable::new();

    for (district, entry) in mapping {
        for region in entry.regions() {
            if let Some(existing) = lookup.get(region) {
                if existing != district {
                    warn!(%region, kept = %existing, ignored = %district, "region listed under two districts");
                }
                continue;
            }
            lookup.insert(region.clone(), district.clone());
        }
    }

    lookup
}
