pub mod employees;
pub mod export;
pub mod init;
pub mod report;
pub mod validate;

use crate::config::HrlyticsConfig;
use crate::io;
use crate::store::DataStore;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Read, validate, and load an organization file into a fresh session store.
pub fn load_store(path: &Path, config: &HrlyticsConfig) -> Result<DataStore> {
    let doc = io::read_json_document(path)?;
    let mut store = DataStore::new();
    store
        .import(&doc, config.unknown_department_policy())
        .map_err(|e| anyhow!("invalid organization file {}: {e}", path.display()))?;
    Ok(store)
}
