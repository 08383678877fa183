//! Реестр заявок, встроенный в сборку

use anyhow::Context;
use contracts::domain::a001_application::RecordStore;

const APPLICATIONS_JSON: &str = include_str!("../../../data/applications.json");

/// Разбирает встроенный реестр
pub fn load_record_store() -> anyhow::Result<RecordStore> {
    let store = RecordStore::from_json(APPLICATIONS_JSON)
        .context("loading embedded applications registry")?;
    log::info!("Loaded {} applications", store.len());
    Ok(store)
}
