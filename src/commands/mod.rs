pub mod add;
pub mod edit;
pub mod export;
pub mod list;
pub mod prayer;
pub mod remove;
pub mod show;

use anyhow::Result;
use jesa_core::config::JesaConfig;
use jesa_core::shrine::Shrine;
use jesa_core::store::JsonFileStore;

/// Open the collection backed by the configured store.
pub fn open_shrine() -> Result<Shrine<JsonFileStore>> {
    let config = JesaConfig::load()?;
    let store = JsonFileStore::new(config.store_path());
    Ok(Shrine::new(store, config.memorials, config.prayers))
}
