mod dismissals;

#[cfg(test)]
pub(crate) mod test;

pub use dismissals::*;

use std::sync::Arc;
use crate::config::{AppConfig, StoreConfig};
use crate::storage::{FileStore, MemoryStore, SharedStore};

#[derive(Clone)]
pub struct Repositories {
    pub dismissals: Dismissals,
}

impl Repositories {
    pub fn new(store: &SharedStore, config: &AppConfig) -> Self {
        Self {
            dismissals: Dismissals::new(store.clone(), config.dismissal.clone()),
        }
    }
}

/// Opens the client-local store, degrading to a throwaway in-memory one when
/// the file is unusable: dismissals then last for this run only.
pub fn establish_store(config: &StoreConfig) -> SharedStore {
    match FileStore::open(&config.path) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            log::warn!("dismissal store at {} is unavailable ({err:#}), keeping dismissals in memory", config.path.display());
            Arc::new(MemoryStore::default())
        }
    }
}
