mod file;
mod memory;

pub use file::*;
pub use memory::*;

use std::sync::Arc;

/// The client-local persisted store the dismissal mechanism writes through.
/// Implementations absorb their own failures: a failed read is "no record",
/// a failed write is logged and dropped. The worst outcome either way is a
/// banner reappearing.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

pub type SharedStore = Arc<dyn KeyValueStore>;
