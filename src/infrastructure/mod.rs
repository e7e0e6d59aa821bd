pub mod json_file_cache;
pub mod memory_cache;

use crate::config::Config;
use crate::domain::cache::TodoCache;
use json_file_cache::JsonFileCache;
use memory_cache::MemoryCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind { Session, File }

impl StorageKind {
    /// Maps the startup menu answer ("1" or "2") to a backend.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Session),
            "2" => Some(Self::File),
            _ => None,
        }
    }
}

pub fn build_cache(kind: StorageKind, config: &Config) -> Box<dyn TodoCache> {
    match kind {
        StorageKind::Session => Box::new(MemoryCache::default()),
        StorageKind::File => Box::new(JsonFileCache::new(config.todo_file())),
    }
}
