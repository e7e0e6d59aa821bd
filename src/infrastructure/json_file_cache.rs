use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use crate::domain::{cache::{CacheError, TodoCache}, todo::Todo};

/// Stores the whole list as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    fn load(&self) -> Result<Vec<Todo>, CacheError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no todo file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

impl TodoCache for JsonFileCache {
    fn read_todos(&self) -> Vec<Todo> {
        match self.load() {
            Ok(todos) => {
                tracing::debug!(path = %self.path.display(), count = todos.len(), "loaded todos");
                todos
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unreadable todo file, treating as empty");
                Vec::new()
            }
        }
    }

    fn save_todos(&mut self, todos: &[Todo]) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() { fs::create_dir_all(parent)?; }
        }
        let raw = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "saved todos");
        Ok(())
    }
}
