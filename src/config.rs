use std::path::{Path, PathBuf};

const APP_DIR: &str = "todo-cli";
const DEFAULT_FILE_NAME: &str = "todos.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no per-user data directory found; set TODO_DATA_DIR")]
    NoDataDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl Config {
    /// Reads `TODO_DATA_DIR` and `TODO_FILE_NAME`, falling back to the platform data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let data_dir = match std::env::var_os("TODO_DATA_DIR") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir().ok_or(ConfigError::NoDataDir)?.join(APP_DIR),
        };
        let file_name = std::env::var("TODO_FILE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        Ok(Self { data_dir, file_name })
    }

    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self { data_dir: data_dir.as_ref().to_path_buf(), file_name: DEFAULT_FILE_NAME.to_string() }
    }

    pub fn todo_file(&self) -> PathBuf { self.data_dir.join(&self.file_name) }
}
