use super::todo::Todo;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode todos: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-list storage. Every write replaces everything previously stored.
pub trait TodoCache {
    /// Returns the stored list, or an empty one when nothing is stored or it cannot be read.
    fn read_todos(&self) -> Vec<Todo>;
    fn save_todos(&mut self, todos: &[Todo]) -> Result<(), CacheError>;
}

impl<C: TodoCache + ?Sized> TodoCache for Box<C> {
    fn read_todos(&self) -> Vec<Todo> { (**self).read_todos() }
    fn save_todos(&mut self, todos: &[Todo]) -> Result<(), CacheError> { (**self).save_todos(todos) }
}
