use crate::domain::{cache::{CacheError, TodoCache}, todo::Todo};

/// Keeps the list for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    items: Vec<Todo>,
}

impl TodoCache for MemoryCache {
    fn read_todos(&self) -> Vec<Todo> { self.items.clone() }

    fn save_todos(&mut self, todos: &[Todo]) -> Result<(), CacheError> {
        self.items = todos.to_vec();
        Ok(())
    }
}
