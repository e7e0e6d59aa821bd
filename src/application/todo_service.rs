use crate::domain::cache::{CacheError, TodoCache};
use crate::domain::todo::Todo;

/// How the current list is doing, judged by how many tasks are still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary { Empty, Busy, AllDone, KeepGoing }

impl Summary {
    const BUSY_THRESHOLD: usize = 3;

    pub fn classify(todos: &[Todo]) -> Self {
        let open = todos.iter().filter(|t| !t.is_completed).count();
        if todos.is_empty() {
            Summary::Empty
        } else if open > Self::BUSY_THRESHOLD {
            Summary::Busy
        } else if open == 0 {
            Summary::AllDone
        } else {
            Summary::KeepGoing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub todos: Vec<Todo>,
    pub summary: Summary,
}

impl Listing {
    /// Pairs each todo with its 1-based position.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Todo)> {
        self.todos.iter().enumerate().map(|(i, t)| (i + 1, t))
    }
}

/// Positions are 1-based and resolved against a fresh read on every call.
pub trait TodoService {
    fn add(&mut self, title: &str) -> Result<Todo, CacheError>;
    fn list(&self) -> Listing;
    fn toggle(&mut self, position: usize) -> Result<Option<Todo>, CacheError>;
    fn delete(&mut self, position: usize) -> Result<Option<Todo>, CacheError>;
}

pub struct TodoServiceImpl<C: TodoCache> {
    cache: C,
}

impl<C: TodoCache> TodoServiceImpl<C> {
    pub fn new(cache: C) -> Self { Self { cache } }
}

fn index_of(position: usize, len: usize) -> Option<usize> {
    position.checked_sub(1).filter(|&i| i < len)
}

impl<C: TodoCache> TodoService for TodoServiceImpl<C> {
    fn add(&mut self, title: &str) -> Result<Todo, CacheError> {
        let mut todos = self.cache.read_todos();
        let todo = Todo::new(title);
        todos.push(todo.clone());
        self.cache.save_todos(&todos)?;
        tracing::debug!(id = %todo.id, "added todo");
        Ok(todo)
    }

    fn list(&self) -> Listing {
        let todos = self.cache.read_todos();
        let summary = Summary::classify(&todos);
        Listing { todos, summary }
    }

    fn toggle(&mut self, position: usize) -> Result<Option<Todo>, CacheError> {
        let mut todos = self.cache.read_todos();
        let Some(index) = index_of(position, todos.len()) else { return Ok(None) };
        todos[index].is_completed = true;
        self.cache.save_todos(&todos)?;
        tracing::debug!(position, id = %todos[index].id, "completed todo");
        Ok(Some(todos.swap_remove(index)))
    }

    fn delete(&mut self, position: usize) -> Result<Option<Todo>, CacheError> {
        let mut todos = self.cache.read_todos();
        let Some(index) = index_of(position, todos.len()) else { return Ok(None) };
        let removed = todos.remove(index);
        self.cache.save_todos(&todos)?;
        tracing::debug!(position, id = %removed.id, "deleted todo");
        Ok(Some(removed))
    }
}
