pub mod cache;
pub mod todo;
