pub mod todo_service;
