pub mod app;
pub mod command;
pub mod messages;

pub use app::{App, Flow};
pub use command::Command;
