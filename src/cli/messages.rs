//! Terminal text for prompts, banners and list rows.
//!
//! Colors come from crossterm, which drops them when `NO_COLOR` is set.

use crossterm::style::Stylize;

use crate::application::todo_service::Summary;
use crate::domain::todo::Todo;

pub const MENU: &str = "\
What would you like to do?
  1. add     - add a new task
  2. list    - show all tasks
  3. toggle  - mark a task as completed
  4. delete  - remove a task
  5. exit    - quit";

pub const STORAGE_PROMPT: &str = "\
Where should your tasks be kept?
  1. this session only
  2. a file in your data directory";

pub fn success(msg: &str) -> String { msg.green().to_string() }

pub fn failure(msg: &str) -> String { msg.red().to_string() }

pub fn info(msg: &str) -> String { msg.cyan().to_string() }

pub fn warning(msg: &str) -> String { msg.yellow().to_string() }

pub fn save_banner(saved: bool) -> String {
    if saved { success("Saved successfully") } else { failure("Failed to save") }
}

pub fn summary_message(summary: Summary) -> String {
    match summary {
        Summary::Empty => info("Your list is empty. Add something to get started."),
        Summary::Busy => warning("You have a lot on your plate. Maybe finish a few first?"),
        Summary::AllDone => success("All done! Nice work."),
        Summary::KeepGoing => info("Keep going, you're getting there."),
    }
}

pub fn render_todo(position: usize, todo: &Todo) -> String {
    let (marker, status) = if todo.is_completed { ("[x]", "completed".green()) } else { ("[ ]", "not completed".yellow()) };
    format!("{position}. {marker} {}: is {status}", todo.title)
}
