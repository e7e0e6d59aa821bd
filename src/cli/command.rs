use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command { Add, List, Toggle, Delete, Exit }

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Accepts the menu number or the command word, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add" => Ok(Command::Add),
            "2" | "list" => Ok(Command::List),
            "3" | "toggle" => Ok(Command::Toggle),
            "4" | "delete" => Ok(Command::Delete),
            "5" | "exit" => Ok(Command::Exit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}
