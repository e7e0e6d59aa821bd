use std::io::{BufRead, Write};

use anyhow::Result;

use super::command::Command;
use super::messages;
use crate::application::todo_service::TodoService;
use crate::infrastructure::StorageKind;

/// What the command loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow { Continue, Exit }

/// Reads one line without its line ending. `None` means the input is closed.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 { return Ok(None) }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Asks which backend to use until the answer is valid.
///
/// Returns `None` when the user declines to retry or the input ends.
pub fn choose_storage<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<StorageKind>> {
    loop {
        writeln!(output, "{}", messages::STORAGE_PROMPT)?;
        let Some(answer) = prompt(input, output, "> ")? else { return Ok(None) };
        if let Some(kind) = StorageKind::from_choice(&answer) {
            tracing::info!(?kind, "storage selected");
            return Ok(Some(kind));
        }
        writeln!(output, "{}", messages::failure(&format!("{:?} is not a storage option", answer.trim())))?;
        let Some(again) = prompt(input, output, "Do you want to continue? (y/n) ")? else { return Ok(None) };
        if again.trim().eq_ignore_ascii_case("n") { return Ok(None) }
    }
}

pub struct App<S: TodoService, R: BufRead, W: Write> {
    service: S,
    input: R,
    output: W,
}

impl<S: TodoService, R: BufRead, W: Write> App<S, R, W> {
    pub fn new(service: S, input: R, output: W) -> Self { Self { service, input, output } }

    pub fn into_output(self) -> W { self.output }

    /// Runs commands until `exit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", messages::MENU)?;
        loop {
            let Some(line) = prompt(&mut self.input, &mut self.output, "> ")? else { break };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", messages::failure(&e.to_string()))?;
                    continue;
                }
            };
            if self.dispatch(command)? == Flow::Exit { break }
            writeln!(self.output, "{}", messages::MENU)?;
        }
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "dispatching");
        match command {
            Command::Add => {
                let Some(title) = prompt(&mut self.input, &mut self.output, "Task title: ")? else { return Ok(Flow::Exit) };
                let saved = match self.service.add(title.trim()) {
                    Ok(_) => true,
                    Err(error) => { tracing::warn!(%error, "add failed to save"); false }
                };
                writeln!(self.output, "{}", messages::save_banner(saved))?;
            }
            Command::List => self.show_list()?,
            Command::Toggle | Command::Delete => {
                self.show_list()?;
                let Some(answer) = prompt(&mut self.input, &mut self.output, "Task number: ")? else { return Ok(Flow::Exit) };
                let Ok(position) = answer.trim().parse::<usize>() else {
                    writeln!(self.output, "{}", messages::warning("No task at that position"))?;
                    return Ok(Flow::Continue);
                };
                let result = if command == Command::Toggle { self.service.toggle(position) } else { self.service.delete(position) };
                match result {
                    Ok(Some(_)) => writeln!(self.output, "{}", messages::save_banner(true))?,
                    Ok(None) => writeln!(self.output, "{}", messages::warning("No task at that position"))?,
                    Err(error) => {
                        tracing::warn!(%error, ?command, position, "failed to save");
                        writeln!(self.output, "{}", messages::save_banner(false))?;
                    }
                }
            }
            Command::Exit => {
                writeln!(self.output, "{}", messages::info("Bye!"))?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_list(&mut self) -> Result<()> {
        let listing = self.service.list();
        for (position, todo) in listing.numbered() {
            writeln!(self.output, "{}", messages::render_todo(position, todo))?;
        }
        writeln!(self.output, "{}", messages::summary_message(listing.summary))?;
        Ok(())
    }
}
