//! User interface abstraction for the interactive session.
//!
//! The [`UserInterface`] trait decouples the session loop from the terminal.
//! [`ConsoleInterface`] drives any reader/writer pair (stdin/stdout in the
//! binary); tests use a scripted interface that replays canned input.

use anyhow::Result;

use crate::core::contact::Contact;

pub mod console;

pub use console::ConsoleInterface;

/// Capabilities the session needs from its front end.
pub trait UserInterface {
    /// Render the five-option menu.
    fn show_menu(&mut self) -> Result<()>;

    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn show_message(&mut self, message: &str) -> Result<()>;

    /// Render one contact per line, or the "empty" message for no contacts.
    fn show_contacts(&mut self, contacts: &[&Contact]) -> Result<()>;
}
