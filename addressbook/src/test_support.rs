//! Test-only helpers: a scripted [`UserInterface`] and contact builders.

use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::book::AddressBook;
use crate::core::contact::Contact;
use crate::ui::UserInterface;

/// One thing the session asked the interface to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Menu,
    Prompt(String),
    Message(String),
    Contacts(Vec<Contact>),
}

/// Interface that replays canned input lines and records every output.
///
/// Once the script is exhausted, `read_line` reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInterface {
    inputs: VecDeque<String>,
    events: Vec<UiEvent>,
}

impl ScriptedInterface {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Messages shown so far, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                UiEvent::Message(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages().last().copied()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl UserInterface for ScriptedInterface {
    fn show_menu(&mut self) -> Result<()> {
        self.events.push(UiEvent::Menu);
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.events.push(UiEvent::Prompt(prompt.to_string()));
        Ok(self.inputs.pop_front())
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        self.events.push(UiEvent::Message(message.to_string()));
        Ok(())
    }

    fn show_contacts(&mut self, contacts: &[&Contact]) -> Result<()> {
        self.events.push(UiEvent::Contacts(
            contacts.iter().map(|contact| (*contact).clone()).collect(),
        ));
        Ok(())
    }
}

/// Build a book from `(name, phone, email)` tuples.
pub fn book_of(entries: &[(&str, &str, &str)]) -> AddressBook {
    entries
        .iter()
        .map(|(name, phone, email)| Contact::new(*name, *phone, *email))
        .collect()
}

/// Fresh temp directory and a store path inside it. Keep the `TempDir` alive
/// for as long as the path is used.
pub fn temp_book_path() -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("addressbook.json");
    (temp, path)
}
