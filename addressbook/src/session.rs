//! Interactive session loop: menu dispatch over an [`AddressBook`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, instrument, warn};

use crate::core::book::AddressBook;
use crate::core::contact::Contact;
use crate::core::menu::MenuChoice;
use crate::core::messages::Messages;
use crate::io::book_store::{load_book, save_book};
use crate::ui::UserInterface;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The book has not been loaded yet.
    Loading,
    /// Waiting for a menu selection.
    Ready,
    /// The book was saved; no further input is accepted.
    Exited,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Number of contacts written on exit.
    pub contacts_saved: usize,
    /// Menu selections read, invalid ones included.
    pub commands_handled: u32,
}

/// One address book session bound to a store location.
#[derive(Debug)]
pub struct Session {
    book_path: PathBuf,
    messages: &'static Messages,
    book: AddressBook,
    state: SessionState,
    commands_handled: u32,
}

impl Session {
    pub fn new(book_path: impl Into<PathBuf>, messages: &'static Messages) -> Self {
        Self {
            book_path: book_path.into(),
            messages,
            book: AddressBook::new(),
            state: SessionState::Loading,
            commands_handled: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Load the book from disk and move to [`SessionState::Ready`].
    pub fn load<U: UserInterface>(&mut self, ui: &mut U) -> Result<()> {
        if self.state != SessionState::Loading {
            bail!("session already loaded (state {:?})", self.state);
        }
        ui.show_message(self.messages.loading)?;
        self.book = load_book(&self.book_path).context("load address book")?;
        ui.show_message(self.messages.loaded)?;
        info!(contacts = self.book.len(), "session ready");
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Show the menu, read one selection and handle it.
    ///
    /// End of input is treated like the exit selection.
    pub fn step<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        self.ensure_ready()?;
        ui.show_menu()?;
        let Some(input) = ui.read_line(self.messages.prompt_choice)? else {
            return self.exit_on_eof(ui);
        };
        self.handle(ui, &input)
    }

    /// Handle one raw menu selection.
    #[instrument(skip(self, ui))]
    pub fn handle<U: UserInterface>(&mut self, ui: &mut U, input: &str) -> Result<SessionState> {
        self.ensure_ready()?;
        self.commands_handled += 1;
        let Some(choice) = MenuChoice::parse(input) else {
            debug!("invalid menu selection");
            ui.show_message(self.messages.invalid_option)?;
            return Ok(self.state);
        };
        debug!(?choice, "dispatching");
        match choice {
            MenuChoice::Add => self.add_contact(ui),
            MenuChoice::Remove => self.remove_contact(ui),
            MenuChoice::Find => self.find_contact(ui),
            MenuChoice::List => self.list_contacts(ui),
            MenuChoice::Exit => self.exit(ui),
        }
    }

    /// Load, loop until exit, and report what was saved.
    pub fn run<U: UserInterface>(mut self, ui: &mut U) -> Result<SessionOutcome> {
        self.load(ui)?;
        while self.step(ui)? == SessionState::Ready {}
        Ok(SessionOutcome {
            contacts_saved: self.book.len(),
            commands_handled: self.commands_handled,
        })
    }

    fn add_contact<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        let Some(name) = ui.read_line(self.messages.prompt_name)? else {
            return self.exit_on_eof(ui);
        };
        let Some(phone) = ui.read_line(self.messages.prompt_phone)? else {
            return self.exit_on_eof(ui);
        };
        let Some(email) = ui.read_line(self.messages.prompt_email)? else {
            return self.exit_on_eof(ui);
        };
        let replaced = self.book.contains(&name);
        self.book.add(Contact::new(name, phone, email));
        debug!(replaced, contacts = self.book.len(), "contact added");
        ui.show_message(self.messages.contact_added)?;
        Ok(self.state)
    }

    fn remove_contact<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        let Some(name) = ui.read_line(self.messages.prompt_remove)? else {
            return self.exit_on_eof(ui);
        };
        let message = match self.book.remove(&name) {
            Some(_) => self.messages.contact_removed,
            None => self.messages.contact_not_found,
        };
        ui.show_message(message)?;
        Ok(self.state)
    }

    fn find_contact<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        let Some(name) = ui.read_line(self.messages.prompt_find)? else {
            return self.exit_on_eof(ui);
        };
        match self.book.find(&name) {
            Some(contact) => ui.show_message(&self.messages.found(contact))?,
            None => ui.show_message(self.messages.contact_not_found)?,
        }
        Ok(self.state)
    }

    fn list_contacts<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        ui.show_message(self.messages.all_contacts)?;
        let contacts: Vec<&Contact> = self.book.all().collect();
        ui.show_contacts(&contacts)?;
        Ok(self.state)
    }

    fn exit_on_eof<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        warn!("input closed, saving and exiting");
        self.exit(ui)
    }

    fn exit<U: UserInterface>(&mut self, ui: &mut U) -> Result<SessionState> {
        ui.show_message(self.messages.saving)?;
        save_book(&self.book_path, &self.book).context("save address book")?;
        ui.show_message(self.messages.saved_goodbye)?;
        info!(contacts = self.book.len(), "session exited");
        self.state = SessionState::Exited;
        Ok(self.state)
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.state != SessionState::Ready {
            bail!("session is not accepting input (state {:?})", self.state);
        }
        Ok(())
    }
}

/// Run a full session against the store at `book_path`.
pub fn run_session<U: UserInterface>(
    ui: &mut U,
    book_path: &Path,
    messages: &'static Messages,
) -> Result<SessionOutcome> {
    Session::new(book_path, messages).run(ui)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::messages::Language;
    use crate::test_support::{ScriptedInterface, UiEvent, book_of, temp_book_path};

    fn english() -> &'static Messages {
        Messages::for_language(Language::En)
    }

    fn ready_session(book_path: &Path, ui: &mut ScriptedInterface) -> Session {
        let mut session = Session::new(book_path, english());
        session.load(ui).expect("load");
        session
    }

    #[test]
    fn invalid_selection_reports_and_stays_ready() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(Vec::<String>::new());
        let mut session = ready_session(&path, &mut ui);

        let state = session.handle(&mut ui, "9").expect("handle");

        assert_eq!(state, SessionState::Ready);
        assert_eq!(ui.last_message(), Some("Invalid option. Try again."));
    }

    #[test]
    fn add_then_find_echoes_contact() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["1", "Ann", "123", "a@x", "3", "Ann"]);
        let mut session = ready_session(&path, &mut ui);

        assert_eq!(session.step(&mut ui).expect("add"), SessionState::Ready);
        assert_eq!(ui.last_message(), Some("Contact added."));
        assert_eq!(session.step(&mut ui).expect("find"), SessionState::Ready);
        assert_eq!(
            ui.last_message(),
            Some("Found: Contact(name=Ann, phone=123, email=a@x)")
        );
    }

    #[test]
    fn add_overwrites_existing_contact() {
        let (_temp, path) = temp_book_path();
        let mut ui =
            ScriptedInterface::new(["1", "Ann", "123", "a@x", "1", "Ann", "999", ""]);
        let mut session = ready_session(&path, &mut ui);
        session.step(&mut ui).expect("first add");
        session.step(&mut ui).expect("second add");

        let ann = session.book().find("Ann").expect("ann");
        assert_eq!(ann.phone, "999");
        assert_eq!(ann.email, "");
    }

    #[test]
    fn remove_reports_removed_and_not_found() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["2", "Ann", "2", "Ann"]);
        let mut session = Session::new(&path, english());
        session.load(&mut ui).expect("load");
        session.book.add(Contact::without_email("Ann", "1"));

        session.step(&mut ui).expect("remove");
        assert_eq!(ui.last_message(), Some("Contact removed."));
        session.step(&mut ui).expect("remove again");
        assert_eq!(ui.last_message(), Some("Contact not found."));
        assert!(session.book().is_empty());
    }

    #[test]
    fn find_missing_reports_not_found() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["3", "Bob"]);
        let mut session = ready_session(&path, &mut ui);

        session.step(&mut ui).expect("find");
        assert_eq!(ui.last_message(), Some("Contact not found."));
    }

    #[test]
    fn list_renders_all_contacts() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["4"]);
        let mut session = ready_session(&path, &mut ui);
        session.book = book_of(&[("Bob", "2", ""), ("Ann", "1", "a@x")]);

        session.step(&mut ui).expect("list");
        assert_eq!(
            ui.events().last(),
            Some(&UiEvent::Contacts(vec![
                Contact::new("Ann", "1", "a@x"),
                Contact::without_email("Bob", "2"),
            ]))
        );
    }

    #[test]
    fn list_on_empty_book_passes_no_contacts() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["4"]);
        let mut session = ready_session(&path, &mut ui);

        session.step(&mut ui).expect("list");
        assert_eq!(ui.events().last(), Some(&UiEvent::Contacts(Vec::new())));
    }

    #[test]
    fn exit_saves_and_terminates() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["1", "Cid", "555", "", "5"]);

        let outcome = run_session(&mut ui, &path, english()).expect("run");

        assert_eq!(
            outcome,
            SessionOutcome {
                contacts_saved: 1,
                commands_handled: 2,
            }
        );
        assert_eq!(ui.last_message(), Some("Data saved. Goodbye!"));
        assert_eq!(ui.remaining_inputs(), 0);
        let reloaded = load_book(&path).expect("reload");
        assert_eq!(reloaded.find("Cid").map(|c| c.phone.as_str()), Some("555"));
    }

    #[test]
    fn end_of_input_saves_like_exit() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["1", "Ann", "1", "", "9"]);

        let outcome = run_session(&mut ui, &path, english()).expect("run");

        assert_eq!(outcome.contacts_saved, 1);
        assert_eq!(outcome.commands_handled, 2);
        assert!(load_book(&path).expect("reload").contains("Ann"));
    }

    #[test]
    fn end_of_input_mid_add_discards_partial_contact() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["1", "Ann"]);

        let outcome = run_session(&mut ui, &path, english()).expect("run");

        assert_eq!(outcome.contacts_saved, 0);
        assert!(path.exists());
    }

    #[test]
    fn session_reloads_previous_save() {
        let (_temp, path) = temp_book_path();
        let mut first = ScriptedInterface::new(["1", "Cid", "555", "", "5"]);
        run_session(&mut first, &path, english()).expect("first run");

        let mut second = ScriptedInterface::new(["3", "Cid", "5"]);
        run_session(&mut second, &path, english()).expect("second run");
        assert!(
            second
                .messages()
                .contains(&"Found: Contact(name=Cid, phone=555, email=)")
        );
    }

    #[test]
    fn corrupt_store_fails_load_and_is_left_untouched() {
        let (_temp, path) = temp_book_path();
        fs::write(&path, "{broken").expect("write");
        let mut ui = ScriptedInterface::new(["5"]);

        let err = run_session(&mut ui, &path, english()).expect_err("corrupt");

        assert!(format!("{:#}", err).contains("load address book"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "{broken");
    }

    #[test]
    fn input_after_exit_is_rejected() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["5"]);
        let mut session = ready_session(&path, &mut ui);

        assert_eq!(session.step(&mut ui).expect("exit"), SessionState::Exited);
        assert!(session.handle(&mut ui, "4").is_err());
    }

    #[test]
    fn step_before_load_is_rejected() {
        let (_temp, path) = temp_book_path();
        let mut ui = ScriptedInterface::new(["4"]);
        let mut session = Session::new(&path, english());

        assert_eq!(session.state(), SessionState::Loading);
        assert!(session.step(&mut ui).is_err());
    }
}
