//! Terminal-backed [`UserInterface`].

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

use super::UserInterface;
use crate::core::contact::Contact;
use crate::core::menu::MenuChoice;
use crate::core::messages::Messages;

/// Line-oriented console over a reader and a writer.
pub struct ConsoleInterface<R, W> {
    reader: R,
    writer: W,
    messages: &'static Messages,
}

impl ConsoleInterface<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(messages: &'static Messages) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), messages)
    }
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(reader: R, writer: W, messages: &'static Messages) -> Self {
        Self {
            reader,
            writer,
            messages,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleInterface<R, W> {
    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.writer).context("write menu")?;
        writeln!(self.writer, "{}", self.messages.menu_title).context("write menu")?;
        for choice in MenuChoice::ALL {
            writeln!(
                self.writer,
                "{}. {}",
                choice.number(),
                self.messages.menu_label(choice)
            )
            .context("write menu")?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt).context("write prompt")?;
        self.writer.flush().context("flush prompt")?;
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        // Bytes that are not UTF-8 become U+FFFD instead of failing the session.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message).context("write message")
    }

    fn show_contacts(&mut self, contacts: &[&Contact]) -> Result<()> {
        if contacts.is_empty() {
            let empty = self.messages.book_empty;
            return self.show_message(empty);
        }
        for contact in contacts {
            writeln!(self.writer, "{}", contact).context("write contact")?;
        }
        Ok(())
    }
}
