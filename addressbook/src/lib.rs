//! Interactive command-line address book.
//!
//! Contacts live in an in-memory [`core::book::AddressBook`] for the duration
//! of a session and are written to a JSON store on exit:
//!
//! - **[`core`]**: Pure logic (contacts, the book, menu parsing, messages).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Store and configuration files.
//! - **[`ui`]**: The [`ui::UserInterface`] seam and its console implementation.
//!
//! [`session`] ties them together into the menu loop the binary runs.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod ui;
