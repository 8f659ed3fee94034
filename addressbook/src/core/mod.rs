//! Pure address book logic: records, the collection, menu parsing and the
//! message catalog.
//!
//! Nothing in here touches the filesystem or the terminal.

pub mod book;
pub mod contact;
pub mod menu;
pub mod messages;
