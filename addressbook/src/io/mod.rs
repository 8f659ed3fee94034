//! Filesystem helpers: the address book store and configuration.

pub mod book_store;
pub mod config;
