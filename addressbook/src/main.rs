//! Interactive address book.
//!
//! Loads contacts from `addressbook.json` (or the configured store), runs the
//! numbered menu on the terminal, and saves on exit.

use std::path::PathBuf;

use addressbook::core::messages::{Language, Messages};
use addressbook::exit_codes;
use addressbook::io::config::{DEFAULT_CONFIG_PATH, load_config};
use addressbook::logging;
use addressbook::session::run_session;
use addressbook::ui::ConsoleInterface;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "addressbook",
    version,
    about = "Interactive command-line address book"
)]
struct Cli {
    /// Configuration file. Missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address book store, overriding `book_path` from the config.
    #[arg(long)]
    book: Option<PathBuf>,

    /// Message language (`en` or `uk`), overriding the config.
    #[arg(long)]
    lang: Option<Language>,
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli.config).context("load configuration")?;
    if let Some(book) = cli.book {
        config.book_path = book;
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    config.validate()?;

    let messages = Messages::for_language(config.language);
    let mut ui = ConsoleInterface::stdio(messages);
    let outcome = run_session(&mut ui, &config.book_path, messages)?;
    info!(
        contacts = outcome.contacts_saved,
        commands = outcome.commands_handled,
        book = %config.book_path.display(),
        "address book saved"
    );
    Ok(())
}
