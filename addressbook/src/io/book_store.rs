//! Address book load/save with schema validation.
//!
//! The store is a pretty-printed JSON document:
//!
//! ```json
//! { "contacts": [ { "name": "Ann", "phone": "123", "email": "a@x" } ] }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::core::book::AddressBook;
use crate::core::contact::Contact;

const STORE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/address_book.schema.json"
));

/// Default store file name, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    contacts: Vec<Contact>,
}

/// Load the address book at `path`.
///
/// A missing file is a first run and yields an empty book. A file that exists
/// but cannot be parsed or fails schema validation is an error.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_book(path: &Path) -> Result<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("no address book on disk, starting empty");
            return Ok(AddressBook::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read address book {}", path.display()));
        }
    };
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse address book {}", path.display()))?;
    validate_store(&value).with_context(|| format!("validate address book {}", path.display()))?;
    let stored: StoredBook = serde_json::from_value(value)
        .with_context(|| format!("deserialize address book {}", path.display()))?;
    let book: AddressBook = stored.contacts.into_iter().collect();
    debug!(contacts = book.len(), "address book loaded");
    Ok(book)
}

/// Atomically write `book` to `path` (temp file + rename), replacing any
/// previous content.
#[instrument(skip_all, fields(path = %path.display(), contacts = book.len()))]
pub fn save_book(path: &Path, book: &AddressBook) -> Result<()> {
    let stored = StoredBook {
        contacts: book.all().cloned().collect(),
    };
    let mut buf = serde_json::to_string_pretty(&stored).context("serialize address book")?;
    buf.push('\n');
    write_atomic(path, &buf)?;
    debug!("address book saved");
    Ok(())
}

fn validate_store(value: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(STORE_SCHEMA).context("parse store schema")?;
    let validator = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages = validator
        .iter_errors(value)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(anyhow!(
            "store schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp address book {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("replace address book {}", path.display()));
    }
    Ok(())
}
