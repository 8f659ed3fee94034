use std::fmt;

use serde::{Deserialize, Serialize};

/// A single address book entry. `name` is the lookup key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Contact with an empty email.
    pub fn without_email(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::new(name, phone, String::new())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact(name={}, phone={}, email={})",
            self.name, self.phone, self.email
        )
    }
}
