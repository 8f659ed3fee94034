//! User-facing strings in each supported language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::menu::MenuChoice;

/// Language of the interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "uk" => Ok(Language::Uk),
            other => Err(format!("unknown language {other:?} (expected en or uk)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::En => "en",
            Language::Uk => "uk",
        })
    }
}

/// Message catalog for one language.
#[derive(Debug)]
pub struct Messages {
    pub menu_title: &'static str,
    menu_labels: [&'static str; 5],
    pub prompt_choice: &'static str,
    pub prompt_name: &'static str,
    pub prompt_phone: &'static str,
    pub prompt_email: &'static str,
    pub prompt_remove: &'static str,
    pub prompt_find: &'static str,
    pub loading: &'static str,
    pub loaded: &'static str,
    pub contact_added: &'static str,
    pub contact_removed: &'static str,
    pub contact_not_found: &'static str,
    found_prefix: &'static str,
    pub all_contacts: &'static str,
    pub book_empty: &'static str,
    pub saving: &'static str,
    pub saved_goodbye: &'static str,
    pub invalid_option: &'static str,
}

static EN: Messages = Messages {
    menu_title: "Menu:",
    menu_labels: [
        "Add contact",
        "Remove contact",
        "Find contact",
        "Show all contacts",
        "Exit",
    ],
    prompt_choice: "Choose an option: ",
    prompt_name: "Name: ",
    prompt_phone: "Phone: ",
    prompt_email: "Email (optional): ",
    prompt_remove: "Name of the contact to remove: ",
    prompt_find: "Name to search for: ",
    loading: "Loading address book...",
    loaded: "Address book loaded.",
    contact_added: "Contact added.",
    contact_removed: "Contact removed.",
    contact_not_found: "Contact not found.",
    found_prefix: "Found: ",
    all_contacts: "All contacts:",
    book_empty: "The address book is empty.",
    saving: "Saving address book...",
    saved_goodbye: "Data saved. Goodbye!",
    invalid_option: "Invalid option. Try again.",
};

static UK: Messages = Messages {
    menu_title: "Меню:",
    menu_labels: [
        "Додати контакт",
        "Видалити контакт",
        "Знайти контакт",
        "Показати всі контакти",
        "Вийти",
    ],
    prompt_choice: "Оберіть опцію: ",
    prompt_name: "Ім'я: ",
    prompt_phone: "Телефон: ",
    prompt_email: "Email (необов'язково): ",
    prompt_remove: "Введіть ім'я контакту, який потрібно видалити: ",
    prompt_find: "Введіть ім'я для пошуку: ",
    loading: "Завантаження адресної книги...",
    loaded: "Адресна книга успішно завантажена.",
    contact_added: "Контакт додано.",
    contact_removed: "Контакт видалено.",
    contact_not_found: "Контакт не знайдено.",
    found_prefix: "Знайдено: ",
    all_contacts: "Всі контакти:",
    book_empty: "Адресна книга порожня.",
    saving: "Збереження адресної книги...",
    saved_goodbye: "Дані успішно збережено. До побачення!",
    invalid_option: "Невірна опція. Спробуйте ще раз.",
};

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::Uk => &UK,
        }
    }

    pub fn menu_label(&self, choice: MenuChoice) -> &'static str {
        self.menu_labels[usize::from(choice.number() - 1)]
    }

    pub fn found(&self, contact: &Contact) -> String {
        format!("{}{}", self.found_prefix, contact)
    }
}
