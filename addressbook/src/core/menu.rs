//! Menu selections offered by the session.

/// One of the five numbered menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Find,
    List,
    Exit,
}

impl MenuChoice {
    /// All choices in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Find,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    /// Parse a raw input line. Surrounding whitespace is ignored; anything
    /// other than `1`..`5` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Find),
            "4" => Some(MenuChoice::List),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// The number the user types to pick this choice.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Remove => 2,
            MenuChoice::Find => 3,
            MenuChoice::List => 4,
            MenuChoice::Exit => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_numbers_with_whitespace() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for input in ["", "0", "6", "9", "one", "1.0", "11"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn number_inverts_parse() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }
}
