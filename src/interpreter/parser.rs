//! Line tokenizer and command grammar.
//!
//! Parsing is pure: a line goes in, a [`Command`] or an `InvalidCommand`
//! error comes out. Nothing here touches the contact store.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{PhoneBookError, PhoneBookResult};
use std::str::FromStr;

/// The first token of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Change,
    Del,
    Show,
    Phone,
}

impl FromStr for Verb {
    type Err = PhoneBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "del" => Ok(Self::Del),
            "show" => Ok(Self::Show),
            "phone" => Ok(Self::Phone),
            _ => Err(PhoneBookError::check_command()),
        }
    }
}

/// How many trailing argument tokens look like phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentShape {
    /// No trailing phone; every token belongs to the name.
    NameOnly,

    /// At least two tokens, the last one a phone.
    NameAndPhone,

    /// At least three tokens, the last two phones.
    NameAndTwoPhones,
}

impl ArgumentShape {
    /// Classify argument tokens by testing the last one or two against the
    /// phone number rule.
    pub fn classify<S: AsRef<str>>(args: &[S]) -> Self {
        let is_phone = |i: usize| PhoneNumber::is_valid(args[i].as_ref());
        let n = args.len();

        if n >= 3 && is_phone(n - 1) && is_phone(n - 2) {
            Self::NameAndTwoPhones
        } else if n >= 2 && is_phone(n - 1) {
            Self::NameAndPhone
        } else {
            Self::NameOnly
        }
    }

    /// True when the last token is a phone number.
    pub fn has_trailing_phone(self) -> bool {
        !matches!(self, Self::NameOnly)
    }
}

/// A fully validated command ready to run against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddContact(ContactName),
    AddPhone {
        name: ContactName,
        phone: PhoneNumber,
    },
    ChangePhone {
        name: ContactName,
        old: PhoneNumber,
        new: PhoneNumber,
    },
    DeletePhone {
        name: ContactName,
        phone: PhoneNumber,
    },
    DeleteContact(ContactName),
    ShowAll,
    ShowPhones(ContactName),
}

/// Split a raw line into lower-cased tokens.
///
/// Commas and periods are dropped before splitting, so `"add bob, 050.123.4567"`
/// yields `["add", "bob", "0501234567"]`.
pub fn tokenize(line: &str) -> Vec<String> {
    line.trim()
        .replace(|c: char| c == ',' || c == '.', "")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Argument tokens together with their trailing-phone classification.
struct Arguments {
    tokens: Vec<String>,
    shape: ArgumentShape,
}

impl Arguments {
    fn new(tokens: Vec<String>) -> Self {
        let shape = ArgumentShape::classify(&tokens);
        Self { tokens, shape }
    }

    fn words(&self, drop_last: usize) -> impl Iterator<Item = &str> + '_ {
        self.tokens[..self.tokens.len() - drop_last]
            .iter()
            .map(String::as_str)
    }

    fn phone_from_end(&self, offset: usize) -> PhoneBookResult<PhoneNumber> {
        let token = &self.tokens[self.tokens.len() - 1 - offset];
        Ok(PhoneNumber::new(token.as_str())?)
    }

    /// Every token as the name.
    fn name_only(&self) -> PhoneBookResult<ContactName> {
        Ok(ContactName::from_words(self.words(0))?)
    }

    /// All but the last token as the name, the last as a phone.
    fn name_with_one_phone(&self) -> PhoneBookResult<(ContactName, PhoneNumber)> {
        let name = ContactName::from_words(self.words(1))?;
        Ok((name, self.phone_from_end(0)?))
    }

    /// All but the last two tokens as the name, then old and new phones.
    fn name_with_two_phones(&self) -> PhoneBookResult<(ContactName, PhoneNumber, PhoneNumber)> {
        let name = ContactName::from_words(self.words(2))?;
        Ok((name, self.phone_from_end(1)?, self.phone_from_end(0)?))
    }
}

/// Parse one command line.
///
/// # Errors
///
/// `InvalidCommand` when the verb is missing or unknown, when there are no
/// arguments, or when the arguments do not fit any shape the verb accepts.
pub fn parse(line: &str) -> PhoneBookResult<Command> {
    let mut tokens = tokenize(line).into_iter();
    let verb: Verb = tokens
        .next()
        .ok_or_else(PhoneBookError::check_command)?
        .parse()?;

    let args = Arguments::new(tokens.collect());
    if args.tokens.is_empty() {
        return Err(PhoneBookError::check_command());
    }

    match verb {
        Verb::Add if args.shape.has_trailing_phone() => {
            let (name, phone) = args.name_with_one_phone()?;
            Ok(Command::AddPhone { name, phone })
        }
        Verb::Add => Ok(Command::AddContact(args.name_only()?)),
        Verb::Change if args.shape == ArgumentShape::NameAndTwoPhones => {
            let (name, old, new) = args.name_with_two_phones()?;
            Ok(Command::ChangePhone { name, old, new })
        }
        Verb::Del if args.shape.has_trailing_phone() => {
            let (name, phone) = args.name_with_one_phone()?;
            Ok(Command::DeletePhone { name, phone })
        }
        Verb::Del => Ok(Command::DeleteContact(args.name_only()?)),
        Verb::Show if args.tokens == ["all"] => Ok(Command::ShowAll),
        Verb::Phone => Ok(Command::ShowPhones(args.name_only()?)),
        Verb::Change | Verb::Show => Err(PhoneBookError::check_command()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ContactName {
        ContactName::new(s).unwrap()
    }

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    #[test]
    fn test_tokenize_normalizes() {
        assert_eq!(
            tokenize("  ADD John, Smith. 123.456.7890 "),
            vec!["add", "john", "smith", "1234567890"]
        );
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(ArgumentShape::classify(&["bob"]), ArgumentShape::NameOnly);
        assert_eq!(
            ArgumentShape::classify(&["1234567890"]),
            ArgumentShape::NameOnly
        );
        assert_eq!(
            ArgumentShape::classify(&["bob", "1234567890"]),
            ArgumentShape::NameAndPhone
        );
        assert_eq!(
            ArgumentShape::classify(&["1234567890", "12345678901"]),
            ArgumentShape::NameAndPhone
        );
        assert_eq!(
            ArgumentShape::classify(&["bob", "1234567890", "12345678901"]),
            ArgumentShape::NameAndTwoPhones
        );
        assert_eq!(
            ArgumentShape::classify(&["bob", "123", "1234567890"]),
            ArgumentShape::NameAndPhone
        );
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse("add john smith").unwrap(),
            Command::AddContact(name("John Smith"))
        );
        assert_eq!(
            parse("add john smith 1234567890").unwrap(),
            Command::AddPhone {
                name: name("John Smith"),
                phone: phone("1234567890"),
            }
        );
    }

    #[test]
    fn test_parse_add_single_digit_token_is_a_name() {
        assert_eq!(
            parse("add 1234567890").unwrap(),
            Command::AddContact(name("1234567890"))
        );
    }

    #[test]
    fn test_parse_add_with_two_phones_keeps_first_in_name() {
        assert_eq!(
            parse("add bob 1111111111 2222222222").unwrap(),
            Command::AddPhone {
                name: name("Bob 1111111111"),
                phone: phone("2222222222"),
            }
        );
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            parse("change bob 1111111111 2222222222").unwrap(),
            Command::ChangePhone {
                name: name("Bob"),
                old: phone("1111111111"),
                new: phone("2222222222"),
            }
        );
        assert_eq!(parse("change bob 1111111111"), Err(PhoneBookError::check_command()));
        assert_eq!(
            parse("change 1111111111 2222222222"),
            Err(PhoneBookError::check_command())
        );
        assert_eq!(
            parse("change bob 12345 2222222222"),
            Err(PhoneBookError::check_command())
        );
    }

    #[test]
    fn test_parse_del() {
        assert_eq!(
            parse("del bob 1111111111").unwrap(),
            Command::DeletePhone {
                name: name("Bob"),
                phone: phone("1111111111"),
            }
        );
        assert_eq!(parse("del bob").unwrap(), Command::DeleteContact(name("Bob")));
    }

    #[test]
    fn test_parse_del_wrong_length_digits_falls_through_to_contact() {
        assert_eq!(
            parse("del bob 12345").unwrap(),
            Command::DeleteContact(name("Bob 12345"))
        );
    }

    #[test]
    fn test_parse_show() {
        assert_eq!(parse("show all").unwrap(), Command::ShowAll);
        assert_eq!(parse("SHOW ALL").unwrap(), Command::ShowAll);
        assert!(parse("show").is_err());
        assert!(parse("show bob").is_err());
        assert!(parse("show all now").is_err());
    }

    #[test]
    fn test_parse_phone() {
        assert_eq!(
            parse("phone John SMITH").unwrap(),
            Command::ShowPhones(name("John Smith"))
        );
        assert!(parse("phone").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_or_missing_verb() {
        assert_eq!(parse(""), Err(PhoneBookError::check_command()));
        assert_eq!(parse("hello bob"), Err(PhoneBookError::check_command()));
        assert_eq!(parse("add"), Err(PhoneBookError::check_command()));
    }

    #[test]
    fn test_parse_punctuation_only_argument() {
        // "," is removed during tokenizing, leaving no arguments
        assert_eq!(parse("add ,"), Err(PhoneBookError::check_command()));
    }
}
