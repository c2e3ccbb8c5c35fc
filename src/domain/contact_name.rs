//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized contact name.
///
/// Every whitespace-separated word is capitalized (first character upper-case,
/// the rest lower-case) and the words are joined by single spaces, so
/// `"john  SMITH"` and `"John Smith"` produce the same key.
///
/// # Example
///
/// ```
/// use phone_book::domain::ContactName;
///
/// let name = ContactName::new("john smith").unwrap();
/// assert_eq!(name.as_str(), "John Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName from raw text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the text has no words.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::from_words(name.as_ref().split_whitespace())
    }

    /// Create a ContactName from already-split word tokens.
    pub fn from_words<'a, I>(words: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let normalized = words
            .into_iter()
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        if normalized.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self(normalized))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserializing normalizes the name the same way `new` does
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
