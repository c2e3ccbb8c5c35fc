//! Command evaluation against a contact repository.

use super::parser::{self, Command};
use crate::domain::ContactName;
use crate::error::{PhoneBookError, PhoneBookResult};
use crate::repositories::{ContactRepository, ContactStore, Listing};
use std::fmt;
use tracing::{debug, warn};

/// Text shown by `show all` when the store has no contacts.
pub const EMPTY_LIST: &str = "Your contact list is EMPTY";

/// Question asked before a whole contact is deleted.
pub const CONFIRM_PROMPT: &str = "Are you sure? (Y/n)";

/// Reply to a declined deletion.
pub const ABORTED: &str = "Aborted";

/// Render an error the way the user sees it.
pub fn render_error(err: &PhoneBookError) -> String {
    format!("Error: {}. Message: {}", err.kind(), err)
}

/// Text produced by a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    text: String,
    error_kind: Option<&'static str>,
}

impl Reply {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error_kind: None,
        }
    }

    fn error(err: &PhoneBookError) -> Self {
        warn!(kind = err.kind(), error = %err, "Command failed");
        Self {
            text: render_error(err),
            error_kind: Some(err.kind()),
        }
    }

    fn from_result(result: PhoneBookResult<String>) -> Self {
        match result {
            Ok(text) => Self::ok(text),
            Err(err) => Self::error(&err),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Kind of the error this reply reports, if any.
    pub fn error_kind(&self) -> Option<&'static str> {
        self.error_kind
    }

    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A whole-contact deletion waiting for a yes/no answer.
///
/// Only the interpreter creates these, and [`CommandInterpreter::confirm_delete`]
/// consumes them, so each request is answered at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    name: ContactName,
}

impl PendingDelete {
    /// The contact that will be removed.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The question to put to the user.
    pub fn prompt(&self) -> &'static str {
        CONFIRM_PROMPT
    }
}

/// Outcome of evaluating one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// The command finished.
    Reply(Reply),

    /// The command needs a confirmation answer before it can finish.
    Confirm(PendingDelete),
}

/// Interprets command lines against an injected contact repository.
///
/// Every call handles exactly one line. Errors never escape: they come back
/// as a [`Reply`] rendered by [`render_error`].
///
/// # Example
///
/// ```
/// use phone_book::interpreter::CommandInterpreter;
///
/// let mut interpreter: CommandInterpreter = CommandInterpreter::default();
/// let reply = interpreter.evaluate_with("add bob 1234567890", |_| String::new());
/// assert_eq!(reply, "Contact Bob created with phone 1234567890");
/// ```
#[derive(Debug)]
pub struct CommandInterpreter<R = ContactStore> {
    store: R,
}

impl Default for CommandInterpreter<ContactStore> {
    fn default() -> Self {
        Self::new(ContactStore::new())
    }
}

impl<R: ContactRepository> CommandInterpreter<R> {
    /// Create an interpreter that owns `store`.
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn into_store(self) -> R {
        self.store
    }

    /// Evaluate one line.
    ///
    /// Whole-contact deletion returns [`Evaluation::Confirm`]; pass the user's
    /// answer to [`confirm_delete`](Self::confirm_delete) to finish it.
    pub fn evaluate(&mut self, line: &str) -> Evaluation {
        let command = match parser::parse(line) {
            Ok(command) => command,
            Err(err) => return Evaluation::Reply(Reply::error(&err)),
        };
        debug!(?command, "Parsed command");

        match command {
            Command::DeleteContact(name) => match self.request_delete(name) {
                Ok(pending) => Evaluation::Confirm(pending),
                Err(err) => Evaluation::Reply(Reply::error(&err)),
            },
            command => Evaluation::Reply(Reply::from_result(self.execute(command))),
        }
    }

    /// Finish a pending deletion with the user's answer.
    ///
    /// An empty answer or `y` deletes, `n` aborts, anything else is an
    /// `InvalidCommand` and nothing is deleted.
    pub fn confirm_delete(&mut self, pending: PendingDelete, answer: &str) -> Reply {
        Reply::from_result(self.apply_confirmation(pending, answer))
    }

    /// Evaluate one line, answering any confirmation with `answer`.
    ///
    /// `answer` is only called when the line asks for confirmation.
    pub fn evaluate_with<F>(&mut self, line: &str, answer: F) -> String
    where
        F: FnOnce(&PendingDelete) -> String,
    {
        match self.evaluate(line) {
            Evaluation::Reply(reply) => reply.into_text(),
            Evaluation::Confirm(pending) => {
                let response = answer(&pending);
                self.confirm_delete(pending, &response).into_text()
            }
        }
    }

    fn execute(&mut self, command: Command) -> PhoneBookResult<String> {
        match command {
            Command::AddContact(name) => {
                let (_, is_new) = self.store.create_or_get(&name);
                if is_new {
                    Ok(format!("Contact {} created", name))
                } else {
                    Ok(format!("Contact {} already exists", name))
                }
            }
            Command::AddPhone { name, phone } => {
                let existed = self.store.get(&name).is_some();
                let message = if existed {
                    format!("Phone {} added to record {}", phone, name)
                } else {
                    format!("Contact {} created with phone {}", name, phone)
                };
                self.store.add_phone(&name, phone)?;
                Ok(message)
            }
            Command::ChangePhone { name, old, new } => {
                let message = format!("Phone {} was changed to {} for {}", old, new, name);
                self.store.replace_phone(&name, &old, new)?;
                Ok(message)
            }
            Command::DeletePhone { name, phone } => {
                self.store.remove_phone(&name, &phone)?;
                Ok(format!("Phone {} deleted for record {}", phone, name))
            }
            Command::DeleteContact(name) => {
                // Only reachable through an already confirmed PendingDelete
                self.store.delete_contact(&name)?;
                Ok(format!("Contact {} was completely removed", name))
            }
            Command::ShowAll => Ok(match self.store.list_all() {
                Listing::Empty => EMPTY_LIST.to_string(),
                Listing::Contacts(contacts) => contacts
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            }),
            Command::ShowPhones(name) => self
                .store
                .get(&name)
                .map(|contact| contact.to_string())
                .ok_or(PhoneBookError::ContactNotFound(name)),
        }
    }

    fn request_delete(&self, name: ContactName) -> PhoneBookResult<PendingDelete> {
        if self.store.get(&name).is_none() {
            return Err(PhoneBookError::ContactNotFound(name));
        }
        debug!(name = %name, "Deletion awaiting confirmation");
        Ok(PendingDelete { name })
    }

    fn apply_confirmation(&mut self, pending: PendingDelete, answer: &str) -> PhoneBookResult<String> {
        match answer.trim().to_lowercase().as_str() {
            "" | "y" => self.execute(Command::DeleteContact(pending.name)),
            "n" => {
                debug!(name = %pending.name, "Deletion aborted");
                Ok(ABORTED.to_string())
            }
            _ => Err(PhoneBookError::InvalidCommand(
                r#"Check your command. Only "Y" or "n""#.to_string(),
            )),
        }
    }
}
