//! Phone Book - an interactive command-line address book.
//!
//! Contacts and their phone numbers live in memory for one session and are
//! managed through free-text commands such as `add john 0501234567` or
//! `show all`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact names, phone numbers)
//! - **models**: The contact record and its phone list invariants
//! - **repositories**: Contact repository trait and the in-memory store
//! - **interpreter**: Command parsing, dispatch, and reply rendering
//! - **repl**: The read loop connecting an input stream to the interpreter
//! - **config**: Configuration from environment variables
//! - **error**: Error types
//! - **observability**: Session metrics

pub mod config;
pub mod domain;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod observability;
pub mod repl;
pub mod repositories;

pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, PhoneBookError, PhoneBookResult};
pub use interpreter::{CommandInterpreter, Evaluation, PendingDelete, Reply};
pub use models::Contact;
pub use repositories::{ContactRepository, ContactStore, Listing};
