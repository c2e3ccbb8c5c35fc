//! Command interpreter.
//!
//! Turns one line of free text into a command, runs it against the
//! contact repository, and renders the result or error as display text.

pub mod command_interpreter;
pub mod parser;

pub use command_interpreter::{
    render_error, CommandInterpreter, Evaluation, PendingDelete, Reply, ABORTED, CONFIRM_PROMPT,
    EMPTY_LIST,
};
pub use parser::{parse, tokenize, ArgumentShape, Command, Verb};

/// Banner printed when a session starts.
pub const HELP: &str = "
List of available commands:
    add <name> | add <name> <phone>         - Add new contact (<phone> : 10 or 11 digits)
    change <name> <old phone> <new phone>   - Change phone number (10 or 11 digits) for existing contact name
    del <name>                              - Delete existing contact
    del <name> <phone>                      - Delete existing phone number for existing contact
    phone <name>                            - View phone number(s) for existing contact name
    show all                                - View all contacts
    good bye | close | exit | <ENTER>       - Close program
";
