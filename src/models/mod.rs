//! Data models for the phone book.

pub mod contact;

pub use contact::Contact;
