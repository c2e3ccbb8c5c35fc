//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. These value
//! objects validate at construction time so that invalid data cannot be
//! represented in the contact store.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
