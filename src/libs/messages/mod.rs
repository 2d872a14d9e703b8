//! Centralised user-facing text.
//!
//! Code picks a [`Message`] variant; its wording comes from the `Display`
//! impl in [`display`]. Output goes through the macros in [`macros`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
