//! User-facing messages and the macros that print them.
//!
//! Every line the updater shows to a user is a [`Message`] variant. The text
//! lives in [`display`], and the `msg_*` macros in [`macros`] decide whether a
//! message goes to the console or through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
