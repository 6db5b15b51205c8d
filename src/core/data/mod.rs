//! Data types describing loaded locale files.
//!
//! - `message`: where each translation key was defined (`MessageLocation`,
//!   `MessageContext`) and the per-locale collection (`LocaleMessages`).

pub mod message;

pub use message::{AllLocaleMessages, LocaleMessages, MessageContext, MessageLocation};
