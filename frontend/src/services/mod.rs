//! Browser-facing services.
//!
//! # Services
//!
//! - [`file_input`] - `web_sys::File` support and hidden input synchronization
//! - [`notifier`] - notices with cancellable auto-dismiss timers

pub mod file_input;
pub mod notifier;

pub use file_input::*;
pub use notifier::*;
