//! UI Components for the fac2csv upload page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`NoticeStack`] - Dismissible warnings above the form
//! - [`UploadForm`] - Drop zone, hidden file input and native form
//! - [`FileList`] - Selected files with per-item removal
//! - [`SubmitButton`] - Submit control with loading state

mod hero;
mod footer;
mod notices;
mod upload;
mod file_list;
mod submit;

pub use hero::*;
pub use footer::*;
pub use notices::*;
pub use upload::*;
pub use file_list::*;
pub use submit::*;
