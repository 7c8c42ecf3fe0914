//! fac2csv - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload form for converting DIAN electronic invoices
//! (XML) to CSV. The conversion itself happens on the server; this crate
//! curates which files the native form submission sends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  .container                                                  │
//! │  ├── NoticeStack (warnings, auto-dismiss)                    │
//! │  ├── Hero (title, description)                               │
//! │  └── UploadForm                                              │
//! │      ├── drop zone + hidden file input                       │
//! │      ├── FileList (removable rows)                           │
//! │      └── SubmitButton (loading state)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Limits and page-embedded overrides
//! - [`error`] - Selection warnings and application errors
//! - [`types`] - Common types (FileRow, Notice, Severity)
//! - [`selection`] - Browser-independent file selection model
//! - [`notices`] - Notice stack model
//! - [`controller`] - Reactive glue between events, model and DOM
//! - [`components`] - UI components
//! - [`services`] - Browser file APIs and timed notices

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod selection;
pub mod notices;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult, SelectionWarning};

// Types
pub use types::{FileRow, Notice, Severity};

// Model
pub use selection::{format_size, AddOutcome, FileHandle, FileSelection};
pub use notices::NoticeBoard;
pub use controller::FileSelectionController;

// Components
pub use components::*;

// Services
pub use services::{files_from_list, sync_file_input, InputFile, Notifier};

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="fac2csv - Facturas DIAN a CSV"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let config = UploadConfig::load();

    let notifier = Notifier::new(config.notice_timeout_ms);
    let controller = FileSelectionController::new(config.limits(), notifier);

    view! {
        <div class="container">
            <NoticeStack notifier=notifier/>

            <Hero/>

            <UploadForm controller=controller config=config/>
        </div>

        <Footer/>
    }
}
