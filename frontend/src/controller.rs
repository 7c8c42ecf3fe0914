//! Reactive controller for the upload form.
//!
//! Owns the [`FileSelection`] and keeps three things consistent with it:
//! the rendered file list, the submit button, and the hidden file input
//! whose contents the browser posts on submit.

use leptos::*;
use web_sys::{File, FileList};

use crate::config::SelectionLimits;
use crate::selection::FileSelection;
use crate::services::{files_from_list, InputFile, Notifier};
use crate::types::{FileRow, Severity};

pub struct FileSelectionController<F: 'static = File> {
    selection: RwSignal<FileSelection<F>>,
    submitting: RwSignal<bool>,
    input: NodeRef<html::Input>,
    notifier: Notifier,
}

// Signal handles are Copy whatever the file type
impl<F: 'static> Clone for FileSelectionController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for FileSelectionController<F> {}

impl<F: InputFile> FileSelectionController<F> {
    pub fn new(limits: SelectionLimits, notifier: Notifier) -> Self {
        Self {
            selection: create_rw_signal(FileSelection::new(limits)),
            submitting: create_rw_signal(false),
            input: create_node_ref(),
            notifier,
        }
    }

    /// Node ref to attach to the hidden `<input type="file">`.
    pub fn input_ref(&self) -> NodeRef<html::Input> {
        self.input
    }

    pub fn add_files(&self, candidates: Vec<F>) {
        let count = candidates.len();
        let outcome = self
            .selection
            .try_update(|selection| selection.add_files(candidates))
            .unwrap_or_default();

        log::info!(
            "📁 {} of {} file(s) accepted, {} dropped",
            outcome.accepted,
            count,
            outcome.dropped
        );

        for warning in outcome.warnings {
            self.notifier.notify(warning.to_string(), Severity::Warning);
        }

        self.sync_input();
    }

    /// Remove the entry behind a rendered row.
    pub fn remove_at(&self, index: usize) {
        let removed = self
            .selection
            .try_update(|selection| selection.remove_at(index))
            .flatten();

        match removed {
            Some(file) => {
                log::info!("🗑️ Removed {}", file.file_name());
                self.sync_input();
            }
            None => log::warn!("Ignoring removal of unknown index {}", index),
        }
    }

    /// Render descriptors for the file list. Tracked.
    pub fn rows(&self) -> Vec<FileRow> {
        self.selection.with(|selection| selection.rows())
    }

    pub fn file_count(&self) -> usize {
        self.selection.with(|selection| selection.len())
    }

    pub fn has_files(&self) -> bool {
        self.selection.with(|selection| !selection.is_empty())
    }

    /// Whether the submit button is enabled. Tracked.
    pub fn can_submit(&self) -> bool {
        !self.submitting.get() && self.selection.with(|selection| selection.can_submit())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Lock the form for the rest of the page's life.
    ///
    /// Must run synchronously in the `submit` handler so a second click
    /// cannot post the files again. The submission itself is left alone.
    pub fn begin_submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let count = self.selection.with_untracked(|selection| selection.len());
        log::info!("📤 Submitting {} file(s)", count);
        self.submitting.set(true);
    }

    fn sync_input(&self) {
        let Some(input) = self.input.get_untracked() else {
            log::warn!("File input is not mounted, selection not synchronized");
            return;
        };

        let result = self
            .selection
            .with_untracked(|selection| F::sync_input(&input, selection.files()));

        if let Err(e) = result {
            log::error!("❌ {}", e);
        }
    }
}

impl FileSelectionController<File> {
    /// Add the files of a picker `change` or a drop.
    pub fn add_file_list(&self, list: Option<FileList>) {
        match list {
            Some(list) => self.add_files(files_from_list(&list)),
            None => log::debug!("Event carried no file list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;
    use web_sys::HtmlInputElement;

    use crate::error::AppResult;
    use crate::selection::tests::MockFile;

    impl InputFile for MockFile {
        fn sync_input(_input: &HtmlInputElement, _files: &[Self]) -> AppResult<()> {
            Ok(())
        }
    }

    fn controller() -> FileSelectionController<MockFile> {
        FileSelectionController::new(SelectionLimits::default(), Notifier::new(5_000))
    }

    fn files(names: &[&str]) -> Vec<MockFile> {
        names.iter().map(|name| MockFile::new(name, 1024)).collect()
    }

    #[test]
    fn test_submit_enabled_only_with_files() {
        let runtime = create_runtime();
        let controller = controller();

        assert!(!controller.can_submit());

        controller.add_files(files(&["a.xml"]));
        assert!(controller.can_submit());

        controller.remove_at(0);
        assert!(!controller.can_submit());

        runtime.dispose();
    }

    #[test]
    fn test_submit_locks_with_files_present() {
        let runtime = create_runtime();
        let controller = controller();
        controller.add_files(files(&["a.xml", "b.xml"]));

        controller.begin_submit();
        assert!(controller.is_submitting());
        assert!(!controller.can_submit());
        assert_eq!(controller.file_count(), 2);

        // second submit is a no-op
        controller.begin_submit();
        assert!(controller.is_submitting());
        assert!(!controller.can_submit());

        runtime.dispose();
    }

    #[test]
    fn test_changes_after_submit_never_unlock() {
        let runtime = create_runtime();
        let controller = controller();
        controller.add_files(files(&["a.xml"]));
        controller.begin_submit();

        controller.add_files(files(&["b.xml", "c.xml"]));
        assert!(!controller.can_submit());

        controller.remove_at(0);
        assert!(!controller.can_submit());

        while controller.has_files() {
            controller.remove_at(0);
        }
        controller.add_files(files(&["d.xml"]));
        assert!(!controller.can_submit());
        assert!(controller.is_submitting());

        runtime.dispose();
    }

    #[test]
    fn test_remove_updates_rows() {
        let runtime = create_runtime();
        let controller = controller();
        controller.add_files(files(&["a.xml", "b.xml", "c.xml"]));

        controller.remove_at(0);
        controller.remove_at(7);

        let names: Vec<String> = controller.rows().into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["b.xml", "c.xml"]);
        assert_eq!(controller.rows()[0].index, 0);

        runtime.dispose();
    }
}
