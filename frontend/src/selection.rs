//! Pending file selection.
//!
//! [`FileSelection`] is the ordered list of files that will be sent when the
//! form is submitted. It is independent of the browser: anything implementing
//! [`FileHandle`] can be selected, which keeps the filtering rules testable on
//! the native target.
//!
//! # Rules
//!
//! - a candidate must end with the accepted extension (case-insensitive)
//! - a candidate must not exceed the per-file size limit
//! - the selection is cumulative and never holds more than `max_files`
//!   entries; overflow keeps the oldest entries

use crate::config::SelectionLimits;
use crate::error::SelectionWarning;
use crate::types::FileRow;

/// Units used by [`format_size`]. Sizes past the last unit stay in it.
const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Metadata a selectable file must expose.
pub trait FileHandle: Clone {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> u64;
}

/// Result of a call to [`FileSelection::add_files`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Candidates that passed the filters
    pub accepted: usize,
    /// Entries cut off by the file count limit
    pub dropped: usize,
    /// Messages to show, in the order they occurred
    pub warnings: Vec<SelectionWarning>,
}

/// Ordered list of files waiting to be uploaded.
#[derive(Clone, Debug)]
pub struct FileSelection<F> {
    files: Vec<F>,
    limits: SelectionLimits,
}

impl<F: FileHandle> FileSelection<F> {
    pub fn new(limits: SelectionLimits) -> Self {
        Self {
            files: Vec::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &SelectionLimits {
        &self.limits
    }

    /// Check a single candidate against the extension and size limits.
    pub fn check(&self, candidate: &F) -> Result<(), SelectionWarning> {
        let name = candidate.file_name();

        if !name.to_lowercase().ends_with(&self.limits.accepted_extension) {
            return Err(SelectionWarning::UnsupportedExtension {
                name,
                extension: self.limits.accepted_extension.clone(),
            });
        }

        if candidate.byte_size() > self.limits.max_file_size {
            return Err(SelectionWarning::FileTooLarge {
                name,
                limit: self.limits.max_file_size_label(),
            });
        }

        Ok(())
    }

    /// Append every acceptable candidate, then enforce the file count limit.
    pub fn add_files<I>(&mut self, candidates: I) -> AddOutcome
    where
        I: IntoIterator<Item = F>,
    {
        let mut outcome = AddOutcome::default();

        for candidate in candidates {
            match self.check(&candidate) {
                Ok(()) => {
                    self.files.push(candidate);
                    outcome.accepted += 1;
                }
                Err(warning) => outcome.warnings.push(warning),
            }
        }

        if self.files.len() > self.limits.max_files {
            outcome.dropped = self.files.len() - self.limits.max_files;
            self.files.truncate(self.limits.max_files);
            outcome.warnings.push(SelectionWarning::CapacityExceeded {
                max: self.limits.max_files,
            });
        }

        outcome
    }

    /// Remove the entry at `index`. Out of range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Render descriptors, one per entry, in selection order.
    pub fn rows(&self) -> Vec<FileRow> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| FileRow {
                index,
                name: file.file_name(),
                size_label: format_size(file.byte_size()),
            })
            .collect()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The form may only be submitted with at least one file.
    pub fn can_submit(&self) -> bool {
        !self.files.is_empty()
    }
}

impl<F: FileHandle> Default for FileSelection<F> {
    fn default() -> Self {
        Self::new(SelectionLimits::default())
    }
}

/// Format a byte count for display: `1536` -> `"1.5 KB"`.
///
/// Values are rounded to two decimals and printed without trailing zeros.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, SIZE_UNITS[unit])
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct MockFile {
        pub(crate) name: String,
        pub(crate) size: u64,
    }

    impl MockFile {
        pub(crate) fn new(name: &str, size: u64) -> Self {
            Self { name: name.to_string(), size }
        }
    }

    impl FileHandle for MockFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }
    }

    fn names(selection: &FileSelection<MockFile>) -> Vec<String> {
        selection.files().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_rejects_wrong_extension() {
        let mut selection = FileSelection::default();
        let outcome = selection.add_files(vec![
            MockFile::new("factura.pdf", 100),
            MockFile::new("factura.xml.zip", 100),
            MockFile::new("xml", 100),
        ]);

        assert!(selection.is_empty());
        assert_eq!(outcome.accepted, 0);
        assert_eq!(outcome.warnings.len(), 3);
        assert!(matches!(
            &outcome.warnings[0],
            SelectionWarning::UnsupportedExtension { name, .. } if name == "factura.pdf"
        ));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let mut selection = FileSelection::default();
        let outcome = selection.add_files(vec![
            MockFile::new("FACTURA.XML", 10),
            MockFile::new("nota.Xml", 10),
        ]);

        assert_eq!(outcome.accepted, 2);
        assert!(outcome.warnings.is_empty());
        assert_eq!(names(&selection), vec!["FACTURA.XML", "nota.Xml"]);
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let mut selection = FileSelection::default();
        let outcome = selection.add_files(vec![
            MockFile::new("exact.xml", 10 * 1024 * 1024),
            MockFile::new("over.xml", 10 * 1024 * 1024 + 1),
        ]);

        assert_eq!(names(&selection), vec!["exact.xml"]);
        assert_eq!(
            outcome.warnings,
            vec![SelectionWarning::FileTooLarge { name: "over.xml".into(), limit: "10MB".into() }]
        );
    }

    #[test]
    fn test_sub_megabyte_limit_in_warning() {
        let limits = SelectionLimits {
            max_file_size: 512 * 1024,
            ..SelectionLimits::default()
        };
        let mut selection = FileSelection::new(limits);
        let outcome = selection.add_files(vec![MockFile::new("big.xml", 600_000)]);

        assert!(selection.is_empty());
        assert_eq!(
            outcome.warnings[0].to_string(),
            "Archivo ignorado: \"big.xml\" (excede 512KB)"
        );
    }

    #[test]
    fn test_selection_is_cumulative_and_allows_duplicates() {
        let mut selection = FileSelection::default();
        selection.add_files(vec![MockFile::new("a.xml", 1)]);
        selection.add_files(vec![MockFile::new("a.xml", 1), MockFile::new("b.xml", 2)]);

        assert_eq!(names(&selection), vec!["a.xml", "a.xml", "b.xml"]);
    }

    #[test]
    fn test_caps_at_first_fifty() {
        let mut selection = FileSelection::default();
        let candidates: Vec<MockFile> = (0..60)
            .map(|i| MockFile::new(&format!("f{:02}.xml", i), 1))
            .collect();

        let outcome = selection.add_files(candidates);

        assert_eq!(selection.len(), 50);
        assert_eq!(selection.files()[0].name, "f00.xml");
        assert_eq!(selection.files()[49].name, "f49.xml");
        assert_eq!(outcome.accepted, 60);
        assert_eq!(outcome.dropped, 10);
        assert_eq!(outcome.warnings, vec![SelectionWarning::CapacityExceeded { max: 50 }]);
    }

    #[test]
    fn test_cap_keeps_existing_entries() {
        let mut selection = FileSelection::default();
        selection.add_files((0..45).map(|i| MockFile::new(&format!("old{}.xml", i), 1)));
        let outcome = selection.add_files(vec![
            MockFile::new("bad.txt", 1),
            MockFile::new("n0.xml", 1),
            MockFile::new("n1.xml", 1),
            MockFile::new("n2.xml", 1),
            MockFile::new("n3.xml", 1),
            MockFile::new("n4.xml", 1),
            MockFile::new("n5.xml", 1),
            MockFile::new("n6.xml", 1),
        ]);

        assert_eq!(selection.len(), 50);
        assert_eq!(selection.files()[44].name, "old44.xml");
        assert_eq!(selection.files()[49].name, "n4.xml");
        assert_eq!(outcome.dropped, 2);
        // rejection first, then the single cap warning
        assert_eq!(outcome.warnings.len(), 2);
        assert!(matches!(outcome.warnings[1], SelectionWarning::CapacityExceeded { .. }));
    }

    #[test]
    fn test_remove_at_keeps_order() {
        let mut selection = FileSelection::default();
        selection.add_files(vec![
            MockFile::new("a.xml", 1),
            MockFile::new("b.xml", 1),
            MockFile::new("c.xml", 1),
        ]);

        let removed = selection.remove_at(1);

        assert_eq!(removed.map(|f| f.name), Some("b.xml".to_string()));
        assert_eq!(names(&selection), vec!["a.xml", "c.xml"]);
        let rows = selection.rows();
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].name, "c.xml");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut selection = FileSelection::default();
        selection.add_files(vec![MockFile::new("a.xml", 1)]);

        assert!(selection.remove_at(1).is_none());
        assert!(selection.remove_at(usize::MAX).is_none());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_can_submit_tracks_emptiness() {
        let mut selection = FileSelection::default();
        assert!(!selection.can_submit());

        selection.add_files(vec![MockFile::new("a.xml", 1)]);
        assert!(selection.can_submit());

        selection.remove_at(0);
        assert!(!selection.can_submit());

        selection.add_files(vec![MockFile::new("a.txt", 1)]);
        assert!(!selection.can_submit());
    }

    #[test]
    fn test_rows_describe_entries() {
        let mut selection = FileSelection::default();
        selection.add_files(vec![MockFile::new("a.xml", 1536), MockFile::new("b.xml", 0)]);

        assert_eq!(
            selection.rows(),
            vec![
                FileRow { index: 0, name: "a.xml".into(), size_label: "1.5 KB".into() },
                FileRow { index: 1, name: "b.xml".into(), size_label: "0 Bytes".into() },
            ]
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = SelectionLimits {
            max_files: 2,
            max_file_size: 100,
            accepted_extension: ".xml".into(),
        };
        let mut selection = FileSelection::new(limits);
        let outcome = selection.add_files(vec![
            MockFile::new("a.xml", 100),
            MockFile::new("b.xml", 101),
            MockFile::new("c.xml", 1),
            MockFile::new("d.xml", 1),
        ]);

        assert_eq!(names(&selection), vec!["a.xml", "c.xml"]);
        assert_eq!(outcome.dropped, 1);
        assert_eq!(outcome.warnings.len(), 2);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_format_size_large_values() {
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1 TB");
        // past the table, stays in TB
        assert_eq!(format_size(2048 * 1024u64.pow(4)), "2048 TB");
    }
}
