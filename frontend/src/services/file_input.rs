//! Bridge between the selection model and the browser's file APIs.
//!
//! The form is submitted natively, so whatever the hidden `<input type="file">`
//! holds at submit time is what the server receives. [`sync_file_input`]
//! rebuilds that input's `FileList` from the selection after every change.

use web_sys::{Blob, DataTransfer, File, FileList, HtmlInputElement};

use crate::error::{AppError, AppResult};
use crate::selection::FileHandle;

impl FileHandle for File {
    fn file_name(&self) -> String {
        File::name(self)
    }

    fn byte_size(&self) -> u64 {
        // Blob sizes are integral doubles
        Blob::size(self) as u64
    }
}

/// Files that can be written back into the hidden input.
pub trait InputFile: FileHandle + 'static {
    fn sync_input(input: &HtmlInputElement, files: &[Self]) -> AppResult<()>;
}

impl InputFile for File {
    fn sync_input(input: &HtmlInputElement, files: &[Self]) -> AppResult<()> {
        sync_file_input(input, files)
    }
}

/// Collect a `FileList` (picker or drop) into owned handles, in order.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Replace the input's files with `files`.
pub fn sync_file_input(input: &HtmlInputElement, files: &[File]) -> AppResult<()> {
    let transfer = DataTransfer::new()
        .map_err(|e| AppError::Dom(format!("Failed to create DataTransfer: {:?}", e)))?;

    let items = transfer.items();
    for file in files {
        items
            .add_with_file(file)
            .map_err(|e| AppError::Dom(format!("Failed to add {}: {:?}", file.name(), e)))?;
    }

    input.set_files(transfer.files().as_ref());
    Ok(())
}
