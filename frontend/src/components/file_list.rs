//! List of the files waiting to be uploaded

use leptos::*;

use crate::{FileRow, FileSelectionController};

#[component]
pub fn FileList(controller: FileSelectionController) -> impl IntoView {
    view! {
        <Show
            when=move || controller.has_files()
            fallback=|| view! { }
        >
            <div class="card mt-3" id="fileList">
                <div class="card-header">
                    "Archivos seleccionados (" {move || controller.file_count()} ")"
                </div>
                <div class="list-group list-group-flush" id="fileListContent">
                    // Full rebuild on every change: indices shift after a removal
                    {move || {
                        controller
                            .rows()
                            .into_iter()
                            .map(|row| view! { <FileListItem row=row controller=controller/> })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn FileListItem(row: FileRow, controller: FileSelectionController) -> impl IntoView {
    let index = row.index;

    view! {
        <div class="list-group-item file-list-item">
            <div class="file-info">
                <i class="bi bi-file-earmark-text file-icon"></i>
                <span class="file-name">{row.name}</span>
                <span class="file-size ms-2">"(" {row.size_label} ")"</span>
            </div>
            <i
                class="bi bi-x-circle file-remove"
                title="Eliminar"
                on:click=move |_| controller.remove_at(index)
            ></i>
        </div>
    }
}
