//! XML upload form with drag & drop support.
//!
//! The form posts natively as `multipart/form-data`; this component only
//! curates what the hidden file input holds before that happens.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent, SubmitEvent};

use crate::components::{FileList, SubmitButton};
use crate::{FileSelectionController, UploadConfig};

#[component]
pub fn UploadForm(controller: FileSelectionController, config: UploadConfig) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let input_ref = controller.input_ref();

    // Nuevos archivos desde el selector
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        controller.add_file_list(input.files());
    };

    // Click anywhere in the zone opens the picker, except on the input itself
    let on_zone_click = move |ev: MouseEvent| {
        let from_input = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .is_some();
        if from_input {
            return;
        }
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_over.set(false);
        controller.add_file_list(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    // No prevent_default: the browser performs the upload
    let on_submit = move |_: SubmitEvent| controller.begin_submit();

    let accept = config.accepted_extension.clone();
    let size_limit = config.limits().max_file_size_label();

    view! {
        <form
            id="uploadForm"
            method="post"
            action=config.upload_endpoint
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <div
                class="drop-zone"
                class:dragover=move || drag_over.get()
                id="dropZone"
                on:click=on_zone_click
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <i class="bi bi-cloud-arrow-up drop-zone-icon"></i>
                <div class="drop-zone-text">"Arrastre sus facturas XML aquí"</div>
                <div class="drop-zone-hint">"o haga clic para seleccionar"</div>
                <div class="drop-zone-hint">
                    {format!(
                        "Hasta {} archivos {}, máximo {} cada uno",
                        config.max_files,
                        accept,
                        size_limit,
                    )}
                </div>

                <input
                    type="file"
                    id="fileInput"
                    name=config.file_field_name
                    accept=accept.clone()
                    multiple=true
                    style="display:none"
                    node_ref=input_ref
                    on:change=on_file_change
                />
            </div>

            <FileList controller=controller/>

            <SubmitButton controller=controller/>
        </form>
    }
}
