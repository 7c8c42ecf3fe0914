//! Submit button with loading state

use leptos::*;

use crate::FileSelectionController;

#[component]
pub fn SubmitButton(controller: FileSelectionController) -> impl IntoView {
    view! {
        <div class="d-grid mt-3">
            <button
                type="submit"
                class="btn btn-primary btn-lg"
                id="submitBtn"
                disabled=move || !controller.can_submit()
            >
                {move || if controller.is_submitting() {
                    view! {
                        <span class="spinner-border spinner-border-sm me-2"></span>
                        "Procesando..."
                    }.into_view()
                } else {
                    view! {
                        <i class="bi bi-arrow-repeat me-2"></i>
                        "Convertir a CSV"
                    }.into_view()
                }}
            </button>
        </div>
    }
}
