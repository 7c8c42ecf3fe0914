//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center text-muted py-4">
            <div>
                "fac2csv • Los archivos se procesan en el servidor y se eliminan automáticamente"
            </div>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
