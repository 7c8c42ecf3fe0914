//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero text-center my-4">
            <h1>"Facturas DIAN a CSV"</h1>
            <p class="subtitle text-muted">
                "Convierta facturas electrónicas (UBL 2.1) en archivos CSV de resumen y detalle. "
                "Seleccione uno o varios archivos XML para comenzar."
            </p>
        </div>
    }
}
