//! Dismissible notices stacked at the top of the page.

use leptos::*;

use crate::Notifier;

#[component]
pub fn NoticeStack(notifier: Notifier) -> impl IntoView {
    view! {
        <For
            each=move || notifier.notices()
            key=|notice| notice.id
            children=move |notice| {
                let id = notice.id;
                view! {
                    <div
                        class=format!("alert {} alert-dismissible fade show", notice.severity.css_class())
                        role="alert"
                    >
                        <i class=notice.severity.icon()></i>
                        " " {notice.message}
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Cerrar"
                            on:click=move |_| notifier.dismiss(id)
                        ></button>
                    </div>
                }
            }
        />
    }
}
