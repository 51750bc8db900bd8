//! Toast Host Component
//!
//! Renders the toast queue in the corner of the page.

use leptos::prelude::*;

use crate::notify::{Toast, ToastKind, Toaster};

#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toaster.toasts.get()
                key=|(id, _): &(u64, Toast)| *id
                children=move |(id, toast): (u64, Toast)| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast",
                        ToastKind::Error => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title}</div>
                                <div class="toast-description">{toast.description}</div>
                            </div>
                            <button class="close-btn" on:click=move |_| toaster.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
