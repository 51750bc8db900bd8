//! Modal Component
//!
//! Overlay shell shared by every dialog. Clicking the backdrop closes it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: Option<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {description.map(|d| view! { <p class="modal-description">{d}</p> })}
                    </div>
                    <button type="button" class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
