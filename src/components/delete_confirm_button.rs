//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows the delete button initially. When clicked, shows the prompt with ✓/✗ buttons.
/// Nothing is deleted until ✓ is pressed.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `label` - Text of the initial button (e.g. "×" or "Delete Card")
/// * `prompt` - Question shown while confirming
/// * `disabled` - Disables every button (e.g. while a request is in flight)
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
