//! Priority Selector Component
//!
//! Reusable card priority selector buttons.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority selector buttons for cards
#[component]
pub fn PrioritySelector(
    current: ReadSignal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::ALL.into_iter().map(|priority| {
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || {
                            let mut c = format!("priority-btn priority-{}", priority.as_str());
                            if is_selected() { c.push_str(" active"); }
                            c
                        }
                        disabled=move || disabled.get()
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
