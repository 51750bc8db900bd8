//! Create Card Dialog
//!
//! Title is required; description and priority (default medium) are optional.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CreateCardArgs;
use crate::components::{Modal, PrioritySelector};
use crate::context::AppContext;
use crate::forms;
use crate::models::{Card, Priority};
use crate::notify::Toast;

#[component]
pub fn CreateCardDialog(
    board_id: String,
    list_id: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<Card>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ids = StoredValue::new((board_id, list_id));

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let title_value = match forms::required("Card title", &title.get_untracked()) {
            Ok(t) => t,
            Err(e) => return ctx.notify(Toast::invalid(&e)),
        };
        let description_value = description.get_untracked();
        let priority_value = priority.get_untracked();
        let (board_id, list_id) = ids.get_value();

        set_loading.set(true);
        spawn_local(async move {
            let args = CreateCardArgs {
                title: &title_value,
                description: forms::optional(&description_value),
                priority: priority_value,
            };
            let result = ctx.api().create_card(&board_id, &list_id, &args).await;
            set_loading.try_set(false);
            match result {
                Ok(card) => {
                    log::debug!("created card {} in list {}", card.id, list_id);
                    ctx.notify(Toast::success("Card created", format!("{} has been created successfully.", card.title)));
                    set_title.try_set(String::new());
                    set_description.try_set(String::new());
                    set_priority.try_set(Priority::default());
                    on_created.run(card);
                }
                Err(e) => ctx.report(&e, "Could not create card. Please try again."),
            }
        });
    };

    view! {
        <Modal title="Create New Card" description="Add a new task or item to this list." on_close=on_close>
            <form class="dialog-form" on:submit=submit>
                <label for="card-title">"Card Title"</label>
                <input
                    id="card-title"
                    type="text"
                    placeholder="e.g., Design homepage mockup"
                    required
                    prop:value=move || title.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label for="card-description">"Description (Optional)"</label>
                <textarea
                    id="card-description"
                    placeholder="Add more details..."
                    prop:value=move || description.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />

                <label>"Priority"</label>
                <PrioritySelector current=priority on_change=move |p| set_priority.set(p) disabled=loading />

                <div class="dialog-footer">
                    <button type="button" class="btn-outline" disabled=move || loading.get() on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating..." } else { "Create Card" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
