//! Card Detail Dialog
//!
//! Edit every field of a card, or delete it after confirmation.
//! Fields are seeded from the card when the dialog opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, Modal, PrioritySelector};
use crate::context::AppContext;
use crate::forms::CardDraft;
use crate::markdown::render_markdown;
use crate::models::Card;
use crate::notify::Toast;

#[component]
pub fn CardDetailDialog(
    board_id: String,
    card: Card,
    #[prop(into)] on_close: Callback<()>,
    /// Called after a successful save or delete; the parent reloads
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let draft = CardDraft::from_card(&card);
    let ids = StoredValue::new((board_id, card.id.clone()));
    let assignees = card.assignees.clone();

    let (title, set_title) = signal(draft.title);
    let (description, set_description) = signal(draft.description);
    let (priority, set_priority) = signal(draft.priority);
    let (due_date, set_due_date) = signal(draft.due_date);
    let (labels, set_labels) = signal(draft.labels);
    let (loading, set_loading) = signal(false);
    let (preview, set_preview) = signal(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let draft = CardDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
            due_date: due_date.get_untracked(),
            labels: labels.get_untracked(),
        };
        let args = match draft.to_update() {
            Ok(args) => args,
            Err(e) => return ctx.notify(Toast::invalid(&e)),
        };
        let (board_id, card_id) = ids.get_value();

        set_loading.set(true);
        spawn_local(async move {
            let result = ctx.api().update_card(&board_id, &card_id, &args).await;
            set_loading.try_set(false);
            match result {
                Ok(_) => {
                    ctx.notify(Toast::success("Card updated", "Changes have been saved successfully."));
                    on_changed.run(());
                }
                Err(e) => ctx.report(&e, "Could not update card. Please try again."),
            }
        });
    };

    let delete = move |_: ()| {
        let (board_id, card_id) = ids.get_value();
        set_loading.set(true);
        spawn_local(async move {
            let result = ctx.api().delete_card(&board_id, &card_id).await;
            set_loading.try_set(false);
            match result {
                Ok(()) => {
                    ctx.notify(Toast::success("Card deleted", "The card has been removed."));
                    on_changed.run(());
                }
                Err(e) => ctx.report(&e, "Could not delete card."),
            }
        });
    };

    view! {
        <Modal title="Card Details" description="View and edit card information" on_close=on_close>
            <form class="dialog-form card-detail" on:submit=save>
                <label for="edit-title">"Title"</label>
                <input
                    id="edit-title"
                    type="text"
                    prop:value=move || title.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <div class="label-row">
                    <label for="edit-description">"Description"</label>
                    <button type="button" class="link-btn" on:click=move |_| set_preview.update(|p| *p = !*p)>
                        {move || if preview.get() { "Edit" } else { "Preview" }}
                    </button>
                </div>
                {move || if preview.get() {
                    view! {
                        <div class="markdown-preview" inner_html=move || render_markdown(&description.get())></div>
                    }.into_any()
                } else {
                    view! {
                        <textarea
                            id="edit-description"
                            rows="4"
                            prop:value=move || description.get()
                            prop:disabled=move || loading.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    }.into_any()
                }}

                <div class="field-grid">
                    <div>
                        <label>"Priority"</label>
                        <PrioritySelector current=priority on_change=move |p| set_priority.set(p) disabled=loading />
                    </div>
                    <div>
                        <label for="edit-duedate">"Due Date"</label>
                        <input
                            id="edit-duedate"
                            type="date"
                            prop:value=move || due_date.get()
                            prop:disabled=move || loading.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <label for="edit-labels">"Labels (comma-separated)"</label>
                <input
                    id="edit-labels"
                    type="text"
                    placeholder="bug, feature, urgent"
                    prop:value=move || labels.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_labels.set(event_target_value(&ev))
                />

                {(!assignees.is_empty()).then(|| view! {
                    <label>"Assignees"</label>
                    <div class="badge-row">
                        {assignees.iter().map(|a| view! { <span class="badge secondary">{a.name.clone()}</span> }).collect_view()}
                    </div>
                })}

                <div class="dialog-footer split">
                    <DeleteConfirmButton
                        button_class="btn-destructive"
                        label="Delete Card"
                        prompt="Delete this card?"
                        disabled=loading
                        on_confirm=delete
                    />
                    <div class="dialog-actions">
                        <button type="button" class="btn-outline" disabled=move || loading.get() on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || loading.get()>
                            {move || if loading.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </div>
            </form>
        </Modal>
    }
}
