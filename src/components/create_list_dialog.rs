//! Create List Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CreateListArgs;
use crate::components::Modal;
use crate::context::AppContext;
use crate::forms;
use crate::models::List;
use crate::notify::Toast;

#[component]
pub fn CreateListDialog(
    board_id: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<List>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board_id = StoredValue::new(board_id);

    let (title, set_title) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let title_value = match forms::required("List title", &title.get_untracked()) {
            Ok(t) => t,
            Err(e) => return ctx.notify(Toast::invalid(&e)),
        };
        let board_id = board_id.get_value();

        set_loading.set(true);
        spawn_local(async move {
            let result = ctx.api().create_list(&board_id, &CreateListArgs { title: &title_value }).await;
            set_loading.try_set(false);
            match result {
                Ok(list) => {
                    ctx.notify(Toast::success("List created", format!("{} has been created successfully.", list.title)));
                    set_title.try_set(String::new());
                    on_created.run(list);
                }
                Err(e) => ctx.report(&e, "Could not create list. Please try again."),
            }
        });
    };

    view! {
        <Modal title="Create New List" description="Add a new list to organize your cards." on_close=on_close>
            <form class="dialog-form" on:submit=submit>
                <label for="list-title">"List Title"</label>
                <input
                    id="list-title"
                    type="text"
                    placeholder="e.g., To Do, In Progress, Done"
                    required
                    prop:value=move || title.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <div class="dialog-footer">
                    <button type="button" class="btn-outline" disabled=move || loading.get() on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating..." } else { "Create List" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
