//! Create Board Dialog
//!
//! Title, optional description and privacy switch; one POST on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CreateBoardArgs;
use crate::components::Modal;
use crate::context::AppContext;
use crate::forms;
use crate::models::Board;
use crate::notify::Toast;

#[component]
pub fn CreateBoardDialog(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<Board>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (is_private, set_is_private) = signal(false);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let title_value = match forms::required("Board title", &title.get_untracked()) {
            Ok(t) => t,
            Err(e) => return ctx.notify(Toast::invalid(&e)),
        };
        let description_value = description.get_untracked();
        let private = is_private.get_untracked();

        set_loading.set(true);
        spawn_local(async move {
            let args = CreateBoardArgs {
                title: &title_value,
                description: forms::optional(&description_value),
                is_private: private,
            };
            let result = ctx.api().create_board(&args).await;
            set_loading.try_set(false);
            match result {
                Ok(board) => {
                    ctx.notify(Toast::success("Board created", format!("{} has been created successfully.", board.title)));
                    set_title.try_set(String::new());
                    set_description.try_set(String::new());
                    set_is_private.try_set(false);
                    on_created.run(board);
                }
                Err(e) => ctx.report(&e, "Could not create board. Please try again."),
            }
        });
    };

    view! {
        <Modal
            title="Create New Board"
            description="Add a new board to organize your tasks and projects."
            on_close=on_close
        >
            <form class="dialog-form" on:submit=submit>
                <label for="board-title">"Board Title"</label>
                <input
                    id="board-title"
                    type="text"
                    placeholder="e.g., Marketing Campaign"
                    required
                    prop:value=move || title.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label for="board-description">"Description (Optional)"</label>
                <textarea
                    id="board-description"
                    placeholder="What is this board about?"
                    prop:value=move || description.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />

                <label class="switch-row" for="board-private">
                    <input
                        id="board-private"
                        type="checkbox"
                        prop:checked=move || is_private.get()
                        prop:disabled=move || loading.get()
                        on:change=move |ev| set_is_private.set(event_target_checked(&ev))
                    />
                    "Private Board"
                </label>

                <div class="dialog-footer">
                    <button type="button" class="btn-outline" disabled=move || loading.get() on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating..." } else { "Create Board" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
