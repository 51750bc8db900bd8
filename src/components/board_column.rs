//! Board Column Component
//!
//! One list: header with inline rename and delete, its cards in position
//! order, and an "Add Card" dialog. The card area is a drop target that
//! appends to the end of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::api::UpdateListArgs;
use crate::components::{CardTile, CreateCardDialog, DeleteConfirmButton};
use crate::context::AppContext;
use crate::models::{Card, List};
use crate::notify::Toast;

#[component]
pub fn BoardColumn(
    board_id: String,
    list: List,
    /// This list's cards, already sorted by position
    #[prop(into)] cards: Signal<Vec<Card>>,
    dnd: DndSignals,
    moving_id: ReadSignal<Option<String>>,
    #[prop(into)] on_open_card: Callback<Card>,
    #[prop(into)] on_card_created: Callback<Card>,
    #[prop(into)] on_list_changed: Callback<List>,
    #[prop(into)] on_list_deleted: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let list_id = list.id.clone();
    let ids = StoredValue::new((board_id.clone(), list_id.clone()));
    let (name_value, set_name_value) = signal(list.title.clone());
    let (show_create, set_show_create) = signal(false);

    // Save name (only when it actually changed)
    let original_title = StoredValue::new(list.title.clone());
    let save_name = move || {
        let name = name_value.get_untracked().trim().to_string();
        if name.is_empty() || name == original_title.get_value() {
            set_name_value.set(original_title.get_value());
            return;
        }
        let (board_id, list_id) = ids.get_value();
        spawn_local(async move {
            let args = UpdateListArgs { title: Some(&name), ..Default::default() };
            match ctx.api().update_list(&board_id, &list_id, &args).await {
                Ok(updated) => {
                    original_title.try_update_value(|t| *t = updated.title.clone());
                    on_list_changed.run(updated);
                }
                Err(e) => {
                    if let Some(title) = original_title.try_get_value() {
                        set_name_value.try_set(title);
                    }
                    ctx.report(&e, "Could not rename list.");
                }
            }
        });
    };

    let delete_list = move |_: ()| {
        let (board_id, list_id) = ids.get_value();
        spawn_local(async move {
            match ctx.api().delete_list(&board_id, &list_id).await {
                Ok(()) => {
                    ctx.notify(Toast::success("List deleted", "The list and its cards have been removed."));
                    on_list_deleted.run(list_id);
                }
                Err(e) => ctx.report(&e, "Could not delete list."),
            }
        });
    };

    // DnD: the card area accepts drops (append)
    let on_mouseover = make_on_list_mouseover(dnd, list_id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);
    let area_class = {
        let list_id = list_id.clone();
        move || {
            let mut c = String::from("list-cards");
            if dnd.drop_target_read.with(|t| matches!(t, Some(DropTarget::List(tid)) if *tid == list_id)) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    view! {
        <div class="board-column">
            <div class="list-header">
                <input
                    type="text"
                    class="list-title-input"
                    prop:value=move || name_value.get()
                    on:input=move |ev| set_name_value.set(event_target_value(&ev))
                    on:blur=move |_| save_name()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            save_name();
                        }
                    }
                />
                <DeleteConfirmButton button_class="list-delete-btn" prompt="Delete list?" on_confirm=delete_list />
                <p class="list-count">{move || format!("{} cards", cards.with(Vec::len))}</p>
            </div>

            <div class=area_class on:mouseover=on_mouseover on:mouseleave=on_mouseleave>
                <For
                    each=move || cards.get()
                    // Every field a tile renders, so edits re-render it
                    key=|card: &Card| (
                        card.id.clone(),
                        card.title.clone(),
                        card.description.clone(),
                        card.priority,
                        card.due_date.clone(),
                        card.labels.clone(),
                        card.position,
                    )
                    children=move |card: Card| view! {
                        <CardTile card=card dnd=dnd moving_id=moving_id on_open=on_open_card />
                    }
                />
                <Show when=move || cards.with(Vec::is_empty)>
                    <div class="list-empty">"Drop cards here or add a new one"</div>
                </Show>
            </div>

            <div class="list-footer">
                <button class="btn-ghost" on:click=move |_| set_show_create.set(true)>"+ Add Card"</button>
            </div>

            <Show when=move || show_create.get()>
                <CreateCardDialog
                    board_id=board_id.clone()
                    list_id=list_id.clone()
                    on_close=move |_: ()| set_show_create.set(false)
                    on_created=move |card: Card| {
                        set_show_create.set(false);
                        on_card_created.run(card);
                    }
                />
            </Show>
        </div>
    }
}
