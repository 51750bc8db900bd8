//! Board View Page
//!
//! A single board: its lists side by side, cards dragged between them,
//! dialogs for creating and editing, and the recommendations sidebar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::api::UpdateBoardArgs;
use crate::components::{BoardColumn, CardDetailDialog, CreateListDialog, InviteMemberForm, RecommendationsSidebar};
use crate::context::{AppContext, Page};
use crate::error::ApiError;
use crate::models::{BoardSnapshot, Card, List};
use crate::moves::{execute_move, resolve_move, MoveOutcome};
use crate::store::{store_update_board, use_app_store};

#[component]
pub fn BoardView(board_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let board_id = StoredValue::new(board_id);

    // State
    let snapshot = RwSignal::new(None::<BoardSnapshot>);
    let (moving_id, set_moving_id) = signal(None::<String>);
    let (selected_card, set_selected_card) = signal(None::<Card>);
    let (show_create_list, set_show_create_list) = signal(false);
    let (show_recommendations, set_show_recommendations) = signal(false);
    let (editing_title, set_editing_title) = signal(false);
    let (title_value, set_title_value) = signal(String::new());

    // Load (or reload) everything on the board. A failed first load leaves
    // nothing to show, so it returns to the dashboard.
    let load = move || {
        let id = board_id.get_value();
        spawn_local(async move {
            match ctx.api().load_board(&id).await {
                Ok(fresh) => {
                    log::debug!("board {}: {} lists, {} cards", id, fresh.lists.len(), fresh.cards.len());
                    snapshot.try_set(Some(fresh));
                }
                Err(e) => {
                    ctx.report(&e, "Could not load board data.");
                    let first_load = snapshot.try_with_untracked(Option::is_none).unwrap_or(false);
                    if first_load && !matches!(e, ApiError::Unauthorized) {
                        ctx.navigate(Page::Dashboard);
                    }
                }
            }
        });
    };
    load();

    // DnD
    let dnd = create_dnd_signals();
    let listeners = bind_global_mouseup(dnd, move |dragged_id, target| {
        let Some(mut current) = snapshot.get_untracked() else { return };
        let Some(request) = resolve_move(&current, &dragged_id, target.as_ref()) else { return };

        // One move at a time
        set_moving_id.set(Some(request.card_id.clone()));
        set_locked(&dnd, true);
        spawn_local(async move {
            let outcome = execute_move(&ctx.api(), &ctx.toaster, &mut current, &request).await;
            if outcome == MoveOutcome::Moved {
                snapshot.try_set(Some(current));
            }
            set_moving_id.try_set(None);
            set_locked(&dnd, false);
        });
    });
    // Document listeners live exactly as long as this view
    let listeners = StoredValue::new_local(Some(listeners));
    on_cleanup(move || {
        listeners.try_update_value(Option::take);
    });

    // Board title editing
    let start_edit_title = move |_: web_sys::MouseEvent| {
        let current = snapshot.with_untracked(|s| s.as_ref().map(|s| s.board.title.clone()));
        if let Some(title) = current {
            set_title_value.set(title);
            set_editing_title.set(true);
        }
    };
    let save_title = move || {
        // Enter and the following blur both land here
        if !editing_title.get_untracked() {
            return;
        }
        set_editing_title.set(false);
        let title = title_value.get_untracked().trim().to_string();
        let unchanged = snapshot.with_untracked(|s| s.as_ref().map_or(true, |s| s.board.title == title));
        if title.is_empty() || unchanged {
            return;
        }
        let id = board_id.get_value();
        spawn_local(async move {
            let args = UpdateBoardArgs { title: Some(&title), ..Default::default() };
            match ctx.api().update_board(&id, &args).await {
                Ok(updated) => {
                    snapshot.try_update(|s| {
                        if let Some(s) = s {
                            s.board = updated.clone();
                        }
                    });
                    store_update_board(&store, updated);
                }
                Err(e) => ctx.report(&e, "Could not update board."),
            }
        });
    };

    let board_title = move || snapshot.with(|s| s.as_ref().map(|s| s.board.title.clone()).unwrap_or_default());
    let board_description = move || snapshot.with(|s| s.as_ref().and_then(|s| s.board.description.clone()));
    let lists = Signal::derive(move || {
        snapshot.with(|s| {
            let mut lists = s.as_ref().map(|s| s.lists.clone()).unwrap_or_default();
            lists.sort_by_key(|l| l.position);
            lists
        })
    });

    view! {
        <div class="board-page">
            <header class="top-bar board-header">
                <button class="btn-ghost" on:click=move |_| ctx.navigate(Page::Dashboard)>"← Back"</button>
                {move || if editing_title.get() {
                    view! {
                        <input
                            class="board-title-input"
                            prop:value=move || title_value.get()
                            on:input=move |ev| set_title_value.set(event_target_value(&ev))
                            on:blur=move |_| save_title()
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                match ev.key().as_str() {
                                    "Enter" => save_title(),
                                    "Escape" => set_editing_title.set(false),
                                    _ => {}
                                }
                            }
                        />
                    }.into_any()
                } else {
                    view! {
                        <h1 class="board-title" title="Click to rename" on:click=start_edit_title>{board_title}</h1>
                    }.into_any()
                }}
                <div class="top-bar-actions">
                    <InviteMemberForm board_id=board_id.get_value() />
                    <button
                        class="btn-outline"
                        class:active=move || show_recommendations.get()
                        on:click=move |_| set_show_recommendations.update(|v| *v = !*v)
                    >
                        "✨ AI Recommendations"
                    </button>
                </div>
            </header>
            {move || board_description().filter(|d| !d.is_empty()).map(|d| view! {
                <p class="board-description">{d}</p>
            })}

            <div class="board-body">
                <Show
                    when=move || snapshot.with(Option::is_some)
                    fallback=|| view! { <div class="spinner" /> }
                >
                    <div class="board-lists">
                        <For
                            each=move || lists.get()
                            key=|l: &List| (l.id.clone(), l.title.clone(), l.position)
                            children=move |list: List| {
                                let list_id = list.id.clone();
                                let cards = Signal::derive(move || {
                                    snapshot.with(|s| s.as_ref().map(|s| s.cards_in(&list_id)).unwrap_or_default())
                                });
                                view! {
                                    <BoardColumn
                                        board_id=board_id.get_value()
                                        list=list
                                        cards=cards
                                        dnd=dnd
                                        moving_id=moving_id
                                        on_open_card=move |card: Card| set_selected_card.set(Some(card))
                                        on_card_created=move |card: Card| {
                                            snapshot.update(|s| {
                                                if let Some(s) = s {
                                                    s.add_card(card);
                                                }
                                            });
                                        }
                                        on_list_changed=move |updated: List| {
                                            snapshot.update(|s| {
                                                if let Some(s) = s {
                                                    s.rename_list(updated);
                                                }
                                            });
                                        }
                                        on_list_deleted=move |list_id: String| {
                                            snapshot.update(|s| {
                                                if let Some(s) = s {
                                                    s.remove_list(&list_id);
                                                }
                                            });
                                        }
                                    />
                                }
                            }
                        />
                        <button class="add-list-btn" on:click=move |_| set_show_create_list.set(true)>
                            "+ Add List"
                        </button>
                    </div>
                </Show>

                <Show when=move || show_recommendations.get()>
                    <RecommendationsSidebar
                        board_id=board_id.get_value()
                        lists=lists
                        on_close=move |_: ()| set_show_recommendations.set(false)
                    />
                </Show>
            </div>

            <Show when=move || show_create_list.get()>
                <CreateListDialog
                    board_id=board_id.get_value()
                    on_close=move |_: ()| set_show_create_list.set(false)
                    on_created=move |list: List| {
                        snapshot.update(|s| {
                            if let Some(s) = s {
                                s.add_list(list);
                            }
                        });
                        set_show_create_list.set(false);
                    }
                />
            </Show>

            {move || selected_card.get().map(|card| view! {
                <CardDetailDialog
                    board_id=board_id.get_value()
                    card=card
                    on_close=move |_: ()| set_selected_card.set(None)
                    on_changed=move |_: ()| {
                        set_selected_card.set(None);
                        load();
                    }
                />
            })}
        </div>
    }
}
