//! Dashboard Page
//!
//! The signed-in user's boards: open, create, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CreateBoardDialog, DeleteConfirmButton};
use crate::context::{AppContext, Page};
use crate::models::Board;
use crate::notify::Toast;
use crate::store::{store_add_board, store_remove_board, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(!store.boards_loaded().get_untracked());
    let (show_create, set_show_create) = signal(false);

    // Fetch once per session; later visits reuse the store
    if !store.boards_loaded().get_untracked() {
        spawn_local(async move {
            match ctx.api().list_boards().await {
                Ok(boards) => {
                    log::info!("loaded {} boards", boards.len());
                    *store.boards().write() = boards;
                    store.boards_loaded().set(true);
                }
                Err(e) => ctx.report(&e, "Could not fetch your boards. Please try again."),
            }
            set_loading.try_set(false);
        });
    }

    let user_name = move || ctx.session.with(|s| s.as_ref().map(|s| s.user.name.clone()).unwrap_or_default());
    let user_id = move || ctx.session.with_untracked(|s| s.as_ref().map(|s| s.user.id.clone()));

    let delete_board = move |board_id: String| {
        spawn_local(async move {
            match ctx.api().delete_board(&board_id).await {
                Ok(()) => {
                    store_remove_board(&store, &board_id);
                    ctx.notify(Toast::success("Board deleted", "The board has been removed."));
                }
                Err(e) => ctx.report(&e, "Could not delete board."),
            }
        });
    };

    let board_tile = move |board: Board| {
        let open_id = board.id.clone();
        let delete_id = StoredValue::new(board.id.clone());
        let is_owner = user_id().as_deref() == Some(board.owner.id.as_str());
        let member_count = board.members.len();
        view! {
            <div class="board-tile" on:click=move |_| ctx.navigate(Page::Board(open_id.clone()))>
                <div class="board-tile-header">
                    <h3>{board.title.clone()}</h3>
                    <span class="privacy" title=if board.is_private { "Private" } else { "Public" }>
                        {if board.is_private { "🔒" } else { "🌐" }}
                    </span>
                </div>
                {board.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                    <p class="board-tile-description">{d}</p>
                })}
                <div class="board-tile-footer">
                    <span class="muted">"Owner: " {board.owner.name.clone()}</span>
                    <span class="muted">{format!("{} members", member_count)}</span>
                    {is_owner.then(|| view! {
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            prompt="Delete board?"
                            on_confirm=move |_: ()| delete_board(delete_id.get_value())
                        />
                    })}
                </div>
            </div>
        }
    };

    view! {
        <div class="dashboard">
            <header class="top-bar">
                <h1>"TaskFlow"</h1>
                <div class="top-bar-actions">
                    <span class="user-name">{user_name}</span>
                    <button class="btn-outline" on:click=move |_| ctx.sign_out()>"Logout"</button>
                </div>
            </header>

            <div class="dashboard-header">
                <h2>"My Boards"</h2>
                <button class="btn-primary" on:click=move |_| set_show_create.set(true)>"Create Board"</button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner" /> }
            >
                <Show
                    when=move || !store.boards().with(Vec::is_empty)
                    fallback=|| view! { <p class="muted empty">"You don't have any boards yet. Create one to get started."</p> }
                >
                    <div class="board-grid">
                        <For
                            each=move || store.boards().get()
                            key=|b: &Board| (b.id.clone(), b.title.clone(), b.description.clone(), b.is_private, b.members.len())
                            children=board_tile
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || show_create.get()>
                <CreateBoardDialog
                    on_close=move |_: ()| set_show_create.set(false)
                    on_created=move |board: Board| {
                        store_add_board(&store, board);
                        set_show_create.set(false);
                    }
                />
            </Show>
        </div>
    }
}
