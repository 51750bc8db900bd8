//! TaskFlow Frontend App
//!
//! Root component: provides context and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ToastHost;
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::notify::Toaster;
use crate::pages::{BoardView, Dashboard, Login, Register};
use crate::session;
use crate::store::{store_reset, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let restored = session::load();
    let initial_page = if restored.is_some() { Page::Dashboard } else { Page::Login };
    let (page, set_page) = signal(initial_page);
    let (current_session, set_session) = signal(restored);
    let toaster = Toaster::new(config.toast_duration_ms);

    // Provide context to all children
    let ctx = AppContext::new((page, set_page), (current_session, set_session), config, toaster);
    provide_context(ctx);
    let store = Store::new(AppState::default());
    provide_context(store);

    // Forget the previous user's data on sign-out
    Effect::new(move |_| {
        if current_session.get().is_none() {
            store_reset(&store);
        }
    });

    view! {
        <div class="app-layout">
            {move || {
                let signed_in = current_session.with(Option::is_some);
                match page.get() {
                    Page::Register => view! { <Register /> }.into_any(),
                    Page::Dashboard if signed_in => view! { <Dashboard /> }.into_any(),
                    Page::Board(board_id) if signed_in => view! { <BoardView board_id=board_id /> }.into_any(),
                    // Signed-out users only ever see the auth pages
                    _ => view! { <Login /> }.into_any(),
                }
            }}
            <ToastHost toaster=toaster />
        </div>
    }
}
