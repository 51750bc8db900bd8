//! Invite Member Form
//!
//! Inline email form in the board header.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::forms;
use crate::notify::Toast;

#[component]
pub fn InviteMemberForm(board_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board_id = StoredValue::new(board_id);

    let (open, set_open) = signal(false);
    let (email, set_email) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_invite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let address = match forms::required("Email", &email.get_untracked()) {
            Ok(a) => a,
            Err(e) => return ctx.notify(Toast::invalid(&e)),
        };
        let board_id = board_id.get_value();

        set_loading.set(true);
        spawn_local(async move {
            let result = ctx.api().invite_member(&board_id, &address).await;
            set_loading.try_set(false);
            match result {
                Ok(()) => {
                    ctx.notify(Toast::success("Invitation sent", format!("{} has been invited to this board.", address)));
                    set_email.try_set(String::new());
                    set_open.try_set(false);
                }
                Err(e) => ctx.report(&e, "Could not invite member."),
            }
        });
    };

    view! {
        {move || if open.get() {
            view! {
                <form class="invite-form" on:submit=on_invite>
                    <input
                        type="email"
                        placeholder="teammate@example.com"
                        required
                        prop:value=move || email.get()
                        prop:disabled=move || loading.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || loading.get()>"Invite"</button>
                    <button type="button" on:click=move |_| set_open.set(false)>"×"</button>
                </form>
            }.into_any()
        } else {
            view! {
                <button class="btn-outline" on:click=move |_| set_open.set(true)>"Invite"</button>
            }.into_any()
        }}
    }
}
