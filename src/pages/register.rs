//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RegisterArgs;
use crate::context::{AppContext, Page};
use crate::forms;
use crate::notify::Toast;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(e) = forms::validate_registration(&name_value, &email_value, &password_value, &confirm.get_untracked()) {
            return ctx.notify(Toast::invalid(&e));
        }

        set_loading.set(true);
        spawn_local(async move {
            let client = ctx.api();
            let args = RegisterArgs {
                email: email_value.trim(),
                name: name_value.trim(),
                password: &password_value,
            };
            let result = client.register(&args).await;
            set_loading.try_set(false);
            match result {
                Ok(()) => {
                    ctx.notify(Toast::success("Account created!", "You can now sign in with your new account."));
                    ctx.navigate(Page::Login);
                }
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    ctx.notify(Toast::error(e.user_message()).titled("Registration failed"));
                }
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    required
                    prop:value=move || value.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Create your account"</h1>
                {field("Name", "text", name, set_name)}
                {field("Email", "email", email, set_email)}
                {field("Password", "password", password, set_password)}
                {field("Confirm Password", "password", confirm, set_confirm)}
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Login);
                    }>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
