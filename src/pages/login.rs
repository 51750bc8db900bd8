//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::LoginArgs;
use crate::context::{AppContext, Page};
use crate::forms;
use crate::notify::Toast;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() { return; }
        let checked = forms::required("Email", &email.get_untracked())
            .and_then(|e| forms::required("Password", &password.get_untracked()).map(|p| (e, p)));
        let (email_value, password_value) = match checked {
            Ok(values) => values,
            Err(e) => return ctx.notify(Toast::invalid(&e)),
        };

        set_loading.set(true);
        spawn_local(async move {
            let client = ctx.api();
            let args = LoginArgs { email: &email_value, password: &password_value };
            let result = client.login(&args).await;
            set_loading.try_set(false);
            match result {
                Ok(session) => {
                    log::info!("signed in as {}", session.user.email);
                    ctx.sign_in(session);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    ctx.notify(Toast::error(e.user_message()).titled("Login failed"));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Sign in to TaskFlow"</h1>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        prop:disabled=move || loading.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        prop:disabled=move || loading.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Register);
                    }>"Register"</a>
                </p>
            </form>
        </div>
    }
}
