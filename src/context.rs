//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Session;
use crate::notify::{Notify, Toast, Toaster};
use crate::session;

/// Which screen is showing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Board(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Signed-in session - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in session - write
    set_session: WriteSignal<Option<Session>>,
    config: StoredValue<AppConfig>,
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        config: AppConfig,
        toaster: Toaster,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            session: session.0,
            set_session: session.1,
            config: StoredValue::new(config),
            toaster,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// API client carrying the current bearer token
    pub fn api(&self) -> ApiClient {
        let token = self.session.get_untracked().map(|s| s.token);
        ApiClient::new(self.config.with_value(|c| c.api_base_url.clone()), token)
    }

    pub fn sign_in(&self, session: Session) {
        session::save(&session);
        self.set_session.set(Some(session));
        self.navigate(Page::Dashboard);
    }

    pub fn sign_out(&self) {
        session::clear();
        self.set_session.set(None);
        self.navigate(Page::Login);
    }

    pub fn notify(&self, toast: Toast) {
        self.toaster.notify(toast);
    }

    /// Surface a failed call. An expired session sends the user back to login.
    pub fn report(&self, err: &ApiError, message: &str) {
        log::error!("{}: {}", message, err);
        if matches!(err, ApiError::Unauthorized) {
            self.notify(Toast::error("Your session has expired. Please sign in again."));
            self.sign_out();
        } else {
            self.notify(Toast::error(message));
        }
    }
}
