//! Notifications
//!
//! Transient toasts, the single channel through which failures reach the user.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, title: "Error".to_string(), description: description.into() }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Local form check failed; nothing was sent
    pub fn invalid(err: &ValidationError) -> Self {
        Self { kind: ToastKind::Error, title: err.title().to_string(), description: err.to_string() }
    }
}

/// Anything that can surface a toast
pub trait Notify {
    fn notify(&self, toast: Toast);
}

/// Reactive toast queue rendered by `ToastHost`
#[derive(Clone, Copy)]
pub struct Toaster {
    pub toasts: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|list| list.retain(|(tid, _)| *tid != id));
    }
}

impl Notify for Toaster {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => log::warn!("toast: {} - {}", toast.title, toast.description),
            ToastKind::Success => log::info!("toast: {} - {}", toast.title, toast.description),
        }
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push((id, toast)));

        let toaster = *self;
        // Dismiss after the configured delay
        spawn_local(async move {
            TimeoutFuture::new(toaster.duration_ms).await;
            toaster.dismiss(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_toast_uses_validation_text() {
        let toast = Toast::invalid(&ValidationError::PasswordMismatch);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Passwords do not match");
    }

    #[test]
    fn test_dismiss_after_disposal_is_a_noop() {
        let owner = Owner::new();
        let toaster = owner.with(|| Toaster::new(4000));
        toaster.toasts.update(|list| list.push((0, Toast::error("boom"))));
        toaster.dismiss(0);
        assert!(toaster.toasts.get_untracked().is_empty());

        // A timer or request can finish after its view is gone
        owner.cleanup();
        toaster.dismiss(0);
        assert!(toaster.toasts.try_get_untracked().is_none());
    }

    #[test]
    fn test_titled_keeps_kind_and_description() {
        let toast = Toast::error("Invalid credentials").titled("Login failed");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Login failed");
        assert_eq!(toast.description, "Invalid credentials");
    }
}
