//! Page Context
//!
//! Per-page services provided via Leptos Context API: the API client, the
//! configuration and the toast queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Client;
use crate::config::ConsoleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Page-wide services, created once per mounted page
#[derive(Clone, Copy)]
pub struct PageContext {
    client: StoredValue<Client>,
    config: StoredValue<ConsoleConfig>,
    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u32>,
}

impl PageContext {
    pub fn new(client: Client, config: ConsoleConfig) -> Self {
        Self {
            client: StoredValue::new(client),
            config: StoredValue::new(config),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
        }
    }

    pub fn client(&self) -> Client {
        self.client.get_value()
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&ConsoleConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    fn push_toast(&self, kind: ToastKind, message: String) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id.wrapping_add(1));
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        let delay = self.with_config(|c| c.toast_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }
}

pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
