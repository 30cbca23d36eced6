//! Toast notifications: a small store kept in a context signal.

use dioxus::prelude::*;
use forms::{NoticeKind, Notifier};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl From<NoticeKind> for ToastLevel {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => ToastLevel::Success,
            NoticeKind::Error => ToastLevel::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) -> u64 {
    toasts.write().push(level, message)
}

/// [`Notifier`] that shows notices as toasts.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<Toasts>,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<Toasts>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let mut toasts = self.toasts;
        push_toast(&mut toasts, kind.into(), message);
    }
}
