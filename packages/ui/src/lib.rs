//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastNotifier, Toasts};

mod toast_viewport;
pub use toast_viewport::ToastProvider;

mod services;
pub use services::{ServerRegistration, ServerSession};

mod sign_up;
pub use sign_up::SignUpForm;
