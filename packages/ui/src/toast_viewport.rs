use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation};
use crate::toast::{use_toasts, Toast, ToastLevel, Toasts};
use crate::Icon;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Provides the toast store to its children and renders the toast stack.
/// `duration_secs` of 0 keeps toasts until clicked.
#[component]
pub fn ToastProvider(#[props(default = 4)] duration_secs: u32, children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        ToastViewport { duration_secs }
    }
}

#[component]
fn ToastViewport(duration_secs: u32) -> Element {
    let toasts = use_toasts();
    let entries = toasts.read().entries().to_vec();

    rsx! {
        div {
            class: "toast-viewport",
            role: "status",
            "aria-live": "polite",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast: toast.clone(), duration_secs }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, duration_secs: u32) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_effect(move || {
        let Some(delay) = auto_dismiss_delay(duration_secs) else {
            return;
        };
        spawn(async move {
            sleep(delay).await;
            toasts.write().dismiss(id);
        });
    });

    let class = match toast.level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
    };

    rsx! {
        div {
            class: class,
            title: "Dismiss",
            onclick: move |_| {
                toasts.write().dismiss(id);
            },
            match toast.level {
                ToastLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
                ToastLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
            }
            span { "{toast.message}" }
        }
    }
}

/// How long a toast stays up on its own; `None` keeps it until clicked.
fn auto_dismiss_delay(duration_secs: u32) -> Option<Duration> {
    (duration_secs > 0).then(|| Duration::from_secs(duration_secs.into()))
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_keeps_toast() {
        assert_eq!(auto_dismiss_delay(0), None);
    }

    #[test]
    fn test_duration_in_seconds() {
        assert_eq!(auto_dismiss_delay(4), Some(Duration::from_secs(4)));
        assert_eq!(auto_dismiss_delay(1), Some(Duration::from_secs(1)));
    }
}
