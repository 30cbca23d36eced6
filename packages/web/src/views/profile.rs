use dioxus::prelude::*;

/// Destination after a successful sign-up.
#[component]
pub fn Profile() -> Element {
    rsx! {
        div {
            class: "page page--centered",
            h1 { class: "page-title", "Profile" }
            p { "Your account is ready and you are signed in." }
        }
    }
}
