use dioxus::prelude::*;

use crate::Route;

/// Landing spot for the "Sign in" link. Signing in itself is handled by the
/// authentication service.
#[component]
pub fn SignIn() -> Element {
    rsx! {
        div {
            class: "page page--centered",
            h1 { class: "page-title", "Sign In" }
            p { "Sign in with the account you registered." }
            p {
                "No account yet? "
                Link { to: Route::SignUp {}, "Sign up" }
            }
        }
    }
}
