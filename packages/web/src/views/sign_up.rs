//! Sign-up page view.

use dioxus::prelude::*;
use forms::{Destination, SignUpConfig};
use ui::SignUpForm;

use crate::Route;

/// Sign-up page component.
#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();
    let config = use_context::<SignUpConfig>();

    let on_navigate = move |to: Destination| match to {
        Destination::Profile => {
            nav.push(Route::Profile {});
        }
        Destination::SignIn => {
            nav.push(Route::SignIn {});
        }
    };

    rsx! {
        div {
            class: "page",
            SignUpForm { config, on_navigate }
        }
    }
}
