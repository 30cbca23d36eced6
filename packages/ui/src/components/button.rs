use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Submit-style button. While `loading` it shows a spinner and is disabled.
#[component]
pub fn Button(
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] loading: bool,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "btn {class}",
            r#type: r#type,
            disabled: loading,
            "aria-busy": loading,
            if loading {
                Icon { icon: FaSpinner, class: "btn-spinner", width: 14, height: 14 }
            }
            {children}
        }
    }
}
