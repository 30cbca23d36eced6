use dioxus::prelude::*;

/// Labelled text input with an inline error line underneath.
#[component]
pub fn Input(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "off".to_string())] autocomplete: String,
    /// Validation message; empty means the field is fine.
    #[props(default = "".to_string())]
    error: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid = !error.is_empty();
    let input_class = if invalid {
        "field-input field-input--invalid"
    } else {
        "field-input"
    };

    rsx! {
        div {
            class: "field",
            label {
                r#for: "{id}",
                class: "field-label",
                "{label}"
            }
            input {
                id: "{id}",
                class: input_class,
                r#type: r#type,
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                value: "{value}",
                "aria-invalid": invalid,
                oninput: move |evt: FormEvent| oninput.call(evt),
            }
            if invalid {
                p {
                    class: "field-error",
                    "{error}"
                }
            }
        }
    }
}
