//! The sign-up form: four validated fields, a busy-aware submit button and a
//! link to sign-in. Submission runs [`SignUpFlow`] against the server
//! functions, reporting through toasts.

use dioxus::prelude::*;
use forms::{Destination, Field, FormState, FormStatus, Navigator, SignUpConfig, SignUpFlow};

use crate::components::{Button, Input};
use crate::services::{ServerRegistration, ServerSession};
use crate::toast::{use_toasts, ToastNotifier};

const SIGN_UP_CSS: Asset = asset!("/assets/styling/sign_up.css");

/// Routing is owned by the app crate; the form only asks for a destination.
#[derive(Clone, Copy)]
struct HandlerNavigator(EventHandler<Destination>);

impl Navigator for HandlerNavigator {
    fn navigate(&self, to: Destination) {
        self.0.call(to);
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Email => "Email",
        Field::Username => "Username",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm Password",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Password | Field::ConfirmPassword => "password",
        Field::Email | Field::Username => "text",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Email => "Enter your email here",
        Field::Username => "Enter your username here",
        Field::Password | Field::ConfirmPassword => "*******",
    }
}

fn autocomplete(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Username => "username",
        Field::Password | Field::ConfirmPassword => "new-password",
    }
}

fn submit_label(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "Sign Up",
        FormStatus::Registering => "Creating account...",
        FormStatus::SigningIn => "Signing in...",
        FormStatus::Navigated => "Redirecting...",
    }
}

#[component]
pub fn SignUpForm(
    on_navigate: EventHandler<Destination>,
    #[props(default)] config: SignUpConfig,
) -> Element {
    let mut form = use_signal(FormState::new);
    let toasts = use_toasts();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let input = match form.write().begin_submit() {
            Ok(input) => input,
            Err(blocked) => {
                tracing::debug!("Sign-up submit blocked: {}", blocked);
                return;
            }
        };

        let config = config.clone();
        spawn(async move {
            let flow = SignUpFlow::new(
                ServerRegistration,
                ServerSession,
                ToastNotifier::new(toasts),
                HandlerNavigator(on_navigate),
            )
            .with_config(config);

            let outcome = flow
                .submit(&input, |status| form.write().set_status(status))
                .await;
            form.write().finish_submit(&outcome);
        });
    };

    let fields = Field::ALL.map(|field| (field, field.name()));
    let button_label = submit_label(form.read().status());
    let submitting = form.read().is_submitting();

    rsx! {
        document::Stylesheet { href: SIGN_UP_CSS }

        div {
            class: "sign-up-card",

            h1 {
                class: "sign-up-title",
                "Sign Up"
            }

            form {
                class: "sign-up-form",
                onsubmit: handle_submit,

                div {
                    class: "sign-up-fields",
                    for (field, name) in fields {
                        Input {
                            key: "{name}",
                            id: format!("sign-up-{}", name),
                            label: label(field).to_string(),
                            r#type: input_type(field).to_string(),
                            placeholder: placeholder(field).to_string(),
                            autocomplete: autocomplete(field).to_string(),
                            value: form.read().value(field).to_string(),
                            error: form.read().error(field).unwrap_or_default().to_string(),
                            oninput: move |evt: FormEvent| form.write().set_value(field, evt.value()),
                        }
                    }
                }

                Button {
                    class: "sign-up-submit",
                    r#type: "submit",
                    loading: submitting,
                    "{button_label}"
                }
            }

            div {
                class: "sign-up-footer",
                "Already have an account ?"
                a {
                    class: "sign-up-link",
                    href: Destination::SignIn.path(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(Destination::SignIn);
                    },
                    "Sign in"
                }
            }
        }
    }
}
