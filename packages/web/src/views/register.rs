//! Registration form view.

use dioxus::prelude::*;

use api::models::RegisterRequest;
use api::options::{BRANCHES, COLLEGES};
use api::validate::validate_form;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::SubmitState;

use crate::Route;

/// Registration page component.
#[component]
pub fn Register() -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut branch = use_signal(|| BRANCHES[0].to_string());
    let mut college = use_signal(|| COLLEGES[0].to_string());
    let mut state = use_signal(SubmitState::default);
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !state().can_submit() {
            return;
        }
        spawn(async move {
            state.set(SubmitState::Validating);

            let form = RegisterRequest {
                username: username(),
                email: email(),
                phone: phone(),
                branch: branch(),
                college: college(),
            };

            if let Some(message) = validate_form(&form) {
                state.set(SubmitState::Error(message.to_string()));
                return;
            }

            state.set(SubmitState::Submitting);
            match api::submit_registration(&form).await {
                Ok(_) => {
                    // Navigation supersedes rendering; the state stays Success.
                    state.set(SubmitState::Success);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    state.set(SubmitState::Error(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            h1 { "Register / Login" }

            form { class: "login-form", onsubmit: handle_submit,
                if let SubmitState::Error(message) = state() {
                    p { class: "error", "{message}" }
                }

                Label { html_for: "username", "Username:" }
                Input {
                    id: "username",
                    r#type: "text",
                    placeholder: "Enter your username",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                Label { html_for: "email", "Email:" }
                Input {
                    id: "email",
                    r#type: "email",
                    placeholder: "Enter your email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Label { html_for: "phone", "Phone Number:" }
                Input {
                    id: "phone",
                    r#type: "tel",
                    placeholder: "10-digit phone number",
                    required: true,
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }

                Label { html_for: "branch", "Branch:" }
                select {
                    id: "branch",
                    value: branch(),
                    onchange: move |evt| branch.set(evt.value()),
                    for b in BRANCHES {
                        option { key: "{b}", value: "{b}", "{b}" }
                    }
                }

                Label { html_for: "college", "College:" }
                select {
                    id: "college",
                    value: college(),
                    onchange: move |evt| college.set(evt.value()),
                    for c in COLLEGES {
                        option { key: "{c}", value: "{c}", "{c}" }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: state().is_submitting(),
                    if state().is_submitting() { "Saving..." } else { "Submit" }
                }
            }
        }
    }
}
