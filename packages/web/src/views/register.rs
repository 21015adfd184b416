//! Registration page with email/password form and role selection.

use api::{ApiClient, RegisterRequest};
use dioxus::prelude::*;
use store::Role;
use ui::{sign_in, use_auth, TopBar};

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::Nonprofit);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if !auth().loading && auth().is_authenticated() {
        nav.replace("/dashboard");
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let payload = RegisterRequest {
                name: n,
                email: e,
                password: p,
                role: role(),
            };
            match ApiClient::default().register(&payload).await {
                Ok(response) => {
                    sign_in(auth, response.user, response.token);
                    nav.push("/dashboard");
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        TopBar {}

        main {
            class: "page page-auth",
            h1 { "Create account" }
            p { class: "page-auth-subtitle", "Join TRIDENT as a nonprofit or researcher" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", role: "alert", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                select {
                    value: role().as_str(),
                    onchange: move |evt: FormEvent| {
                        let selected = match evt.value().as_str() {
                            "researcher" => Role::Researcher,
                            _ => Role::Nonprofit,
                        };
                        role.set(selected);
                    },
                    option { value: "nonprofit", "I'm a nonprofit" }
                    option { value: "researcher", "I'm a researcher" }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: "/login", "Log in" }
            }
        }
    }
}
