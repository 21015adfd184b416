//! Login page with email/password form.

use api::ApiClient;
use dioxus::prelude::*;
use ui::{sign_in, use_auth, TopBar};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard.
    if !auth().loading && auth().is_authenticated() {
        nav.replace("/dashboard");
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match ApiClient::default().login(&e, &p).await {
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
            h1 { "Welcome back" }
            p { class: "page-auth-subtitle", "Log in to your TRIDENT account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", role: "alert", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: "/register", "Sign up" }
            }
        }
    }
}
