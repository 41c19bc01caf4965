use crate::Route;
use crate::hooks::{use_auth, use_toaster};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    rsx! {
        div { id: "login-page", class: "page auth-card",
            h1 { "Log in" }
            form {
                label { r#for: "login-email", "Email" }
                input {
                    r#type: "email",
                    id: "login-email",
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
                label { r#for: "login-password", "Password" }
                input {
                    r#type: "password",
                    id: "login-password",
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                }
                button {
                    id: "submit",
                    r#type: "submit",
                    disabled: is_loading(),
                    onclick: move |_| {
                        let auth = auth.clone();
                        let email = email();
                        let password = password();
                        async move {
                            if *is_loading.read() {
                                return;
                            }
                            is_loading.set(true);
                            match auth.login(&email, &password).await {
                                Ok(user) => {
                                    log::info!("logged in as {}", user.email);
                                    navigator().push(Route::Dashboard {});
                                }
                                Err(e) => toaster.error(e.to_string()),
                            }
                            is_loading.set(false);
                        }
                    },
                    "Log in"
                }
            }
            p { class: "muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
