use crate::Route;
use crate::hooks::{use_auth, use_toaster};
use dioxus::prelude::*;

// Registration is two backend calls (user, then wallet); a wallet-creation
// failure surfaces here as a plain error toast.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    rsx! {
        div { id: "register-page", class: "page auth-card",
            h1 { "Create an account" }
            form {
                label { r#for: "register-name", "Name" }
                input {
                    r#type: "text",
                    id: "register-name",
                    value: "{name}",
                    oninput: move |event| name.set(event.value()),
                }
                label { r#for: "register-email", "Email" }
                input {
                    r#type: "email",
                    id: "register-email",
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
                label { r#for: "register-password", "Password" }
                input {
                    r#type: "password",
                    id: "register-password",
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                }
                button {
                    id: "submit",
                    r#type: "submit",
                    disabled: is_loading(),
                    onclick: move |_| {
                        let auth = auth.clone();
                        let name = name();
                        let email = email();
                        let password = password();
                        async move {
                            if *is_loading.read() {
                                return;
                            }
                            is_loading.set(true);
                            match auth.register(&name, &email, &password).await {
                                Ok(user) => {
                                    log::info!("registered {}", user.email);
                                    toaster.success("Account created");
                                    navigator().push(Route::Dashboard {});
                                }
                                Err(e) => toaster.error(e.to_string()),
                            }
                            is_loading.set(false);
                        }
                    },
                    "Register"
                }
            }
            p { class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
