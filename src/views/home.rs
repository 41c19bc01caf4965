use crate::Route;
use crate::hooks::use_auth;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        div { id: "home-page", class: "page",
            h1 { "PeerPay" }
            p { class: "tagline", "Send money to anyone with an email address." }
            if auth.user().is_some() {
                Link { class: "button", to: Route::Dashboard {}, "Go to dashboard" }
            } else {
                div { class: "home-actions",
                    Link { class: "button", to: Route::Login {}, "Log in" }
                    Link { class: "button secondary", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
