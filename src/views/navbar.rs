use crate::Route;
use crate::hooks::use_auth;
use crate::views::ToastHost;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let logout_auth = auth.clone();

    rsx! {
        div { id: "navbar",
            Link { class: "brand", to: Route::Home {}, "PeerPay" }
            if let Some(user) = auth.user() {
                div { class: "nav-links",
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    Link { to: Route::Transactions {}, "History" }
                    span { class: "nav-user", "{user.name}" }
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            logout_auth.logout();
                            navigator().push(Route::Home {});
                        },
                        "Log out"
                    }
                }
            } else {
                div { class: "nav-links",
                    Link { to: Route::Login {}, "Log in" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
        ToastHost {}
        Outlet::<Route> {}
    }
}
