use crate::Route;
use crate::hooks::{use_require_user, use_wallet};
use crate::utils;
use crate::views::RecentTransactions;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let wallet = use_wallet();
    let Some(user) = use_require_user() else {
        return rsx! {
            p { class: "muted", "Loading..." }
        };
    };

    let balance = if wallet.is_loading() {
        "...".to_string()
    } else {
        utils::format_usd(wallet.wallet().map(|w| w.balance).unwrap_or(0.0))
    };

    rsx! {
        div { id: "dashboard-page", class: "page",
            h1 { "Welcome, {user.name}" }
            div { class: "card balance-card",
                h2 { "Wallet Balance" }
                p { class: "balance", "{balance}" }
                if let Some(e) = wallet.error() {
                    p { class: "error-message", "Could not load wallet: {e}" }
                }
                div { class: "card-actions",
                    Link { class: "button", to: Route::SendMoney {}, "Send Money" }
                    Link { class: "button secondary", to: Route::AddFunds {}, "Add Funds" }
                    Link { class: "button secondary", to: Route::Transactions {},
                        "View All Transactions"
                    }
                }
            }
            div { class: "card",
                h2 { "Recent Transactions" }
                RecentTransactions {}
            }
        }
    }
}
