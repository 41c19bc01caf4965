use crate::hooks::{use_require_user, use_transactions};
use crate::views::TransactionRow;
use dioxus::prelude::*;

// Full history as a vertical card list; the empty list is a normal state,
// not an error.
#[component]
pub fn Transactions() -> Element {
    let transactions = use_transactions();
    let Some(user) = use_require_user() else {
        return rsx! {
            p { class: "muted", "Loading..." }
        };
    };

    let history = transactions.state();

    rsx! {
        div { id: "transactions-page", class: "page",
            h1 { "Transaction History" }
            p { class: "muted", "All your payment activity" }

            match history {
                None => rsx! {
                    p { class: "muted", "Loading transactions..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-message", "Error loading transactions: {e}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No transactions found" }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "transactions-list",
                        for tx in list {
                            TransactionRow { key: "{tx.id}", tx: tx.clone(), viewer_id: user.id }
                        }
                    }
                },
            }
        }
    }
}
