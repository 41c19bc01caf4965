use crate::hooks::{ToastKind, use_require_user, use_toaster, use_transactions};
use crate::models::Transaction;
use crate::utils;
use dioxus::prelude::*;

/// Renders the current toast, if any. Mounted once in the navbar layout so
/// every page shares the same notification surface.
#[component]
pub fn ToastHost() -> Element {
    let mut toaster = use_toaster();

    match toaster.current() {
        None => rsx! {},
        Some(toast) => {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            rsx! {
                div { class: "{class}",
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toaster.dismiss(),
                        "✕"
                    }
                }
            }
        }
    }
}

/// Blocking two-button dialog; the backdrop stays until one of the handlers
/// fires. Both buttons lock while the confirmed action is in flight.
#[component]
pub fn ConfirmationModal(
    title: String,
    description: String,
    is_loading: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h2 { "{title}" }
                p { "{description}" }
                div { class: "modal-actions",
                    button {
                        class: "secondary",
                        disabled: is_loading,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        disabled: is_loading,
                        onclick: move |_| on_confirm.call(()),
                        if is_loading { "Sending..." } else { "Confirm" }
                    }
                }
            }
        }
    }
}

/// One history entry, styled by which side of the transfer the viewer is on.
#[component]
pub fn TransactionRow(tx: Transaction, viewer_id: i64) -> Element {
    let outgoing = tx.sender_id == viewer_id;
    let card_class = if outgoing {
        "transaction-card outgoing"
    } else {
        "transaction-card incoming"
    };
    let amount_class = if outgoing { "amount debit" } else { "amount credit" };

    rsx! {
        li { class: "{card_class}",
            div { class: "transaction-main",
                p { class: "counterparty", "{utils::counterparty_line(&tx, viewer_id)}" }
                p { class: "muted", "{utils::format_date(&tx.timestamp)}" }
            }
            div { class: "transaction-side",
                p { class: "{amount_class}", "{utils::signed_amount(&tx, viewer_id)}" }
                p { class: "muted status", "{tx.status}" }
            }
        }
    }
}

/// Latest five entries for the dashboard.
#[component]
pub fn RecentTransactions() -> Element {
    let transactions = use_transactions();
    let Some(user) = use_require_user() else {
        return rsx! {};
    };

    match transactions.state() {
        None => rsx! {
            p { class: "muted", "Loading transactions..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "error-message", "Error loading transactions: {e}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No recent transactions" }
        },
        Some(Ok(list)) => rsx! {
            ul { class: "transactions-list",
                for tx in list.into_iter().take(5) {
                    TransactionRow { key: "{tx.id}", tx: tx.clone(), viewer_id: user.id }
                }
            }
        },
    }
}
