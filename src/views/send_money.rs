use crate::Route;
use crate::api::ApiClient;
use crate::hooks::{use_require_user, use_toaster, use_wallet};
use crate::models::User;
use crate::utils;
use crate::views::ConfirmationModal;
use dioxus::prelude::*;

/// Transfer waiting for the user's confirmation: the recipient has been
/// looked up by email but nothing has been submitted yet.
#[derive(Clone)]
struct PendingTransfer {
    recipient: User,
    amount: f64,
}

// Two-step flow: validate amount and pre-check the balance locally, look up
// the recipient by email, then submit only after the modal is confirmed. The
// balance pre-check is optimistic; the backend stays authoritative and its
// rejection comes back through the generic error path.
#[component]
pub fn SendMoney() -> Element {
    let api = use_context::<ApiClient>();
    let mut wallet = use_wallet();
    let mut toaster = use_toaster();

    let mut recipient_email = use_signal(String::new);
    let mut amount_input = use_signal(String::new);
    let mut pending = use_signal(|| None::<PendingTransfer>);
    let mut is_loading = use_signal(|| false);

    let Some(user) = use_require_user() else {
        return rsx! {
            p { class: "muted", "Loading..." }
        };
    };
    let user_id = user.id;

    let lookup_api = api.clone();
    let handle_continue = move |_| {
        let api = lookup_api.clone();
        let email = recipient_email().trim().to_string();
        let raw_amount = amount_input();
        let balance = wallet.wallet().map(|w| w.balance).unwrap_or(0.0);
        async move {
            let Some(amount) = utils::parse_amount(&raw_amount) else {
                toaster.error("Enter an amount greater than zero");
                return;
            };
            if amount > balance {
                toaster.error("Insufficient balance");
                return;
            }
            match api.get_user_by_email(&email).await {
                Ok(recipient) => pending.set(Some(PendingTransfer { recipient, amount })),
                Err(e) => {
                    log::warn!("recipient lookup for {email} failed: {e}");
                    toaster.error("Recipient not found");
                }
            }
        }
    };

    let confirm_api = api.clone();
    let handle_confirm = move |_: ()| {
        let api = confirm_api.clone();
        let transfer = pending();
        spawn(async move {
            let Some(transfer) = transfer else { return };
            if *is_loading.read() {
                return;
            }
            is_loading.set(true);
            match api
                .send_money(user_id, transfer.recipient.id, transfer.amount)
                .await
            {
                Ok(tx) => {
                    log::info!("transaction {} submitted", tx.id);
                    toaster.success("Money sent successfully");
                    recipient_email.set(String::new());
                    amount_input.set(String::new());
                    wallet.refetch();
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    log::error!("transfer failed: {e}");
                    toaster.error("Failed to send money");
                }
            }
            is_loading.set(false);
            pending.set(None);
        });
    };

    let balance_line = if wallet.is_loading() {
        "...".to_string()
    } else {
        utils::format_usd(wallet.wallet().map(|w| w.balance).unwrap_or(0.0))
    };

    rsx! {
        div { id: "send-money-page", class: "page auth-card",
            h1 { "Send Money" }
            p { class: "muted", "Available Balance: {balance_line}" }
            form {
                label { r#for: "recipient-email", "Recipient Email" }
                input {
                    r#type: "email",
                    id: "recipient-email",
                    placeholder: "Enter recipient's email",
                    value: "{recipient_email}",
                    oninput: move |event| recipient_email.set(event.value()),
                }
                label { r#for: "send-amount", "Amount ($)" }
                input {
                    r#type: "number",
                    id: "send-amount",
                    step: 0.01,
                    min: "0",
                    placeholder: "0.00",
                    value: "{amount_input}",
                    oninput: move |event| amount_input.set(event.value()),
                }
                button {
                    id: "submit",
                    r#type: "submit",
                    disabled: is_loading(),
                    onclick: handle_continue,
                    "Continue"
                }
            }
            if let Some(transfer) = pending() {
                ConfirmationModal {
                    title: "Confirm Transaction",
                    description: utils::confirm_prompt(transfer.amount, &transfer.recipient.email),
                    is_loading: is_loading(),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
