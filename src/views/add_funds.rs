use crate::Route;
use crate::api::ApiClient;
use crate::hooks::{use_require_user, use_toaster, use_wallet};
use crate::utils;
use dioxus::prelude::*;

// Linear flow: validate the amount locally, fire the credit call, refetch the
// wallet on success. No confirmation step.
#[component]
pub fn AddFunds() -> Element {
    let api = use_context::<ApiClient>();
    let mut wallet = use_wallet();
    let mut toaster = use_toaster();
    let mut amount_input = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    let Some(user) = use_require_user() else {
        return rsx! {
            p { class: "muted", "Loading..." }
        };
    };
    let user_id = user.id;

    rsx! {
        div { id: "add-funds-page", class: "page auth-card",
            h1 { "Add Funds" }
            p { class: "muted", "Add money to your wallet" }
            form {
                label { r#for: "add-amount", "Amount ($)" }
                input {
                    r#type: "number",
                    id: "add-amount",
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
                    onclick: move |_| {
                        let api = api.clone();
                        let raw_amount = amount_input();
                        async move {
                            let Some(amount) = utils::parse_amount(&raw_amount) else {
                                toaster.error("Enter an amount greater than zero");
                                return;
                            };
                            if *is_loading.read() {
                                return;
                            }
                            is_loading.set(true);
                            match api.add_funds(user_id, amount).await {
                                Ok(_) => {
                                    toaster.success("Funds added successfully");
                                    amount_input.set(String::new());
                                    wallet.refetch();
                                    navigator().push(Route::Dashboard {});
                                }
                                Err(e) => {
                                    log::error!("credit failed: {e}");
                                    toaster.error("Failed to add funds");
                                }
                            }
                            is_loading.set(false);
                        }
                    },
                    "Add Funds"
                }
            }
        }
    }
}
