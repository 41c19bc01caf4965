//! PeerPay: a Dioxus front-end for a peer-to-peer wallet backend.
//!
//! All business logic (balance mutation, transaction atomicity, auth) lives
//! in an external HTTP service; this app is presentation and request
//! orchestration only.

mod api;
mod hooks;
mod models;
mod session;
mod utils;
mod views;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::hooks::{AuthState, Toast, use_session_loader};
use crate::views::{AddFunds, Dashboard, Home, Login, Navbar, Register, SendMoney, Transactions};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/send-money")]
        SendMoney {},
        #[route("/add-funds")]
        AddFunds {},
        #[route("/transactions")]
        Transactions {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "server")]
static API_URL: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Backend base URL for this build. The server binary can override it on the
/// command line; wasm builds use the compiled-in default.
fn api_base_url() -> String {
    #[cfg(feature = "server")]
    {
        if let Some(url) = API_URL.get() {
            return url.clone();
        }
    }
    api::DEFAULT_BASE_URL.to_string()
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the wallet backend.
    #[arg(long, default_value_t = String::from(api::DEFAULT_BASE_URL))]
    api_url: String,
}

fn main() {
    #[cfg(feature = "server")]
    {
        use clap::Parser;
        env_logger::init();
        let args = Args::parse();
        let _ = API_URL.set(args.api_url);
        log::info!("using wallet backend at {}", api_base_url());
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(api_base_url()));
    use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(|| Signal::new(None::<Toast>));
    use_session_loader();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use clap::Parser;

    #[test]
    fn args_default_to_the_local_backend() {
        let args = super::Args::parse_from(vec!["peerpay"]);
        assert_eq!(args.api_url, crate::api::DEFAULT_BASE_URL);
    }

    #[test]
    fn args_accept_a_custom_backend() {
        let args = super::Args::parse_from(vec!["peerpay", "--api-url", "http://10.0.0.2:9090"]);
        assert_eq!(args.api_url, "http://10.0.0.2:9090");
    }
}
