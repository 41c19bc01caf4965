//! HTTP client for the wallet backend.
//!
//! Every network call the app makes goes through [`ApiClient`], which owns
//! the base URL and normalizes failures into [`ApiError`]. One attempt per
//! call: no retry, no backoff, no explicit timeout.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{Transaction, User, Wallet};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Normalized request failures, surfaced to the UI as toast strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("API Error: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWalletBody {
    user_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreditBody {
    user_id: i64,
    amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMoneyBody {
    sender_id: i64,
    recipient_id: i64,
    amount: f64,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: build_http_client(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request with session credentials attached and maps non-2xx
    /// statuses into the error taxonomy. 401 means the session or the
    /// submitted credentials are bad, whichever endpoint it came from.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = with_credentials(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(ApiError::InvalidCredentials);
            }
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// POST whose success response may carry no JSON body at all (the credit
    /// endpoint). A non-JSON content type yields the default value.
    async fn post_json_or_default<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if is_json {
            Self::decode(response).await
        } else {
            Ok(T::default())
        }
    }

    /// Creates the user, then the wallet for the returned user id.
    ///
    /// The two calls are not atomic: if the wallet call fails, the user
    /// record already exists on the backend and nothing deletes it.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let user: User = self
            .post_json(
                "/api/users/register",
                &RegisterBody {
                    name,
                    email,
                    password,
                },
            )
            .await?;
        let wallet: Wallet = self
            .post_json("/api/wallets", &CreateWalletBody { user_id: user.id })
            .await
            .map_err(|e| {
                log::error!(
                    "wallet creation failed for user {}, user record is orphaned: {}",
                    user.id,
                    e
                );
                e
            })?;
        log::debug!("registered user {} with wallet {}", user.id, wallet.id);
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.post_json("/api/users/login", &LoginBody { email, password })
            .await
    }

    pub async fn get_wallet(&self, user_id: i64) -> Result<Wallet, ApiError> {
        self.get_json(&format!("/api/wallets/user/{user_id}")).await
    }

    pub async fn add_funds(&self, user_id: i64, amount: f64) -> Result<Wallet, ApiError> {
        self.post_json_or_default("/api/wallets/credit", &CreditBody { user_id, amount })
            .await
    }

    pub async fn send_money(
        &self,
        sender_id: i64,
        recipient_id: i64,
        amount: f64,
    ) -> Result<Transaction, ApiError> {
        self.post_json(
            "/api/transactions",
            &SendMoneyBody {
                sender_id,
                recipient_id,
                amount,
            },
        )
        .await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/api/users/email/{email}")).await
    }

    pub async fn get_transactions(&self, user_id: i64) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(&format!("/api/transactions/user/{user_id}"))
            .await
    }
}

fn build_http_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("http client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

// The browser fetch backend needs an explicit opt-in to send cookies
// cross-origin; the native client carries its cookie store instead.
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        builder.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn register_creates_user_then_wallet() {
        let calls: Arc<Mutex<Vec<String>>> = Arc::default();
        let user_calls = calls.clone();
        let wallet_calls = calls.clone();
        let app = Router::new()
            .route(
                "/api/users/register",
                post(move || {
                    let calls = user_calls.clone();
                    async move {
                        calls.lock().unwrap().push("/api/users/register".to_string());
                        Json(json!({"id": 1, "name": "A", "email": "a@x.com"}))
                    }
                }),
            )
            .route(
                "/api/wallets",
                post(move |Json(body): Json<serde_json::Value>| {
                    let calls = wallet_calls.clone();
                    async move {
                        assert_eq!(body["userId"], 1);
                        calls.lock().unwrap().push("/api/wallets".to_string());
                        Json(json!({"id": 10, "userId": 1, "balance": 0.0}))
                    }
                }),
            );
        let api = ApiClient::new(serve(app).await);

        let user = api.register("A", "a@x.com", "p").await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["/api/users/register".to_string(), "/api/wallets".to_string()]
        );
    }

    #[tokio::test]
    async fn register_surfaces_wallet_creation_failure() {
        let app = Router::new()
            .route(
                "/api/users/register",
                post(|| async { Json(json!({"id": 1, "name": "A", "email": "a@x.com"})) }),
            )
            .route(
                "/api/wallets",
                post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );
        let api = ApiClient::new(serve(app).await);

        let err = api.register("A", "a@x.com", "p").await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn login_maps_401_to_invalid_credentials() {
        let app = Router::new().route(
            "/api/users/login",
            post(|| async { StatusCode::UNAUTHORIZED }),
        );
        let api = ApiClient::new(serve(app).await);

        let err = api.login("a@x.com", "wrong").await.unwrap_err();
        assert_eq!(err, ApiError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn other_statuses_keep_the_status_code_in_the_message() {
        let app = Router::new().route(
            "/api/users/login",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let api = ApiClient::new(serve(app).await);

        let err = api.login("a@x.com", "p").await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: 500");
    }

    #[tokio::test]
    async fn add_funds_accepts_an_empty_success_body() {
        let app = Router::new().route(
            "/api/wallets/credit",
            post(|| async { StatusCode::NO_CONTENT }),
        );
        let api = ApiClient::new(serve(app).await);

        let wallet = api.add_funds(1, 25.0).await.unwrap();
        assert_eq!(wallet, Wallet::default());
    }

    #[tokio::test]
    async fn send_money_then_refetch_sees_the_decreased_balance() {
        let balance = Arc::new(Mutex::new(50.0_f64));
        let debit = balance.clone();
        let read = balance.clone();
        let app = Router::new()
            .route(
                "/api/transactions",
                post(move |Json(body): Json<serde_json::Value>| {
                    let balance = debit.clone();
                    async move {
                        let amount = body["amount"].as_f64().unwrap();
                        *balance.lock().unwrap() -= amount;
                        Json(json!({
                            "id": 7,
                            "senderId": 1,
                            "recipientId": 2,
                            "senderEmail": "a@x.com",
                            "recipientEmail": "b@x.com",
                            "amount": amount,
                            "status": "completed",
                            "timestamp": "2024-05-01T10:30:00Z"
                        }))
                    }
                }),
            )
            .route(
                "/api/wallets/user/:user_id",
                get(move |Path(user_id): Path<i64>| {
                    let balance = read.clone();
                    async move {
                        let balance = *balance.lock().unwrap();
                        Json(json!({"id": 10, "userId": user_id, "balance": balance}))
                    }
                }),
            );
        let api = ApiClient::new(serve(app).await);

        let tx = api.send_money(1, 2, 12.5).await.unwrap();
        assert_eq!(tx.status, "completed");

        let wallet = api.get_wallet(1).await.unwrap();
        assert_eq!(wallet.balance, 37.5);
    }

    #[tokio::test]
    async fn get_user_by_email_hits_the_email_path() {
        let app = Router::new().route(
            "/api/users/email/:email",
            get(|Path(email): Path<String>| async move {
                Json(json!({"id": 2, "name": "Bob", "email": email}))
            }),
        );
        let api = ApiClient::new(serve(app).await);

        let user = api.get_user_by_email("bob@x.com").await.unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.email, "bob@x.com");
    }

    #[tokio::test]
    async fn empty_transaction_history_is_not_an_error() {
        let app = Router::new().route(
            "/api/transactions/user/:user_id",
            get(|| async { Json(json!([])) }),
        );
        let api = ApiClient::new(serve(app).await);

        let transactions = api.get_transactions(5).await.unwrap();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        // Nothing listens on this port.
        let api = ApiClient::new("http://127.0.0.1:1");
        match api.get_wallet(1).await {
            Err(ApiError::Network(_)) => {}
            other => panic!("expected a network error, got {other:?}"),
        }
    }
}
