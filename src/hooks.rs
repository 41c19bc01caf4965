//! Application state hooks: auth session, fetch-and-cache data handles and
//! toast notifications, all built on Dioxus signals provided as root context.

use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{Transaction, User, Wallet};
use crate::session;

/// Current-user state shared by every component. `is_loading` stays true
/// until the stored session has been checked once after mount.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

/// Handle over the auth context. Cheap to clone; the embedded client shares
/// its connection pool.
#[derive(Clone)]
pub struct Auth {
    state: Signal<AuthState>,
    api: ApiClient,
}

pub fn use_auth() -> Auth {
    Auth {
        state: use_context::<Signal<AuthState>>(),
        api: use_context::<ApiClient>(),
    }
}

/// Loads the stored session exactly once after mount and clears the loading
/// flag. Called from the root component.
pub fn use_session_loader() {
    let state = use_context::<Signal<AuthState>>();
    use_future(move || {
        let mut state = state;
        async move {
            let stored = session::load();
            if let Some(user) = &stored {
                log::info!("restored session for {}", user.email);
            }
            let mut state = state.write();
            state.user = stored;
            state.is_loading = false;
        }
    });
}

impl Auth {
    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// Logs in and persists the session. Nothing is stored when the backend
    /// rejects the credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let user = login_and_persist(&self.api, email, password).await?;
        self.set_user(user.clone());
        Ok(user)
    }

    /// Registers (user then wallet on the backend) and persists the session.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let user = self.api.register(name, email, password).await?;
        session::store(&user);
        self.set_user(user.clone());
        Ok(user)
    }

    pub fn logout(&self) {
        session::clear();
        let mut state = self.state;
        state.write().user = None;
        log::info!("session cleared");
    }

    fn set_user(&self, user: User) {
        let mut state = self.state;
        state.write().user = Some(user);
    }
}

/// Backend login with the persist-on-success rule in one place: the session
/// record is written only after the backend accepted the credentials, so a
/// rejected login cannot touch stored state.
async fn login_and_persist(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let user = api.login(email, password).await?;
    session::store(&user);
    Ok(user)
}

/// Redirect-to-login guard shared by the authed pages. Returns the current
/// user, `None` while the stored session is still being checked (or right
/// before the redirect happens).
pub fn use_require_user() -> Option<User> {
    let auth = use_auth();
    let state = auth.state;
    use_effect(move || {
        let state = state.read();
        if !state.is_loading && state.user.is_none() {
            navigator().push(crate::Route::Login {});
        }
    });
    auth.user()
}

/// Wallet for the current user, fetched through `use_resource` keyed by the
/// user id. Yields nothing while logged out; `refetch` re-synchronizes after
/// a mutating call. The balance shown is stale until the refetch lands.
#[derive(Clone, Copy)]
pub struct WalletHandle {
    resource: Resource<Option<Result<Wallet, ApiError>>>,
}

pub fn use_wallet() -> WalletHandle {
    let api = use_context::<ApiClient>();
    let state = use_context::<Signal<AuthState>>();
    let resource = use_resource(move || {
        let api = api.clone();
        let user_id = state.read().user.as_ref().map(|u| u.id);
        async move {
            match user_id {
                Some(id) => Some(api.get_wallet(id).await),
                None => None,
            }
        }
    });
    WalletHandle { resource }
}

impl WalletHandle {
    pub fn state(&self) -> Option<Result<Wallet, ApiError>> {
        (*self.resource.read()).clone().flatten()
    }

    pub fn wallet(&self) -> Option<Wallet> {
        self.state().and_then(Result::ok)
    }

    pub fn error(&self) -> Option<ApiError> {
        match self.state() {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.resource.read().is_none()
    }

    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}

/// Transaction history for the current user; same contract as
/// [`WalletHandle`].
#[derive(Clone, Copy)]
pub struct TransactionsHandle {
    resource: Resource<Option<Result<Vec<Transaction>, ApiError>>>,
}

pub fn use_transactions() -> TransactionsHandle {
    let api = use_context::<ApiClient>();
    let state = use_context::<Signal<AuthState>>();
    let resource = use_resource(move || {
        let api = api.clone();
        let user_id = state.read().user.as_ref().map(|u| u.id);
        async move {
            match user_id {
                Some(id) => Some(api.get_transactions(id).await),
                None => None,
            }
        }
    });
    TransactionsHandle { resource }
}

impl TransactionsHandle {
    pub fn state(&self) -> Option<Result<Vec<Transaction>, ApiError>> {
        (*self.resource.read()).clone().flatten()
    }

    pub fn is_loading(&self) -> bool {
        self.resource.read().is_none()
    }

    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Non-blocking notification surface; one toast at a time, newest wins.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<Toast>>,
}

pub fn use_toaster() -> Toaster {
    Toaster {
        current: use_context::<Signal<Option<Toast>>>(),
    }
}

impl Toaster {
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.read().clone()
    }

    fn show(&mut self, kind: ToastKind, message: String) {
        self.current.set(Some(Toast { message, kind }));
    }
}
