//! Web interface components for the PeerPay application.
//!
//! One file per page plus the shared pieces (navbar layout, confirmation
//! modal, transaction rows, toast host).

/// Navigation bar layout component
mod navbar;
pub use navbar::Navbar;

/// Landing page component
mod home;
pub use home::Home;

/// Login and registration forms
mod login;
pub use login::Login;
mod register;
pub use register::Register;

/// Balance overview and quick actions
mod dashboard;
pub use dashboard::Dashboard;

/// Money movement pages
mod send_money;
pub use send_money::SendMoney;
mod add_funds;
pub use add_funds::AddFunds;

/// Full transaction history
mod transactions;
pub use transactions::Transactions;

/// Shared building blocks
mod components;
pub use components::{ConfirmationModal, RecentTransactions, ToastHost, TransactionRow};
