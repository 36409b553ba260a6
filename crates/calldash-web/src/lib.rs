//! Call dashboard web interface
//!
//! Lists outbound AI calls, lets an operator place new ones, and shows each
//! call's transcript, summary and extracted answers.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod backend;
pub mod components;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod mock;
pub mod poller;
pub mod routes;
pub mod server;
pub mod state;
pub mod view;

// Re-export the main entry points
pub use api_client::ApiClient;
pub use backend::CallBackend;
pub use controller::{DashboardController, DashboardState, RefreshOutcome};
pub use error::{ActionError, ClientError};
pub use poller::Poller;
pub use server::{build_app, run};
pub use state::AppState;
