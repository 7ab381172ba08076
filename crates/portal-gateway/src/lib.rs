//! HTTP gateway for the portal URL shortener.
//!
//! Exposes a key store over three routes:
//!
//! - `GET /pong` liveness check
//! - `POST /shorten` with `{"url": "..."}`, answered with `{"url", "key"}`
//! - `GET /go/{key}` redirecting (`302`) to the stored URL, or `404`

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod server;
pub mod state;

pub use app::App;
pub use config::GatewayConfig;
pub use error::AppError;
pub use state::AppState;
