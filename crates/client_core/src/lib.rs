//! Headless client for the walkcore backend.
//!
//! Three layers, consumed by whatever front-end drives them:
//!
//! - [`transport::ApiClient`] performs one typed HTTP call per backend
//!   endpoint and deserializes the wire shapes from [`shared::protocol`].
//! - [`repository::WalkcoreRepository`] exposes domain-shaped operations and
//!   unwraps the standard response envelope. Every call goes to the network;
//!   there is no caching and no hidden state.
//! - [`controller`] holds one view-state controller per screen use case,
//!   each driving the same idle/loading/success/error lifecycle and mapping
//!   wire data into display models on success.

pub mod controller;
pub mod display;
pub mod error;
pub mod repository;
pub mod transport;

pub use display::SessionOverview;
pub use error::ClientError;
pub use repository::{NetworkWalkcoreRepository, WalkcoreRepository};
pub use transport::ApiClient;
