//! Celcoin Banking-as-a-Service Client Library
//!
//! An async Rust client for the Celcoin BaaS REST API: onboarding, balances,
//! statements, boletos, PIX keys and payments, TED and internal transfers,
//! bill payments, webhooks and income reports.
//!
//! # Features
//!
//! - **Token management**: OAuth2 client-credentials login with an expiring
//!   token cache shared by every service
//! - **Credential strategies**: client secret or mutual TLS
//! - **Typed errors**: provider error codes classified into a local taxonomy
//! - **Observability**: `tracing` spans and events, optional request logging
//!   with secret redaction
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use celcoin_client::{CelcoinClient, CelcoinConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CelcoinConfig::builder()
//!         .client_id("your-client-id")
//!         .client_secret("your-client-secret")
//!         .build()?;
//!     let client = CelcoinClient::new(config)?;
//!
//!     let balance = client.balance().get("300541976902", "12345678909").await?;
//!     println!("available: {}", balance.amount);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use auth::{TokenCache, TokenProvider, TokenSource};
pub use client::{CelcoinClient, CelcoinClientBuilder, Session};
pub use config::{CelcoinConfig, CelcoinConfigBuilder, CredentialStrategy, Environment};
pub use errors::{CelcoinError, CelcoinResult, ProviderErrorKind};
pub use types::common::{ApiEnvelope, ResponseStatus, TransactionReceipt};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
