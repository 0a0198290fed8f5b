#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async client for the PagSeguro Orders API.
//!
//! Creates orders with embedded charges and translates the gateway's error
//! responses into typed errors.
//!
//! # Example
//!
//! ```no_run
//! use pagseguro::proto::{Amount, Charge, Order, PaymentMethod};
//! use pagseguro::{ClientConfig, Environment, Error, PagSeguroClient};
//!
//! # async fn run() -> Result<(), Error> {
//! let config = ClientConfig::new(Environment::Sandbox, "my-token");
//! let client = PagSeguroClient::from_config(&config)?;
//!
//! let order = Order {
//!     reference_id: "ex-00001".into(),
//!     charges: vec![Charge {
//!         amount: Amount::brl(500),
//!         payment_method: PaymentMethod::default(),
//!         ..Charge::default()
//!     }],
//!     ..Order::default()
//! };
//!
//! match client.create_order(&order).await {
//!     Ok(()) => {}
//!     Err(Error::Api(errors)) => {
//!         for e in &errors {
//!             eprintln!("{}: {} ({})", e.code, e.description, e.parameter_name);
//!         }
//!     }
//!     Err(other) => return Err(other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] — [`PagSeguroClient`] and the `POST /orders` call
//! - [`config`] — [`ClientConfig`] and [`Environment`]
//! - [`constants`] — Base URLs, paths, environment variable names
//! - [`error`] — [`Error`] and [`ApiErrors`]
//!
//! Wire types are re-exported from `pagseguro-proto` as [`proto`].
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of outbound requests

pub mod client;
pub mod config;
pub mod constants;
pub mod error;

pub use pagseguro_proto as proto;

pub use client::PagSeguroClient;
pub use config::{ClientConfig, ConfigError, Environment};
pub use error::{ApiErrors, Error};
