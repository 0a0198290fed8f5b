//! Wire format types for the PagSeguro Orders API.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the `/orders` endpoint: the [`Order`] payload tree sent by the client and
//! the error envelopes returned by the gateway. It depends only on `serde`
//! and `serde_json`, so it can be shared by any transport.
//!
//! # Modules
//!
//! - [`order`] — Order payload (`Order`, `Customer`, `Item`, `Shipping`, `Address`)
//! - [`charge`] — Charges and payment methods (`Charge`, `PaymentMethod`, `Boleto`, ...)
//! - [`errors`] — Gateway error entries and envelope shape discrimination

pub mod charge;
pub mod errors;
pub mod order;

pub use charge::{
    Amount, Boleto, Card, Charge, Holder, InstructionLines, PaymentMethod, PaymentMethodType,
};
pub use errors::{ApiError, ErrorEnvelope};
pub use order::{Address, Customer, Item, Order, Phone, PhoneType, Shipping};

/// ISO 4217 code for the Brazilian real, the only currency the gateway settles in.
pub const CURRENCY_BRL: &str = "BRL";
