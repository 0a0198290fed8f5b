//! Charge and payment method types.

use serde::{Deserialize, Serialize};

use crate::CURRENCY_BRL;
use crate::order::Address;

/// One payment attempt embedded in an [`Order`](crate::Order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Merchant-side identifier of the charge.
    pub reference_id: String,

    /// Free-form description shown to the buyer.
    pub description: String,

    /// Amount to be charged.
    pub amount: Amount,

    /// How the buyer pays.
    pub payment_method: PaymentMethod,
}

/// A monetary value in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Value in cents (`500` is R$ 5,00).
    pub value: u64,

    /// ISO 4217 currency code.
    pub currency: String,
}

impl Amount {
    /// Creates an amount in Brazilian reais.
    #[must_use]
    pub fn brl(value: u64) -> Self {
        Self {
            value,
            currency: CURRENCY_BRL.to_owned(),
        }
    }
}

/// Payment method of a charge.
///
/// Only the field matching [`PaymentMethod::kind`] is expected to be set;
/// the gateway rejects inconsistent combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Method discriminator.
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,

    /// Number of installments (cards only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,

    /// Whether to capture immediately or only pre-authorize (cards only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,

    /// Boleto details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boleto: Option<Boleto>,

    /// Card details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

impl PaymentMethod {
    /// Creates a boleto payment method.
    #[must_use]
    pub fn boleto(boleto: Boleto) -> Self {
        Self {
            kind: PaymentMethodType::Boleto,
            boleto: Some(boleto),
            ..Self::default()
        }
    }

    /// Creates a credit card payment method.
    #[must_use]
    pub fn credit_card(card: Card, installments: u32, capture: bool) -> Self {
        Self {
            kind: PaymentMethodType::CreditCard,
            installments: Some(installments),
            capture: Some(capture),
            card: Some(card),
            boleto: None,
        }
    }
}

/// Payment method discriminator.
///
/// Methods without a dedicated variant (e.g. `"PIX"`) are sent through
/// [`PaymentMethodType::Other`]; the gateway decides whether they are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodType {
    /// Bank slip.
    #[default]
    Boleto,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Any other value, sent as-is.
    #[serde(untagged)]
    Other(String),
}

/// Boleto-specific payment data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boleto {
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,

    /// Lines printed on the slip.
    pub instruction_lines: InstructionLines,

    /// Person or company the slip is issued to.
    pub holder: Holder,
}

/// The two instruction lines printed on a boleto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionLines {
    /// First line.
    #[serde(rename = "line_1")]
    pub line1: String,

    /// Second line.
    #[serde(rename = "line_2")]
    pub line2: String,
}

impl InstructionLines {
    /// Creates both instruction lines.
    #[must_use]
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Holder of a boleto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    /// Full name.
    pub name: String,

    /// CPF or CNPJ, digits only.
    pub tax_id: String,

    /// Contact e-mail.
    pub email: String,

    /// Billing address.
    pub address: Address,
}

/// Card-specific payment data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card data encrypted with the merchant public key.
    pub encrypted: String,

    /// Whether the gateway should tokenize and store the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
}
