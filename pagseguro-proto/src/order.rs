//! Order payload types.
//!
//! An [`Order`] is the top-level request submitted to `POST /orders`. It is
//! serialized verbatim: no field is defaulted or validated on the client, the
//! gateway is the only validator.

use serde::{Deserialize, Serialize};

use crate::charge::Charge;

/// Top-level payment request submitted to the gateway.
///
/// # Example
///
/// ```rust
/// use pagseguro_proto::{Customer, Item, Order};
///
/// let order = Order {
///     reference_id: "ex-00001".into(),
///     customer: Customer {
///         name: "Jose da Silva".into(),
///         email: "email@gmail.com".into(),
///         tax_id: "12345678909".into(),
///         phones: vec![],
///     },
///     items: vec![Item {
///         reference_id: "item-1".into(),
///         name: "nome do item".into(),
///         quantity: 1,
///         unit_amount: 500,
///     }],
///     ..Order::default()
/// };
/// assert_eq!(order.items.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Merchant-side identifier of the order.
    pub reference_id: String,

    /// Buyer placing the order.
    pub customer: Customer,

    /// Line items.
    pub items: Vec<Item>,

    /// Delivery destination.
    pub shipping: Shipping,

    /// URLs the gateway notifies about status changes of this order.
    pub notification_urls: Vec<String>,

    /// Payment attempts embedded in the order.
    pub charges: Vec<Charge>,
}

/// Buyer identification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name.
    pub name: String,

    /// Contact e-mail.
    pub email: String,

    /// CPF or CNPJ, digits only.
    pub tax_id: String,

    /// Contact phones.
    pub phones: Vec<Phone>,
}

/// A contact phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Country calling code (e.g. `"55"`).
    pub country: String,

    /// Area code (e.g. `"11"`).
    pub area: String,

    /// Subscriber number.
    pub number: String,

    /// Kind of line.
    #[serde(rename = "type")]
    pub kind: PhoneType,
}

/// Kind of phone line.
///
/// Values the gateway may add later pass through as [`PhoneType::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhoneType {
    /// Mobile phone.
    #[default]
    Mobile,
    /// Business landline.
    Business,
    /// Home landline.
    Home,
    /// Any other value, sent as-is.
    #[serde(untagged)]
    Other(String),
}

/// One line item of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Merchant-side identifier of the item.
    pub reference_id: String,

    /// Item description.
    pub name: String,

    /// Number of units.
    pub quantity: u32,

    /// Price of a single unit in cents.
    pub unit_amount: u64,
}

/// Delivery information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    /// Delivery address.
    pub address: Address,
}

/// Postal address, shared by shipping and boleto holders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name.
    pub street: String,

    /// Building number.
    pub number: String,

    /// Apartment, suite, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,

    /// Neighbourhood.
    pub locality: String,

    /// City name.
    pub city: String,

    /// State name.
    pub region: String,

    /// Two-letter state code (e.g. `"SP"`).
    pub region_code: String,

    /// Country (ISO 3166-1 alpha-3, e.g. `"BRA"`).
    pub country: String,

    /// CEP, digits only.
    pub postal_code: String,
}
