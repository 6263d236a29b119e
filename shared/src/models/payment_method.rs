//! Payment Method Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Icon shown next to a payment method.
///
/// A fixed variant set mapped to an icon component at the presentation
/// boundary, instead of dispatching on a free-form string name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentIcon {
    Wallet,
    CreditCard,
    QrCode,
    Smartphone,
    Banknote,
}

impl Default for PaymentIcon {
    fn default() -> Self {
        Self::Wallet
    }
}

/// Payment method entity (configured in the dashboard)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub active: bool,
    #[serde(default)]
    pub icon: PaymentIcon,
    /// Badge color classes used by the dashboard UI
    #[serde(default)]
    pub color: String,
}

/// Create payment method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodCreate {
    pub name: String,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub icon: Option<PaymentIcon>,
    pub color: Option<String>,
}

/// Update payment method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub icon: Option<PaymentIcon>,
    pub color: Option<String>,
}

/// Payment kind selected at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Cash,
    Card,
    Qris,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentKind::Cash => "cash",
            PaymentKind::Card => "card",
            PaymentKind::Qris => "qris",
        };
        f.write_str(s)
    }
}

/// Error parsing a payment kind from its wire form
#[derive(Debug, thiserror::Error)]
#[error("unknown payment kind: {0}")]
pub struct PaymentKindError(pub String);

impl FromStr for PaymentKind {
    type Err = PaymentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentKind::Cash),
            "card" => Ok(PaymentKind::Card),
            "qris" => Ok(PaymentKind::Qris),
            other => Err(PaymentKindError(other.to_string())),
        }
    }
}
