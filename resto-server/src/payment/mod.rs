//! 支付确认网关
//!
//! The checkout flow hands the selected payment kind and the grand total
//! to a [`PaymentGateway`] and waits for confirmation. The bundled
//! [`SimulatedGateway`] resolves unconditionally after a configured
//! delay; a real provider implements the same trait and may decline.
//! Checkout wraps the call in a timeout, so a hung gateway degrades to a
//! user-visible message instead of blocking the cart forever.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use shared::PaymentKind;
use thiserror::Error;

/// Confirmation returned by a gateway
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub method: PaymentKind,
    pub amount: f64,
    /// Gateway-assigned reference for the confirmation
    pub reference: String,
}

/// Gateway-side failure
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Payment provider unavailable: {0}")]
    Unavailable(String),
}

/// The seam a payment provider plugs into
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Request confirmation for `amount` paid via `method`
    async fn confirm(&self, method: PaymentKind, amount: f64)
    -> Result<PaymentReceipt, PaymentError>;
}

/// Stub gateway: always confirms after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn confirm(
        &self,
        method: PaymentKind,
        amount: f64,
    ) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        let reference = format!("SIM-{}", uuid::Uuid::new_v4().simple());
        tracing::info!(%method, amount, %reference, "Payment confirmed");

        Ok(PaymentReceipt {
            method,
            amount,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_gateway_confirms_after_delay() {
        let gateway = SimulatedGateway::new(Duration::from_millis(10));
        let receipt = gateway.confirm(PaymentKind::Qris, 121000.0).await.unwrap();
        assert_eq!(receipt.method, PaymentKind::Qris);
        assert_eq!(receipt.amount, 121000.0);
        assert!(receipt.reference.starts_with("SIM-"));
    }

    #[tokio::test]
    async fn slow_gateway_trips_a_timeout() {
        let gateway = SimulatedGateway::new(Duration::from_secs(5));
        let result = tokio::time::timeout(
            Duration::from_millis(20),
            gateway.confirm(PaymentKind::Cash, 10000.0),
        )
        .await;
        assert!(result.is_err());
    }
}
