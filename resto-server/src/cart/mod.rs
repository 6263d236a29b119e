//! Shopping cart — the order line-item ledger
//!
//! Maintains an ordered sequence of lines keyed by menu item id. The
//! unit price is captured when the line is first added and never re-read
//! from the catalog, so a later menu price change does not affect an
//! open cart. Totals are recomputed from scratch on every read using
//! `Decimal` arithmetic, then converted to `f64` at the boundary.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::OrderItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Default tax rate in percent (PPN 10%)
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 10;

/// Convert f64 to Decimal for calculation
///
/// Non-finite input cannot normally reach here (prices are validated at
/// the API boundary); if it does, log and treat as zero rather than
/// corrupting totals.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for serialization, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// One cart line: menu item reference, captured unit price, quantity ≥ 1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: i64,
    pub name: String,
    /// Unit price captured at add time
    pub price: f64,
    pub quantity: i32,
}

/// Derived cart totals; never stored, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// The cart itself: an ordered line sequence with unique menu item ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a menu item: increments the existing line, or
    /// appends a new line with quantity 1 at the given price.
    pub fn add_or_increment(&mut self, menu_item_id: i64, name: &str, price: f64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                menu_item_id,
                name: name.to_string(),
                price,
                quantity: 1,
            });
        }
    }

    /// Overwrite a line's quantity. A quantity below 1 removes the line
    /// (silently); no zero-quantity line ever exists. Unknown ids are a
    /// silent no-op.
    pub fn set_quantity(&mut self, menu_item_id: i64, quantity: i32) {
        if quantity < 1 {
            self.remove(menu_item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line; silent no-op when absent
    pub fn remove(&mut self, menu_item_id: i64) {
        self.lines.retain(|l| l.menu_item_id != menu_item_id);
    }

    /// Drop every line (after a successful checkout)
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute subtotal, tax and grand total.
    ///
    /// `subtotal = Σ price × quantity`, `tax = subtotal × rate`,
    /// `total = subtotal + tax`. Pure function of the current lines.
    pub fn totals(&self, tax_rate_percent: u32) -> CartTotals {
        let subtotal: Decimal = self
            .lines
            .iter()
            .map(|l| to_decimal(l.price) * Decimal::from(l.quantity))
            .sum();
        let tax = subtotal * Decimal::from(tax_rate_percent) / Decimal::ONE_HUNDRED;
        let total = subtotal + tax;

        CartTotals {
            subtotal: to_f64(subtotal),
            tax: to_f64(tax),
            total: to_f64(total),
        }
    }

    /// Freeze the current lines into order items for a placed order
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem {
                name: l.name.clone(),
                quantity: l.quantity,
                price: l.price,
            })
            .collect()
    }
}
