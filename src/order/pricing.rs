//! Order total computation and fulfillment validation
//!
//! `compute_total` is a pure function of its inputs; the UI re-derives the
//! displayed breakdown on every cart mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coupon::Coupon;
use super::item::LineItem;
use crate::consts::DELIVERY_FEE;

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FulfillmentMethod {
    Delivery,
    #[default]
    Pickup,
}

/// A latitude/longitude pair from the map picker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// The customer's fulfillment selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Fulfillment {
    pub method: FulfillmentMethod,
    /// Free-text address; only meaningful for delivery
    #[serde(default)]
    pub address: String,
    /// Pin dropped on the map widget, when the customer set one
    #[serde(default)]
    pub geo: Option<GeoPoint>,
    /// Free-text delivery instructions
    #[serde(default)]
    pub instructions: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("delivery needs an address")]
    Empty,
    #[error("the address should include a street number")]
    MissingNumber,
}

/// Pickup is always valid; delivery needs a non-blank address containing at
/// least one numeral (a proxy for "has a house number")
pub fn validate_address(fulfillment: &Fulfillment) -> Result<(), AddressError> {
    if fulfillment.method == FulfillmentMethod::Pickup {
        return Ok(());
    }
    let address = fulfillment.address.trim();
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if !address.chars().any(|c| c.is_ascii_digit()) {
        return Err(AddressError::MissingNumber);
    }
    Ok(())
}

/// Monetary breakdown of an order, in the smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotal {
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub discount: u64,
    pub grand_total: u64,
}

/// Compute the breakdown for a list of line items
///
/// The discount applies to the subtotal only, never to the delivery fee,
/// and is floored. Percent <= 100 keeps the grand total non-negative.
pub fn compute_total(
    items: &[LineItem],
    method: FulfillmentMethod,
    coupon: Option<&Coupon>,
) -> OrderTotal {
    let subtotal: u64 = items.iter().map(LineItem::line_total).sum();
    let delivery_fee = match method {
        FulfillmentMethod::Delivery => DELIVERY_FEE,
        FulfillmentMethod::Pickup => 0,
    };
    let discount = coupon.map_or(0, |c| c.discount_on(subtotal));
    OrderTotal {
        subtotal,
        delivery_fee,
        discount,
        grand_total: subtotal + delivery_fee - discount,
    }
}
