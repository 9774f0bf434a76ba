//! The cart: explicit application state for one in-progress order

use serde::{Deserialize, Serialize};

use super::coupon::{Coupon, CouponCatalog};
use super::item::LineItem;
use super::pricing::{Fulfillment, OrderTotal, compute_total};

/// One in-progress order: line items, at most one applied coupon, and the
/// fulfillment selection. The UI owns the lifecycle and persists the cart
/// through the key-value store port between visits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<LineItem>,
    /// At most one coupon; applying another replaces it
    coupon: Option<Coupon>,
    pub fulfillment: Fulfillment,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Repeated adds of the same item stay separate lines.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the line at `index`, if it exists
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Look `code` up and apply it, replacing any previous coupon.
    ///
    /// Returns false on an unknown code, leaving the previously applied
    /// coupon untouched; the caller surfaces a notice to the user.
    pub fn apply_coupon(&mut self, code: &str, catalog: &CouponCatalog) -> bool {
        match catalog.lookup(code) {
            Some(coupon) => {
                log::info!("coupon {} applied", coupon.code());
                self.coupon = Some(coupon.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_coupon(&mut self) {
        self.coupon = None;
    }

    /// Current monetary breakdown; recomputed from scratch on every call
    pub fn total(&self) -> OrderTotal {
        compute_total(&self.items, self.fulfillment.method, self.coupon.as_ref())
    }
}
