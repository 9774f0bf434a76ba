//! Cart line items
//!
//! Prices are integers in the smallest currency unit, so negative amounts
//! are unrepresentable. The remaining precondition (quantity >= 1) is
//! checked once, at construction; downstream pricing code never re-validates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineItemError {
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Base and add-ons of a build-your-own pizza
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBuild {
    /// Menu id of the chosen base
    pub base: String,
    /// Selected add-ons, in the order the customer picked them
    pub addons: Vec<String>,
}

/// One purchasable unit in an order
///
/// Two additions of the same catalog item stay two distinct lines; the cart
/// never merges or deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier (menu id, or a synthetic id for custom builds)
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price in the smallest currency unit
    pub unit_price: u64,
    /// Always >= 1
    quantity: u32,
    /// Present only on build-your-own items
    #[serde(default)]
    pub custom: Option<CustomBuild>,
}

impl LineItem {
    /// A plain catalog line
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
        quantity: u32,
    ) -> Result<Self, LineItemError> {
        if quantity == 0 {
            return Err(LineItemError::ZeroQuantity);
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
            custom: None,
        })
    }

    /// A build-your-own line carrying its base and add-on choices
    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
        quantity: u32,
        build: CustomBuild,
    ) -> Result<Self, LineItemError> {
        let mut item = Self::new(id, name, unit_price, quantity)?;
        item.custom = Some(build);
        Ok(item)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// unit price x quantity
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}
