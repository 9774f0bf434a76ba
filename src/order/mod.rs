//! Ordering domain: menu, cart, coupons and pricing
//!
//! Everything here is pure, synchronous state manipulation. The UI layer
//! owns the `Cart` lifecycle and calls back into these functions on every
//! mutation; nothing reaches into global scope or platform storage.

pub mod cart;
pub mod coupon;
pub mod item;
pub mod menu;
pub mod pricing;

pub use cart::Cart;
pub use coupon::{Coupon, CouponCatalog, CouponError};
pub use item::{CustomBuild, LineItem, LineItemError};
pub use menu::{Menu, MenuError, MenuItem, Topping};
pub use pricing::{
    AddressError, Fulfillment, FulfillmentMethod, GeoPoint, OrderTotal, compute_total,
    validate_address,
};
