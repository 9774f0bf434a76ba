//! Percentage coupons and the fixed house catalog
//!
//! Lookup is case-insensitive exact match. An unknown code is a normal
//! negative result, not an error - the caller keeps any previously applied
//! coupon and surfaces a notice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::ARCADE_REWARD_CODE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponError {
    #[error("discount percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(u8),
}

/// A named percentage discount on the order subtotal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    code: String,
    percent: u8,
}

impl Coupon {
    pub fn new(code: impl Into<String>, percent: u8) -> Result<Self, CouponError> {
        if percent > 100 {
            return Err(CouponError::PercentOutOfRange(percent));
        }
        Ok(Self {
            code: code.into(),
            percent,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// floor(subtotal * percent / 100); never exceeds the subtotal
    pub fn discount_on(&self, subtotal: u64) -> u64 {
        subtotal * u64::from(self.percent) / 100
    }
}

/// Fixed in-memory coupon table
#[derive(Debug, Clone)]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// The codes the restaurant currently honors
    pub fn house_catalog() -> Self {
        let coupons = [
            ("BENVENUTO10", 10),
            ("PIZZAFAN15", 15),
            (ARCADE_REWARD_CODE, 20),
        ]
        .into_iter()
        .filter_map(|(code, percent)| Coupon::new(code, percent).ok())
        .collect();
        Self { coupons }
    }

    /// Case-insensitive exact lookup of a user-entered code
    pub fn lookup(&self, code: &str) -> Option<&Coupon> {
        let wanted = code.trim();
        self.coupons
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(wanted))
    }
}
