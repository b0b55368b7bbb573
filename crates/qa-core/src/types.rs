//! # Shared Value Types
//!
//! Small value types used across the checkout path.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │ ShippingMethod  │   │   CartTotals    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Standard $0    │   │  subtotal       │       │
//! │  │  1500 = 15%     │   │  Express  $10   │   │  discount_amount│       │
//! │  └─────────────────┘   └─────────────────┘   │  shipping_cost  │       │
//! │                                              │  total          │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::EXPRESS_SHIPPING_CENTS;

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (the SAVE15 discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// How the order is shipped. The cost is a flat fee, independent of the
/// cart's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Free shipping.
    #[default]
    Standard,
    /// $10.00 flat.
    Express,
}

impl ShippingMethod {
    /// Returns the flat shipping fee for this method.
    pub const fn cost(&self) -> Money {
        match self {
            ShippingMethod::Standard => Money::zero(),
            ShippingMethod::Express => Money::from_cents(EXPRESS_SHIPPING_CENTS),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `standard`, `STANDARD` and `Standard` all parse.
impl FromStr for ShippingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            _ => Err(ValidationError::InvalidFormat {
                field: "shipping method".to_string(),
                reason: format!("'{}' is not one of: standard, express", s.trim()),
            }),
        }
    }
}

/// Deserializes through [`FromStr`] so `"EXPRESS"` from a UI form is
/// accepted as well as the canonical `"express"`.
impl<'de> Deserialize<'de> for ShippingMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// The four figures shown on a checkout page.
///
/// Computed, never stored: every change to the cart, the discount code or
/// the shipping method produces a fresh value from
/// [`calculate`](crate::checkout::calculate).
///
/// ## Invariants
/// - `total == (subtotal - discount_amount) + shipping_cost`
/// - every field is non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub shipping_cost: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
