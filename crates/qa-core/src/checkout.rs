//! # Checkout Calculator
//!
//! Computes subtotal, discount, shipping and total for a cart.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate(&cart, code, shipping)                                       │
//! │                                                                         │
//! │  cart ──► Σ unit_price × qty ──────────────► subtotal                   │
//! │                                                 │                       │
//! │  code ──► DiscountOutcome::from_input           │                       │
//! │             ├── NotRequested ──► 0              │                       │
//! │             ├── Applied(SAVE15) ► subtotal×15% ─┼─► discount_amount     │
//! │             └── Rejected ──────► 0 (reported)   │                       │
//! │                                                 │                       │
//! │  shipping ─► Standard $0 / Express $10 ─────────┼─► shipping_cost       │
//! │                                                 ▼                       │
//! │                     total = (subtotal − discount) + shipping            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The function is pure: no caching, no shared state. Calling it twice with
//! the same inputs yields the same outcome, and concurrent callers need no
//! coordination.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::discount::DiscountOutcome;
use crate::error::CheckoutError;
use crate::money::Money;
use crate::types::{CartTotals, ShippingMethod};

/// Result of one checkout calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOutcome {
    pub totals: CartTotals,
    pub discount: DiscountOutcome,
}

impl CheckoutOutcome {
    /// The code text that was rejected, if any.
    pub fn rejected_code(&self) -> Option<&str> {
        match &self.discount {
            DiscountOutcome::Rejected { code } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Strict view: a rejected code becomes an error.
    ///
    /// ## Example
    /// ```rust
    /// use qa_core::{calculate, Cart, CheckoutError, ShippingMethod};
    ///
    /// let outcome = calculate(&Cart::empty(), Some("WRONG10"), ShippingMethod::Standard);
    /// assert_eq!(
    ///     outcome.into_result(),
    ///     Err(CheckoutError::InvalidDiscountCode { code: "WRONG10".into() })
    /// );
    /// ```
    pub fn into_result(self) -> Result<CartTotals, CheckoutError> {
        match self.discount {
            DiscountOutcome::Rejected { code } => Err(CheckoutError::InvalidDiscountCode { code }),
            _ => Ok(self.totals),
        }
    }
}

/// Computes the checkout totals for `cart`.
///
/// ## Rules
/// - `subtotal` = Σ unit price × quantity; zero for an empty cart
/// - `"SAVE15"` (exact, case-sensitive) takes 15% off the subtotal, rounded
///   half-up to the cent. Any other non-empty code applies no discount and
///   is reported as [`DiscountOutcome::Rejected`]
/// - Standard shipping is free, express is $10.00 flat
/// - `total` = (subtotal − discount) + shipping, never negative
///
/// ## Example
/// ```rust
/// use qa_core::{calculate, Cart, LineItem, Money, ShippingMethod};
///
/// let cart = Cart::new(vec![LineItem::new(Money::from_cents(2000), 2).unwrap()]).unwrap();
///
/// let outcome = calculate(&cart, Some("SAVE15"), ShippingMethod::Standard);
/// assert_eq!(outcome.totals.discount_amount.cents(), 600);
/// assert_eq!(outcome.totals.total.cents(), 3400);
/// ```
pub fn calculate(cart: &Cart, code: Option<&str>, shipping: ShippingMethod) -> CheckoutOutcome {
    let subtotal = cart.subtotal();

    let discount = DiscountOutcome::from_input(code);
    let discount_amount = match discount.applied() {
        Some(code) => subtotal.portion(code.rate()),
        None => Money::zero(),
    };

    let shipping_cost = shipping.cost();
    let total = (subtotal - discount_amount).max(Money::zero()) + shipping_cost;

    CheckoutOutcome {
        totals: CartTotals {
            subtotal,
            discount_amount,
            shipping_cost,
            total,
        },
        discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountCode;
    use crate::LineItem;

    fn cart(lines: &[(i64, i64)]) -> Cart {
        Cart::new(
            lines
                .iter()
                .map(|&(cents, qty)| LineItem::new(Money::from_cents(cents), qty).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn cents(totals: &CartTotals) -> (i64, i64, i64, i64) {
        (
            totals.subtotal.cents(),
            totals.discount_amount.cents(),
            totals.shipping_cost.cents(),
            totals.total.cents(),
        )
    }

    #[test]
    fn test_no_code_standard_shipping() {
        let outcome = calculate(&cart(&[(2000, 2)]), None, ShippingMethod::Standard);
        assert_eq!(cents(&outcome.totals), (4000, 0, 0, 4000));
        assert_eq!(outcome.discount, DiscountOutcome::NotRequested);
    }

    #[test]
    fn test_save15_standard_shipping() {
        let outcome = calculate(&cart(&[(2000, 2)]), Some("SAVE15"), ShippingMethod::Standard);
        assert_eq!(cents(&outcome.totals), (4000, 600, 0, 3400));
        assert_eq!(
            outcome.discount,
            DiscountOutcome::Applied {
                code: DiscountCode::Save15
            }
        );
    }

    #[test]
    fn test_save15_express_shipping() {
        let outcome = calculate(&cart(&[(5000, 1)]), Some("SAVE15"), ShippingMethod::Express);
        assert_eq!(cents(&outcome.totals), (5000, 750, 1000, 5250));
    }

    #[test]
    fn test_invalid_code_is_reported_not_applied() {
        let outcome = calculate(&cart(&[(1000, 3)]), Some("WRONG10"), ShippingMethod::Standard);
        assert_eq!(cents(&outcome.totals), (3000, 0, 0, 3000));
        assert_eq!(outcome.rejected_code(), Some("WRONG10"));
        assert_eq!(
            outcome.into_result(),
            Err(CheckoutError::InvalidDiscountCode {
                code: "WRONG10".to_string()
            })
        );
    }

    #[test]
    fn test_empty_cart_express_pays_shipping_only() {
        let outcome = calculate(&Cart::empty(), None, ShippingMethod::Express);
        assert_eq!(cents(&outcome.totals), (0, 0, 1000, 1000));
    }

    #[test]
    fn test_empty_code_is_no_code() {
        let outcome = calculate(&cart(&[(1000, 1)]), Some(""), ShippingMethod::Standard);
        assert_eq!(outcome.discount, DiscountOutcome::NotRequested);
        assert!(outcome.into_result().is_ok());
    }

    #[test]
    fn test_lowercase_code_is_rejected() {
        let outcome = calculate(&cart(&[(1000, 1)]), Some("save15"), ShippingMethod::Standard);
        assert!(outcome.discount.is_rejected());
        assert!(outcome.totals.discount_amount.is_zero());
    }

    #[test]
    fn test_shipping_independent_of_cart_size() {
        for lines in [vec![], vec![(1, 1)], vec![(100_000, 50), (999, 9_999)]] {
            let c = cart(&lines);
            let standard = calculate(&c, None, ShippingMethod::Standard);
            let express = calculate(&c, None, ShippingMethod::Express);

            assert!(standard.totals.shipping_cost.is_zero());
            assert_eq!(express.totals.shipping_cost.cents(), 1000);
            assert_eq!(express.totals.total.cents() - standard.totals.total.cents(), 1000);
        }
    }

    #[test]
    fn test_arithmetic_identity_and_non_negative_totals() {
        let carts = [
            cart(&[]),
            cart(&[(1, 1)]),
            cart(&[(3, 1)]),
            cart(&[(10, 1)]),
            cart(&[(1099, 7), (250, 3), (0, 4)]),
            cart(&[(crate::MAX_UNIT_PRICE_CENTS, crate::MAX_ITEM_QUANTITY)]),
        ];
        let codes = [None, Some(""), Some("SAVE15"), Some("NOPE")];
        let methods = [ShippingMethod::Standard, ShippingMethod::Express];

        for c in &carts {
            for code in codes {
                for method in methods {
                    let t = calculate(c, code, method).totals;
                    assert_eq!(t.total, (t.subtotal - t.discount_amount) + t.shipping_cost);
                    assert!(!t.total.is_negative());
                    assert!(!t.discount_amount.is_negative());
                    assert!(t.discount_amount <= t.subtotal);
                }
            }
        }
    }

    #[test]
    fn test_discount_is_fifteen_percent_when_exact() {
        // Any subtotal that is a multiple of 20 cents has an exact 15% portion
        for subtotal in (0..=100_000).step_by(20) {
            let t = calculate(&cart(&[(subtotal, 1)]), Some("SAVE15"), ShippingMethod::Standard).totals;
            assert_eq!(t.discount_amount.cents() * 100, subtotal * 15);
        }
    }

    #[test]
    fn test_idempotent() {
        let c = cart(&[(1099, 3), (450, 2)]);
        let first = calculate(&c, Some("SAVE15"), ShippingMethod::Express);
        let second = calculate(&c, Some("SAVE15"), ShippingMethod::Express);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recomputes_after_cart_change() {
        let c = cart(&[(2000, 2)]);
        let before = calculate(&c, Some("SAVE15"), ShippingMethod::Standard);

        let changed = c.with_quantity(0, 3).unwrap();
        let after = calculate(&changed, Some("SAVE15"), ShippingMethod::Standard);

        assert_eq!(cents(&before.totals), (4000, 600, 0, 3400));
        assert_eq!(cents(&after.totals), (6000, 900, 0, 5100));
    }
}
