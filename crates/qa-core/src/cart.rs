//! # Cart
//!
//! An immutable, validated sequence of line items.
//!
//! ## Why Immutable?
//! A checkout page mutates its cart constantly: quantities change, items
//! come and go, codes are applied. Instead of keeping one shared cart and
//! patching running totals, every change builds a new `Cart` value and the
//! calculator recomputes all figures from scratch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI change           New input                 Fresh totals             │
//! │  ─────────           ─────────                 ────────────             │
//! │  qty 2 → 3  ───────► cart.with_quantity(0, 3) ─► calculate(&cart, ..)   │
//! │  add item   ───────► cart.with_item(item)  ───► calculate(&cart, ..)    │
//! │  apply code ───────► same cart, new code   ───► calculate(&cart, ..)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Shape
//! A cart is a plain array of line items. `unitPrice` is a decimal string
//! or a whole number of dollars; `unitPriceCents` is integer cents:
//! ```json
//! [
//!   { "unitPrice": "20.00", "quantity": 2 },
//!   { "unitPrice": 20, "quantity": 2 },
//!   { "unitPriceCents": 1099, "quantity": 1 }
//! ]
//! ```
//! Fractional JSON numbers (`19.99`) are rejected rather than rounded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::checkout::{calculate, CheckoutOutcome};
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ShippingMethod;
use crate::validation::{validate_cart_size, validate_quantity, validate_unit_price, ValidationResult};

// =============================================================================
// Line Item
// =============================================================================

/// One priced line in the cart.
///
/// Fields are private so that every `LineItem` in existence has passed
/// [`LineItem::new`]'s checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "unitPriceCents")]
    unit_price: Money,
    quantity: i64,
}

impl LineItem {
    /// Creates a validated line item.
    ///
    /// ## Example
    /// ```rust
    /// use qa_core::{LineItem, Money};
    ///
    /// let item = LineItem::new(Money::from_cents(2000), 2).unwrap();
    /// assert_eq!(item.line_total().cents(), 4000);
    ///
    /// assert!(LineItem::new(Money::from_cents(-1), 1).is_err());
    /// assert!(LineItem::new(Money::from_cents(100), -1).is_err());
    /// ```
    pub fn new(unit_price: Money, quantity: i64) -> ValidationResult<Self> {
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        Ok(LineItem {
            unit_price,
            quantity,
        })
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Wire form accepted when deserializing a [`LineItem`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemInput {
    unit_price: Option<PriceInput>,
    unit_price_cents: Option<i64>,
    quantity: i64,
}

/// The forms `unitPrice` may take on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Text(String),
    WholeDollars(i64),
    Number(f64),
}

impl TryFrom<PriceInput> for Money {
    type Error = ValidationError;

    fn try_from(input: PriceInput) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "unitPrice".to_string(),
            reason: reason.to_string(),
        };

        match input {
            PriceInput::Text(text) => text.parse(),
            PriceInput::WholeDollars(dollars) => dollars
                .checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| invalid("amount is too large")),
            PriceInput::Number(_) => Err(invalid(
                "fractional numbers are not accepted; use a decimal string such as \"19.99\" or unitPriceCents",
            )),
        }
    }
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = ValidationError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        let unit_price = match (input.unit_price, input.unit_price_cents) {
            (Some(price), None) => Money::try_from(price)?,
            (None, Some(cents)) => Money::from_cents(cents),
            (Some(_), Some(_)) => {
                return Err(ValidationError::InvalidFormat {
                    field: "line item".to_string(),
                    reason: "give either unitPrice or unitPriceCents, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(ValidationError::Required {
                    field: "unitPrice".to_string(),
                })
            }
        };

        LineItem::new(unit_price, input.quantity)
    }
}

impl<'de> Deserialize<'de> for LineItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = LineItemInput::deserialize(deserializer)?;
        LineItem::try_from(input).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered, validated collection of line items.
///
/// ## Invariants
/// - At most [`MAX_CART_ITEMS`](crate::MAX_CART_ITEMS) lines
/// - Every line satisfies [`LineItem::new`]'s rules
/// - Never mutated in place; "changes" return a new cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Builds a cart from line items, checking the size limit.
    pub fn new(items: Vec<LineItem>) -> ValidationResult<Self> {
        validate_cart_size(items.len())?;
        Ok(Cart { items })
    }

    /// An empty cart.
    pub fn empty() -> Self {
        Cart::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price × quantity across all lines. Zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Returns a new cart with `item` appended.
    pub fn with_item(&self, item: LineItem) -> ValidationResult<Cart> {
        let mut items = self.items.clone();
        items.push(item);
        Cart::new(items)
    }

    /// Returns a new cart with the line at `index` set to `quantity`.
    ///
    /// ## Errors
    /// - `OutOfRange` if `index` is not a line of this cart
    /// - the quantity rules of [`LineItem::new`]
    pub fn with_quantity(&self, index: usize, quantity: i64) -> ValidationResult<Cart> {
        let line = self.items.get(index).ok_or_else(|| ValidationError::OutOfRange {
            field: "line index".to_string(),
            min: 0,
            max: self.items.len() as i64 - 1,
        })?;

        let mut items = self.items.clone();
        items[index] = LineItem::new(line.unit_price(), quantity)?;
        Cart::new(items)
    }

    /// Returns a new cart without the line at `index`, or `None` if there
    /// is no such line.
    pub fn without_item(&self, index: usize) -> Option<Cart> {
        if index >= self.items.len() {
            return None;
        }
        let mut items = self.items.clone();
        items.remove(index);
        Some(Cart { items })
    }
}

impl Serialize for Cart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<LineItem>::deserialize(deserializer)?;
        Cart::new(items).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Checkout Request
// =============================================================================

/// Everything a checkout form submits, as one JSON document.
///
/// ```json
/// {
///   "items": [{ "unitPrice": "50.00", "quantity": 1 }],
///   "discountCode": "SAVE15",
///   "shippingMethod": "express"
/// }
/// ```
///
/// A missing `shippingMethod` means "use the caller's default"; see
/// [`CheckoutRequest::evaluate_with_default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    #[ts(as = "Vec<LineItem>")]
    pub items: Cart,

    #[serde(default)]
    pub discount_code: Option<String>,

    #[serde(default)]
    pub shipping_method: Option<ShippingMethod>,
}

impl CheckoutRequest {
    /// Runs the calculator, with standard shipping when none was chosen.
    pub fn evaluate(&self) -> CheckoutOutcome {
        self.evaluate_with_default(ShippingMethod::default())
    }

    /// Runs the calculator, falling back to `default_shipping`.
    pub fn evaluate_with_default(&self, default_shipping: ShippingMethod) -> CheckoutOutcome {
        calculate(
            &self.items,
            self.discount_code.as_deref(),
            self.shipping_method.unwrap_or(default_shipping),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
