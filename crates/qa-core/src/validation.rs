//! # Validation Module
//!
//! Input validation rules for qa-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── JSON shape, field names                                           │
//! │  └── Money parsing ("20.00" → 2000 cents)                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (LineItem::new, Cart::new)                      │
//! │  └── THIS MODULE: range rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: checkout::calculate                                          │
//! │  └── Never fails: only validated values reach it                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that discount codes are NOT validated here. Any non-empty text is a
//! legitimate input to the calculator, which reports unknown codes through
//! [`DiscountOutcome::Rejected`](crate::discount::DiscountOutcome).
//!
//! ## Usage
//! ```rust
//! use qa_core::validation::{validate_quantity, validate_unit_price};
//! use qa_core::Money;
//!
//! validate_unit_price(Money::from_cents(2000)).unwrap();
//! validate_quantity(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted test case identifier.
pub const MAX_TEST_ID_LEN: usize = 50;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (free items are allowed)
/// - Must not exceed MAX_UNIT_PRICE_CENTS
///
/// ## Example
/// ```rust
/// use qa_core::validation::validate_unit_price;
/// use qa_core::Money;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        });
    }

    if price.cents() > MAX_UNIT_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "unit price (cents)".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be non-negative; zero is a legal (empty) line
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// ```text
/// validate_quantity(qty)
///      │
///      ├── qty < 0?     → MustBeNonNegative
///      │
///      ├── qty > 9999?  → OutOfRange
///      │
///      └── OK
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items in a cart.
pub fn validate_cart_size(items: usize) -> ValidationResult<()> {
    if items > MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a test case identifier used to look up a plan row.
///
/// ## Returns
/// The trimmed identifier.
pub fn validate_test_id(id: &str) -> ValidationResult<&str> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "test_id".to_string(),
        });
    }

    if id.chars().count() > MAX_TEST_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "test_id".to_string(),
            max: MAX_TEST_ID_LEN,
        });
    }

    Ok(id)
}

// =============================================================================
// Unit Tests
// =============================================================================
