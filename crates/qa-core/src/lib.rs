//! # qa-core: Pure Business Logic for the QA Agent
//!
//! This crate holds the deterministic part of the QA agent: the checkout
//! rules that generated test cases are written against, and the test-plan
//! handling that turns an LLM's Markdown table into typed test cases.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QA Agent Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        External collaborators (not in this workspace)           │   │
//! │  │   Doc loaders ──► Vector store ──► LLM ──► Web UI               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON / Markdown                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    qa-agent CLI (apps/cli)                      │   │
//! │  │    totals, parse-plan, scenario, clean-script                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ qa-core (THIS CRATE) ★                          │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │ checkout  │  │ test_plan │  │   │
//! │  │   │   Money   │  │   Cart    │  │ calculate │  │ TestCase  │  │   │
//! │  │   │   Rate    │  │ LineItem  │  │ Discount  │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Shared value types (Rate, ShippingMethod, CartTotals)
//! - [`cart`] - Immutable, validated cart of line items
//! - [`discount`] - Discount code recognition
//! - [`checkout`] - The checkout calculator
//! - [`test_plan`] - Markdown test plan parsing and scenario rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, every time
//! 2. **No I/O**: file system, network, and logging live in the CLI
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use qa_core::{calculate, Cart, LineItem, Money, ShippingMethod};
//!
//! let cart = Cart::new(vec![LineItem::new(Money::from_cents(5000), 1).unwrap()]).unwrap();
//! let outcome = calculate(&cart, Some("SAVE15"), ShippingMethod::Express);
//!
//! assert_eq!(outcome.totals.subtotal.cents(), 5000);
//! assert_eq!(outcome.totals.discount_amount.cents(), 750);
//! assert_eq!(outcome.totals.shipping_cost.cents(), 1000);
//! assert_eq!(outcome.totals.total.cents(), 5250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod discount;
pub mod error;
pub mod money;
pub mod test_plan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CheckoutRequest, LineItem};
pub use checkout::{calculate, CheckoutOutcome};
pub use discount::{DiscountCode, DiscountOutcome};
pub use error::{CheckoutError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use test_plan::{find_test_case, parse_test_plan, strip_code_fences, TestCase};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of line items in a single cart.
pub const MAX_CART_ITEMS: usize = 1_000;

/// Maximum quantity of a single line item.
pub const MAX_ITEM_QUANTITY: i64 = 9_999;

/// Maximum unit price in cents ($10,000,000.00).
///
/// Together with the two limits above this keeps every subtotal well
/// inside `i64`.
pub const MAX_UNIT_PRICE_CENTS: i64 = 1_000_000_000;

/// Flat fee for express shipping, in cents ($10.00).
pub const EXPRESS_SHIPPING_CENTS: i64 = 1_000;
