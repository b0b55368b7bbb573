//! # Error Types
//!
//! Domain-specific error types for qa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  qa-core errors (this file)                                            │
//! │  ├── CoreError        - Umbrella for everything below                  │
//! │  ├── CheckoutError    - Checkout rule violations (bad discount code)   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── anyhow::Error    - CoreError + file/JSON context                  │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├──► CoreError ──► anyhow ──► exit status      │
//! │  CheckoutError ─────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, code, ID)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for qa-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Checkout rule violation (wraps CheckoutError).
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// No test case with the requested ID exists in the plan.
    #[error("Test case not found: {0}")]
    TestCaseNotFound(String),
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Conditions raised by the checkout calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A non-empty discount code was supplied that is not recognised.
    ///
    /// ## When This Occurs
    /// ```text
    /// Apply code "WRONG10"
    ///      │
    ///      ▼
    /// DiscountCode::parse → no match
    ///      │
    ///      ▼
    /// Totals computed with zero discount
    /// DiscountOutcome::Rejected { code: "WRONG10" }
    ///      │
    ///      ▼
    /// Caller decides: warn and continue, or into_result() → this error
    /// ```
    #[error("Invalid discount code: {code}")]
    InvalidDiscountCode { code: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied values don't meet requirements and are
/// raised before any calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., malformed decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
