//! # Discount Codes
//!
//! Recognises the discount codes the checkout accepts.
//!
//! ## Matching Rules
//! - Exact, case-sensitive comparison: `"SAVE15"` matches, `"save15"` and
//!   `" SAVE15"` do not
//! - An empty string means "no code entered"
//! - Only one code per checkout; the calculator takes `Option<&str>`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CheckoutError;
use crate::types::Rate;

/// A recognised discount code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DiscountCode {
    /// 15% off the subtotal.
    #[serde(rename = "SAVE15")]
    Save15,
}

impl DiscountCode {
    /// Looks up a code by its exact text.
    ///
    /// ## Example
    /// ```rust
    /// use qa_core::DiscountCode;
    ///
    /// assert_eq!(DiscountCode::parse("SAVE15").unwrap(), DiscountCode::Save15);
    /// assert!(DiscountCode::parse("save15").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self, CheckoutError> {
        match code {
            "SAVE15" => Ok(DiscountCode::Save15),
            other => Err(CheckoutError::InvalidDiscountCode {
                code: other.to_string(),
            }),
        }
    }

    /// The code as a customer types it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiscountCode::Save15 => "SAVE15",
        }
    }

    /// Fraction of the subtotal this code removes.
    pub const fn rate(&self) -> Rate {
        match self {
            DiscountCode::Save15 => Rate::from_bps(1500),
        }
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountCode {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiscountCode::parse(s)
    }
}

/// What happened to the discount code supplied with a checkout.
///
/// `Rejected` still comes with valid totals (no discount applied); it is
/// reported so the caller can show "invalid code" or fail the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiscountOutcome {
    /// No code, or an empty one, was supplied.
    NotRequested,
    /// The code was recognised and its discount applied.
    Applied { code: DiscountCode },
    /// The code was not recognised; discount is zero.
    Rejected { code: String },
}

impl DiscountOutcome {
    /// Classifies the optional code text a caller supplied.
    pub fn from_input(code: Option<&str>) -> Self {
        match code {
            None | Some("") => DiscountOutcome::NotRequested,
            Some(text) => match DiscountCode::parse(text) {
                Ok(code) => DiscountOutcome::Applied { code },
                Err(_) => DiscountOutcome::Rejected {
                    code: text.to_string(),
                },
            },
        }
    }

    /// The applied code, if any.
    pub fn applied(&self) -> Option<DiscountCode> {
        match self {
            DiscountOutcome::Applied { code } => Some(*code),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, DiscountOutcome::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        assert_eq!(DiscountCode::parse("SAVE15").unwrap(), DiscountCode::Save15);

        for text in ["save15", "Save15", " SAVE15", "SAVE15 ", "SAVE150", "SAVE1"] {
            assert_eq!(
                DiscountCode::parse(text).unwrap_err(),
                CheckoutError::InvalidDiscountCode {
                    code: text.to_string()
                }
            );
        }
    }

    #[test]
    fn test_save15_rate() {
        assert_eq!(DiscountCode::Save15.rate().bps(), 1500);
        assert_eq!(DiscountCode::Save15.to_string(), "SAVE15");
    }

    #[test]
    fn test_outcome_from_input() {
        assert_eq!(DiscountOutcome::from_input(None), DiscountOutcome::NotRequested);
        assert_eq!(DiscountOutcome::from_input(Some("")), DiscountOutcome::NotRequested);
        assert_eq!(
            DiscountOutcome::from_input(Some("SAVE15")),
            DiscountOutcome::Applied {
                code: DiscountCode::Save15
            }
        );

        let rejected = DiscountOutcome::from_input(Some("WRONG10"));
        assert!(rejected.is_rejected());
        assert_eq!(rejected.applied(), None);
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(DiscountOutcome::Applied {
            code: DiscountCode::Save15,
        })
        .unwrap();
        assert_eq!(json["status"], "applied");
        assert_eq!(json["code"], "SAVE15");

        let json = serde_json::to_value(DiscountOutcome::Rejected {
            code: "WRONG10".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["code"], "WRONG10");
    }
}
