//! `qa-agent totals`: checkout totals for a cart.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use qa_core::{
    Cart, CheckoutError, CheckoutOutcome, CheckoutRequest, DiscountOutcome, LineItem, Money,
    ShippingMethod,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::output::{field_line, to_json, OutputFormat};

#[derive(Debug, Default, Args)]
pub struct TotalsArgs {
    /// Cart file: a checkout request object or a bare array of line items
    #[arg(long, value_name = "FILE")]
    pub cart: Option<PathBuf>,

    /// Extra line item as PRICE:QTY (repeatable), e.g. --item 20.00:2
    #[arg(long = "item", value_name = "PRICE:QTY")]
    pub items: Vec<String>,

    /// Discount code; overrides the one in the cart file
    #[arg(long)]
    pub code: Option<String>,

    /// Shipping method (standard, express); overrides the cart file
    #[arg(long)]
    pub shipping: Option<ShippingMethod>,

    /// Fail when the discount code is not recognised
    #[arg(long)]
    pub strict: bool,
}

/// What `totals` prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsReport {
    pub shipping_method: ShippingMethod,
    #[serde(flatten)]
    pub outcome: CheckoutOutcome,
}

/// Parses a `PRICE:QTY` item argument. One without `:` means quantity 1.
pub fn parse_item_arg(arg: &str) -> Result<LineItem> {
    let (price, qty) = match arg.split_once(':') {
        Some((price, qty)) => {
            let qty = qty
                .trim()
                .parse::<i64>()
                .with_context(|| format!("invalid quantity in item '{arg}'"))?;
            (price, qty)
        }
        None => (arg, 1),
    };

    let price: Money = price
        .parse()
        .with_context(|| format!("invalid price in item '{arg}'"))?;

    LineItem::new(price, qty).with_context(|| format!("invalid item '{arg}'"))
}

/// Reads a cart file. Arrays are taken as line items, objects as a full
/// [`CheckoutRequest`].
pub fn load_request(path: &Path) -> Result<CheckoutRequest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read cart file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let request = if value.is_array() {
        CheckoutRequest {
            items: serde_json::from_value::<Cart>(value)
                .with_context(|| format!("invalid cart in {}", path.display()))?,
            ..CheckoutRequest::default()
        }
    } else {
        serde_json::from_value::<CheckoutRequest>(value)
            .with_context(|| format!("invalid checkout request in {}", path.display()))?
    };

    debug!(path = %path.display(), items = request.items.len(), "Loaded cart file");
    Ok(request)
}

/// Builds the request from the file and flags, runs the calculator and
/// applies the discount policy.
pub fn run_totals(args: &TotalsArgs, config: &CliConfig) -> Result<TotalsReport> {
    let mut request = match &args.cart {
        Some(path) => load_request(path)?,
        None => CheckoutRequest::default(),
    };

    for arg in &args.items {
        let item = parse_item_arg(arg)?;
        request.items = request.items.with_item(item)?;
    }

    if let Some(code) = &args.code {
        request.discount_code = Some(code.clone());
    }
    if let Some(shipping) = args.shipping {
        request.shipping_method = Some(shipping);
    }

    let shipping_method = request.shipping_method.unwrap_or(config.default_shipping);
    let outcome = request.evaluate_with_default(config.default_shipping);

    info!(
        items = request.items.len(),
        subtotal = outcome.totals.subtotal.cents(),
        total = outcome.totals.total.cents(),
        shipping = %shipping_method,
        "Checkout totals calculated"
    );

    if let DiscountOutcome::Rejected { code } = &outcome.discount {
        if args.strict || config.strict_discounts {
            return Err(CheckoutError::InvalidDiscountCode { code: code.clone() }.into());
        }
        warn!(code = %code, "Discount code not recognised, no discount applied");
    }

    Ok(TotalsReport {
        shipping_method,
        outcome,
    })
}

/// Human-readable rendering of a report.
pub fn render_pretty(report: &TotalsReport, config: &CliConfig) -> String {
    let totals = &report.outcome.totals;

    let discount = match &report.outcome.discount {
        DiscountOutcome::NotRequested => config.format_money(totals.discount_amount),
        DiscountOutcome::Applied { code } => format!(
            "-{} ({code})",
            config.format_money(totals.discount_amount)
        ),
        DiscountOutcome::Rejected { code } => format!(
            "{} (code '{code}' not recognised)",
            config.format_money(totals.discount_amount)
        ),
    };

    [
        field_line("Subtotal", &config.format_money(totals.subtotal)),
        field_line("Discount", &discount),
        field_line(
            "Shipping",
            &format!("{} ({})", config.format_money(totals.shipping_cost), report.shipping_method),
        ),
        field_line("Total", &config.format_money(totals.total)),
    ]
    .join("\n")
}

pub fn execute(args: &TotalsArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = run_totals(args, config)?;

    match format {
        OutputFormat::Pretty => println!("{}", render_pretty(&report, config)),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }

    Ok(())
}
