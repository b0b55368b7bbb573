use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn qa_agent() -> Command {
    let mut cmd = Command::cargo_bin("qa-agent").unwrap();
    // Keep the host environment from leaking into expectations
    cmd.env_remove("QA_CURRENCY_SYMBOL")
        .env_remove("QA_DEFAULT_SHIPPING")
        .env_remove("QA_STRICT_DISCOUNTS")
        .env_remove("QA_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_totals_no_code_standard() {
    qa_agent()
        .args(["totals", "--item", "20.00:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal: $40.00"))
        .stdout(predicate::str::contains("Discount: $0.00"))
        .stdout(predicate::str::contains("Shipping: $0.00 (standard)"))
        .stdout(predicate::str::contains("Total:    $40.00"));
}

#[test]
fn test_totals_save15_standard() {
    qa_agent()
        .args(["totals", "--item", "20.00:2", "--code", "SAVE15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Discount: -$6.00 (SAVE15)"))
        .stdout(predicate::str::contains("Total:    $34.00"));
}

#[test]
fn test_totals_from_request_file() {
    let output = qa_agent()
        .args(["--format", "json", "totals", "--cart"])
        .arg(fixture("checkout.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["shippingMethod"], "express");
    assert_eq!(json["totals"]["subtotal"], 5000);
    assert_eq!(json["totals"]["discountAmount"], 750);
    assert_eq!(json["totals"]["shippingCost"], 1000);
    assert_eq!(json["totals"]["total"], 5250);
    assert_eq!(json["discount"]["status"], "applied");
}

#[test]
fn test_totals_invalid_code_warns_but_succeeds() {
    qa_agent()
        .args(["totals", "--cart"])
        .arg(fixture("items.json"))
        .args(["--code", "WRONG10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal: $30.00"))
        .stdout(predicate::str::contains("code 'WRONG10' not recognised"))
        .stdout(predicate::str::contains("Total:    $30.00"))
        .stderr(predicate::str::contains("Discount code not recognised"));
}

#[test]
fn test_totals_invalid_code_strict_fails() {
    qa_agent()
        .args(["totals", "--item", "10.00:3", "--code", "WRONG10", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid discount code: WRONG10"));
}

#[test]
fn test_totals_strict_from_environment() {
    qa_agent()
        .env("QA_STRICT_DISCOUNTS", "true")
        .args(["totals", "--item", "10.00:3", "--code", "save15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid discount code: save15"));
}

#[test]
fn test_totals_empty_cart_express() {
    qa_agent()
        .args(["totals", "--shipping", "express"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal: $0.00"))
        .stdout(predicate::str::contains("Total:    $10.00"));
}

#[test]
fn test_totals_default_shipping_from_environment() {
    qa_agent()
        .env("QA_DEFAULT_SHIPPING", "express")
        .env("QA_CURRENCY_SYMBOL", "USD ")
        .args(["totals", "--item", "5.00:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shipping: USD 10.00 (express)"))
        .stdout(predicate::str::contains("Total:    USD 15.00"));
}

#[test]
fn test_totals_rejects_bad_cart_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"unitPrice": "-4.00", "quantity": 1}}]"#).unwrap();

    qa_agent()
        .args(["totals", "--cart"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cart"));
}

#[test]
fn test_totals_rejects_unknown_shipping() {
    qa_agent()
        .args(["totals", "--shipping", "overnight"])
        .assert()
        .failure();
}
