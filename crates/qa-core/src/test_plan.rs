//! # Test Plans
//!
//! The test-case generator answers with a Markdown table. This module turns
//! that table into [`TestCase`] values, renders a chosen case into the
//! scenario text handed to the script generator, and cleans the generated
//! script of Markdown code fences.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LLM answer (Markdown)                                                  │
//! │  | Test_ID | Feature | Scenario | Expected_Result | Grounded_Source |   │
//! │  |---------|---------|----------|-----------------|-----------------|   │
//! │  | TC-001  | Discount| SAVE15   | 15% off         | product_specs.md|   │
//! │       │                                                                 │
//! │       ▼ parse_test_plan                                                 │
//! │  Vec<TestCase>                                                          │
//! │       │                                                                 │
//! │       ▼ find_test_case("TC-001") → to_scenario()                        │
//! │  "Test_ID: TC-001\nFeature: Discount\n..."  ──► script generator        │
//! │                                                  │                      │
//! │                                                  ▼ strip_code_fences    │
//! │                                            runnable script text         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_test_id;

/// Minimum number of cells a table row needs to count as a test case.
const MIN_CELLS: usize = 4;

const FENCE: &str = "```";

/// One row of a generated test plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_id: String,
    pub feature: String,
    pub scenario: String,
    pub expected_result: String,
    /// Document the case was derived from; empty when the row omits it.
    pub grounded_source: String,
}

impl TestCase {
    /// Renders the case as the plain-text scenario passed to the script
    /// generator.
    ///
    /// ## Example
    /// ```rust
    /// use qa_core::TestCase;
    ///
    /// let case = TestCase {
    ///     test_id: "TC-001".into(),
    ///     feature: "Discount".into(),
    ///     scenario: "Apply SAVE15".into(),
    ///     expected_result: "Total reduced by 15%".into(),
    ///     grounded_source: "product_specs.md".into(),
    /// };
    /// assert_eq!(
    ///     case.to_scenario(),
    ///     "Test_ID: TC-001\nFeature: Discount\nScenario: Apply SAVE15\n\
    ///      Expected_Result: Total reduced by 15%\nSource: product_specs.md"
    /// );
    /// ```
    pub fn to_scenario(&self) -> String {
        format!(
            "Test_ID: {}\nFeature: {}\nScenario: {}\nExpected_Result: {}\nSource: {}",
            self.test_id, self.feature, self.scenario, self.expected_result, self.grounded_source
        )
    }

    fn from_cells(cells: &[&str]) -> Self {
        let cell = |i: usize| cells.get(i).map(|c| c.to_string()).unwrap_or_default();
        TestCase {
            test_id: cell(0),
            feature: cell(1),
            scenario: cell(2),
            expected_result: cell(3),
            grounded_source: cell(4),
        }
    }
}

/// Extracts test cases from a Markdown test plan.
///
/// ## Rules
/// - Only lines starting with `|` (after trimming) are table lines; prose
///   around the table is ignored
/// - Header rows (first cell contains `Test_ID`) and separator rows (first
///   cell contains `---`) are skipped
/// - Rows with fewer than four cells are skipped; a missing fifth cell
///   becomes an empty `grounded_source`
///
/// A plan without a parseable table yields an empty vector.
pub fn parse_test_plan(markdown: &str) -> Vec<TestCase> {
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|'))
        .filter_map(|line| {
            let cells: Vec<&str> = line.trim_matches('|').split('|').map(str::trim).collect();
            let first = cells.first().copied().unwrap_or_default();

            if first.contains("---") || first.contains("Test_ID") || cells.len() < MIN_CELLS {
                return None;
            }

            Some(TestCase::from_cells(&cells))
        })
        .collect()
}

/// Finds the case with the given ID (exact match after trimming the query).
pub fn find_test_case<'a>(cases: &'a [TestCase], test_id: &str) -> CoreResult<&'a TestCase> {
    let test_id = validate_test_id(test_id)?;

    cases
        .iter()
        .find(|case| case.test_id == test_id)
        .ok_or_else(|| CoreError::TestCaseNotFound(test_id.to_string()))
}

/// Removes the Markdown code fence an LLM wraps generated code in.
///
/// If the text (ignoring leading whitespace) opens with a fence such as
/// ```` ```python ````, the opening fence line is dropped and the body runs
/// up to the first closing ```` ``` ```` line. Anything after the closing
/// fence (usually an explanation of the script) is discarded. Text without
/// an opening fence is returned unchanged.
///
/// ## Example
/// ```rust
/// use qa_core::strip_code_fences;
///
/// let raw = "```python\nprint('hi')\n```\nThis prints a greeting.";
/// assert_eq!(strip_code_fences(raw), "print('hi')\n");
/// assert_eq!(strip_code_fences("print('hi')"), "print('hi')");
/// ```
pub fn strip_code_fences(script: &str) -> String {
    let body = script.trim_start();
    if !body.starts_with(FENCE) {
        return script.to_string();
    }

    // Skip the opening fence line, language tag included
    let code: Vec<&str> = body
        .lines()
        .skip(1)
        .take_while(|line| line.trim() != FENCE)
        .collect();

    let code = code.join("\n");
    let code = code.trim_end();

    if code.is_empty() {
        String::new()
    } else {
        format!("{code}\n")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "\
Here is the test plan based on the provided documents:

| Test_ID | Feature | Scenario | Expected_Result | Grounded_Source |
|---------|---------|----------|-----------------|-----------------|
| TC-001 | Discount Code | Apply valid code SAVE15 | Total reduced by 15% | product_specs.md |
| TC-002 | Discount Code | Apply invalid code WRONG10 | Error message shown, no discount | product_specs.md |
| TC-003 | Shipping | Select Express shipping | $10 added to total |

All cases are grounded in the uploaded documentation.
";

    #[test]
    fn test_parse_plan_rows() {
        let cases = parse_test_plan(PLAN);
        assert_eq!(cases.len(), 3);

        assert_eq!(cases[0].test_id, "TC-001");
        assert_eq!(cases[0].feature, "Discount Code");
        assert_eq!(cases[0].scenario, "Apply valid code SAVE15");
        assert_eq!(cases[0].expected_result, "Total reduced by 15%");
        assert_eq!(cases[0].grounded_source, "product_specs.md");

        assert_eq!(cases[2].test_id, "TC-003");
        assert_eq!(cases[2].grounded_source, "");
    }

    #[test]
    fn test_parse_skips_short_rows_and_aligned_separators() {
        let plan = "\
| Test_ID | Feature | Scenario | Expected_Result |
|:-------:|:--------|---------:|-----------------|
| TC-010 | Cart | only two cells |
|
| TC-011 | Cart | Remove item | Subtotal updates |
";
        let cases = parse_test_plan(plan);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].test_id, "TC-011");
    }

    #[test]
    fn test_parse_indented_table() {
        let plan = "    | TC-1 | F | S | E | Src |\n\t| TC-2 | F | S | E | Src |";
        let ids: Vec<_> = parse_test_plan(plan).into_iter().map(|c| c.test_id).collect();
        assert_eq!(ids, vec!["TC-1", "TC-2"]);
    }

    #[test]
    fn test_parse_without_table() {
        assert!(parse_test_plan("I could not find any relevant context.").is_empty());
        assert!(parse_test_plan("").is_empty());
    }

    #[test]
    fn test_find_test_case() {
        let cases = parse_test_plan(PLAN);

        assert_eq!(find_test_case(&cases, "TC-002").unwrap().feature, "Discount Code");
        assert_eq!(find_test_case(&cases, "  TC-002 ").unwrap().test_id, "TC-002");

        assert!(matches!(
            find_test_case(&cases, "TC-999"),
            Err(CoreError::TestCaseNotFound(id)) if id == "TC-999"
        ));
        assert!(matches!(find_test_case(&cases, ""), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_case_json_uses_camel_case() {
        let json = serde_json::to_value(&parse_test_plan(PLAN)[0]).unwrap();
        assert_eq!(json["testId"], "TC-001");
        assert_eq!(json["expectedResult"], "Total reduced by 15%");
        assert_eq!(json["groundedSource"], "product_specs.md");
        assert!(json.get("test_id").is_none());
    }

    #[test]
    fn test_scenario_rendering() {
        let cases = parse_test_plan(PLAN);
        assert_eq!(
            cases[1].to_scenario(),
            "Test_ID: TC-002\n\
             Feature: Discount Code\n\
             Scenario: Apply invalid code WRONG10\n\
             Expected_Result: Error message shown, no discount\n\
             Source: product_specs.md"
        );
    }

    #[test]
    fn test_strip_python_fence() {
        let raw = "```python\nfrom selenium import webdriver\n\ndriver = webdriver.Chrome()\n```";
        assert_eq!(
            strip_code_fences(raw),
            "from selenium import webdriver\n\ndriver = webdriver.Chrome()\n"
        );
    }

    #[test]
    fn test_strip_bare_fence_and_leading_whitespace() {
        let raw = "\n  ```\nprint(1)\n```\n\n";
        assert_eq!(strip_code_fences(raw), "print(1)\n");
    }

    #[test]
    fn test_strip_keeps_unfenced_text() {
        let raw = "import time\n# ``` inside a comment\n";
        assert_eq!(strip_code_fences(raw), raw);
    }

    #[test]
    fn test_strip_drops_prose_after_closing_fence() {
        let raw = "```python\nprint(1)\n```\n\nThis script opens checkout.html and checks the total.";
        let cleaned = strip_code_fences(raw);

        assert_eq!(cleaned, "print(1)\n");
        assert!(!cleaned.contains("```"));
    }

    #[test]
    fn test_strip_unclosed_fence_keeps_body() {
        assert_eq!(strip_code_fences("```python\nprint(1)\n"), "print(1)\n");
    }

    #[test]
    fn test_strip_fence_only() {
        assert_eq!(strip_code_fences("```python\n```"), "");
        assert_eq!(strip_code_fences("```"), "");
    }
}
