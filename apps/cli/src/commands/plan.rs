//! `qa-agent parse-plan` and `qa-agent scenario`: test plan handling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use qa_core::{find_test_case, parse_test_plan, TestCase};
use serde::Serialize;
use tracing::{debug, info};

use crate::output::{to_json, OutputFormat};

#[derive(Debug, Args)]
pub struct ParsePlanArgs {
    /// Markdown test plan produced by the test-case generator
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Markdown test plan produced by the test-case generator
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Test_ID of a case to render (repeatable, rendered in the order given)
    #[arg(long = "id", value_name = "TEST_ID", required = true)]
    pub ids: Vec<String>,
}

/// Reads and parses a test plan file.
pub fn load_plan(path: &Path) -> Result<Vec<TestCase>> {
    let markdown = fs::read_to_string(path)
        .with_context(|| format!("failed to read test plan {}", path.display()))?;

    let cases = parse_test_plan(&markdown);
    info!(path = %path.display(), cases = cases.len(), "Parsed test plan");
    Ok(cases)
}

/// Renders one line per case: `ID  [Feature] Scenario -> Expected`.
pub fn render_cases(cases: &[TestCase]) -> String {
    if cases.is_empty() {
        return "No parseable test plan table found.".to_string();
    }

    cases
        .iter()
        .map(|case| {
            format!(
                "{}  [{}] {} -> {}",
                case.test_id, case.feature, case.scenario, case.expected_result
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn execute_parse(args: &ParsePlanArgs, format: OutputFormat) -> Result<()> {
    let cases = load_plan(&args.file)?;

    match format {
        OutputFormat::Pretty => println!("{}", render_cases(&cases)),
        OutputFormat::Json => println!("{}", to_json(&cases)?),
    }

    Ok(())
}

/// A selected case together with its rendered scenario text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub test_case: TestCase,
    pub scenario: String,
}

/// Renders one scenario per requested ID. Fails on the first unknown ID.
pub fn run_scenarios(args: &ScenarioArgs) -> Result<Vec<ScenarioReport>> {
    let cases = load_plan(&args.file)?;

    args.ids
        .iter()
        .map(|id| -> Result<ScenarioReport> {
            let case = find_test_case(&cases, id)?;
            debug!(test_id = %case.test_id, "Rendering scenario");

            Ok(ScenarioReport {
                test_case: case.clone(),
                scenario: case.to_scenario(),
            })
        })
        .collect()
}

pub fn execute_scenario(args: &ScenarioArgs, format: OutputFormat) -> Result<()> {
    let reports = run_scenarios(args)?;

    match format {
        OutputFormat::Pretty => {
            let text: Vec<&str> = reports.iter().map(|r| r.scenario.as_str()).collect();
            println!("{}", text.join("\n\n"));
        }
        OutputFormat::Json => println!("{}", to_json(&reports)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn case(id: &str) -> TestCase {
        TestCase {
            test_id: id.to_string(),
            feature: "Discount Code".to_string(),
            scenario: "Apply SAVE15".to_string(),
            expected_result: "15% off".to_string(),
            grounded_source: "product_specs.md".to_string(),
        }
    }

    #[test]
    fn test_render_cases() {
        assert_eq!(
            render_cases(&[case("TC-001"), case("TC-002")]),
            "TC-001  [Discount Code] Apply SAVE15 -> 15% off\n\
             TC-002  [Discount Code] Apply SAVE15 -> 15% off"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_cases(&[]), "No parseable test plan table found.");
    }

    #[test]
    fn test_run_scenarios_in_requested_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "| TC-001 | Discount Code | Apply SAVE15 | 15% off | specs.md |\n\
             | TC-002 | Shipping | Select Express | $10 added | specs.md |\n"
        )
        .unwrap();

        let args = ScenarioArgs {
            file: file.path().to_path_buf(),
            ids: vec!["TC-002".to_string(), "TC-001".to_string()],
        };
        let reports = run_scenarios(&args).unwrap();

        let ids: Vec<&str> = reports.iter().map(|r| r.test_case.test_id.as_str()).collect();
        assert_eq!(ids, ["TC-002", "TC-001"]);
        assert!(reports[0].scenario.starts_with("Test_ID: TC-002\nFeature: Shipping"));

        let args = ScenarioArgs {
            ids: vec!["TC-001".to_string(), "TC-404".to_string()],
            ..args
        };
        let err = run_scenarios(&args).unwrap_err();
        assert!(err.to_string().contains("TC-404"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_plan(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(err.to_string().contains("failed to read test plan"));
    }
}
