//! `qa-agent clean-script`: strip Markdown fences from generated code.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use qa_core::strip_code_fences;
use serde_json::json;
use tracing::debug;

use crate::output::{to_json, OutputFormat};

#[derive(Debug, Args)]
pub struct CleanScriptArgs {
    /// Generated script text; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Reads the script from `path` (or stdin for `-`) and strips its fences.
pub fn run_clean_script(path: &Path) -> Result<String> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read script from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?
    };

    let cleaned = strip_code_fences(&raw);
    debug!(before = raw.len(), after = cleaned.len(), "Stripped code fences");
    Ok(cleaned)
}

pub fn execute(args: &CleanScriptArgs, format: OutputFormat) -> Result<()> {
    let script = run_clean_script(&args.file)?;

    match format {
        OutputFormat::Pretty => print!("{script}"),
        OutputFormat::Json => println!("{}", to_json(&json!({ "script": script }))?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clean_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "```python\nimport unittest\n```\n").unwrap();

        assert_eq!(run_clean_script(file.path()).unwrap(), "import unittest\n");
    }
}
