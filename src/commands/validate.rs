use crate::config::HrlyticsConfig;
use crate::io;
use crate::validate;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
}

/// Check a file against the import schema, listing every violation with its
/// record index and field.
pub fn handle_validate(config: ValidateConfig) -> Result<()> {
    let settings = HrlyticsConfig::load(config.config.as_deref())?;
    let doc = io::read_json_document(&config.path)?;

    let errors = validate::collect_errors(&doc, settings.unknown_department_policy());
    if errors.is_empty() {
        let parsed = validate::validate_document(&doc, settings.unknown_department_policy())?;
        println!(
            "{} {} is valid: {} employees, {} declared departments",
            "✓".green(),
            config.path.display(),
            parsed.employees.len(),
            parsed.organization.departments.len()
        );
        return Ok(());
    }

    eprintln!(
        "{} {} failed validation ({} problems):",
        "✗".red(),
        config.path.display(),
        errors.len()
    );
    for error in &errors {
        eprintln!("  - {error}");
    }
    anyhow::bail!("invalid organization file");
}
