use crate::aggregate;
use crate::commands;
use crate::config::HrlyticsConfig;
use crate::core::ReportBundle;
use crate::filters::{self, EmployeeFilter};
use crate::output::{self, OutputFormat};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub department: Option<String>,
    pub joined_after: Option<String>,
    pub joined_before: Option<String>,
    pub search: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let settings = HrlyticsConfig::load(config.config.as_deref())?;
    let store = commands::load_store(&config.path, &settings)?;

    let filter = build_filter(&config)?;
    let report = if filter.is_empty() {
        store.report_bundle()
    } else {
        filtered_bundle(&store, &filter)
    };

    output::output_report(&report, config.format, config.output)
}

fn build_filter(config: &ReportConfig) -> Result<EmployeeFilter> {
    Ok(EmployeeFilter {
        department: config.department.clone(),
        joined_after: parse_cli_date(config.joined_after.as_deref())?,
        joined_before: parse_cli_date(config.joined_before.as_deref())?,
        search: config.search.clone(),
    })
}

/// Unlike employee joining dates, a date the user typed on the command line
/// must parse.
fn parse_cli_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) => filters::parse_date(raw)
            .map(Some)
            .ok_or_else(|| anyhow!("invalid date `{raw}`; expected YYYY-MM-DD")),
    }
}

fn filtered_bundle(store: &crate::store::DataStore, filter: &EmployeeFilter) -> ReportBundle {
    let employees = filter.apply(store.employees());
    let rollups = aggregate::aggregate_departments(&employees);
    let summary = aggregate::company_summary(&rollups, employees.len());
    ReportBundle {
        organization: store.organization().map(|o| o.name.clone()),
        summary,
        departments: rollups,
    }
}
