use crate::commands;
use crate::config::HrlyticsConfig;
use crate::filters::{sort_employees, EmployeeFilter, SortDirection, SortField};
use crate::output::tables;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EmployeesConfig {
    pub path: PathBuf,
    pub department: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub direction: SortDirection,
    pub config: Option<PathBuf>,
}

pub fn handle_employees(config: EmployeesConfig) -> Result<()> {
    let settings = HrlyticsConfig::load(config.config.as_deref())?;
    let store = commands::load_store(&config.path, &settings)?;

    let filter = EmployeeFilter {
        department: config.department.clone(),
        joined_after: None,
        joined_before: None,
        search: config.search.clone(),
    };
    let mut employees = filter.apply(store.employees());
    if let Some(field) = config.sort_by {
        sort_employees(&mut employees, field, config.direction);
    }

    if employees.is_empty() {
        println!("No employees match the given filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(tables::EMPLOYEE_HEADERS.iter().map(|h| Cell::new(h)));
    for row in tables::employee_rows(&employees) {
        table.add_row(row);
    }
    println!("{table}");
    println!("{} employee(s)", employees.len());
    Ok(())
}
