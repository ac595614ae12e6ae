use crate::core::ReportBundle;
use crate::output::{tables, ReportWriter};
use anyhow::Result;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

#[derive(Default)]
pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for TerminalWriter {
    fn write_report(&mut self, report: &ReportBundle) -> Result<()> {
        print_header(report);
        print_summary(report);
        print_departments(report);
        Ok(())
    }
}

fn print_header(report: &ReportBundle) {
    println!("{}", "HRlytics Comprehensive Report".bold().blue());
    println!("{}", "=============================".blue());
    if let Some(organization) = &report.organization {
        println!("Organization: {}", organization.bold());
    }
    println!(
        "Generated: {}",
        report.summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn print_summary(report: &ReportBundle) {
    let summary = &report.summary;
    println!("{} Summary:", "📊".bold());
    println!("  Total employees: {}", summary.total_employees);
    println!("  Departments: {}", summary.department_count);

    let performance = format!("{:.1}%", summary.average_performance);
    let colored_performance = match summary.average_performance {
        p if p >= 75.0 => performance.green(),
        p if p >= 50.0 => performance.yellow(),
        _ => performance.red(),
    };
    println!("  Average performance: {colored_performance}");
    println!("  Total salary budget: {:.2}", summary.total_salary_budget);
    println!();
}

fn print_departments(report: &ReportBundle) {
    if report.departments.is_empty() {
        println!("No department data; import an organization file first.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(tables::DEPARTMENT_HEADERS.iter().map(|h| Cell::new(h)));
    for row in tables::department_rows(&report.departments) {
        table.add_row(row);
    }
    println!("{table}");
}
