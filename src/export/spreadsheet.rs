//! Spreadsheet encoder: three sheets of per-employee rows, per-department
//! rollups, and company-wide summary figures. Assumes validated, already
//! aggregated input and does not re-validate.

use crate::core::{metrics, DepartmentRollup, Employee, ReportBundle};
use anyhow::{Context, Result};
use log::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

const EMPLOYEE_COLUMNS: [&str; 13] = [
    "Employee ID",
    "Name",
    "Email",
    "Role",
    "Department",
    "Joining Date",
    "Salary",
    "Efficiency Score",
    "Quality Score",
    "Consistency Score",
    "Attendance Score",
    "Last Review Date",
    "Overall Performance",
];

const DEPARTMENT_COLUMNS: [&str; 9] = [
    "Department ID",
    "Total Employees",
    "Average Performance",
    "Average Efficiency",
    "Average Quality",
    "Average Consistency",
    "Average Attendance",
    "Total Salary Budget",
    "Average Salary",
];

const SUMMARY_COLUMNS: [&str; 5] = [
    "Total Employees",
    "Number of Departments",
    "Average Company Performance",
    "Total Salary Budget",
    "Report Generated Date",
];

/// Write the three-sheet workbook to `path`.
pub fn write_workbook(report: &ReportBundle, employees: &[Employee], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    write_employee_sheet(workbook.add_worksheet(), employees)?;
    write_department_sheet(workbook.add_worksheet(), &report.departments)?;
    write_summary_sheet(workbook.add_worksheet(), report)?;

    workbook
        .save(path)
        .with_context(|| format!("failed to write workbook {}", path.display()))?;
    info!("wrote spreadsheet report to {}", path.display());
    Ok(())
}

fn header_format() -> Format {
    Format::new().set_bold()
}

fn write_headers(sheet: &mut Worksheet, columns: &[&str]) -> Result<()> {
    let bold = header_format();
    for (col, heading) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *heading, &bold)?;
    }
    Ok(())
}

fn write_employee_sheet(sheet: &mut Worksheet, employees: &[Employee]) -> Result<()> {
    sheet.set_name("Employee Details")?;
    write_headers(sheet, &EMPLOYEE_COLUMNS)?;

    for (index, employee) in employees.iter().enumerate() {
        let row = index as u32 + 1;
        let perf = &employee.performance_metrics;
        sheet.write_string(row, 0, &employee.id)?;
        sheet.write_string(row, 1, &employee.name)?;
        sheet.write_string(row, 2, &employee.email)?;
        sheet.write_string(row, 3, &employee.role)?;
        sheet.write_string(row, 4, &employee.department_id)?;
        sheet.write_string(row, 5, &employee.joining_date)?;
        sheet.write_number(row, 6, employee.salary)?;
        sheet.write_number(row, 7, perf.efficiency)?;
        sheet.write_number(row, 8, perf.quality)?;
        sheet.write_number(row, 9, perf.consistency)?;
        sheet.write_number(row, 10, perf.attendance)?;
        sheet.write_string(row, 11, &perf.last_review_date)?;
        sheet.write_number(row, 12, employee.overall_performance())?;
    }
    Ok(())
}

fn write_department_sheet(sheet: &mut Worksheet, rollups: &[DepartmentRollup]) -> Result<()> {
    sheet.set_name("Department Performance")?;
    write_headers(sheet, &DEPARTMENT_COLUMNS)?;

    for (index, rollup) in rollups.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, &rollup.department_id)?;
        sheet.write_number(row, 1, rollup.count as f64)?;
        sheet.write_number(row, 2, metrics::round2(rollup.average_performance()))?;
        sheet.write_number(row, 3, metrics::round2(rollup.average_efficiency()))?;
        sheet.write_number(row, 4, metrics::round2(rollup.average_quality()))?;
        sheet.write_number(row, 5, metrics::round2(rollup.average_consistency()))?;
        sheet.write_number(row, 6, metrics::round2(rollup.average_attendance()))?;
        sheet.write_number(row, 7, rollup.salary_total)?;
        sheet.write_number(row, 8, metrics::round2(rollup.average_salary()))?;
    }
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &ReportBundle) -> Result<()> {
    sheet.set_name("Organization Summary")?;
    write_headers(sheet, &SUMMARY_COLUMNS)?;

    let summary = &report.summary;
    sheet.write_number(1, 0, summary.total_employees as f64)?;
    sheet.write_number(1, 1, summary.department_count as f64)?;
    sheet.write_number(1, 2, summary.average_performance)?;
    sheet.write_number(1, 3, summary.total_salary_budget)?;
    sheet.write_string(1, 4, &summary.generated_at.to_rfc3339())?;
    Ok(())
}
