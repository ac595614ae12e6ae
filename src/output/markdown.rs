use crate::core::ReportBundle;
use crate::output::{tables, ReportWriter};
use anyhow::Result;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ReportBundle) -> Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_departments(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ReportBundle) -> Result<()> {
        writeln!(self.writer, "# HRlytics Comprehensive Report")?;
        writeln!(self.writer)?;
        if let Some(organization) = &report.organization {
            writeln!(self.writer, "Organization: {organization}")?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            report.summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ReportBundle) -> Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Organization Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Total Employees | {} |",
            summary.total_employees
        )?;
        writeln!(
            self.writer,
            "| Departments | {} |",
            summary.department_count
        )?;
        writeln!(
            self.writer,
            "| Avg Performance | {:.1}% |",
            summary.average_performance
        )?;
        writeln!(
            self.writer,
            "| Total Salary Budget | {:.2} |",
            summary.total_salary_budget
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_departments(&mut self, report: &ReportBundle) -> Result<()> {
        if report.departments.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Department Performance")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| {} |",
            tables::DEPARTMENT_HEADERS.join(" | ")
        )?;
        writeln!(
            self.writer,
            "|{}|",
            tables::DEPARTMENT_HEADERS
                .iter()
                .map(|_| "---")
                .collect::<Vec<_>>()
                .join("|")
        )?;
        for row in tables::department_rows(&report.departments) {
            writeln!(self.writer, "| {} |", row.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
