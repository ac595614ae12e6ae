//! Paginated document encoder: title, generation timestamp, organization
//! summary, and a per-department text breakdown on a fixed A4 page.
//!
//! There is no pagination: department entries are placed at fixed offsets
//! down the page, so a long department list clips off the bottom edge.

use crate::core::ReportBundle;
use anyhow::{Context, Result};
use log::info;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

/// Layout offsets are measured from the top of the page; PDF coordinates
/// grow upward.
fn from_top(mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - mm)
}

struct PageText<'a> {
    layer: &'a PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
}

impl PageText<'_> {
    fn title(&self, text: &str, x: f32, y_from_top: f32) {
        self.layer
            .use_text(text, 20.0, Mm(x), from_top(y_from_top), self.bold);
    }

    fn line(&self, text: &str, x: f32, y_from_top: f32) {
        self.layer
            .use_text(text, 12.0, Mm(x), from_top(y_from_top), self.regular);
    }
}

/// Render the report onto a single fixed-size page and write it to `path`.
pub fn write_document(report: &ReportBundle, path: &Path) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        "HRlytics Comprehensive Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("failed to load builtin font")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("failed to load builtin font")?;
    let layer = doc.get_page(page).get_layer(layer);
    let text = PageText {
        layer: &layer,
        regular: &regular,
        bold: &bold,
    };

    text.title("HRlytics Comprehensive Report", 20.0, 20.0);
    text.line(
        &format!(
            "Generated on: {}",
            report.summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        20.0,
        30.0,
    );

    text.line("Organization Summary", 20.0, 45.0);
    if let Some(organization) = &report.organization {
        text.line(&format!("Organization: {organization}"), 25.0, 52.0);
    }
    text.line(
        &format!("Total Employees: {}", report.summary.total_employees),
        25.0,
        59.0,
    );
    text.line(
        &format!("Number of Departments: {}", report.summary.department_count),
        25.0,
        66.0,
    );
    text.line(
        &format!(
            "Average Performance: {:.2}%",
            report.summary.average_performance
        ),
        25.0,
        73.0,
    );
    text.line(
        &format!(
            "Total Salary Budget: {:.2}",
            report.summary.total_salary_budget
        ),
        25.0,
        80.0,
    );

    text.line("Department Performance", 20.0, 95.0);
    for (index, rollup) in report.departments.iter().enumerate() {
        let y = 105.0 + index as f32 * 20.0;
        text.line(&format!("{}:", rollup.department_id), 25.0, y);
        text.line(&format!("Employees: {}", rollup.count), 35.0, y + 5.0);
        text.line(
            &format!("Avg Performance: {:.2}%", rollup.average_performance()),
            35.0,
            y + 10.0,
        );
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .with_context(|| format!("failed to write document {}", path.display()))?;
    info!("wrote document report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;
    use crate::core::{Employee, PerformanceMetrics};

    #[test]
    fn test_document_written_to_disk() {
        let staff = vec![Employee {
            id: "e1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "Engineer".to_string(),
            department_id: "eng".to_string(),
            joining_date: "2023-04-01".to_string(),
            salary: 90_000.0,
            performance_metrics: PerformanceMetrics {
                efficiency: 90.0,
                quality: 80.0,
                consistency: 70.0,
                attendance: 100.0,
                last_review_date: "2024-01-15".to_string(),
            },
        }];
        let rollups = aggregate::aggregate_departments(&staff);
        let summary = aggregate::company_summary(&rollups, staff.len());
        let report = ReportBundle {
            organization: Some("Acme".to_string()),
            summary,
            departments: rollups,
        };

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");
        write_document(&report, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }

    #[test]
    fn test_from_top_converts_coordinates() {
        assert_eq!(from_top(20.0), Mm(277.0));
    }
}
