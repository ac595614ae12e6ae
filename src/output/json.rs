use crate::core::{DepartmentRollup, ReportBundle};
use crate::output::{series, ReportWriter};
use anyhow::Result;
use serde_json::json;
use std::io::Write;

/// Machine-readable report: the summary, the rollups with both raw sums and
/// derived averages, and chart-shaped series for downstream renderers.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ReportBundle) -> Result<()> {
        let (chart_labels, chart_data) = series::performance_chart(&report.departments);
        let value = json!({
            "organization": report.organization,
            "summary": report.summary,
            "departments": report
                .departments
                .iter()
                .map(department_value)
                .collect::<Vec<_>>(),
            "charts": {
                "performance": { "labels": chart_labels, "data": chart_data },
                "metrics": {
                    "labels": series::METRIC_LABELS,
                    "series": series::metric_chart(&report.departments),
                },
            },
        });
        let rendered = serde_json::to_string_pretty(&value)?;
        self.writer.write_all(rendered.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

fn department_value(rollup: &DepartmentRollup) -> serde_json::Value {
    json!({
        "departmentId": rollup.department_id,
        "count": rollup.count,
        "total": rollup.total,
        "metrics": rollup.metrics,
        "salaryTotal": rollup.salary_total,
        "averages": {
            "performance": rollup.average_performance(),
            "efficiency": rollup.average_efficiency(),
            "quality": rollup.average_quality(),
            "consistency": rollup.average_consistency(),
            "attendance": rollup.average_attendance(),
            "salary": rollup.average_salary(),
        },
        "employees": rollup.employees,
    })
}
