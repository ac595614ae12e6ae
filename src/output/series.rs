//! Chart-shaped views of the rollups: label arrays, numeric series, and
//! index-derived color assignments for chart consumers.

use crate::core::DepartmentRollup;
use serde::Serialize;

pub const METRIC_LABELS: [&str; 4] = ["Efficiency", "Quality", "Consistency", "Attendance"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub color: String,
}

/// Department labels plus their average-performance series, in rollup order.
pub fn performance_chart(rollups: &[DepartmentRollup]) -> (Vec<String>, Vec<f64>) {
    let labels = rollups.iter().map(|r| r.department_id.clone()).collect();
    let data = rollups.iter().map(|r| r.average_performance()).collect();
    (labels, data)
}

/// One series per department over the four metric labels, each with a color
/// spread evenly around the hue wheel.
pub fn metric_chart(rollups: &[DepartmentRollup]) -> Vec<ChartSeries> {
    rollups
        .iter()
        .enumerate()
        .map(|(index, rollup)| ChartSeries {
            label: rollup.department_id.clone(),
            data: vec![
                rollup.average_efficiency(),
                rollup.average_quality(),
                rollup.average_consistency(),
                rollup.average_attendance(),
            ],
            color: color_for_index(index, rollups.len()),
        })
        .collect()
}

pub fn color_for_index(index: usize, total: usize) -> String {
    let step = 360.0 / total.max(1) as f64;
    format!("hsl({:.0}, 70%, 50%)", index as f64 * step)
}
