pub mod document;
pub mod spreadsheet;

use chrono::Utc;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// `HRlytics_Comprehensive_Report_<ISO date>.<ext>` under `output_dir`.
pub fn report_path(output_dir: &Path, format: ExportFormat) -> PathBuf {
    let date = Utc::now().format("%Y-%m-%d");
    output_dir.join(format!(
        "HRlytics_Comprehensive_Report_{date}.{}",
        format.extension()
    ))
}
