use crate::commands;
use crate::config::HrlyticsConfig;
use crate::export::{self, ExportFormat};
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_export(config: ExportConfig) -> Result<()> {
    let settings = HrlyticsConfig::load(config.config.as_deref())?;
    let store = commands::load_store(&config.path, &settings)?;
    let report = store.report_bundle();

    let output_dir = config
        .output_dir
        .unwrap_or_else(|| settings.export.output_dir.clone());
    io::ensure_dir(&output_dir)?;
    let target = export::report_path(&output_dir, config.format);

    match config.format {
        ExportFormat::Xlsx => {
            export::spreadsheet::write_workbook(&report, store.employees(), &target)?
        }
        ExportFormat::Pdf => export::document::write_document(&report, &target)?,
    }

    println!("Report written to {}", target.display());
    Ok(())
}
