pub mod json;
pub mod markdown;
pub mod series;
pub mod tables;
pub mod terminal;

use crate::core::ReportBundle;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ReportBundle) -> Result<()>;
}

pub fn create_writer(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(json::JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(markdown::MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(terminal::TerminalWriter::new()),
    }
}

/// Render `report` in `format`, to stdout or to `output_file`. The terminal
/// format is stdout-only; asking for it with a file is an error rather than
/// a page of ANSI codes.
pub fn output_report(
    report: &ReportBundle,
    format: OutputFormat,
    output_file: Option<PathBuf>,
) -> Result<()> {
    match output_file {
        Some(path) => {
            let content = format_report_to_string(report, format)?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    io::ensure_dir(parent)?;
                }
            }
            io::write_file(&path, &content)?;
            Ok(())
        }
        None => {
            let mut writer = create_writer(format);
            writer.write_report(report)
        }
    }
}

pub fn format_report_to_string(report: &ReportBundle, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Json => json::JsonWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Markdown => markdown::MarkdownWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Terminal => {
            anyhow::bail!("terminal format writes to stdout; pick json or markdown for files")
        }
    }
    Ok(String::from_utf8(buffer)?)
}
