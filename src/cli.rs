use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hrlytics")]
#[command(about = "Organization data import, aggregation and report exporter", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate an organization file into a department report
    Report {
        /// Organization JSON file to import
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only include employees of this department
        #[arg(long)]
        department: Option<String>,

        /// Only include employees who joined on or after this date (YYYY-MM-DD)
        #[arg(long = "joined-after")]
        joined_after: Option<String>,

        /// Only include employees who joined on or before this date (YYYY-MM-DD)
        #[arg(long = "joined-before")]
        joined_before: Option<String>,

        /// Case-insensitive search over name, email and role
        #[arg(long)]
        search: Option<String>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List employees as a table, with optional filtering and sorting
    Employees {
        /// Organization JSON file to import
        path: PathBuf,

        /// Only include employees of this department
        #[arg(long)]
        department: Option<String>,

        /// Case-insensitive search over name, email and role
        #[arg(long)]
        search: Option<String>,

        /// Field to sort by
        #[arg(long = "sort-by", value_enum)]
        sort_by: Option<SortBy>,

        /// Sort direction
        #[arg(long, value_enum, default_value = "asc")]
        direction: SortOrder,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Export an organization file as a spreadsheet or document
    Export {
        /// Organization JSON file to import
        path: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Directory to write the export into (overrides config)
        #[arg(long = "output-dir")]
        output_dir: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check an organization file against the import schema
    Validate {
        /// Organization JSON file to check
        path: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    Name,
    Role,
    Department,
    JoiningDate,
    Salary,
    Performance,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortBy> for crate::filters::SortField {
    fn from(f: SortBy) -> Self {
        match f {
            SortBy::Name => crate::filters::SortField::Name,
            SortBy::Role => crate::filters::SortField::Role,
            SortBy::Department => crate::filters::SortField::Department,
            SortBy::JoiningDate => crate::filters::SortField::JoiningDate,
            SortBy::Salary => crate::filters::SortField::Salary,
            SortBy::Performance => crate::filters::SortField::Performance,
        }
    }
}

impl From<SortOrder> for crate::filters::SortDirection {
    fn from(d: SortOrder) -> Self {
        match d {
            SortOrder::Asc => crate::filters::SortDirection::Ascending,
            SortOrder::Desc => crate::filters::SortDirection::Descending,
        }
    }
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

impl From<ExportFormat> for crate::export::ExportFormat {
    fn from(f: ExportFormat) -> Self {
        match f {
            ExportFormat::Xlsx => crate::export::ExportFormat::Xlsx,
            ExportFormat::Pdf => crate::export::ExportFormat::Pdf,
        }
    }
}
