// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod export;
pub mod filters;
pub mod io;
pub mod output;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use crate::core::{
    CompanySummary, Department, DepartmentRollup, Employee, OrgDocument, Organization,
    PerformanceMetrics, ReportBundle,
};

pub use crate::aggregate::{aggregate_departments, company_summary};
pub use crate::filters::{sort_employees, EmployeeFilter, SortDirection, SortField};
pub use crate::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::store::{DataStore, ImportSummary};
pub use crate::validate::{
    collect_errors, validate_document, UnknownDepartmentPolicy, ValidationError,
};
