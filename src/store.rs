//! The in-memory session store.
//!
//! An explicit value passed by reference to the components that need it,
//! replacing the ambient shared state of earlier designs. A successful
//! import replaces the organization/employee pair wholesale; a failed import
//! leaves the previous state untouched. Reads never mutate, and rollups are
//! recomputed on every read rather than cached.

use crate::aggregate;
use crate::core::{CompanySummary, DepartmentRollup, Employee, Organization, ReportBundle};
use crate::validate::{self, UnknownDepartmentPolicy, ValidationError};
use log::info;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    organization: Option<Organization>,
    employees: Vec<Employee>,
}

/// What a successful import replaced the session state with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub employees: usize,
    pub declared_departments: usize,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `doc` and, only on success, replace the session state with
    /// its contents.
    pub fn import(
        &mut self,
        doc: &Value,
        policy: UnknownDepartmentPolicy,
    ) -> Result<ImportSummary, ValidationError> {
        let parsed = validate::validate_document(doc, policy)?;

        let summary = ImportSummary {
            employees: parsed.employees.len(),
            declared_departments: parsed.organization.departments.len(),
        };
        self.employees = parsed.employees;
        self.organization = Some(parsed.organization);
        info!(
            "import replaced session state: {} employees, {} declared departments",
            summary.employees, summary.declared_departments
        );
        Ok(summary)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    /// Derived per-department rollups over the current employees.
    pub fn rollups(&self) -> Vec<DepartmentRollup> {
        aggregate::aggregate_departments(&self.employees)
    }

    pub fn summary(&self) -> CompanySummary {
        aggregate::company_summary(&self.rollups(), self.employees.len())
    }

    /// Summary plus rollups in one bundle for the report writers and export
    /// encoders.
    pub fn report_bundle(&self) -> ReportBundle {
        let rollups = self.rollups();
        let summary = aggregate::company_summary(&rollups, self.employees.len());
        ReportBundle {
            organization: self.organization.as_ref().map(|o| o.name.clone()),
            summary,
            departments: rollups,
        }
    }
}
