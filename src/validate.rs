//! Schema validation for untyped import documents.
//!
//! The parsed JSON is treated as untyped data: every shape rule is checked
//! explicitly before the typed [`OrgDocument`](crate::core::OrgDocument) is
//! produced, and the rest of the pipeline is unreachable without one.
//! Validation is all-or-nothing; a single failing record rejects the whole
//! import.

use crate::core::OrgDocument;
use log::debug;
use serde_json::Value;
use std::collections::HashSet;

/// String fields every employee record must carry, non-empty.
const REQUIRED_EMPLOYEE_FIELDS: &[&str] =
    &["id", "name", "email", "role", "departmentId", "joiningDate"];

/// What to do with employees whose `departmentId` matches no declared
/// department entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownDepartmentPolicy {
    /// Dynamic bucketing: undeclared ids get their own rollup bucket on
    /// first sight. The default.
    #[default]
    Allow,
    /// Reject the import when an employee references an id absent from
    /// `organization.departments`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("import document must be a JSON object")]
    NotAnObject,

    #[error("missing `employees` array")]
    MissingEmployees,

    #[error("`employees` must be an array")]
    EmployeesNotArray,

    #[error("missing `organization` object")]
    MissingOrganization,

    #[error("`organization` must be an object")]
    OrganizationNotObject,

    #[error("employee {index}: missing or empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("employee {index}: `salary` must be a number")]
    SalaryNotNumeric { index: usize },

    #[error("employee {index}: missing `performanceMetrics` object")]
    MissingMetrics { index: usize },

    #[error("employee {index}: unknown department `{department_id}`")]
    UnknownDepartment {
        index: usize,
        department_id: String,
    },

    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Check an arbitrary parsed document against the expected shape and return
/// the typed pair, or the first violation found.
pub fn validate_document(
    doc: &Value,
    policy: UnknownDepartmentPolicy,
) -> Result<OrgDocument, ValidationError> {
    check_shape(doc, policy)?;

    let parsed: OrgDocument = serde_json::from_value(doc.clone())
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;
    debug!(
        "validated import: {} employees, {} declared departments",
        parsed.employees.len(),
        parsed.organization.departments.len()
    );
    Ok(parsed)
}

/// Exhaustive variant of [`validate_document`]: every violation in the
/// document, in record order. Empty means the document is valid.
pub fn collect_errors(doc: &Value, policy: UnknownDepartmentPolicy) -> Vec<ValidationError> {
    let obj = match doc.as_object() {
        Some(obj) => obj,
        None => return vec![ValidationError::NotAnObject],
    };

    let mut errors = Vec::new();

    let employees = match obj.get("employees") {
        None => {
            errors.push(ValidationError::MissingEmployees);
            None
        }
        Some(value) => match value.as_array() {
            Some(list) => Some(list),
            None => {
                errors.push(ValidationError::EmployeesNotArray);
                None
            }
        },
    };

    match obj.get("organization") {
        None => errors.push(ValidationError::MissingOrganization),
        Some(value) if !value.is_object() => errors.push(ValidationError::OrganizationNotObject),
        Some(_) => {}
    }

    if let Some(list) = employees {
        let declared = declared_department_ids(doc);
        for (index, record) in list.iter().enumerate() {
            errors.extend(check_employee(index, record, policy, &declared));
        }
    }

    errors
}

fn check_shape(doc: &Value, policy: UnknownDepartmentPolicy) -> Result<(), ValidationError> {
    match collect_errors(doc, policy).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn check_employee(
    index: usize,
    record: &Value,
    policy: UnknownDepartmentPolicy,
    declared: &HashSet<String>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for &field in REQUIRED_EMPLOYEE_FIELDS {
        let present = record
            .get(field)
            .and_then(Value::as_str)
            .map(|s| !s.is_empty())
            .unwrap_or(false);
        if !present {
            errors.push(ValidationError::EmptyField { index, field });
        }
    }

    if !record.get("salary").map(Value::is_number).unwrap_or(false) {
        errors.push(ValidationError::SalaryNotNumeric { index });
    }

    if !record
        .get("performanceMetrics")
        .map(Value::is_object)
        .unwrap_or(false)
    {
        errors.push(ValidationError::MissingMetrics { index });
    }

    if policy == UnknownDepartmentPolicy::Reject {
        if let Some(id) = record.get("departmentId").and_then(Value::as_str) {
            if !id.is_empty() && !declared.contains(id) {
                errors.push(ValidationError::UnknownDepartment {
                    index,
                    department_id: id.to_string(),
                });
            }
        }
    }

    errors
}

fn declared_department_ids(doc: &Value) -> HashSet<String> {
    doc.get("organization")
        .and_then(|org| org.get("departments"))
        .and_then(Value::as_array)
        .map(|departments| {
            departments
                .iter()
                .filter_map(|d| d.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
