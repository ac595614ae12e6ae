//! Client-side filter predicates and sorting for the employee collection.
//!
//! Pure reshaping supplied ahead of aggregation or table rendering; no
//! business rules live here.

use crate::core::Employee;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Optional predicates combined with AND. An unset predicate matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub joined_after: Option<NaiveDate>,
    pub joined_before: Option<NaiveDate>,
    pub search: Option<String>,
}

impl EmployeeFilter {
    pub fn is_empty(&self) -> bool {
        self.department.is_none()
            && self.joined_after.is_none()
            && self.joined_before.is_none()
            && self.search.is_none()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(department) = &self.department {
            if &employee.department_id != department {
                return false;
            }
        }

        // Employees with unparseable joining dates pass the date predicates;
        // only a parsed date can exclude a record.
        let joined = parse_date(&employee.joining_date);
        if let (Some(after), Some(joined)) = (self.joined_after, joined) {
            if joined < after {
                return false;
            }
        }
        if let (Some(before), Some(joined)) = (self.joined_before, joined) {
            if joined > before {
                return false;
            }
        }

        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let haystack = [&employee.name, &employee.email, &employee.role];
            if !haystack
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Role,
    Department,
    JoiningDate,
    Salary,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable single-field sort; ties keep their original order.
pub fn sort_employees(employees: &mut [Employee], field: SortField, direction: SortDirection) {
    employees.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Employee, b: &Employee, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Role => a.role.cmp(&b.role),
        SortField::Department => a.department_id.cmp(&b.department_id),
        SortField::JoiningDate => a.joining_date.cmp(&b.joining_date),
        SortField::Salary => compare_f64(a.salary, b.salary),
        SortField::Performance => {
            compare_f64(a.overall_performance(), b.overall_performance())
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
