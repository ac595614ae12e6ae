//! Row-shaped views of employees and rollups for the table renderers. Pure
//! reshaping; every figure comes from the rollup accessors.

use crate::core::{metrics, DepartmentRollup, Employee};

pub const EMPLOYEE_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Email",
    "Role",
    "Department",
    "Joining Date",
    "Salary",
    "Overall Performance",
];

pub const DEPARTMENT_HEADERS: [&str; 8] = [
    "Department",
    "Employees",
    "Avg Performance",
    "Avg Salary",
    "Efficiency",
    "Quality",
    "Consistency",
    "Attendance",
];

pub fn employee_rows(employees: &[Employee]) -> Vec<Vec<String>> {
    employees
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.name.clone(),
                e.email.clone(),
                e.role.clone(),
                e.department_id.clone(),
                e.joining_date.clone(),
                format!("{:.2}", e.salary),
                format!("{:.2}", e.overall_performance()),
            ]
        })
        .collect()
}

pub fn department_rows(rollups: &[DepartmentRollup]) -> Vec<Vec<String>> {
    rollups
        .iter()
        .map(|r| {
            vec![
                r.department_id.clone(),
                r.count.to_string(),
                format!("{:.1}%", r.average_performance()),
                format!("{:.2}", metrics::round2(r.average_salary())),
                format!("{:.1}%", r.average_efficiency()),
                format!("{:.1}%", r.average_quality()),
                format!("{:.1}%", r.average_consistency()),
                format!("{:.1}%", r.average_attendance()),
            ]
        })
        .collect()
}
