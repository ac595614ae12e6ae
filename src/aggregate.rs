//! Per-department rollups, recomputed from the employee collection on every
//! read so derived figures can never drift from the members.

use crate::core::{metrics, CompanySummary, DepartmentRollup, Employee};
use chrono::Utc;
use log::debug;
use std::collections::HashMap;

/// Fold the employee collection into per-department rollups.
///
/// Grouping is dynamic: a bucket is created the first time a `departmentId`
/// is seen, whether or not it was declared by the organization. Output order
/// is insertion order of first occurrence.
pub fn aggregate_departments(employees: &[Employee]) -> Vec<DepartmentRollup> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut rollups: Vec<DepartmentRollup> = Vec::new();

    for employee in employees {
        let slot = *slots.entry(&employee.department_id).or_insert_with(|| {
            rollups.push(DepartmentRollup::new(employee.department_id.clone()));
            rollups.len() - 1
        });
        rollups[slot].absorb(employee);
    }

    debug!(
        "aggregated {} employees into {} department buckets",
        employees.len(),
        rollups.len()
    );
    rollups
}

/// Company-wide summary over the rollups.
///
/// The average is employee-weighted: the sum of every bucket's running
/// `total` divided by the employee count. This matches the mean of all
/// per-employee means, not a mean of department averages (which differs when
/// department sizes are unequal).
pub fn company_summary(rollups: &[DepartmentRollup], employee_count: usize) -> CompanySummary {
    let total: f64 = rollups.iter().map(|r| r.total).sum();
    let salary: f64 = rollups.iter().map(|r| r.salary_total).sum();

    CompanySummary {
        total_employees: employee_count,
        department_count: rollups.len(),
        average_performance: metrics::safe_ratio(total, employee_count),
        total_salary_budget: salary,
        generated_at: Utc::now(),
    }
}
