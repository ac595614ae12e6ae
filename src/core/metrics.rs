use crate::core::Employee;

/// Sum divided by count, 0.0 when the count is zero.
pub fn safe_ratio(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Round to two decimals, matching the precision the department sheet and
/// report tables display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn total_salary(employees: &[Employee]) -> f64 {
    employees.iter().map(|e| e.salary).sum()
}

/// Mean of per-employee overall means across the whole collection. Equals
/// the employee-weighted company figure by construction.
pub fn mean_overall_performance(employees: &[Employee]) -> f64 {
    let sum: f64 = employees.iter().map(|e| e.overall_performance()).sum();
    safe_ratio(sum, employees.len())
}
