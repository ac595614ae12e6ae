pub mod metrics;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four bounded performance sub-scores carried by every employee.
///
/// Sub-scores are conventionally 0-100 but the import format does not
/// enforce the range. Missing sub-scores deserialize as 0.0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    #[serde(default)]
    pub efficiency: f64,
    #[serde(default)]
    pub quality: f64,
    #[serde(default)]
    pub consistency: f64,
    #[serde(default)]
    pub attendance: f64,
    #[serde(default)]
    pub last_review_date: String,
}

impl PerformanceMetrics {
    /// Unweighted arithmetic mean of the four sub-scores.
    pub fn overall(&self) -> f64 {
        (self.efficiency + self.quality + self.consistency + self.attendance) / 4.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department_id: String,
    /// `YYYY-MM-DD` by convention; kept as a string because the import
    /// contract only requires it to be non-empty.
    pub joining_date: String,
    pub salary: f64,
    pub performance_metrics: PerformanceMetrics,
}

impl Employee {
    /// Overall performance figure: mean of the four sub-scores.
    pub fn overall_performance(&self) -> f64 {
        self.performance_metrics.overall()
    }
}

/// A department as declared in the import document. Declared departments do
/// not drive aggregation; rollup buckets come from the `departmentId` values
/// observed on employees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub head_count: u32,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub performance_score: f64,
}

/// The organization header of an import document. The wire format only
/// guarantees `name` and `departments`; everything else defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A fully validated import document: the typed `{ organization, employees }`
/// pair the rest of the pipeline operates on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrgDocument {
    pub employees: Vec<Employee>,
    pub organization: Organization,
}

/// Per-metric running sums inside a rollup bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSums {
    pub efficiency: f64,
    pub quality: f64,
    pub consistency: f64,
    pub attendance: f64,
}

/// Aggregated per-department record derived from the employee collection.
///
/// Rollups hold running sums; averages are derived on demand so they can
/// never drift from the members. `total` is the running sum of per-employee
/// overall means, so `total / count` is the mean-of-means department average.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRollup {
    pub department_id: String,
    pub count: usize,
    pub total: f64,
    pub metrics: MetricSums,
    pub salary_total: f64,
    pub employees: Vec<Employee>,
}

impl DepartmentRollup {
    pub fn new(department_id: String) -> Self {
        Self {
            department_id,
            ..Default::default()
        }
    }

    /// Fold one member into the bucket.
    pub fn absorb(&mut self, employee: &Employee) {
        self.total += employee.overall_performance();
        self.count += 1;
        self.metrics.efficiency += employee.performance_metrics.efficiency;
        self.metrics.quality += employee.performance_metrics.quality;
        self.metrics.consistency += employee.performance_metrics.consistency;
        self.metrics.attendance += employee.performance_metrics.attendance;
        self.salary_total += employee.salary;
        self.employees.push(employee.clone());
    }

    /// Mean of per-employee overall means. Buckets cannot exist with count
    /// zero, but the division stays guarded in case filtering ever produces
    /// an empty bucket.
    pub fn average_performance(&self) -> f64 {
        metrics::safe_ratio(self.total, self.count)
    }

    pub fn average_efficiency(&self) -> f64 {
        metrics::safe_ratio(self.metrics.efficiency, self.count)
    }

    pub fn average_quality(&self) -> f64 {
        metrics::safe_ratio(self.metrics.quality, self.count)
    }

    pub fn average_consistency(&self) -> f64 {
        metrics::safe_ratio(self.metrics.consistency, self.count)
    }

    pub fn average_attendance(&self) -> f64 {
        metrics::safe_ratio(self.metrics.attendance, self.count)
    }

    pub fn average_salary(&self) -> f64 {
        metrics::safe_ratio(self.salary_total, self.count)
    }
}

/// Company-wide summary figures for the report summary panels and the
/// spreadsheet summary sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub total_employees: usize,
    pub department_count: usize,
    /// Employee-weighted: sum of every rollup's `total` divided by the total
    /// employee count, never a mean of department averages.
    pub average_performance: f64,
    pub total_salary_budget: f64,
    pub generated_at: DateTime<Utc>,
}

/// Everything a report writer needs: the summary plus the rollups, stamped
/// with the organization name when one was imported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBundle {
    pub organization: Option<String>,
    pub summary: CompanySummary,
    pub departments: Vec<DepartmentRollup>,
}
