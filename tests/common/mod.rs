// Test utility module for hrlytics integration tests
#![allow(dead_code)]

use hrlytics::core::{Employee, PerformanceMetrics};
use serde_json::{json, Value};

/// Build a valid employee record in the wire format.
pub fn employee_record(id: &str, department: &str, scores: [f64; 4], salary: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Employee {id}"),
        "email": format!("{id}@example.com"),
        "role": "Engineer",
        "departmentId": department,
        "joiningDate": "2023-04-01",
        "salary": salary,
        "performanceMetrics": {
            "efficiency": scores[0],
            "quality": scores[1],
            "consistency": scores[2],
            "attendance": scores[3],
            "lastReviewDate": "2024-01-15"
        }
    })
}

/// Wrap employee records into a full import document declaring `eng` and
/// `sales` departments.
pub fn import_document(employees: Vec<Value>) -> Value {
    json!({
        "employees": employees,
        "organization": {
            "name": "Acme",
            "departments": [
                { "id": "eng", "name": "Engineering" },
                { "id": "sales", "name": "Sales" }
            ]
        }
    })
}

/// Typed employee for direct aggregation tests.
pub fn employee(id: &str, department: &str, scores: [f64; 4], salary: f64) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        email: format!("{id}@example.com"),
        role: "Engineer".to_string(),
        department_id: department.to_string(),
        joining_date: "2023-04-01".to_string(),
        salary,
        performance_metrics: PerformanceMetrics {
            efficiency: scores[0],
            quality: scores[1],
            consistency: scores[2],
            attendance: scores[3],
            last_review_date: "2024-01-15".to_string(),
        },
    }
}
