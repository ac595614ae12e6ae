mod common;

use common::{employee_record, import_document};
use hrlytics::{DataStore, UnknownDepartmentPolicy, ValidationError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_import_length_matches_input_array() {
    let doc = import_document(vec![
        employee_record("e1", "eng", [90.0, 80.0, 70.0, 100.0], 90_000.0),
        employee_record("e2", "sales", [70.0, 60.0, 50.0, 90.0], 60_000.0),
        employee_record("e3", "eng", [50.0; 4], 50_000.0),
    ]);

    let mut store = DataStore::new();
    store.import(&doc, UnknownDepartmentPolicy::Allow).unwrap();

    assert_eq!(store.employees().len(), 3);

    // every departmentId appears as a rollup key
    let keys: Vec<_> = store
        .rollups()
        .into_iter()
        .map(|r| r.department_id)
        .collect();
    for employee in store.employees() {
        assert!(keys.contains(&employee.department_id));
    }
}

#[test]
fn test_rejected_import_leaves_state_unchanged() {
    let good = import_document(vec![employee_record("e1", "eng", [80.0; 4], 90_000.0)]);
    let mut store = DataStore::new();
    store.import(&good, UnknownDepartmentPolicy::Allow).unwrap();

    let mut bad_record = employee_record("e2", "eng", [80.0; 4], 1.0);
    bad_record.as_object_mut().unwrap().remove("salary");
    let bad = import_document(vec![bad_record]);

    let err = store
        .import(&bad, UnknownDepartmentPolicy::Allow)
        .unwrap_err();
    assert_eq!(err, ValidationError::SalaryNotNumeric { index: 0 });

    assert_eq!(store.employees().len(), 1);
    assert_eq!(store.employees()[0].id, "e1");
    assert_eq!(store.organization().unwrap().name, "Acme");
}

#[test]
fn test_reimport_is_idempotent() {
    let doc = import_document(vec![
        employee_record("e1", "eng", [90.0, 80.0, 70.0, 100.0], 90_000.0),
        employee_record("e2", "sales", [70.0, 60.0, 50.0, 90.0], 60_000.0),
    ]);

    let mut store = DataStore::new();
    store.import(&doc, UnknownDepartmentPolicy::Allow).unwrap();
    let first = store.rollups();
    store.import(&doc, UnknownDepartmentPolicy::Allow).unwrap();
    let second = store.rollups();

    assert_eq!(first, second);
}

#[test]
fn test_empty_employees_array_imports_cleanly() {
    let doc = import_document(vec![]);
    let mut store = DataStore::new();
    let summary = store.import(&doc, UnknownDepartmentPolicy::Allow).unwrap();

    assert_eq!(summary.employees, 0);
    assert!(store.rollups().is_empty());
    assert_eq!(store.summary().average_performance, 0.0);
}

#[test]
fn test_missing_organization_key_is_rejected() {
    let doc = json!({
        "employees": [employee_record("e1", "eng", [80.0; 4], 1.0)]
    });

    let mut store = DataStore::new();
    let err = store
        .import(&doc, UnknownDepartmentPolicy::Allow)
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingOrganization);
    assert!(store.organization().is_none());
}

#[test]
fn test_undeclared_department_buckets_by_default() {
    let doc = import_document(vec![employee_record("e1", "mystery", [80.0; 4], 1.0)]);
    let mut store = DataStore::new();
    store.import(&doc, UnknownDepartmentPolicy::Allow).unwrap();

    let rollups = store.rollups();
    assert_eq!(rollups.len(), 1);
    assert_eq!(rollups[0].department_id, "mystery");
}

#[test]
fn test_undeclared_department_rejected_under_policy() {
    let doc = import_document(vec![employee_record("e1", "mystery", [80.0; 4], 1.0)]);
    let mut store = DataStore::new();
    let err = store
        .import(&doc, UnknownDepartmentPolicy::Reject)
        .unwrap_err();

    assert_eq!(
        err,
        ValidationError::UnknownDepartment {
            index: 0,
            department_id: "mystery".to_string()
        }
    );
}

#[test]
fn test_organization_optional_fields_default() {
    let doc = import_document(vec![]);
    let mut store = DataStore::new();
    store.import(&doc, UnknownDepartmentPolicy::Allow).unwrap();

    let organization = store.organization().unwrap();
    assert_eq!(organization.name, "Acme");
    assert_eq!(organization.industry, "");
    assert_eq!(organization.size, 0);
    assert_eq!(organization.departments.len(), 2);
}
