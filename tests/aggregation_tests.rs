mod common;

use common::employee;
use hrlytics::{aggregate_departments, company_summary};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_reference_scenario_two_engineers() {
    let staff = vec![
        employee("e1", "eng", [90.0, 80.0, 70.0, 100.0], 90_000.0),
        employee("e2", "eng", [70.0, 60.0, 50.0, 90.0], 80_000.0),
    ];

    let rollups = aggregate_departments(&staff);
    assert_eq!(rollups.len(), 1);

    let eng = &rollups[0];
    assert_eq!(eng.count, 2);
    assert_eq!(eng.average_efficiency(), 80.0);
    assert_eq!(eng.average_performance(), 76.25);
}

#[test]
fn test_average_round_trips_against_reference_fold() {
    let staff = vec![
        employee("e1", "eng", [91.0, 82.0, 73.0, 64.0], 1.0),
        employee("e2", "eng", [55.0, 66.0, 77.0, 88.0], 1.0),
        employee("e3", "sales", [12.0, 34.0, 56.0, 78.0], 1.0),
    ];

    for rollup in aggregate_departments(&staff) {
        let members: Vec<_> = staff
            .iter()
            .filter(|e| e.department_id == rollup.department_id)
            .collect();
        let reference: f64 = members
            .iter()
            .map(|e| e.overall_performance())
            .sum::<f64>()
            / members.len() as f64;
        assert!((rollup.average_performance() - reference).abs() < 1e-9);
    }
}

#[test]
fn test_summary_uses_sum_formula_not_mean_of_means() {
    // Unequal department sizes make the two formulas diverge: mean-of-means
    // would be (80 + 20) / 2 = 50.
    let staff = vec![
        employee("e1", "eng", [80.0; 4], 0.0),
        employee("e2", "eng", [80.0; 4], 0.0),
        employee("e3", "eng", [80.0; 4], 0.0),
        employee("e4", "hr", [20.0; 4], 0.0),
    ];

    let rollups = aggregate_departments(&staff);
    let summary = company_summary(&rollups, staff.len());
    assert_eq!(summary.average_performance, 65.0);
}

proptest! {
    #[test]
    fn prop_every_department_id_becomes_a_bucket(
        departments in prop::collection::vec("[a-c]", 0..40)
    ) {
        let staff: Vec<_> = departments
            .iter()
            .enumerate()
            .map(|(i, d)| employee(&format!("e{i}"), d, [50.0; 4], 1.0))
            .collect();

        let rollups = aggregate_departments(&staff);
        let keys: Vec<_> = rollups.iter().map(|r| r.department_id.clone()).collect();
        for member in &staff {
            prop_assert!(keys.contains(&member.department_id));
        }
        // no empty buckets, and counts partition the collection
        let total: usize = rollups.iter().map(|r| r.count).sum();
        prop_assert_eq!(total, staff.len());
        for rollup in &rollups {
            prop_assert!(rollup.count > 0);
        }
    }

    #[test]
    fn prop_count_matches_exact_key_filter(
        departments in prop::collection::vec("[a-d]{1,2}", 1..30)
    ) {
        let staff: Vec<_> = departments
            .iter()
            .enumerate()
            .map(|(i, d)| employee(&format!("e{i}"), d, [50.0; 4], 1.0))
            .collect();

        for rollup in aggregate_departments(&staff) {
            let expected = staff
                .iter()
                .filter(|e| e.department_id == rollup.department_id)
                .count();
            prop_assert_eq!(rollup.count, expected);
        }
    }

    #[test]
    fn prop_summary_average_equals_mean_of_employee_means(
        scores in prop::collection::vec(
            (0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0),
            1..25
        )
    ) {
        let staff: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, (e, q, c, a))| {
                let dept = if i % 3 == 0 { "eng" } else { "sales" };
                employee(&format!("e{i}"), dept, [*e, *q, *c, *a], 1.0)
            })
            .collect();

        let rollups = aggregate_departments(&staff);
        let summary = company_summary(&rollups, staff.len());
        let reference: f64 = staff.iter().map(|e| e.overall_performance()).sum::<f64>()
            / staff.len() as f64;
        prop_assert!((summary.average_performance - reference).abs() < 1e-9);
    }
}
