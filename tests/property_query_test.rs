//! Property tests for the query engine.

use std::collections::HashMap;

use proptest::prelude::*;
use roster::services::query::{highest_salary, top_earning_names};
use roster::{DirectorySnapshot, Employee};
use uuid::Uuid;

/// Snapshot where every record is named after its position.
fn snapshot_from_salaries(salaries: &[u32]) -> DirectorySnapshot {
    DirectorySnapshot::new(
        salaries
            .iter()
            .enumerate()
            .map(|(position, &salary)| Employee {
                id: Uuid::new_v4(),
                name: Some(format!("employee-{position}")),
                salary,
                age: 30,
                title: "Engineer".to_string(),
                email: None,
            })
            .collect(),
    )
}

proptest! {
    /// `top_earning_names(n)` is a prefix of the full descending ranking
    /// with length `min(n, |S|)`.
    #[test]
    fn prop_top_names_is_prefix_of_full_ranking(
        salaries in proptest::collection::vec(0u32..1_000_000, 0..40),
        count in 0usize..50
    ) {
        let snapshot = snapshot_from_salaries(&salaries);
        let names = top_earning_names(&snapshot, count);
        let full_ranking = top_earning_names(&snapshot, salaries.len());

        prop_assert_eq!(names.len(), count.min(salaries.len()));
        prop_assert_eq!(&full_ranking[..names.len()], &names[..]);
    }

    /// Salaries along the ranking never increase.
    #[test]
    fn prop_ranking_is_descending(
        salaries in proptest::collection::vec(0u32..1_000_000, 0..40)
    ) {
        let snapshot = snapshot_from_salaries(&salaries);
        let by_name: HashMap<String, u32> = snapshot
            .iter()
            .map(|e| (e.name.clone().unwrap(), e.salary))
            .collect();

        let ranked = top_earning_names(&snapshot, salaries.len());
        for pair in ranked.windows(2) {
            prop_assert!(by_name[&pair[0]] >= by_name[&pair[1]]);
        }
    }

    /// `highest_salary` equals the true maximum, and is `None` exactly when
    /// the snapshot is empty.
    #[test]
    fn prop_highest_salary_matches_maximum(
        salaries in proptest::collection::vec(0u32..1_000_000, 0..40)
    ) {
        let snapshot = snapshot_from_salaries(&salaries);
        prop_assert_eq!(highest_salary(&snapshot), salaries.iter().copied().max());
    }
}
