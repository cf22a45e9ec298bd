//! Property tests for display ordering and skill grouping.

use proptest::prelude::*;
use serde_json::json;

use vitrine::domain::services::{group_by_category, sort_by_order};
use vitrine::{Project, Skill};

fn order_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        (-5i64..20).prop_map(|n| json!(n)),
        (-5i64..20).prop_map(|n| json!(n.to_string())),
        Just(json!(null)),
        Just(json!("")),
        Just(json!(999)),
    ]
}

fn project(position: usize, order: &serde_json::Value) -> Project {
    serde_json::from_value(json!({
        "id": position.to_string(),
        "metadata": {"order": order}
    }))
    .unwrap()
}

fn category() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(Some("frontend")),
        Just(Some("backend")),
        Just(Some("tools")),
        Just(None),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sorting is by rank and stable; unset orders rank as 999.
    #[test]
    fn property_sort_is_stable_by_rank(orders in proptest::collection::vec(order_value(), 0..24)) {
        let mut projects: Vec<Project> = orders.iter().enumerate().map(|(i, o)| project(i, o)).collect();
        sort_by_order(&mut projects);

        for pair in projects.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.rank() <= b.rank());
            if a.rank() == b.rank() {
                let (ia, ib): (usize, usize) = (a.id.parse().unwrap(), b.id.parse().unwrap());
                prop_assert!(ia < ib, "equal ranks must keep fetch order");
            }
        }

        for p in &projects {
            let original = &orders[p.id.parse::<usize>().unwrap()];
            if original.is_null() || *original == "" {
                prop_assert_eq!(p.rank(), 999);
            }
        }
    }

    /// PROPERTY: Grouping keeps every skill exactly once and never yields an empty group.
    #[test]
    fn property_grouping_partitions_skills(categories in proptest::collection::vec(category(), 0..20)) {
        let skills: Vec<Skill> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let category = c.map(|key| json!({"key": key, "value": key}));
                serde_json::from_value(json!({"id": i.to_string(), "metadata": {"category": category}})).unwrap()
            })
            .collect();

        let groups = group_by_category(&skills);
        let total: usize = groups.iter().map(|g| g.skills.len()).sum();
        prop_assert_eq!(total, skills.len());
        prop_assert!(groups.iter().all(|g| !g.skills.is_empty()));

        for group in &groups {
            let ids: Vec<usize> = group.skills.iter().map(|s| s.id.parse().unwrap()).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
