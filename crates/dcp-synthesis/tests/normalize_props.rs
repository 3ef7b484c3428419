use dcp_model::{DataTypeDetail, Rating, Step2Data};
use dcp_synthesis::{group_data_types_by_detail, map_sensitivity_to_classification};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = Rating> {
    prop::sample::select(Rating::ALL.to_vec())
}

fn detail() -> impl Strategy<Value = DataTypeDetail> {
    (
        rating(),
        rating(),
        any::<bool>(),
        prop::sample::subsequence(vec!["GDPR", "HIPAA", "SOX"], 0..=3),
        prop::sample::subsequence(vec!["Cloud", "On-premise", "Laptops"], 0..=3),
    )
        .prop_map(|(sensitivity, impact, regulated, regulations, storage)| {
            let mut detail = DataTypeDetail::new(sensitivity, impact).with_storage(storage);
            if regulated {
                detail = detail.with_regulations(regulations);
            }
            detail
        })
}

fn inventory() -> impl Strategy<Value = Step2Data> {
    prop::collection::vec(detail(), 0..12).prop_map(|details| {
        let mut step2 = Step2Data::default();
        for (i, detail) in details.into_iter().enumerate() {
            step2.set_detail(format!("type-{i}"), detail);
        }
        step2
    })
}

proptest! {
    #[test]
    fn prop_groups_partition_the_inventory(step2 in inventory()) {
        let groups = group_data_types_by_detail(&step2);

        let mut seen: Vec<&String> = groups.iter().flat_map(|g| &g.data_types).collect();
        prop_assert_eq!(seen.len(), step2.data_type_details.len());
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), step2.data_type_details.len());

        for group in &groups {
            prop_assert!(!group.data_types.is_empty());
        }
    }

    #[test]
    fn prop_same_group_iff_same_profile(step2 in inventory()) {
        let groups = group_data_types_by_detail(&step2);
        let group_of = |name: &str| {
            groups
                .iter()
                .position(|g| g.data_types.iter().any(|t| t == name))
        };

        for (a, da) in &step2.data_type_details {
            for (b, db) in &step2.data_type_details {
                prop_assert_eq!(group_of(a) == group_of(b), da.same_profile(db));
            }
        }
    }

    #[test]
    fn prop_list_order_does_not_split_groups(
        storage in prop::sample::subsequence(vec!["Cloud", "On-premise", "Laptops"], 0..=3)
    ) {
        let mut reversed = storage.clone();
        reversed.reverse();

        let mut step2 = Step2Data::default();
        step2.set_detail("first", DataTypeDetail::new(Rating::High, Rating::Low).with_storage(storage));
        step2.set_detail("second", DataTypeDetail::new(Rating::High, Rating::Low).with_storage(reversed));

        let groups = group_data_types_by_detail(&step2);
        prop_assert_eq!(groups.len(), 1);
        prop_assert_eq!(&groups[0].data_types, &vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn prop_sensitivity_mapping_is_total(raw in ".{0,12}") {
        let level = map_sensitivity_to_classification(Some(&raw));
        prop_assert!(dcp_model::DEFAULT_LEVEL_NAMES.contains(&level));
    }
}

#[test]
fn sensitivity_mapping_ignores_case_and_whitespace() {
    assert_eq!(map_sensitivity_to_classification(Some(" HIGH ")), "Restricted");
    assert_eq!(map_sensitivity_to_classification(Some("Medium")), "Confidential");
}

#[test]
fn grouping_agrees_with_mapping_on_answer_case() {
    let mut shouting = DataTypeDetail::new(Rating::High, Rating::Low);
    shouting.sensitivity = "HIGH ".to_string();

    let mut step2 = Step2Data::default();
    step2.set_detail("Payroll", shouting.clone());
    step2.set_detail("Benefits", DataTypeDetail::new(Rating::High, Rating::Low));

    let groups = group_data_types_by_detail(&step2);
    assert_eq!(groups.len(), 1);
    assert_eq!(
        map_sensitivity_to_classification(Some(&shouting.sensitivity)),
        map_sensitivity_to_classification(Some("high"))
    );
}
