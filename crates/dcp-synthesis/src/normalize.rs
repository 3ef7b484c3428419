//! Pure normalization helpers over raw step payloads
//!
//! None of these fail: missing or blank values simply contribute nothing.

use dcp_model::{ClassificationLevelsData, GroupedDataType, Step1Data, Step2Data};

fn push_distinct(out: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !out.iter().any(|v| v == value) {
        out.push(value.to_string());
    }
}

/// Partition step-2 data types by shared risk profile
///
/// Walks the detail map in entry order and appends each data type to the
/// first group whose profile is field-equal (list fields compared as sets),
/// starting a new group otherwise. Quadratic in the number of data types,
/// which is bounded by the wizard's option list.
#[must_use]
pub fn group_data_types_by_detail(step2: &Step2Data) -> Vec<GroupedDataType> {
    let mut groups: Vec<GroupedDataType> = Vec::new();

    for (name, detail) in &step2.data_type_details {
        match groups.iter_mut().find(|g| g.detail.same_profile(detail)) {
            Some(group) => group.data_types.push(name.clone()),
            None => groups.push(GroupedDataType {
                data_types: vec![name.clone()],
                detail: detail.clone(),
            }),
        }
    }

    groups
}

/// Selected default levels followed by custom levels
///
/// Blank entries are dropped, custom names are trimmed, and a repeated name
/// keeps its first position.
#[must_use]
pub fn resolve_level_names(levels: &ClassificationLevelsData) -> Vec<String> {
    let mut names = Vec::with_capacity(levels.default_levels.len() + levels.custom_levels.len());
    for name in levels.default_levels.iter().chain(&levels.custom_levels) {
        push_distinct(&mut names, name);
    }
    names
}

/// Regulations offered when annotating a step-2 data type
///
/// Selected regulations first, then the free-text ones, without repeats.
#[must_use]
pub fn regulation_vocabulary(step1: &Step1Data) -> Vec<String> {
    let mut regulations = Vec::new();
    for name in step1.regulations.iter().chain(&step1.regulations_other) {
        push_distinct(&mut regulations, name);
    }
    regulations
}

/// Selected data types followed by free-text ones, without repeats
#[must_use]
pub fn selected_data_types(step2: &Step2Data) -> Vec<String> {
    let mut types = Vec::new();
    for name in step2.data_types.iter().chain(&step2.data_types_other) {
        push_distinct(&mut types, name);
    }
    types
}
