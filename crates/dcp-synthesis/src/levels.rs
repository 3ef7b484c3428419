//! Classification levels table

use crate::defaults::{default_classification_levels, placeholder_definition};
use crate::normalize::resolve_level_names;
use dcp_model::{ClassificationLevelRow, Step3Data};

/// Build the levels table from step 3
///
/// Uses the selected default and custom level names paired with their
/// stored definitions (or a generic placeholder). Falls back to the complete
/// four-level default set when step 3, its level selection, or every level
/// name is missing.
#[must_use]
pub fn classification_levels_table(step3: Option<&Step3Data>) -> Vec<ClassificationLevelRow> {
    let Some(levels) = step3.and_then(|s| s.classification_levels.as_ref()) else {
        tracing::debug!("no level selection recorded; using default levels");
        return default_classification_levels();
    };

    let names = resolve_level_names(levels);
    if names.is_empty() {
        tracing::debug!("level selection is empty; using default levels");
        return default_classification_levels();
    }

    names
        .into_iter()
        .map(|name| {
            let definition = levels
                .definition(&name)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map_or_else(|| placeholder_definition(&name), str::to_string);
            ClassificationLevelRow {
                level: name,
                definition,
            }
        })
        .collect()
}
