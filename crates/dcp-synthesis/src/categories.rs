//! Data categories table

use crate::defaults::default_data_categories;
use crate::normalize::selected_data_types;
use crate::record_fallback;
use dcp_model::{DataCategoryRow, Rating, Step2Data, Step3Data};

/// Level assigned to a data type from its recorded sensitivity
///
/// `none → Public`, `low → Internal`, `medium → Confidential`,
/// `high → Restricted`; anything unrecognized or missing maps to `Internal`.
#[must_use]
pub fn map_sensitivity_to_classification(sensitivity: Option<&str>) -> &'static str {
    match sensitivity.and_then(Rating::parse) {
        Some(Rating::None) => "Public",
        Some(Rating::Low) | None => "Internal",
        Some(Rating::Medium) => "Confidential",
        Some(Rating::High) => "Restricted",
    }
}

/// Build the categories table from steps 2 and 3
///
/// Explicit step-3 rows come first. Each selected step-2 data type whose
/// name is not already a category (case-insensitive) gets a synthesized row
/// classified by [`map_sensitivity_to_classification`].
///
/// Every classification must name one of `levels`, the level names of the
/// levels table. A table that is empty or has any other classification is
/// replaced as a whole by the two-row default table.
#[must_use]
pub fn data_categories_table(
    step2: Option<&Step2Data>,
    step3: Option<&Step3Data>,
    levels: &[String],
) -> Vec<DataCategoryRow> {
    let mut rows: Vec<DataCategoryRow> = step3
        .map(|s| {
            s.data_categories
                .iter()
                .filter(|c| !c.name.trim().is_empty())
                .map(|c| DataCategoryRow {
                    category: c.name.clone(),
                    description: c.description.clone(),
                    examples: c.examples.clone(),
                    classification: c.classification.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    if let Some(step2) = step2 {
        for name in selected_data_types(step2) {
            let known = rows
                .iter()
                .any(|row| row.category.trim().eq_ignore_ascii_case(&name));
            if known {
                continue;
            }
            let sensitivity = step2.detail(&name).map(|d| d.sensitivity.as_str());
            rows.push(DataCategoryRow {
                description: format!("Information related to {name}."),
                examples: format!("Records and documents containing {name}."),
                classification: map_sensitivity_to_classification(sensitivity).to_string(),
                category: name,
            });
        }
    }

    if rows.is_empty() {
        tracing::debug!("no categories recorded; using default categories");
        return default_data_categories();
    }
    if let Some(row) = rows
        .iter()
        .find(|row| !levels.iter().any(|level| *level == row.classification))
    {
        tracing::warn!(
            category = %row.category,
            classification = %row.classification,
            "category classified outside the levels table; using default categories"
        );
        record_fallback("data_categories", "undeclared_level");
        return default_data_categories();
    }
    rows
}
