//! Classification reference table
//!
//! One structured generation call per document. The response is accepted
//! only if it is a JSON array of objects carrying exactly the expected
//! fields, exactly one per known level. Rows are put in level order so the
//! table lines up with the levels table. Anything else replaces the whole table with
//! the static default; rows are never mixed.

use crate::defaults::default_reference_table;
use crate::normalize::group_data_types_by_detail;
use crate::record_fallback;
use crate::settings::GenerationSettings;
use dcp_model::{ClassificationReferenceRow, GroupedDataType, Step2Data};
use dcp_textgen::{request_text, TextGenerator};
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::Arc;

/// Why a generated reference table was rejected
#[derive(Debug, thiserror::Error)]
pub enum ReferenceRejection {
    /// Response is not JSON
    #[error("response is not JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    /// Top-level value is not an array
    #[error("expected a JSON array, got {0}")]
    NotArray(&'static str),

    /// An element does not have the expected fields
    #[error("row does not match the expected fields: {0}")]
    Schema(#[source] serde_json::Error),

    /// Array has no rows
    #[error("no rows returned")]
    Empty,

    /// Row names a level that is not in the levels table
    #[error("unknown classification level: {0}")]
    UnknownLevel(String),

    /// Two rows name the same level
    #[error("classification level listed twice: {0}")]
    DuplicateLevel(String),

    /// A level of the levels table has no row
    #[error("no row for classification level: {0}")]
    MissingLevel(String),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Remove one surrounding markdown code fence, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    // Drop an info string such as `json` on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with(['[', '{']) => body.trim(),
        _ => inner.trim(),
    }
}

/// Strictly decode a generated reference table
///
/// # Errors
/// Returns the first [`ReferenceRejection`] encountered.
pub fn parse_reference_rows(
    text: &str,
    levels: &[String],
) -> Result<Vec<ClassificationReferenceRow>, ReferenceRejection> {
    let value: Value =
        serde_json::from_str(strip_code_fence(text)).map_err(ReferenceRejection::NotJson)?;
    if !value.is_array() {
        return Err(ReferenceRejection::NotArray(json_kind(&value)));
    }

    let rows: Vec<ClassificationReferenceRow> =
        serde_json::from_value(value).map_err(ReferenceRejection::Schema)?;
    if rows.is_empty() {
        return Err(ReferenceRejection::Empty);
    }

    let mut slots: Vec<Option<ClassificationReferenceRow>> = vec![None; levels.len()];
    for row in rows {
        let Some(index) = levels.iter().position(|level| *level == row.level) else {
            return Err(ReferenceRejection::UnknownLevel(row.level));
        };
        if slots[index].is_some() {
            return Err(ReferenceRejection::DuplicateLevel(row.level));
        }
        slots[index] = Some(row);
    }

    slots
        .into_iter()
        .zip(levels)
        .map(|(slot, level)| slot.ok_or_else(|| ReferenceRejection::MissingLevel(level.clone())))
        .collect()
}

fn describe_group(group: &GroupedDataType) -> String {
    let rating = |raw: &str| {
        dcp_model::Rating::parse(raw).map_or("unspecified", |r| r.label())
    };
    let regulations = group.detail.surfaced_regulations();
    format!(
        "- {}: sensitivity {}, business impact {}, regulations {}",
        group.data_types.join(", "),
        rating(&group.detail.sensitivity),
        rating(&group.detail.business_impact),
        if regulations.is_empty() {
            "none".to_string()
        } else {
            regulations.join(", ")
        }
    )
}

/// Build the reference-table prompt
#[must_use]
pub fn reference_prompt(levels: &[String], step2: Option<&Step2Data>) -> String {
    let groups = step2.map(group_data_types_by_detail).unwrap_or_default();

    let mut prompt = String::from(
        "Create the classification reference table of a data classification policy.\n",
    );
    let _ = writeln!(prompt, "Classification levels: {}", levels.join(", "));
    prompt.push_str("Data types handled by the organization:\n");
    if groups.is_empty() {
        prompt.push_str("- None specified\n");
    }
    for group in &groups {
        prompt.push_str(&describe_group(group));
        prompt.push('\n');
    }
    prompt.push_str(
        "\nReturn only a JSON array with one object per classification level, in the order given. \
         Each object must have exactly these string fields: \"level\", \"sensitivityLevel\", \
         \"businessImpact\", \"regulation\", \"description\", \"example\". \
         The \"level\" value must be one of the classification levels listed above.",
    );
    prompt
}

/// Produces the classification reference table
#[derive(Clone)]
pub struct ReferenceTableSynthesizer {
    generator: Arc<dyn TextGenerator>,
    settings: GenerationSettings,
}

impl std::fmt::Debug for ReferenceTableSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceTableSynthesizer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ReferenceTableSynthesizer {
    /// Create reference table synthesizer
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, settings: GenerationSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Generate the table for the resolved `levels`
    ///
    /// Never fails: returns either fully accepted generated rows or the
    /// static default table.
    pub async fn synthesize(
        &self,
        levels: &[String],
        step2: Option<&Step2Data>,
    ) -> Vec<ClassificationReferenceRow> {
        let prompt = reference_prompt(levels, step2);
        let options = self.settings.reference_options();

        let text = match request_text(self.generator.as_ref(), &prompt, &options).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "reference table generation failed; using default table");
                record_fallback("reference_table", "request");
                return default_reference_table();
            }
        };

        match parse_reference_rows(&text, levels) {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "accepted generated reference table");
                rows
            }
            Err(rejection) => {
                tracing::warn!(%rejection, "generated reference table rejected; using default table");
                record_fallback("reference_table", "response");
                default_reference_table()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcp_model::{DataTypeDetail, Rating};
    use dcp_textgen::{MockTextGenerator, TextGenError};
    use pretty_assertions::assert_eq;

    fn levels() -> Vec<String> {
        vec!["Public".to_string(), "Secret".to_string()]
    }

    const VALID: &str = r#"[
        {"level":"Public","sensitivityLevel":"Low","businessImpact":"Low","regulation":"None","description":"Open","example":"Brochures"},
        {"level":"Secret","sensitivityLevel":"High","businessImpact":"High","regulation":"Strict","description":"Closed","example":"Keys"}
    ]"#;

    #[test]
    fn accepts_exact_schema() {
        let rows = parse_reference_rows(VALID, &levels()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].sensitivity_level.as_deref(), Some("High"));
    }

    #[test]
    fn accepts_fenced_json() {
        let fenced = format!("```json\n{VALID}\n```");
        assert_eq!(parse_reference_rows(&fenced, &levels()).unwrap().len(), 2);
    }

    #[test]
    fn optional_ratings_may_be_omitted() {
        let rows = parse_reference_rows(
            r#"[{"level":"Public","description":"Open","example":"Brochures"}]"#,
            &["Public".to_string()],
        )
        .unwrap();
        assert_eq!(rows[0].regulation, None);
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            parse_reference_rows("Here is your table!", &levels()),
            Err(ReferenceRejection::NotJson(_))
        ));
    }

    #[test]
    fn rejects_object_top_level() {
        assert!(matches!(
            parse_reference_rows(r#"{"rows": []}"#, &levels()),
            Err(ReferenceRejection::NotArray("object"))
        ));
    }

    #[test]
    fn rejects_extra_fields() {
        let text = r#"[{"level":"Public","description":"d","example":"e","color":"green"}]"#;
        assert!(matches!(
            parse_reference_rows(text, &levels()),
            Err(ReferenceRejection::Schema(_))
        ));
    }

    #[test]
    fn rejects_non_string_fields() {
        let text = r#"[{"level":"Public","description":"d","example":3}]"#;
        assert!(matches!(
            parse_reference_rows(text, &levels()),
            Err(ReferenceRejection::Schema(_))
        ));
    }

    #[test]
    fn rejects_empty_array_and_unknown_levels() {
        assert!(matches!(
            parse_reference_rows("[]", &levels()),
            Err(ReferenceRejection::Empty)
        ));
        let text = r#"[{"level":"Internal","description":"d","example":"e"}]"#;
        match parse_reference_rows(text, &levels()) {
            Err(ReferenceRejection::UnknownLevel(level)) => assert_eq!(level, "Internal"),
            other => panic!("expected unknown level, got {other:?}"),
        }
    }

    #[test]
    fn rows_follow_level_order() {
        let swapped = r#"[
            {"level":"Secret","description":"Closed","example":"Keys"},
            {"level":"Public","description":"Open","example":"Brochures"}
        ]"#;
        let rows = parse_reference_rows(swapped, &levels()).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.level.as_str()).collect();
        assert_eq!(names, vec!["Public", "Secret"]);
    }

    #[test]
    fn rejects_missing_and_repeated_levels() {
        let partial = r#"[{"level":"Public","description":"Open","example":"Brochures"}]"#;
        match parse_reference_rows(partial, &levels()) {
            Err(ReferenceRejection::MissingLevel(level)) => assert_eq!(level, "Secret"),
            other => panic!("expected missing level, got {other:?}"),
        }

        let repeated = r#"[
            {"level":"Public","description":"Open","example":"Brochures"},
            {"level":"Public","description":"Open","example":"Flyers"},
            {"level":"Secret","description":"Closed","example":"Keys"}
        ]"#;
        match parse_reference_rows(repeated, &levels()) {
            Err(ReferenceRejection::DuplicateLevel(level)) => assert_eq!(level, "Public"),
            other => panic!("expected repeated level, got {other:?}"),
        }
    }

    #[test]
    fn prompt_lists_levels_and_grouped_types() {
        let mut step2 = Step2Data::default();
        step2.set_detail(
            "Payroll",
            DataTypeDetail::new(Rating::High, Rating::Medium).with_regulations(["SOX"]),
        );
        step2.set_detail(
            "Benefits",
            DataTypeDetail::new(Rating::High, Rating::Medium).with_regulations(["SOX"]),
        );

        let prompt = reference_prompt(&levels(), Some(&step2));
        assert!(prompt.contains("Classification levels: Public, Secret"));
        assert!(prompt.contains(
            "- Payroll, Benefits: sensitivity High, business impact Medium, regulations SOX"
        ));
        assert!(prompt.contains("\"sensitivityLevel\""));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn prompt_without_inventory_says_so() {
        assert!(reference_prompt(&levels(), None).contains("- None specified"));
    }

    #[tokio::test]
    async fn request_failure_uses_default_table() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|_, options| (options.temperature - 0.3).abs() < f64::EPSILON)
            .returning(|_, _| {
                Err(TextGenError::Status {
                    status: 429,
                    body: "slow down".to_string(),
                })
            });

        let synthesizer =
            ReferenceTableSynthesizer::new(Arc::new(mock), GenerationSettings::default());
        let rows = synthesizer.synthesize(&levels(), None).await;
        assert_eq!(rows, default_reference_table());
    }

    #[tokio::test]
    async fn malformed_response_uses_default_table() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .returning(|_, _| Ok(r#"{"level":"Public"}"#.to_string()));

        let synthesizer =
            ReferenceTableSynthesizer::new(Arc::new(mock), GenerationSettings::default());
        assert_eq!(
            synthesizer.synthesize(&levels(), None).await,
            default_reference_table()
        );
    }

    #[tokio::test]
    async fn valid_response_is_used_verbatim() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .returning(|_, _| Ok(VALID.to_string()));

        let synthesizer =
            ReferenceTableSynthesizer::new(Arc::new(mock), GenerationSettings::default());
        let rows = synthesizer.synthesize(&levels(), None).await;
        let names: Vec<&str> = rows.iter().map(|r| r.level.as_str()).collect();
        assert_eq!(names, vec!["Public", "Secret"]);
    }
}
