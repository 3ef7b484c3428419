//! Markdown preview
//!
//! Same sections and order as the DOCX output. Any value that is empty at
//! render time is shown as a bracketed placeholder such as `[Purpose]`; this
//! applies even when the pipeline ran successfully.

use crate::layout::{
    ACCESS_COLUMNS, ACCESS_HEADING, ACCESS_ROWS, CATEGORIES_COLUMNS, CATEGORIES_HEADING,
    DESCRIPTION_NOTE, ENCRYPTION_COLUMNS, ENCRYPTION_HEADING, ENCRYPTION_ROWS, GUIDELINES,
    LEVELS_COLUMNS, LEVELS_HEADING, NOT_RATED, POLICY_ROLES_HEADING, PROCESS_RULES,
    PURPOSE_HEADING, REFERENCE_COLUMNS, REFERENCE_HEADING, ROLES_HEADING, SCOPE_HEADING, TITLE,
};
use chrono::NaiveDate;
use dcp_model::PolicyDocument;
use std::fmt::Write as _;

/// Placeholder shown for a missing organization name
pub const ORGANIZATION_PLACEHOLDER: &str = "[Organization Name]";

fn or_placeholder(value: &str, label: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        format!("[{label}]")
    } else {
        value.to_string()
    }
}

fn cell(value: &str, label: &str) -> String {
    or_placeholder(value, label)
        .replace('|', "\\|")
        .replace(['\r', '\n'], " ")
}

fn table_header(out: &mut String, columns: &[&str]) {
    let _ = writeln!(out, "| {} |", columns.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(columns.len()));
}

fn table_row(out: &mut String, cells: &[String]) {
    let _ = writeln!(out, "| {} |", cells.join(" | "));
}

fn section(out: &mut String, heading: &str, text: &str) {
    let _ = writeln!(out, "## {heading}\n\n{}\n", or_placeholder(text, heading));
}

/// Render the markdown preview
///
/// `generated_on` is shown in a footer line after the policy body.
#[must_use]
pub fn render_preview(
    document: &PolicyDocument,
    organization_name: Option<&str>,
    generated_on: NaiveDate,
) -> String {
    let mut out = String::new();
    let organization = organization_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(ORGANIZATION_PLACEHOLDER);
    let _ = writeln!(out, "# {TITLE}\n\n**Organization:** {organization}\n");

    section(&mut out, PURPOSE_HEADING, &document.purpose);
    section(&mut out, SCOPE_HEADING, &document.scope);
    // Placeholder reads "[Roles and Responsibilities]" rather than the heading.
    let _ = writeln!(
        out,
        "## {ROLES_HEADING}\n\n{}\n",
        or_placeholder(&document.roles_and_responsibilities, "Roles and Responsibilities")
    );
    let _ = writeln!(out, "## {POLICY_ROLES_HEADING}\n");

    let _ = writeln!(out, "### {LEVELS_HEADING}\n");
    table_header(&mut out, &LEVELS_COLUMNS);
    for row in &document.classification_levels {
        table_row(
            &mut out,
            &[cell(&row.level, "Level"), cell(&row.definition, "Definition")],
        );
    }
    let _ = writeln!(out, "\n{GUIDELINES}\n");

    let _ = writeln!(out, "### {REFERENCE_HEADING}\n");
    table_header(&mut out, &REFERENCE_COLUMNS);
    for row in &document.classification_reference {
        table_row(
            &mut out,
            &[
                cell(&row.level, "Level"),
                cell(row.sensitivity_level.as_deref().unwrap_or(NOT_RATED), "Sensitivity Level"),
                cell(row.business_impact.as_deref().unwrap_or(NOT_RATED), "Business Impact"),
                cell(row.regulation.as_deref().unwrap_or(NOT_RATED), "Regulation"),
                cell(&row.description, "Description"),
                cell(&row.example, "Example"),
            ],
        );
    }
    let _ = writeln!(out, "\n{DESCRIPTION_NOTE}\n");

    let _ = writeln!(out, "### {CATEGORIES_HEADING}\n");
    table_header(&mut out, &CATEGORIES_COLUMNS);
    for row in &document.data_categories {
        table_row(
            &mut out,
            &[
                cell(&row.category, "Category"),
                cell(&row.description, "Description"),
                cell(&row.examples, "Examples"),
                cell(&row.classification, "Classification"),
            ],
        );
    }
    let _ = writeln!(out, "\n{PROCESS_RULES}\n");

    let _ = writeln!(out, "### {ACCESS_HEADING}\n");
    table_header(&mut out, &ACCESS_COLUMNS);
    for row in &ACCESS_ROWS {
        table_row(&mut out, &row.map(str::to_string));
    }

    let _ = writeln!(out, "\n### {ENCRYPTION_HEADING}\n");
    table_header(&mut out, &ENCRYPTION_COLUMNS);
    for row in &ENCRYPTION_ROWS {
        table_row(&mut out, &row.map(str::to_string));
    }

    let _ = write!(out, "\n---\n\n_Generated on {}_\n", generated_on.format("%B %-d, %Y"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcp_model::{ClassificationLevelRow, NarrativeSections};

    fn document(purpose: &str) -> PolicyDocument {
        PolicyDocument::from_parts(
            NarrativeSections {
                purpose: purpose.to_string(),
                scope: "Everything".to_string(),
                roles_and_responsibilities: "  ".to_string(),
            },
            vec![ClassificationLevelRow::new("Public", "")],
            Vec::new(),
            Vec::new(),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn empty_values_show_placeholders() {
        let preview = render_preview(&document(""), None, date());
        assert!(preview.contains("**Organization:** [Organization Name]"));
        assert!(preview.contains("## Purpose\n\n[Purpose]"));
        assert!(preview.contains("## Roles & Responsibilities\n\n[Roles and Responsibilities]"));
        assert!(preview.contains("| Public | [Definition] |"));
        assert!(preview.contains("## Scope\n\nEverything"));
    }

    #[test]
    fn sections_keep_document_order() {
        let preview = render_preview(&document("Why"), Some("Acme Corp"), date());
        let order = [
            PURPOSE_HEADING,
            SCOPE_HEADING,
            ROLES_HEADING,
            POLICY_ROLES_HEADING,
            LEVELS_HEADING,
            REFERENCE_HEADING,
            CATEGORIES_HEADING,
            ACCESS_HEADING,
            ENCRYPTION_HEADING,
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| preview.find(&format!("# {h}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(preview.contains("**Organization:** Acme Corp"));
    }

    #[test]
    fn generation_date_follows_body() {
        let preview = render_preview(&document("Why"), None, date());
        assert!(preview.trim_end().ends_with("_Generated on October 18, 2026_"));
    }

    #[test]
    fn cells_escape_pipes() {
        assert_eq!(cell("a|b\nc", "X"), "a\\|b c");
    }
}
