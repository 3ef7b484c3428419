//! DOCX rendering
//!
//! Lays a [`PolicyDocument`] out in the fixed section order. Every data
//! table gets exactly one header row followed by one row per source entry,
//! so table row counts are `len + 1`.

use crate::error::RenderError;
use crate::layout::{
    ACCESS_COLUMNS, ACCESS_HEADING, ACCESS_ROWS, CATEGORIES_COLUMNS, CATEGORIES_HEADING,
    DESCRIPTION_NOTE, ENCRYPTION_COLUMNS, ENCRYPTION_HEADING, ENCRYPTION_ROWS, GUIDELINES,
    LEVELS_COLUMNS, LEVELS_HEADING, NOT_RATED, POLICY_ROLES_HEADING, PRIMARY_HEADER_FILL,
    PROCESS_RULES, PURPOSE_HEADING, REFERENCE_COLUMNS, REFERENCE_CRITERIA, REFERENCE_HEADING,
    ROLES_HEADING, SCOPE_HEADING, SUB_HEADER_FILL, TITLE,
};
use dcp_model::PolicyDocument;
use docx_rs::{AlignmentType, Docx, Paragraph, Run, Shading, Table, TableCell, TableRow};
use std::io::Cursor;
use std::path::Path;

// Sizes are in half-points.
const TITLE_SIZE: usize = 36;
const HEADING_SIZE: usize = 28;
const CAPTION_SIZE: usize = 24;

fn title(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text).bold().size(TITLE_SIZE))
        .align(AlignmentType::Center)
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(HEADING_SIZE))
}

fn caption(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(CAPTION_SIZE))
}

fn body(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn header_cell(text: &str, fill: &str) -> TableCell {
    let run = Run::new().add_text(text).bold();
    let run = if fill == PRIMARY_HEADER_FILL {
        run.color("FFFFFF")
    } else {
        run
    };
    TableCell::new()
        .add_paragraph(Paragraph::new().add_run(run))
        .shading(Shading::new().fill(fill))
}

fn body_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(body(text))
}

fn header_row(columns: &[&str], sub_headers: Option<std::ops::Range<usize>>) -> TableRow {
    let cells = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let fill = match &sub_headers {
                Some(range) if range.contains(&i) => SUB_HEADER_FILL,
                _ => PRIMARY_HEADER_FILL,
            };
            header_cell(column, fill)
        })
        .collect();
    TableRow::new(cells)
}

fn body_row<S: AsRef<str>>(values: &[S]) -> TableRow {
    TableRow::new(values.iter().map(|v| body_cell(v.as_ref())).collect())
}

fn table(header: TableRow, rows: impl IntoIterator<Item = TableRow>) -> Table {
    let mut all = vec![header];
    all.extend(rows);
    Table::new(all)
}

fn levels_table(document: &PolicyDocument) -> Table {
    table(
        header_row(&LEVELS_COLUMNS, None),
        document
            .classification_levels
            .iter()
            .map(|row| body_row(&[row.level.as_str(), row.definition.as_str()])),
    )
    .set_grid(vec![2400, 6600])
}

/// Classification reference table
///
/// The three criteria columns are told apart by sub-header shading in the
/// single header row; there is no merged "Classification Criteria" cell above
/// them, so the table keeps one header row plus one row per reference entry.
fn reference_table(document: &PolicyDocument) -> Table {
    table(
        header_row(&REFERENCE_COLUMNS, Some(REFERENCE_CRITERIA)),
        document.classification_reference.iter().map(|row| {
            body_row(&[
                row.level.as_str(),
                row.sensitivity_level.as_deref().unwrap_or(NOT_RATED),
                row.business_impact.as_deref().unwrap_or(NOT_RATED),
                row.regulation.as_deref().unwrap_or(NOT_RATED),
                row.description.as_str(),
                row.example.as_str(),
            ])
        }),
    )
    .set_grid(vec![1400, 1300, 1300, 1300, 1900, 1800])
}

fn categories_table(document: &PolicyDocument) -> Table {
    table(
        header_row(&CATEGORIES_COLUMNS, None),
        document.data_categories.iter().map(|row| {
            body_row(&[
                row.category.as_str(),
                row.description.as_str(),
                row.examples.as_str(),
                row.classification.as_str(),
            ])
        }),
    )
    .set_grid(vec![2000, 2800, 2600, 1600])
}

fn static_table<const N: usize>(columns: &[&str; N], rows: &[[&str; N]]) -> Table {
    table(
        header_row(columns, None),
        rows.iter().map(|row| body_row(row)),
    )
}

/// Build the document tree without packaging it
#[must_use]
pub fn build_docx(document: &PolicyDocument, organization_name: Option<&str>) -> Docx {
    let mut docx = Docx::new().add_paragraph(title(TITLE));
    if let Some(name) = organization_name.map(str::trim).filter(|n| !n.is_empty()) {
        docx = docx.add_paragraph(body(name).align(AlignmentType::Center));
    }

    docx.add_paragraph(heading(PURPOSE_HEADING))
        .add_paragraph(body(&document.purpose))
        .add_paragraph(heading(SCOPE_HEADING))
        .add_paragraph(body(&document.scope))
        .add_paragraph(heading(ROLES_HEADING))
        .add_paragraph(body(&document.roles_and_responsibilities))
        .add_paragraph(heading(POLICY_ROLES_HEADING))
        .add_paragraph(caption(LEVELS_HEADING))
        .add_table(levels_table(document))
        .add_paragraph(body(GUIDELINES))
        .add_paragraph(caption(REFERENCE_HEADING))
        .add_table(reference_table(document))
        .add_paragraph(body(DESCRIPTION_NOTE))
        .add_paragraph(caption(CATEGORIES_HEADING))
        .add_table(categories_table(document))
        .add_paragraph(body(PROCESS_RULES))
        .add_paragraph(caption(ACCESS_HEADING))
        .add_table(static_table(&ACCESS_COLUMNS, &ACCESS_ROWS))
        .add_paragraph(caption(ENCRYPTION_HEADING))
        .add_table(static_table(&ENCRYPTION_COLUMNS, &ENCRYPTION_ROWS))
}

/// Render the policy as a DOCX blob
///
/// # Errors
/// Returns [`RenderError::Package`] if the archive cannot be written.
pub fn render_docx(
    document: &PolicyDocument,
    organization_name: Option<&str>,
) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(document, organization_name)
        .build()
        .pack(&mut buffer)
        .map_err(|e| RenderError::Package(e.to_string()))?;

    let bytes = buffer.into_inner();
    tracing::debug!(bytes = bytes.len(), "rendered policy docx");
    Ok(bytes)
}

/// Render the policy and write it to `path`
///
/// # Errors
/// Returns [`RenderError`] if rendering or the write fails.
pub fn write_docx(
    document: &PolicyDocument,
    organization_name: Option<&str>,
    path: &Path,
) -> Result<(), RenderError> {
    let bytes = render_docx(document, organization_name)?;
    std::fs::write(path, bytes).map_err(|e| RenderError::io_error(path, e))?;
    tracing::info!(path = %path.display(), "wrote policy docx");
    Ok(())
}
