//! Subcommand implementations
//!
//! Each command returns the text destined for stdout so it can be exercised
//! without spawning the binary.

use crate::bundle::Bundle;
use anyhow::Context as _;
use dcp_core::{DcpConfig, PolicyService, StepStore};
use dcp_model::{StepData, StepNumber, StepRecord};
use dcp_render::{render_preview, write_docx};
use dcp_synthesis::group_data_types_by_detail;
use std::path::PathBuf;

/// Options of `dcp generate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Bundle file
    pub bundle: PathBuf,
    /// TOML configuration file
    pub config: Option<PathBuf>,
    /// Write the DOCX here
    pub docx: Option<PathBuf>,
    /// Print the markdown preview
    pub preview: bool,
    /// Force every generated field to its fallback
    pub offline: bool,
}

fn load_config(args: &GenerateArgs) -> anyhow::Result<DcpConfig> {
    let config = match &args.config {
        Some(path) => DcpConfig::load(path)?,
        None => DcpConfig::default(),
    };
    Ok(if args.offline {
        config.with_offline(true)
    } else {
        config
    })
}

/// Generate a policy for the bundle's organization
///
/// Prints the preview when requested, the document as JSON when neither a
/// preview nor a DOCX path was asked for, and nothing otherwise.
///
/// # Errors
/// Fails on unreadable config or bundle, HTTP client setup, or DOCX output.
pub async fn generate(args: &GenerateArgs) -> anyhow::Result<String> {
    let config = load_config(args)?;
    let (store, organization) = Bundle::load(&args.bundle)?.into_store()?;

    let generator = config
        .text_generator()
        .context("failed to set up text generation")?;
    let service = PolicyService::new(store, generator, config.generation.clone());
    let document = service.create_policy_data(organization.id).await?;

    let mut output = String::new();
    if let Some(path) = &args.docx {
        write_docx(&document, Some(&organization.name), path)?;
    }
    if args.preview {
        output = render_preview(
            &document,
            Some(&organization.name),
            chrono::Local::now().date_naive(),
        );
    } else if args.docx.is_none() {
        output = serde_json::to_string_pretty(&document)?;
    }
    Ok(output)
}

/// Print the step-2 data types grouped by shared risk profile
///
/// An absent or malformed step-2 record yields an empty list.
///
/// # Errors
/// Fails if the bundle cannot be loaded.
pub async fn group(bundle: &std::path::Path) -> anyhow::Result<String> {
    let (store, organization) = Bundle::load(bundle)?.into_store()?;

    let step2 = match store
        .step_record(organization.id, StepNumber::Inventory)
        .await?
        .map(|raw| StepRecord::validate(raw, StepNumber::Inventory))
    {
        Some(Ok(StepRecord {
            data: StepData::Inventory(step2),
            ..
        })) => Some(step2),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "step 2 record ignored");
            None
        }
        _ => None,
    };

    let groups = step2
        .as_ref()
        .map(group_data_types_by_detail)
        .unwrap_or_default();
    Ok(serde_json::to_string_pretty(&groups)?)
}
