//! DCP Synthesis - policy content from loosely-typed assessment answers
//!
//! Turns the four (possibly absent) step payloads into a complete
//! [`PolicyDocument`](dcp_model::PolicyDocument):
//!
//! ```text
//! StepInputs ─┬─ normalize ──┬─ levels table (sync) ──────────┐
//!             │              ├─ categories table (sync) ──────┤
//!             │              └─ reference table (text gen) ───┼─ PolicyAssembler ─→ PolicyDocument
//!             └─ NarrativeContext ─ narrative (3× text gen) ──┘
//! ```
//!
//! Every derivation has a total fallback ladder; nothing in this crate
//! returns an error to its caller. Text generation failures are logged,
//! counted in `dcp_fallback_total`, and replaced with static defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use dcp_synthesis::{GenerationSettings, PolicyAssembler};
//! use dcp_textgen::DisabledTextGenerator;
//! use std::sync::Arc;
//!
//! let assembler = PolicyAssembler::new(Arc::new(DisabledTextGenerator), GenerationSettings::default());
//! let document = assembler.assemble(Some("Acme Corp"), &inputs).await;
//! assert!(document.is_complete());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod assembler;
pub mod categories;
pub mod context;
pub mod defaults;
pub mod levels;
pub mod narrative;
pub mod normalize;
pub mod reference;
pub mod settings;

pub use assembler::PolicyAssembler;
pub use categories::{data_categories_table, map_sensitivity_to_classification};
pub use context::{NarrativeContext, NOT_SPECIFIED};
pub use levels::classification_levels_table;
pub use narrative::{NarrativeField, NarrativeGenerator};
pub use normalize::{
    group_data_types_by_detail, regulation_vocabulary, resolve_level_names, selected_data_types,
};
pub use reference::{parse_reference_rows, ReferenceRejection, ReferenceTableSynthesizer};
pub use settings::GenerationSettings;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count one fallback taken by `component` for `field`
pub(crate) fn record_fallback(component: &'static str, field: &'static str) {
    metrics::counter!("dcp_fallback_total", "component" => component, "field" => field)
        .increment(1);
}
