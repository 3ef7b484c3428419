//! Narrative sections: purpose, scope, roles & responsibilities
//!
//! Three independent generation calls share one context block and run
//! concurrently. A failed call only affects its own field, which then takes
//! a fixed fallback sentence.

use crate::context::NarrativeContext;
use crate::defaults::{FALLBACK_PURPOSE, FALLBACK_ROLES, FALLBACK_SCOPE};
use crate::record_fallback;
use crate::settings::GenerationSettings;
use dcp_model::NarrativeSections;
use dcp_textgen::{request_text, TextGenerator};
use std::sync::Arc;

/// One narrative field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeField {
    /// Purpose
    Purpose,
    /// Scope
    Scope,
    /// Roles & responsibilities
    RolesAndResponsibilities,
}

impl NarrativeField {
    /// All fields in document order
    pub const ALL: [NarrativeField; 3] = [
        NarrativeField::Purpose,
        NarrativeField::Scope,
        NarrativeField::RolesAndResponsibilities,
    ];

    /// Label for logs and metrics
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NarrativeField::Purpose => "purpose",
            NarrativeField::Scope => "scope",
            NarrativeField::RolesAndResponsibilities => "roles_and_responsibilities",
        }
    }

    /// Fixed text used when generation fails
    #[must_use]
    pub fn fallback(self) -> &'static str {
        match self {
            NarrativeField::Purpose => FALLBACK_PURPOSE,
            NarrativeField::Scope => FALLBACK_SCOPE,
            NarrativeField::RolesAndResponsibilities => FALLBACK_ROLES,
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            NarrativeField::Purpose => {
                "Write the purpose statement of a data classification policy for the organization \
                 described below. Explain why the organization classifies its data."
            }
            NarrativeField::Scope => {
                "Write the scope statement of a data classification policy for the organization \
                 described below. State which people, systems and data the policy covers."
            }
            NarrativeField::RolesAndResponsibilities => {
                "Write the roles and responsibilities section of a data classification policy for \
                 the organization described below. Name the key roles and what each is accountable for."
            }
        }
    }

    fn max_tokens(self, settings: &GenerationSettings) -> u32 {
        match self {
            NarrativeField::Purpose => settings.purpose_max_tokens,
            NarrativeField::Scope => settings.scope_max_tokens,
            NarrativeField::RolesAndResponsibilities => settings.roles_max_tokens,
        }
    }

    /// Full prompt for this field
    #[must_use]
    pub fn prompt(self, context_block: &str) -> String {
        format!(
            "{}\nUse one to three concise sentences in a professional register. \
             Return only the text, without headings or quotation marks.\n\n{}",
            self.instruction(),
            context_block
        )
    }
}

/// Generates the narrative sections
#[derive(Clone)]
pub struct NarrativeGenerator {
    generator: Arc<dyn TextGenerator>,
    settings: GenerationSettings,
}

impl std::fmt::Debug for NarrativeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeGenerator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl NarrativeGenerator {
    /// Create narrative generator
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, settings: GenerationSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Resolve all three fields
    ///
    /// Never fails: each field holds either generated text or its fallback.
    pub async fn generate(&self, context: &NarrativeContext) -> NarrativeSections {
        let block = context.render();
        let (purpose, scope, roles_and_responsibilities) = futures::join!(
            self.resolve(NarrativeField::Purpose, &block),
            self.resolve(NarrativeField::Scope, &block),
            self.resolve(NarrativeField::RolesAndResponsibilities, &block),
        );
        NarrativeSections {
            purpose,
            scope,
            roles_and_responsibilities,
        }
    }

    async fn resolve(&self, field: NarrativeField, block: &str) -> String {
        let prompt = field.prompt(block);
        let options = self
            .settings
            .narrative_options(field.max_tokens(&self.settings));

        match request_text(self.generator.as_ref(), &prompt, &options).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    field = field.label(),
                    error = %err,
                    "narrative generation failed; using fallback text"
                );
                record_fallback("narrative", field.label());
                field.fallback().to_string()
            }
        }
    }
}
