//! Policy assembly
//!
//! Pulls the three narrative sections and the three tables together into a
//! [`PolicyDocument`]. The two table builders that need no text generation
//! run synchronously; the four generation calls run concurrently.

use crate::categories::data_categories_table;
use crate::context::NarrativeContext;
use crate::levels::classification_levels_table;
use crate::narrative::NarrativeGenerator;
use crate::reference::ReferenceTableSynthesizer;
use crate::settings::GenerationSettings;
use dcp_model::{PolicyDocument, StepInputs};
use dcp_textgen::TextGenerator;
use std::sync::Arc;

/// Builds complete policy documents
#[derive(Debug, Clone)]
pub struct PolicyAssembler {
    narrative: NarrativeGenerator,
    reference: ReferenceTableSynthesizer,
}

impl PolicyAssembler {
    /// Create assembler sharing one text generator across all calls
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, settings: GenerationSettings) -> Self {
        Self {
            narrative: NarrativeGenerator::new(Arc::clone(&generator), settings.clone()),
            reference: ReferenceTableSynthesizer::new(generator, settings),
        }
    }

    /// Assemble the document for one organization
    ///
    /// Total over every combination of present and absent steps: each field
    /// and table is either derived or replaced by its default.
    pub async fn assemble(
        &self,
        organization_name: Option<&str>,
        inputs: &StepInputs,
    ) -> PolicyDocument {
        tracing::info!(
            steps = ?inputs.present_steps(),
            "assembling policy document"
        );

        let levels = classification_levels_table(inputs.step3.as_ref());
        let level_names: Vec<String> = levels.iter().map(|row| row.level.clone()).collect();
        let categories =
            data_categories_table(inputs.step2.as_ref(), inputs.step3.as_ref(), &level_names);

        if inputs.step4.as_ref().is_some_and(|s| s.has_level_matrices()) {
            tracing::debug!("per-level access and encryption answers are not rendered");
        }

        let context = NarrativeContext::from_inputs(organization_name, inputs);
        let (narrative, reference) = futures::join!(
            self.narrative.generate(&context),
            self.reference.synthesize(&level_names, inputs.step2.as_ref()),
        );

        let document = PolicyDocument::from_parts(narrative, levels, reference, categories);

        let undeclared = document.undeclared_levels();
        if !undeclared.is_empty() {
            tracing::debug!(levels = ?undeclared, "default tables name levels outside the levels table");
        }

        tracing::info!(
            levels = document.classification_levels.len(),
            reference_rows = document.classification_reference.len(),
            categories = document.data_categories.len(),
            "policy document assembled"
        );
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{
        default_classification_levels, default_data_categories, default_reference_table,
        FALLBACK_PURPOSE, FALLBACK_ROLES, FALLBACK_SCOPE,
    };
    use dcp_textgen::{DisabledTextGenerator, MockTextGenerator};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn empty_assessment_is_all_defaults() {
        let assembler =
            PolicyAssembler::new(Arc::new(DisabledTextGenerator), GenerationSettings::default());
        let document = assembler.assemble(None, &StepInputs::new()).await;

        assert_eq!(document.purpose, FALLBACK_PURPOSE);
        assert_eq!(document.scope, FALLBACK_SCOPE);
        assert_eq!(document.roles_and_responsibilities, FALLBACK_ROLES);
        assert_eq!(document.classification_levels, default_classification_levels());
        assert_eq!(document.classification_reference, default_reference_table());
        assert_eq!(document.data_categories, default_data_categories());
        assert!(document.is_complete());
    }

    #[tokio::test]
    async fn reference_prompt_receives_default_levels() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt, _| prompt.contains("JSON array"))
            .times(1)
            .returning(|prompt, _| {
                assert!(prompt.contains("Public, Internal, Confidential, Restricted"));
                Ok("not json".to_string())
            });
        mock.expect_generate()
            .withf(|prompt, _| !prompt.contains("JSON array"))
            .times(3)
            .returning(|_, _| Ok("Generated.".to_string()));

        let assembler = PolicyAssembler::new(Arc::new(mock), GenerationSettings::default());
        let document = assembler.assemble(Some("Acme Corp"), &StepInputs::new()).await;

        assert_eq!(document.purpose, "Generated.");
        assert_eq!(document.classification_reference, default_reference_table());
    }
}
