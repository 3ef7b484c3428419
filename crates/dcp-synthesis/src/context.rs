//! Shared context block for the narrative prompts

use crate::normalize::{regulation_vocabulary, resolve_level_names, selected_data_types};
use dcp_model::StepInputs;
use std::fmt::Write as _;

/// Placeholder for any fact the assessment did not provide
pub const NOT_SPECIFIED: &str = "Not specified";

/// Facts about the organization gathered from all four steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrativeContext {
    /// Organization name
    pub organization_name: Option<String>,
    /// Primary objectives (step 1)
    pub primary_objectives: Vec<String>,
    /// Organization size (step 1)
    pub organization_size: Option<String>,
    /// Stakeholders (step 1)
    pub stakeholders: Vec<String>,
    /// Regulations (step 1)
    pub regulations: Vec<String>,
    /// Selected data types (step 2)
    pub data_types: Vec<String>,
    /// Whether a data inventory exists (step 2)
    pub has_inventory: Option<bool>,
    /// Classification level names (step 3)
    pub classification_levels: Vec<String>,
    /// Access methods (step 4)
    pub access_methods: Vec<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn list_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        values.join(", ")
    }
}

impl NarrativeContext {
    /// Gather facts from whichever steps are present
    ///
    /// `organization_name` comes from the organization record; the name typed
    /// in step 1 is used when the record's name is blank.
    #[must_use]
    pub fn from_inputs(organization_name: Option<&str>, inputs: &StepInputs) -> Self {
        let mut context = Self {
            organization_name: organization_name.and_then(non_blank),
            ..Self::default()
        };

        if let Some(step1) = &inputs.step1 {
            if context.organization_name.is_none() {
                context.organization_name = non_blank(&step1.organization_name);
            }
            context.primary_objectives = step1
                .primary_objectives
                .iter()
                .filter_map(|o| non_blank(o))
                .collect();
            if let Some(other) = non_blank(&step1.objectives_other) {
                context.primary_objectives.push(other);
            }
            context.organization_size = non_blank(&step1.organization_size);
            context.stakeholders = step1
                .stakeholders
                .iter()
                .filter_map(|s| non_blank(s))
                .collect();
            context.regulations = regulation_vocabulary(step1);
        }

        if let Some(step2) = &inputs.step2 {
            context.data_types = selected_data_types(step2);
            context.has_inventory =
                non_blank(&step2.has_data_inventory).map(|_| step2.has_inventory());
        }

        if let Some(levels) = inputs
            .step3
            .as_ref()
            .and_then(|s| s.classification_levels.as_ref())
        {
            context.classification_levels = resolve_level_names(levels);
        }

        if let Some(step4) = &inputs.step4 {
            context.access_methods = step4
                .access_methods
                .iter()
                .filter_map(|m| non_blank(m))
                .collect();
        }

        context
    }

    /// Render the context block
    ///
    /// Always emits every line; missing facts read as [`NOT_SPECIFIED`].
    #[must_use]
    pub fn render(&self) -> String {
        let inventory = match self.has_inventory {
            Some(true) => "Yes",
            Some(false) => "No",
            None => NOT_SPECIFIED,
        };

        let mut block = String::new();
        let _ = writeln!(
            block,
            "Organization: {}",
            self.organization_name.as_deref().unwrap_or(NOT_SPECIFIED)
        );
        let _ = writeln!(
            block,
            "Primary objectives: {}",
            list_or_placeholder(&self.primary_objectives)
        );
        let _ = writeln!(
            block,
            "Organization size: {}",
            self.organization_size.as_deref().unwrap_or(NOT_SPECIFIED)
        );
        let _ = writeln!(block, "Stakeholders: {}", list_or_placeholder(&self.stakeholders));
        let _ = writeln!(block, "Regulations: {}", list_or_placeholder(&self.regulations));
        let _ = writeln!(block, "Data types: {}", list_or_placeholder(&self.data_types));
        let _ = writeln!(block, "Existing data inventory: {inventory}");
        let _ = writeln!(
            block,
            "Classification levels: {}",
            list_or_placeholder(&self.classification_levels)
        );
        let _ = write!(
            block,
            "Access methods: {}",
            list_or_placeholder(&self.access_methods)
        );
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcp_model::{Step1Data, Step2Data, Step3Data, Step4Data};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_inputs_degrade_every_line() {
        let block = NarrativeContext::from_inputs(None, &StepInputs::new()).render();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 9);
        for line in lines {
            assert!(line.ends_with(NOT_SPECIFIED), "line not degraded: {line}");
        }
    }

    #[test]
    fn facts_come_from_each_step() {
        let mut step1 = Step1Data {
            organization_size: "51-200".into(),
            objectives_other: "Win audits".into(),
            ..Step1Data::default()
        };
        step1.add_objective("Protect customer data");
        step1.add_stakeholder("IT");
        step1.add_regulation("GDPR");
        step1.add_other_regulation("SOX");

        let mut step2 = Step2Data {
            has_data_inventory: "yes".into(),
            ..Step2Data::default()
        };
        step2.select_data_type("Customer PII");

        let mut step3 = Step3Data::default();
        step3.select_default_level("Public");
        step3.add_custom_level("Partner");

        let mut step4 = Step4Data::default();
        step4.add_access_method("VPN");

        let inputs = StepInputs::new()
            .with_step1(step1)
            .with_step2(step2)
            .with_step3(step3)
            .with_step4(step4);

        let block = NarrativeContext::from_inputs(Some("Acme Corp"), &inputs).render();
        assert_eq!(
            block,
            "Organization: Acme Corp\n\
             Primary objectives: Protect customer data, Win audits\n\
             Organization size: 51-200\n\
             Stakeholders: IT\n\
             Regulations: GDPR, SOX\n\
             Data types: Customer PII\n\
             Existing data inventory: Yes\n\
             Classification levels: Public, Partner\n\
             Access methods: VPN"
        );
    }

    #[test]
    fn step1_name_used_when_record_name_blank() {
        let step1 = Step1Data {
            organization_name: "Globex".into(),
            ..Step1Data::default()
        };
        let context =
            NarrativeContext::from_inputs(Some("  "), &StepInputs::new().with_step1(step1));
        assert_eq!(context.organization_name.as_deref(), Some("Globex"));
    }
}
