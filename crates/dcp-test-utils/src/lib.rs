//! Testing utilities for DCP workspace
//!
//! Shared fixtures and a scripted text generator.

#![allow(missing_docs)]

use async_trait::async_trait;
use dcp_model::{
    CategoryEntry, ClassificationLevelsData, DataTypeDetail, EncryptionRequirement, Rating,
    RawStepRecord, Step1Data, Step2Data, Step3Data, Step4Data, StepData, StepInputs,
};
use dcp_textgen::{GenerationOptions, TextGenError, TextGenerator};
use std::sync::Mutex;

pub const ACME: &str = "Acme Corp";

/// Step 3 with `Public`, `Confidential` and custom `TopSecret`; only `Public` defined
pub fn acme_step3() -> Step3Data {
    Step3Data {
        classification_levels: Some(ClassificationLevelsData {
            default_levels: vec!["Public".into(), "Confidential".into()],
            custom_levels: vec!["TopSecret".into()],
            definitions: [("Public".to_string(), "open data".to_string())]
                .into_iter()
                .collect(),
        }),
        ..Step3Data::default()
    }
}

pub fn sample_step1() -> Step1Data {
    let mut step1 = Step1Data {
        organization_name: ACME.to_string(),
        industry: "Manufacturing".to_string(),
        organization_size: "201-1000".to_string(),
        ..Step1Data::default()
    };
    step1.add_objective("Protect customer data");
    step1.add_stakeholder("IT");
    step1.add_stakeholder("Legal");
    step1.add_regulation("GDPR");
    step1
}

pub fn sample_step2() -> Step2Data {
    let mut step2 = Step2Data {
        has_data_inventory: "yes".to_string(),
        ..Step2Data::default()
    };
    step2.select_data_type("Customer PII");
    step2.select_data_type("Payment data");
    step2.select_data_type("Marketing");
    step2.set_detail(
        "Customer PII",
        DataTypeDetail::new(Rating::High, Rating::High).with_regulations(["GDPR"]),
    );
    step2.set_detail(
        "Payment data",
        DataTypeDetail::new(Rating::High, Rating::High).with_regulations(["GDPR"]),
    );
    step2.set_detail("Marketing", DataTypeDetail::new(Rating::None, Rating::Low));
    step2
}

pub fn sample_step3() -> Step3Data {
    let mut step3 = acme_step3();
    step3.add_category(CategoryEntry::new(
        "Customer PII",
        "Personal data of customers",
        "Names, emails",
        "Confidential",
    ));
    step3
}

pub fn sample_step4() -> Step4Data {
    let mut step4 = Step4Data::default();
    step4.add_access_method("VPN");
    step4.add_access_method("SSO portal");
    step4.set_access_permissions("Confidential", ["Finance", "Legal"]);
    step4.set_encryption(
        "Confidential",
        EncryptionRequirement {
            at_rest: "yes".to_string(),
            in_transit: "yes".to_string(),
        },
    );
    step4
}

pub fn sample_inputs() -> StepInputs {
    StepInputs::new()
        .with_step1(sample_step1())
        .with_step2(sample_step2())
        .with_step3(sample_step3())
        .with_step4(sample_step4())
}

pub fn submitted(data: StepData) -> RawStepRecord {
    RawStepRecord::submitted(&data).unwrap()
}

/// All four steps as raw records, as a store would return them
pub fn sample_records() -> Vec<RawStepRecord> {
    vec![
        submitted(StepData::Context(sample_step1())),
        submitted(StepData::Inventory(sample_step2())),
        submitted(StepData::Criteria(sample_step3())),
        submitted(StepData::Controls(sample_step4())),
    ]
}

/// A well-formed reference table for the Acme levels
pub fn acme_reference_json() -> String {
    serde_json::json!([
        {"level": "Public", "sensitivityLevel": "Low", "businessImpact": "Low", "regulation": "None",
         "description": "Open data", "example": "Brochures"},
        {"level": "Confidential", "sensitivityLevel": "High", "businessImpact": "High", "regulation": "GDPR",
         "description": "Customer data", "example": "Customer PII"},
        {"level": "TopSecret", "sensitivityLevel": "High", "businessImpact": "Critical", "regulation": "Strict",
         "description": "Crown jewels", "example": "Payment data"}
    ])
    .to_string()
}

/// Text generator answering by prompt substring
///
/// Rules are checked in insertion order; a prompt matching no rule fails
/// with `TextGenError::Disabled`. Every prompt is recorded.
#[derive(Debug, Default)]
pub struct ScriptedTextGenerator {
    rules: Vec<(String, Result<String, String>)>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, needle: &str, text: impl Into<String>) -> Self {
        self.rules.push((needle.to_string(), Ok(text.into())));
        self
    }

    pub fn fail(mut self, needle: &str, status_body: &str) -> Self {
        self.rules
            .push((needle.to_string(), Err(status_body.to_string())));
        self
    }

    /// Reply to all four call sites of a policy generation
    pub fn answering_everything(reference_json: impl Into<String>) -> Self {
        Self::new()
            .reply("JSON array", reference_json)
            .reply("purpose statement", "Generated purpose.")
            .reply("scope statement", "Generated scope.")
            .reply("roles and responsibilities", "Generated roles.")
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, TextGenError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.rules.iter().find(|(needle, _)| prompt.contains(needle)) {
            Some((_, Ok(text))) => Ok(text.clone()),
            Some((_, Err(body))) => Err(TextGenError::Status {
                status: 500,
                body: body.clone(),
            }),
            None => Err(TextGenError::Disabled),
        }
    }
}
