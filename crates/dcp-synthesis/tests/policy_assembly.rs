use dcp_model::{
    ClassificationLevelsData, DataTypeDetail, PolicyDocument, Rating, Step2Data, Step3Data,
    StepInputs, DEFAULT_LEVEL_NAMES,
};
use dcp_synthesis::defaults::{
    default_data_categories, default_reference_table, placeholder_definition, FALLBACK_SCOPE,
};
use dcp_synthesis::{GenerationSettings, PolicyAssembler};
use dcp_test_utils::{
    acme_reference_json, acme_step3, sample_step1, sample_step2, sample_step3, sample_step4,
    ScriptedTextGenerator, ACME,
};
use dcp_textgen::DisabledTextGenerator;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn assembler(generator: ScriptedTextGenerator) -> PolicyAssembler {
    PolicyAssembler::new(Arc::new(generator), GenerationSettings::default())
}

#[tokio::test]
async fn test_acme_levels_follow_selection() {
    let inputs = StepInputs::new().with_step3(acme_step3());
    let document = assembler(ScriptedTextGenerator::answering_everything(acme_reference_json()))
        .assemble(Some(ACME), &inputs)
        .await;

    let levels: Vec<(&str, &str)> = document
        .classification_levels
        .iter()
        .map(|r| (r.level.as_str(), r.definition.as_str()))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("Public", "open data"),
            ("Confidential", placeholder_definition("Confidential").as_str()),
            ("TopSecret", placeholder_definition("TopSecret").as_str()),
        ]
    );
    assert_eq!(document.purpose, "Generated purpose.");
    assert_eq!(document.classification_reference.len(), 3);
    assert!(document
        .classification_reference
        .iter()
        .all(|r| document.level_names().contains(&r.level.as_str())));
}

#[tokio::test]
async fn test_reference_prompt_carries_levels_and_groups() {
    let generator = Arc::new(ScriptedTextGenerator::answering_everything(acme_reference_json()));
    let inputs = StepInputs::new()
        .with_step2(sample_step2())
        .with_step3(acme_step3());

    PolicyAssembler::new(generator.clone(), GenerationSettings::default())
        .assemble(Some(ACME), &inputs)
        .await;

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 4);
    let reference = prompts
        .iter()
        .find(|p| p.contains("JSON array"))
        .expect("reference prompt issued");
    assert!(reference.contains("Classification levels: Public, Confidential, TopSecret"));
    assert!(reference.contains("- Customer PII, Payment data: sensitivity High"));
    assert!(reference.contains("- Marketing: sensitivity None"));
}

#[tokio::test]
async fn test_malformed_reference_falls_back_whole() {
    let generator = ScriptedTextGenerator::answering_everything(
        r#"[{"level":"Public","description":"d","example":"e"}, {"nope":true}]"#,
    );
    let document = assembler(generator)
        .assemble(Some(ACME), &StepInputs::new().with_step3(acme_step3()))
        .await;

    assert_eq!(document.classification_reference, default_reference_table());
}

#[tokio::test]
async fn test_one_failed_narrative_call_is_isolated() {
    let generator = ScriptedTextGenerator::new()
        .fail("scope statement", "upstream exploded")
        .reply("purpose statement", "Generated purpose.")
        .reply("roles and responsibilities", "Generated roles.")
        .reply("JSON array", acme_reference_json());
    let document = assembler(generator)
        .assemble(Some(ACME), &StepInputs::new().with_step3(acme_step3()))
        .await;

    assert_eq!(document.purpose, "Generated purpose.");
    assert_eq!(document.scope, FALLBACK_SCOPE);
    assert_eq!(document.roles_and_responsibilities, "Generated roles.");
}

#[tokio::test]
async fn test_every_step_combination_yields_complete_document() {
    let assembler =
        PolicyAssembler::new(Arc::new(DisabledTextGenerator), GenerationSettings::default());

    for mask in 0u8..16 {
        let mut inputs = StepInputs::new();
        if mask & 1 != 0 {
            inputs.step1 = Some(sample_step1());
        }
        if mask & 2 != 0 {
            inputs.step2 = Some(sample_step2());
        }
        if mask & 4 != 0 {
            inputs.step3 = Some(acme_step3());
        }
        if mask & 8 != 0 {
            inputs.step4 = Some(sample_step4());
        }

        let document = assembler.assemble(None, &inputs).await;
        assert!(document.is_complete(), "incomplete for mask {mask:04b}");

        if inputs.step3.is_none() {
            assert_eq!(document.level_names(), DEFAULT_LEVEL_NAMES.to_vec());
        }
    }
}

#[tokio::test]
async fn test_assembly_is_deterministic_for_fixed_answers() {
    let inputs = StepInputs::new()
        .with_step1(sample_step1())
        .with_step2(sample_step2())
        .with_step3(acme_step3());

    let first = assembler(ScriptedTextGenerator::answering_everything(acme_reference_json()))
        .assemble(Some(ACME), &inputs)
        .await;
    let second = assembler(ScriptedTextGenerator::answering_everything(acme_reference_json()))
        .assemble(Some(ACME), &inputs)
        .await;

    assert_eq!(first, second);
}

fn marketing_only() -> Step2Data {
    let mut step2 = Step2Data::default();
    step2.select_data_type("Marketing");
    step2.set_detail("Marketing", DataTypeDetail::new(Rating::None, Rating::Low));
    step2
}

fn internal_and_secret() -> Step3Data {
    Step3Data {
        classification_levels: Some(ClassificationLevelsData {
            default_levels: vec!["Internal".into()],
            custom_levels: vec!["Secret".into()],
            ..ClassificationLevelsData::default()
        }),
        ..Step3Data::default()
    }
}

fn names_undeclared(document: &PolicyDocument, used: &[&str]) -> bool {
    let declared = document.level_names();
    used.iter().any(|level| !declared.contains(level))
}

#[tokio::test]
async fn test_categories_outside_selected_levels_fall_back_whole() {
    let inputs = StepInputs::new()
        .with_step2(sample_step2())
        .with_step3(acme_step3());
    let document = assembler(ScriptedTextGenerator::answering_everything(acme_reference_json()))
        .assemble(Some(ACME), &inputs)
        .await;

    assert_eq!(document.level_names(), vec!["Public", "Confidential", "TopSecret"]);
    assert_eq!(document.data_categories, default_data_categories());
    assert!(document.undeclared_levels().is_empty());
}

#[tokio::test]
async fn test_categories_within_selected_levels_are_kept() {
    let inputs = StepInputs::new()
        .with_step2(marketing_only())
        .with_step3(sample_step3());
    let document = assembler(ScriptedTextGenerator::answering_everything(acme_reference_json()))
        .assemble(Some(ACME), &inputs)
        .await;

    let categories: Vec<(&str, &str)> = document
        .data_categories
        .iter()
        .map(|c| (c.category.as_str(), c.classification.as_str()))
        .collect();
    assert_eq!(
        categories,
        vec![("Customer PII", "Confidential"), ("Marketing", "Public")]
    );
    assert!(document.undeclared_levels().is_empty());
}

#[tokio::test]
async fn test_tables_use_declared_levels_or_their_default() {
    let step2_variants = [None, Some(sample_step2()), Some(marketing_only())];
    let step3_variants = [
        None,
        Some(acme_step3()),
        Some(sample_step3()),
        Some(internal_and_secret()),
    ];

    for generator in [
        ScriptedTextGenerator::answering_everything(acme_reference_json()),
        ScriptedTextGenerator::new(),
    ] {
        let assembler = assembler(generator);
        for step2 in &step2_variants {
            for step3 in &step3_variants {
                let inputs = StepInputs {
                    step2: step2.clone(),
                    step3: step3.clone(),
                    ..StepInputs::new()
                };
                let document = assembler.assemble(Some(ACME), &inputs).await;

                let classifications: Vec<&str> = document
                    .data_categories
                    .iter()
                    .map(|c| c.classification.as_str())
                    .collect();
                if names_undeclared(&document, &classifications) {
                    assert_eq!(document.data_categories, default_data_categories());
                }

                let reference_levels: Vec<&str> = document
                    .classification_reference
                    .iter()
                    .map(|r| r.level.as_str())
                    .collect();
                if names_undeclared(&document, &reference_levels) {
                    assert_eq!(document.classification_reference, default_reference_table());
                } else {
                    assert_eq!(reference_levels, document.level_names());
                }
            }
        }
    }
}
