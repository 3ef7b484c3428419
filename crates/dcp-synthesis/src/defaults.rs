//! Static fallback content
//!
//! The last rung of every fallback ladder. Each table here is complete on
//! its own and is always used whole, never mixed with derived rows.

use dcp_model::{ClassificationLevelRow, ClassificationReferenceRow, DataCategoryRow};

/// Purpose used when generation fails
pub const FALLBACK_PURPOSE: &str = "The purpose of this policy is to establish a framework for \
classifying the organization's data according to its sensitivity and value, so that each \
category of information receives protection proportionate to the risk of its disclosure.";

/// Scope used when generation fails
pub const FALLBACK_SCOPE: &str = "This policy applies to all employees, contractors and third \
parties who create, access, process or store organizational data, in any format and on any \
system owned or operated by the organization.";

/// Roles & responsibilities used when generation fails
pub const FALLBACK_ROLES: &str = "Data owners are accountable for classifying the data in their \
area and approving access to it. Data custodians implement and operate the controls required for \
each classification level, and all users must handle data in accordance with its assigned \
classification.";

/// Definition used for a level that was chosen without one
#[must_use]
pub fn placeholder_definition(level: &str) -> String {
    format!("{level} classification level")
}

/// Complete four-level table
#[must_use]
pub fn default_classification_levels() -> Vec<ClassificationLevelRow> {
    vec![
        ClassificationLevelRow::new(
            "Public",
            "Information that can be freely disclosed to the public without harm to the organization.",
        ),
        ClassificationLevelRow::new(
            "Internal",
            "Information intended for use within the organization whose disclosure would cause minimal harm.",
        ),
        ClassificationLevelRow::new(
            "Confidential",
            "Sensitive information whose unauthorized disclosure could cause significant harm to the organization or individuals.",
        ),
        ClassificationLevelRow::new(
            "Restricted",
            "Highly sensitive information whose unauthorized disclosure could cause severe harm or breach legal obligations.",
        ),
    ]
}

fn reference_row(
    level: &str,
    sensitivity: &str,
    impact: &str,
    regulation: &str,
    description: &str,
    example: &str,
) -> ClassificationReferenceRow {
    ClassificationReferenceRow {
        level: level.to_string(),
        sensitivity_level: Some(sensitivity.to_string()),
        business_impact: Some(impact.to_string()),
        regulation: Some(regulation.to_string()),
        description: description.to_string(),
        example: example.to_string(),
    }
}

/// Complete four-level reference table
#[must_use]
pub fn default_reference_table() -> Vec<ClassificationReferenceRow> {
    vec![
        reference_row(
            "Public",
            "Low",
            "Low",
            "None",
            "Information approved for public release.",
            "Marketing materials, press releases, public website content",
        ),
        reference_row(
            "Internal",
            "Low to Medium",
            "Low to Medium",
            "Minimal",
            "Information for internal business use only.",
            "Internal memos, organizational charts, internal procedures",
        ),
        reference_row(
            "Confidential",
            "Medium to High",
            "Medium to High",
            "Moderate",
            "Sensitive business or personal information with restricted distribution.",
            "Customer records, contracts, financial reports, employee data",
        ),
        reference_row(
            "Restricted",
            "High",
            "High",
            "Strict",
            "Highly sensitive information subject to legal, regulatory or contractual protection.",
            "Payment card data, health records, authentication secrets, trade secrets",
        ),
    ]
}

/// Two-row categories table used when nothing else is known
#[must_use]
pub fn default_data_categories() -> Vec<DataCategoryRow> {
    vec![
        DataCategoryRow {
            category: "Employee Data".to_string(),
            description: "Personal and employment information about staff members.".to_string(),
            examples: "Names, addresses, payroll records, performance reviews".to_string(),
            classification: "Confidential".to_string(),
        },
        DataCategoryRow {
            category: "Customer Data".to_string(),
            description: "Information about customers and their interactions with the organization."
                .to_string(),
            examples: "Contact details, purchase history, account information".to_string(),
            classification: "Confidential".to_string(),
        },
    ]
}
