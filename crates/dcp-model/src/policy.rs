//! Generated policy document model
//!
//! [`PolicyDocument`] is transient: it is rebuilt on every generation request
//! and never persisted.

use serde::{Deserialize, Serialize};

/// Free-text narrative sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeSections {
    /// Purpose of the policy
    pub purpose: String,
    /// Scope of the policy
    pub scope: String,
    /// Roles and responsibilities
    pub roles_and_responsibilities: String,
}

/// One row of the classification levels table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationLevelRow {
    /// Level name
    pub level: String,
    /// Level definition
    pub definition: String,
}

impl ClassificationLevelRow {
    /// Create level row
    pub fn new(level: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            definition: definition.into(),
        }
    }
}

/// One row of the classification reference table
///
/// Decoding is strict: unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassificationReferenceRow {
    /// Level name
    pub level: String,
    /// Sensitivity rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_level: Option<String>,
    /// Business impact rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_impact: Option<String>,
    /// Regulatory strictness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation: Option<String>,
    /// Description of the level
    pub description: String,
    /// Example data
    pub example: String,
}

/// One row of the data categories table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCategoryRow {
    /// Category name
    pub category: String,
    /// Description
    pub description: String,
    /// Example records
    pub examples: String,
    /// Assigned level name
    pub classification: String,
}

/// The synthesized policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    /// Purpose section
    pub purpose: String,
    /// Scope section
    pub scope: String,
    /// Roles & responsibilities section
    pub roles_and_responsibilities: String,
    /// Classification levels table
    pub classification_levels: Vec<ClassificationLevelRow>,
    /// Classification reference table
    pub classification_reference: Vec<ClassificationReferenceRow>,
    /// Data categories table
    pub data_categories: Vec<DataCategoryRow>,
}

impl PolicyDocument {
    /// Package narrative and tables without transforming them
    #[must_use]
    pub fn from_parts(
        narrative: NarrativeSections,
        classification_levels: Vec<ClassificationLevelRow>,
        classification_reference: Vec<ClassificationReferenceRow>,
        data_categories: Vec<DataCategoryRow>,
    ) -> Self {
        Self {
            purpose: narrative.purpose,
            scope: narrative.scope,
            roles_and_responsibilities: narrative.roles_and_responsibilities,
            classification_levels,
            classification_reference,
            data_categories,
        }
    }

    /// Level names declared by the levels table, in table order
    #[must_use]
    pub fn level_names(&self) -> Vec<&str> {
        self.classification_levels
            .iter()
            .map(|r| r.level.as_str())
            .collect()
    }

    /// Level names used by the reference or categories table but not declared
    #[must_use]
    pub fn undeclared_levels(&self) -> Vec<&str> {
        let declared = self.level_names();
        let mut missing: Vec<&str> = Vec::new();
        let used = self
            .classification_reference
            .iter()
            .map(|r| r.level.as_str())
            .chain(self.data_categories.iter().map(|c| c.classification.as_str()));
        for level in used {
            if !declared.contains(&level) && !missing.contains(&level) {
                missing.push(level);
            }
        }
        missing
    }

    /// Whether every text field and table is populated
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.purpose.trim().is_empty()
            && !self.scope.trim().is_empty()
            && !self.roles_and_responsibilities.trim().is_empty()
            && !self.classification_levels.is_empty()
            && !self.classification_reference.is_empty()
            && !self.data_categories.is_empty()
    }
}
