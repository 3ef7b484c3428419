//! Per-step payload types
//!
//! One struct per wizard step. Every field is optional on the wire and
//! defaults to empty, so a partially filled step still decodes. Mutation goes
//! through small named operations instead of string-keyed field access.

use crate::rating::{Rating, YesNo};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in classification level vocabulary, lowest sensitivity first
pub const DEFAULT_LEVEL_NAMES: [&str; 4] = ["Public", "Internal", "Confidential", "Restricted"];

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

/// Step 1: context & objectives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step1Data {
    /// Organization name as typed in the wizard
    pub organization_name: String,
    /// Industry sector
    pub industry: String,
    /// Organization size bracket
    pub organization_size: String,
    /// Selected primary objectives
    pub primary_objectives: Vec<String>,
    /// Free-text objective
    pub objectives_other: String,
    /// Selected stakeholders
    pub stakeholders: Vec<String>,
    /// Selected regulations
    pub regulations: Vec<String>,
    /// Free-text regulations
    pub regulations_other: Vec<String>,
}

impl Step1Data {
    /// Select a regulation from the offered list
    pub fn add_regulation(&mut self, name: &str) -> bool {
        push_unique(&mut self.regulations, name)
    }

    /// Record a regulation typed by the user
    pub fn add_other_regulation(&mut self, name: &str) -> bool {
        push_unique(&mut self.regulations_other, name)
    }

    /// Select a primary objective
    pub fn add_objective(&mut self, objective: &str) -> bool {
        push_unique(&mut self.primary_objectives, objective)
    }

    /// Select a stakeholder
    pub fn add_stakeholder(&mut self, stakeholder: &str) -> bool {
        push_unique(&mut self.stakeholders, stakeholder)
    }
}

/// Risk profile recorded for one selected data type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataTypeDetail {
    /// Sensitivity rating (`none|low|medium|high`)
    pub sensitivity: String,
    /// Business impact rating (`none|low|medium|high`)
    pub business_impact: String,
    /// Whether the data type is regulated (`yes|no`)
    pub has_regulatory: String,
    /// Applicable regulations; ignored unless `has_regulatory` is yes
    pub regulations: Vec<String>,
    /// Storage locations
    pub storage: Vec<String>,
    /// Free-text storage locations
    pub storage_other: Vec<String>,
}

impl DataTypeDetail {
    /// Create detail with the given ratings and no regulation or storage
    #[must_use]
    pub fn new(sensitivity: Rating, business_impact: Rating) -> Self {
        Self {
            sensitivity: sensitivity.as_str().to_string(),
            business_impact: business_impact.as_str().to_string(),
            has_regulatory: "no".to_string(),
            ..Self::default()
        }
    }

    /// Mark as regulated by the given regulations
    #[must_use]
    pub fn with_regulations<I, S>(mut self, regulations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.has_regulatory = "yes".to_string();
        self.regulations = regulations.into_iter().map(Into::into).collect();
        self
    }

    /// With storage locations
    #[must_use]
    pub fn with_storage<I, S>(mut self, storage: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.storage = storage.into_iter().map(Into::into).collect();
        self
    }

    /// Interpreted sensitivity, `None` when unrecognized
    #[inline]
    #[must_use]
    pub fn sensitivity_rating(&self) -> Option<Rating> {
        Rating::parse(&self.sensitivity)
    }

    /// Interpreted business impact, `None` when unrecognized
    #[inline]
    #[must_use]
    pub fn business_impact_rating(&self) -> Option<Rating> {
        Rating::parse(&self.business_impact)
    }

    /// Whether the data type is regulated
    #[inline]
    #[must_use]
    pub fn is_regulated(&self) -> bool {
        YesNo::parse(&self.has_regulatory).is_yes()
    }

    /// Regulations that may be shown; empty for unregulated data
    #[must_use]
    pub fn surfaced_regulations(&self) -> &[String] {
        if self.is_regulated() {
            &self.regulations
        } else {
            &[]
        }
    }

    /// Field-wise equality with list fields compared as sets
    ///
    /// Scalar answers compare trimmed and ASCII case-insensitive, the same way
    /// [`Rating::parse`] reads them.
    #[must_use]
    pub fn same_profile(&self, other: &Self) -> bool {
        same_answer(&self.sensitivity, &other.sensitivity)
            && same_answer(&self.business_impact, &other.business_impact)
            && same_answer(&self.has_regulatory, &other.has_regulatory)
            && same_set(&self.regulations, &other.regulations)
            && same_set(&self.storage, &other.storage)
            && same_set(&self.storage_other, &other.storage_other)
    }
}

fn same_answer(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Map lookup tolerating surrounding whitespace in stored keys
fn get_trimmed<'a, V>(map: &'a IndexMap<String, V>, key: &str) -> Option<&'a V> {
    map.get(key).or_else(|| {
        let key = key.trim();
        map.iter().find(|(k, _)| k.trim() == key).map(|(_, v)| v)
    })
}

fn same_set(a: &[String], b: &[String]) -> bool {
    let mut a: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut b: Vec<&str> = b.iter().map(String::as_str).collect();
    a.sort_unstable();
    a.dedup();
    b.sort_unstable();
    b.dedup();
    a == b
}

/// Data types sharing one risk profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedDataType {
    /// Member data types, in source insertion order
    pub data_types: Vec<String>,
    /// Shared profile (as recorded for the first member)
    pub detail: DataTypeDetail,
}

/// Step 2: data inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step2Data {
    /// Whether an inventory already exists (`yes|no`)
    pub has_data_inventory: String,
    /// Selected data types
    pub data_types: Vec<String>,
    /// Free-text data types
    pub data_types_other: Vec<String>,
    /// Risk profile per data type, in entry order
    pub data_type_details: IndexMap<String, DataTypeDetail>,
}

impl Step2Data {
    /// Select a data type from the offered list
    pub fn select_data_type(&mut self, name: &str) -> bool {
        push_unique(&mut self.data_types, name)
    }

    /// Record a data type typed by the user
    pub fn add_other_data_type(&mut self, name: &str) -> bool {
        push_unique(&mut self.data_types_other, name)
    }

    /// Attach or replace the risk profile of a data type
    pub fn set_detail(&mut self, name: impl Into<String>, detail: DataTypeDetail) {
        self.data_type_details.insert(name.into(), detail);
    }

    /// Risk profile of a data type
    ///
    /// An exact key wins; otherwise a key equal after trimming matches.
    #[must_use]
    pub fn detail(&self, name: &str) -> Option<&DataTypeDetail> {
        get_trimmed(&self.data_type_details, name)
    }

    /// Whether the organization reported an existing inventory
    #[inline]
    #[must_use]
    pub fn has_inventory(&self) -> bool {
        YesNo::parse(&self.has_data_inventory).is_yes()
    }
}

/// Level names and definitions chosen in step 3
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationLevelsData {
    /// Selected built-in level names
    pub default_levels: Vec<String>,
    /// Organization-defined level names
    pub custom_levels: Vec<String>,
    /// Definition per level name
    pub definitions: IndexMap<String, String>,
}

impl ClassificationLevelsData {
    /// Stored definition of a level, matching keys the way [`Step2Data::detail`] does
    #[must_use]
    pub fn definition(&self, level: &str) -> Option<&str> {
        get_trimmed(&self.definitions, level).map(String::as_str)
    }

    fn contains(&self, name: &str) -> bool {
        self.default_levels.iter().any(|l| l == name) || self.custom_levels.iter().any(|l| l == name)
    }
}

/// One explicitly described data category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryEntry {
    /// Category name
    pub name: String,
    /// Description
    pub description: String,
    /// Example records
    pub examples: String,
    /// Assigned level name
    pub classification: String,
}

impl CategoryEntry {
    /// Create category entry
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        examples: impl Into<String>,
        classification: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            examples: examples.into(),
            classification: classification.into(),
        }
    }
}

/// Step 3: classification criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step3Data {
    /// Level selection; absent until the user touched the level picker
    pub classification_levels: Option<ClassificationLevelsData>,
    /// Explicit category rows
    pub data_categories: Vec<CategoryEntry>,
    /// Selected labeling methods
    pub labeling_methods: Vec<String>,
    /// How often classifications are reviewed
    pub review_frequency: String,
}

impl Step3Data {
    fn levels_mut(&mut self) -> &mut ClassificationLevelsData {
        self.classification_levels
            .get_or_insert_with(ClassificationLevelsData::default)
    }

    /// Select one of [`DEFAULT_LEVEL_NAMES`]
    ///
    /// Returns false for names outside the built-in vocabulary or already
    /// selected.
    pub fn select_default_level(&mut self, name: &str) -> bool {
        if !DEFAULT_LEVEL_NAMES.contains(&name) {
            return false;
        }
        let levels = self.levels_mut();
        if levels.contains(name) {
            return false;
        }
        levels.default_levels.push(name.to_string());
        true
    }

    /// Add an organization-defined level
    ///
    /// Blank names and names already present (case-sensitive) are rejected.
    pub fn add_custom_level(&mut self, name: &str) -> bool {
        let name = name.trim();
        let levels = self.levels_mut();
        if name.is_empty() || levels.contains(name) {
            return false;
        }
        levels.custom_levels.push(name.to_string());
        true
    }

    /// Set or replace the definition of a level
    pub fn set_definition(&mut self, level: impl Into<String>, definition: impl Into<String>) {
        self.levels_mut()
            .definitions
            .insert(level.into(), definition.into());
    }

    /// Append an explicit category row
    pub fn add_category(&mut self, entry: CategoryEntry) {
        self.data_categories.push(entry);
    }
}

/// Encryption expectations for one level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncryptionRequirement {
    /// Requirement for stored data
    pub at_rest: String,
    /// Requirement for data on the wire
    pub in_transit: String,
}

/// Step 4: access & security controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step4Data {
    /// Selected access methods
    pub access_methods: Vec<String>,
    /// Selected authentication methods
    pub authentication_methods: Vec<String>,
    /// Roles permitted per level
    pub access_permissions: IndexMap<String, Vec<String>>,
    /// Encryption expectations per level
    pub encryption: IndexMap<String, EncryptionRequirement>,
}

impl Step4Data {
    /// Select an access method
    pub fn add_access_method(&mut self, method: &str) -> bool {
        push_unique(&mut self.access_methods, method)
    }

    /// Set the roles allowed to access a level
    pub fn set_access_permissions<I, S>(&mut self, level: impl Into<String>, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.access_permissions
            .insert(level.into(), roles.into_iter().map(Into::into).collect());
    }

    /// Set the encryption requirement of a level
    pub fn set_encryption(&mut self, level: impl Into<String>, requirement: EncryptionRequirement) {
        self.encryption.insert(level.into(), requirement);
    }

    /// Whether per-level access or encryption answers were given
    #[inline]
    #[must_use]
    pub fn has_level_matrices(&self) -> bool {
        !self.access_permissions.is_empty() || !self.encryption.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_profile_ignores_list_order() {
        let a = DataTypeDetail::new(Rating::High, Rating::Medium).with_storage(["A", "B"]);
        let b = DataTypeDetail::new(Rating::High, Rating::Medium).with_storage(["B", "A"]);
        assert!(a.same_profile(&b));
    }

    #[test]
    fn same_profile_compares_scalars() {
        let a = DataTypeDetail::new(Rating::High, Rating::Medium);
        let b = DataTypeDetail::new(Rating::Low, Rating::Medium);
        assert!(!a.same_profile(&b));
    }

    #[test]
    fn same_profile_ignores_case_of_answers() {
        let mut a = DataTypeDetail::new(Rating::High, Rating::Medium);
        a.sensitivity = "High".to_string();
        a.has_regulatory = " No".to_string();
        let b = DataTypeDetail::new(Rating::High, Rating::Medium);
        assert!(a.same_profile(&b));
        assert!(b.same_profile(&a));
    }

    #[test]
    fn lookups_tolerate_padded_keys() {
        let mut step2 = Step2Data::default();
        step2.set_detail("Customer PII ", DataTypeDetail::new(Rating::High, Rating::Low));
        assert_eq!(
            step2.detail("Customer PII").map(|d| d.sensitivity.as_str()),
            Some("high")
        );
        assert!(step2.detail("Customer").is_none());

        let mut step3 = Step3Data::default();
        step3.set_definition(" Partner", "Shared with partners");
        let levels = step3.classification_levels.unwrap();
        assert_eq!(levels.definition("Partner"), Some("Shared with partners"));
        assert_eq!(levels.definition("Public"), None);
    }

    #[test]
    fn unregulated_detail_hides_regulations() {
        let mut detail = DataTypeDetail::new(Rating::High, Rating::High);
        detail.regulations = vec!["GDPR".to_string()];
        assert!(detail.surfaced_regulations().is_empty());

        let regulated = detail.with_regulations(["GDPR"]);
        assert_eq!(regulated.surfaced_regulations(), ["GDPR".to_string()]);
    }

    #[test]
    fn custom_levels_are_unique_and_trimmed() {
        let mut step3 = Step3Data::default();
        assert!(step3.select_default_level("Public"));
        assert!(!step3.select_default_level("Public"));
        assert!(!step3.select_default_level("TopSecret"));
        assert!(step3.add_custom_level("  TopSecret "));
        assert!(!step3.add_custom_level("TopSecret"));
        assert!(!step3.add_custom_level("Public"));
        assert!(!step3.add_custom_level("   "));

        let levels = step3.classification_levels.unwrap();
        assert_eq!(levels.default_levels, vec!["Public"]);
        assert_eq!(levels.custom_levels, vec!["TopSecret"]);
    }

    #[test]
    fn step2_decodes_partial_payload() {
        let step2: Step2Data = serde_json::from_str(
            r#"{"dataTypes":["Customer PII"],"dataTypeDetails":{"Customer PII":{"sensitivity":"high"}}}"#,
        )
        .unwrap();

        let detail = step2.detail("Customer PII").unwrap();
        assert_eq!(detail.sensitivity_rating(), Some(Rating::High));
        assert_eq!(detail.business_impact_rating(), None);
        assert!(!step2.has_inventory());
    }

    #[test]
    fn detail_map_keeps_entry_order() {
        let step2: Step2Data = serde_json::from_str(
            r#"{"dataTypeDetails":{"Zeta":{},"Alpha":{},"Mid":{}}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = step2.data_type_details.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn step3_without_levels_stays_absent() {
        let step3: Step3Data = serde_json::from_str("{}").unwrap();
        assert!(step3.classification_levels.is_none());
    }
}
