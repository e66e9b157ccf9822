//! Category registry.
//!
//! Describes the categories a deployment knows about. The registry is a plain
//! value handed to the query layer; nothing in the engine reads a global.

use crate::errors::{ProofLedgerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Whether records in this category may be superseded by revisions
    #[serde(default = "default_true")]
    pub allows_versioning: bool,
    /// Document types offered when creating a record
    #[serde(default)]
    pub document_types: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Lookup table from lowercase category id to its configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    #[serde(default)]
    categories: BTreeMap<String, CategoryConfig>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the five reference categories
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "real_estate",
            category(
                "Real Estate / RERA",
                "Property documents, compliance certificates, ownership transfers",
                "🏗️",
                true,
                &[
                    "Property Deed",
                    "RERA Approval",
                    "Compliance Certificate",
                    "Ownership Transfer",
                    "Mortgage Document",
                ],
            ),
        );
        registry.insert(
            "education",
            category(
                "University & Academic Records",
                "Degrees, transcripts, research papers, certifications",
                "🎓",
                true,
                &[
                    "Degree Certificate",
                    "Academic Transcript",
                    "Research Paper",
                    "Professional Certification",
                    "Course Completion",
                ],
            ),
        );
        registry.insert(
            "medical",
            category(
                "Medical Records & Certifications",
                "Test results, prescriptions, treatment records, certifications",
                "🏥",
                true,
                &[
                    "Medical Test Result",
                    "Prescription Record",
                    "Treatment History",
                    "Medical Certificate",
                    "Insurance Claim",
                ],
            ),
        );
        registry.insert(
            "startup",
            category(
                "Startup Legal & Cap Table",
                "Incorporation papers, investment agreements, equity documents",
                "🚀",
                true,
                &[
                    "Incorporation Document",
                    "Investment Agreement",
                    "Cap Table Update",
                    "Board Resolution",
                    "Equity Transfer",
                ],
            ),
        );
        // Published tenders are immutable
        registry.insert(
            "government",
            category(
                "Government Tenders & Procurement",
                "Tender notices, bids, awards, contracts, deliverables",
                "🏛️",
                false,
                &[
                    "Tender Notice",
                    "Bid Submission",
                    "Evaluation Report",
                    "Award Notification",
                    "Contract Document",
                ],
            ),
        );
        registry
    }

    /// Parse a registry from TOML
    ///
    /// ```toml
    /// [categories.legal]
    /// display_name = "Legal"
    /// allows_versioning = false
    /// ```
    ///
    /// # Errors
    ///
    /// `Configuration` if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: Self =
            toml::from_str(content).map_err(|e| ProofLedgerError::InvalidConfiguration {
                reason: format!("category registry: {}", e),
            })?;
        // Keys are matched against lowercased title tags
        Ok(parsed
            .categories
            .into_iter()
            .fold(Self::new(), |mut acc, (id, config)| {
                acc.insert(&id, config);
                acc
            }))
    }

    pub fn insert(&mut self, id: &str, config: CategoryConfig) {
        self.categories.insert(id.to_lowercase(), config);
    }

    pub fn lookup(&self, category: &str) -> Option<&CategoryConfig> {
        self.categories.get(category)
    }

    /// Unknown categories allow versioning
    pub fn allows_versioning(&self, category: &str) -> bool {
        self.lookup(category)
            .map_or(true, |config| config.allows_versioning)
    }

    /// Display name, falling back to the raw category id
    pub fn display_name<'a>(&'a self, category: &'a str) -> &'a str {
        self.lookup(category)
            .map_or(category, |config| config.display_name.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn category(
    display_name: &str,
    description: &str,
    icon: &str,
    allows_versioning: bool,
    document_types: &[&str],
) -> CategoryConfig {
    CategoryConfig {
        display_name: display_name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        allows_versioning,
        document_types: document_types.iter().map(|s| s.to_string()).collect(),
    }
}
