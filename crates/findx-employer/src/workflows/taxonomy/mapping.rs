use std::collections::HashMap;

use super::domain::TaxonomyError;
use super::store::TaxonomyStore;

/// Lookup from a top-level job category to the taxonomy keys relevant to it.
#[derive(Debug, Clone, Default)]
pub struct CategoryMapping {
    entries: HashMap<String, Vec<String>>,
}

impl CategoryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        STANDARD_MAPPING
            .iter()
            .fold(Self::new(), |mapping, (category, keys)| {
                mapping.with_entry(*category, keys.iter().copied())
            })
    }

    pub fn with_entry<I, S>(mut self, category: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(category.into(), keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn keys_for(&self, category: &str) -> Option<&[String]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops keys the store lacks, then any category left without keys.
    pub fn restricted_to(mut self, store: &TaxonomyStore) -> Self {
        for keys in self.entries.values_mut() {
            keys.retain(|key| store.contains(key));
        }
        self.entries.retain(|_, keys| !keys.is_empty());
        self
    }

    /// Every referenced key must exist in the store.
    pub fn validate(&self, store: &TaxonomyStore) -> Result<(), TaxonomyError> {
        let mut categories: Vec<&String> = self.entries.keys().collect();
        categories.sort();

        for category in categories {
            if let Some(missing) = self.entries[category]
                .iter()
                .find(|key| !store.contains(key))
            {
                return Err(TaxonomyError::UnknownMappedKey {
                    category: category.clone(),
                    key: missing.clone(),
                });
            }
        }

        Ok(())
    }
}

// "Legal" resolves through the title match; "Other" falls to the unmapped policy.
const STANDARD_MAPPING: &[(&str, &[&str])] = &[
    ("Accounting", &["accounting", "banking"]),
    ("Administration & Office Support", &["administration", "call_centre"]),
    ("Advertising, Arts & Media", &["advertising", "media", "arts", "design"]),
    ("Banking & Financial Services", &["banking", "accounting", "insurance"]),
    ("Call Centre & Customer Service", &["call_centre", "sales", "retail"]),
    (
        "Community Services & Development",
        &["community_services", "mental_health", "aged_care"],
    ),
    ("Construction", &["construction", "trades", "engineering", "architecture"]),
    ("Consulting & Strategy", &["consulting", "data_analytics", "government"]),
    ("Design & Architecture", &["design", "architecture", "fashion"]),
    ("Education & Training", &["education", "community_services"]),
    ("Engineering", &["engineering", "energy", "mining", "manufacturing"]),
    ("Farming, Animals & Conservation", &["agriculture", "science"]),
    ("Government & Defence", &["government", "security", "legal"]),
    (
        "Healthcare & Medical",
        &["healthcare", "nursing", "pharmacy", "mental_health", "aged_care"],
    ),
    ("Hospitality & Tourism", &["hospitality", "tourism"]),
    ("Human Resources & Recruitment", &["human_resources", "consulting"]),
    (
        "Information & Communication Technology",
        &[
            "information_technology",
            "software_development",
            "data_analytics",
            "cyber_security",
            "telecommunications",
        ],
    ),
    ("Insurance & Superannuation", &["insurance", "banking"]),
    (
        "Manufacturing, Transport & Logistics",
        &["manufacturing", "transport_logistics", "automotive"],
    ),
    ("Marketing & Communications", &["advertising", "media", "sales"]),
    ("Mining, Resources & Energy", &["mining", "energy", "engineering"]),
    ("Real Estate & Property", &["real_estate", "sales"]),
    ("Retail & Consumer Products", &["retail", "fashion", "sales"]),
    ("Sales", &["sales", "retail", "call_centre"]),
    ("Science & Technology", &["science", "data_analytics", "pharmacy"]),
    ("Sport & Recreation", &["fitness", "tourism"]),
    (
        "Trades & Services",
        &["trades", "automotive", "cleaning", "security", "construction"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::taxonomy::TaxonomyImporter;

    #[test]
    fn standard_mapping_references_known_keys() {
        let store = TaxonomyStore::standard();
        CategoryMapping::standard()
            .validate(&store)
            .expect("standard mapping only references known keys");
    }

    #[test]
    fn validate_reports_unknown_keys() {
        let store = TaxonomyStore::standard();
        let mapping = CategoryMapping::new().with_entry("Space", ["astronautics"]);
        let error = mapping.validate(&store).expect_err("unknown key rejected");
        assert_eq!(
            error,
            TaxonomyError::UnknownMappedKey {
                category: "Space".to_string(),
                key: "astronautics".to_string(),
            }
        );
    }

    #[test]
    fn restriction_keeps_only_known_keys() {
        let csv = "Category Key,Category Title,Member Categories,Question,Options\n\
                   hospitality,Hospitality,,Do you hold an RSA?,Yes|No\n";
        let store = TaxonomyImporter::from_reader(csv.as_bytes()).expect("import");

        let mapping = CategoryMapping::standard().restricted_to(&store);
        mapping.validate(&store).expect("restricted mapping is valid");
        assert_eq!(
            mapping.keys_for("Hospitality & Tourism"),
            Some(&["hospitality".to_string()][..])
        );
        assert!(mapping.keys_for("Accounting").is_none());
    }

    #[test]
    fn legal_and_other_are_not_mapped() {
        let mapping = CategoryMapping::standard();
        assert!(mapping.keys_for("Legal").is_none());
        assert!(mapping.keys_for("Other").is_none());
        assert_eq!(
            mapping.keys_for("Hospitality & Tourism"),
            Some(&["hospitality".to_string(), "tourism".to_string()][..])
        );
    }
}
