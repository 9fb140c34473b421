use std::collections::HashMap;

use super::catalog;
use super::domain::{Question, SectionKey, TaxonomyCategory, TaxonomyError};
use super::sections::SECTION_LAYOUT;

/// Read-only catalog of qualifying questions grouped by industry category.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    categories: Vec<TaxonomyCategory>,
    index: HashMap<String, usize>,
    basic: Vec<Question>,
}

impl TaxonomyStore {
    /// Build a store, rejecting blank or duplicated category keys and any
    /// category that does not sit in exactly one question section.
    pub fn new(
        categories: Vec<TaxonomyCategory>,
        basic: Vec<Question>,
    ) -> Result<Self, TaxonomyError> {
        let mut index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if category.key.trim().is_empty() {
                return Err(TaxonomyError::BlankKey);
            }
            if index.insert(category.key.clone(), position).is_some() {
                return Err(TaxonomyError::DuplicateKey(category.key.clone()));
            }
        }

        let store = Self {
            categories,
            index,
            basic,
        };
        store.validate_sections()?;
        Ok(store)
    }

    pub fn standard() -> Self {
        let categories = catalog::standard_categories();
        let index = categories
            .iter()
            .enumerate()
            .map(|(position, category)| (category.key.clone(), position))
            .collect();

        Self {
            categories,
            index,
            basic: catalog::basic_questions(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TaxonomyCategory> {
        self.index
            .get(key)
            .and_then(|position| self.categories.get(*position))
    }

    /// Questions for a category key; unknown keys simply have none.
    pub fn questions(&self, key: &str) -> &[Question] {
        self.get(key)
            .map(|category| category.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> &[TaxonomyCategory] {
        &self.categories
    }

    pub fn basic_questions(&self) -> &[Question] {
        &self.basic
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Locate a question by its exact text, searching the basic questions first.
    pub fn find_question(&self, text: &str) -> Option<&Question> {
        self.basic
            .iter()
            .chain(
                self.categories
                    .iter()
                    .flat_map(|category| category.questions.iter()),
            )
            .find(|question| question.text == text)
    }

    /// Every category key must belong to exactly one section of the layout.
    pub fn validate_sections(&self) -> Result<(), TaxonomyError> {
        let mut owners: HashMap<&str, SectionKey> = HashMap::new();
        for (section, members) in SECTION_LAYOUT {
            for member in members.iter().copied() {
                if let Some(first) = owners.insert(member, *section) {
                    return Err(TaxonomyError::DuplicateSectionMember {
                        key: member.to_string(),
                        first,
                        second: *section,
                    });
                }
            }
        }

        match self
            .categories
            .iter()
            .find(|category| !owners.contains_key(category.key.as_str()))
        {
            Some(category) => Err(TaxonomyError::Unsectioned(category.key.clone())),
            None => Ok(()),
        }
    }
}

impl Default for TaxonomyStore {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_store_passes_section_validation() {
        let store = TaxonomyStore::standard();
        assert_eq!(store.len(), 45);
        store.validate_sections().expect("standard layout is consistent");
    }

    #[test]
    fn missing_key_yields_no_questions() {
        let store = TaxonomyStore::standard();
        assert!(store.get("underwater_basket_weaving").is_none());
        assert!(store.questions("underwater_basket_weaving").is_empty());
    }

    #[test]
    fn find_question_covers_basic_and_category_questions() {
        let store = TaxonomyStore::standard();
        let basic = store
            .find_question("When are you available to start?")
            .expect("basic question present");
        assert!(basic.requires_curation());

        let legal = store
            .find_question("Are you admitted to practise?")
            .expect("legal question present");
        assert_eq!(legal.options.len(), 3);
    }

    #[test]
    fn new_rejects_duplicate_keys() {
        let category = TaxonomyCategory {
            key: "legal".to_string(),
            title: "Legal".to_string(),
            member_categories: Vec::new(),
            questions: Vec::new(),
        };
        let error = TaxonomyStore::new(vec![category.clone(), category], Vec::new())
            .expect_err("duplicate keys rejected");
        assert_eq!(error, TaxonomyError::DuplicateKey("legal".to_string()));
    }

    #[test]
    fn new_rejects_unsectioned_categories() {
        let category = TaxonomyCategory {
            key: "space_exploration".to_string(),
            title: "Space Exploration".to_string(),
            member_categories: Vec::new(),
            questions: Vec::new(),
        };
        let error = TaxonomyStore::new(vec![category], Vec::new())
            .expect_err("unsectioned category rejected");
        assert_eq!(
            error,
            TaxonomyError::Unsectioned("space_exploration".to_string())
        );
    }
}
