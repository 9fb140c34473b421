use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{Question, QuestionSection, TaxonomyCategory, TaxonomyError};
use super::mapping::CategoryMapping;
use super::sections::SECTION_LAYOUT;
use super::store::TaxonomyStore;

/// What to show when a category has neither a mapping nor a title/key match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedCategoryPolicy {
    #[default]
    ShowAll,
    ShowNone,
}

impl UnmappedCategoryPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "show_all" | "all" => Some(Self::ShowAll),
            "show_none" | "none" => Some(Self::ShowNone),
            _ => None,
        }
    }
}

/// How a top-level category was resolved against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Unselected,
    Mapped,
    Matched { key: String },
    Fallback { policy: UnmappedCategoryPolicy },
}

/// Taxonomy subset relevant to a category, in mapped order.
#[derive(Debug, Clone)]
pub struct CategoryQuestions<'a> {
    pub resolution: Resolution,
    pub categories: Vec<&'a TaxonomyCategory>,
}

impl<'a> CategoryQuestions<'a> {
    pub fn keys(&self) -> Vec<&'a str> {
        self.categories
            .iter()
            .map(|category| category.key.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn includes(&self, key: &str) -> bool {
        self.categories.iter().any(|category| category.key == key)
    }
}

/// Question sections derived for a category, plus the always-available basics.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSections {
    pub category: String,
    pub resolution: Resolution,
    pub basic: Vec<Question>,
    pub sections: Vec<QuestionSection>,
}

impl QuestionSections {
    pub fn question_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }
}

/// Derives the relevant taxonomy subset and sections for a job category.
#[derive(Debug, Clone)]
pub struct CategoryMapper {
    store: Arc<TaxonomyStore>,
    mapping: CategoryMapping,
    policy: UnmappedCategoryPolicy,
}

impl CategoryMapper {
    pub fn new(
        store: Arc<TaxonomyStore>,
        mapping: CategoryMapping,
        policy: UnmappedCategoryPolicy,
    ) -> Result<Self, TaxonomyError> {
        store.validate_sections()?;
        mapping.validate(&store)?;
        Ok(Self {
            store,
            mapping,
            policy,
        })
    }

    pub fn standard(policy: UnmappedCategoryPolicy) -> Self {
        Self {
            store: Arc::new(TaxonomyStore::standard()),
            mapping: CategoryMapping::standard(),
            policy,
        }
    }

    pub fn store(&self) -> &TaxonomyStore {
        &self.store
    }

    pub fn policy(&self) -> UnmappedCategoryPolicy {
        self.policy
    }

    pub fn questions_for_category(&self, top_level: &str) -> CategoryQuestions<'_> {
        let requested = top_level.trim();
        if requested.is_empty() {
            return CategoryQuestions {
                resolution: Resolution::Unselected,
                categories: Vec::new(),
            };
        }

        if let Some(keys) = self.mapping.keys_for(requested) {
            return CategoryQuestions {
                resolution: Resolution::Mapped,
                categories: keys.iter().filter_map(|key| self.store.get(key)).collect(),
            };
        }

        if let Some(matched) = self.fuzzy_match(requested) {
            return CategoryQuestions {
                resolution: Resolution::Matched {
                    key: matched.key.clone(),
                },
                categories: vec![matched],
            };
        }

        warn!(
            category = requested,
            policy = ?self.policy,
            "no taxonomy mapping or match for category; applying unmapped policy"
        );
        let categories = match self.policy {
            UnmappedCategoryPolicy::ShowAll => self.store.categories().iter().collect(),
            UnmappedCategoryPolicy::ShowNone => Vec::new(),
        };

        CategoryQuestions {
            resolution: Resolution::Fallback {
                policy: self.policy,
            },
            categories,
        }
    }

    pub fn sections_for_category(&self, top_level: &str) -> QuestionSections {
        let filtered = self.questions_for_category(top_level);
        let basic = self.store.basic_questions().to_vec();

        if filtered.is_empty() {
            return QuestionSections {
                category: top_level.trim().to_string(),
                resolution: filtered.resolution,
                basic,
                sections: Vec::new(),
            };
        }

        let sections = SECTION_LAYOUT
            .iter()
            .filter_map(|(section, members)| {
                let present: Vec<&TaxonomyCategory> = members
                    .iter()
                    .filter(|key| filtered.includes(key))
                    .filter_map(|key| self.store.get(key))
                    .collect();

                let questions: Vec<Question> = present
                    .iter()
                    .flat_map(|category| category.questions.iter().cloned())
                    .collect();

                if questions.is_empty() {
                    return None;
                }

                Some(QuestionSection {
                    key: *section,
                    title: section.label(),
                    member_categories: present
                        .iter()
                        .map(|category| category.key.clone())
                        .collect(),
                    questions,
                })
            })
            .collect();

        QuestionSections {
            category: top_level.trim().to_string(),
            resolution: filtered.resolution,
            basic,
            sections,
        }
    }

    fn fuzzy_match(&self, requested: &str) -> Option<&TaxonomyCategory> {
        let needle = requested.to_lowercase();
        self.store.categories().iter().find(|category| {
            let key = category.key.to_lowercase();
            let title = category.title.to_lowercase();
            needle.contains(&key)
                || key.contains(&needle)
                || needle.contains(&title)
                || title.contains(&needle)
        })
    }
}
