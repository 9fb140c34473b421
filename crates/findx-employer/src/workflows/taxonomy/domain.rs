use serde::{Deserialize, Serialize};

/// A qualifying question asked of applicants.
///
/// An empty `options` list marks a free-form question. When options are
/// present the employer must curate a subset before the question can be used
/// in a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    pub fn free_form(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn requires_curation(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn offers_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

/// Industry grouping of qualifying questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    pub key: String,
    pub title: String,
    pub member_categories: Vec<String>,
    pub questions: Vec<Question>,
}

/// UI-facing grouping of taxonomy categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Business,
    Technology,
    Professional,
    Creative,
    Industry,
    Health,
}

impl SectionKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Business,
            Self::Technology,
            Self::Professional,
            Self::Creative,
            Self::Industry,
            Self::Health,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Technology => "technology",
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Industry => "industry",
            Self::Health => "health",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Business => "Business & Finance",
            Self::Technology => "Technology & Engineering",
            Self::Professional => "Professional Services",
            Self::Creative => "Creative & Design",
            Self::Industry => "Industry & Trades",
            Self::Health => "Health & Care",
        }
    }
}

/// Derived section of questions shown in the posting wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSection {
    pub key: SectionKey,
    pub title: &'static str,
    pub member_categories: Vec<String>,
    pub questions: Vec<Question>,
}

/// Errors raised while assembling or validating a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("taxonomy category key `{0}` is defined more than once")]
    DuplicateKey(String),
    #[error("taxonomy category key is blank")]
    BlankKey,
    #[error("taxonomy category `{0}` does not belong to any question section")]
    Unsectioned(String),
    #[error("taxonomy category `{key}` is listed in both the {first:?} and {second:?} sections")]
    DuplicateSectionMember {
        key: String,
        first: SectionKey,
        second: SectionKey,
    },
    #[error("category mapping `{category}` references unknown taxonomy key `{key}`")]
    UnknownMappedKey { category: String, key: String },
}
