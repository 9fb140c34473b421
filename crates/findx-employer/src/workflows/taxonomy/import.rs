use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Question, TaxonomyCategory, TaxonomyError};
use super::store::TaxonomyStore;

/// Category key whose rows populate the always-available questions.
pub const BASIC_KEY: &str = "basic";

#[derive(Debug)]
pub enum TaxonomyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid(TaxonomyError),
}

impl std::fmt::Display for TaxonomyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxonomyImportError::Io(err) => write!(f, "failed to read taxonomy export: {}", err),
            TaxonomyImportError::Csv(err) => write!(f, "invalid taxonomy CSV data: {}", err),
            TaxonomyImportError::Invalid(err) => write!(f, "taxonomy is inconsistent: {}", err),
        }
    }
}

impl std::error::Error for TaxonomyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TaxonomyImportError::Io(err) => Some(err),
            TaxonomyImportError::Csv(err) => Some(err),
            TaxonomyImportError::Invalid(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TaxonomyImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TaxonomyImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<TaxonomyError> for TaxonomyImportError {
    fn from(err: TaxonomyError) -> Self {
        Self::Invalid(err)
    }
}

/// Loads a taxonomy from a flat CSV export, one question per row.
///
/// Rows sharing a `Category Key` are grouped in first-seen order. Member
/// categories are `;`-separated and options `|`-separated. A row with a blank
/// question only declares the category.
pub struct TaxonomyImporter;

impl TaxonomyImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TaxonomyStore, TaxonomyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<TaxonomyStore, TaxonomyImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut categories: Vec<TaxonomyCategory> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut basic: Vec<Question> = Vec::new();

        for record in csv_reader.deserialize::<TaxonomyRow>() {
            let row = record?;
            let question = row.question();

            if row.key == BASIC_KEY {
                basic.extend(question);
                continue;
            }

            let position = match positions.get(&row.key) {
                Some(position) => *position,
                None => {
                    positions.insert(row.key.clone(), categories.len());
                    categories.push(TaxonomyCategory {
                        key: row.key.clone(),
                        title: row.title.clone().unwrap_or_else(|| row.key.clone()),
                        member_categories: split_list(row.members.as_deref(), ';'),
                        questions: Vec::new(),
                    });
                    categories.len() - 1
                }
            };

            categories[position].questions.extend(question);
        }

        Ok(TaxonomyStore::new(categories, basic)?)
    }
}

#[derive(Debug, Deserialize)]
struct TaxonomyRow {
    #[serde(rename = "Category Key")]
    key: String,
    #[serde(
        rename = "Category Title",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    title: Option<String>,
    #[serde(
        rename = "Member Categories",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    members: Option<String>,
    #[serde(rename = "Question", default, deserialize_with = "empty_string_as_none")]
    question: Option<String>,
    #[serde(rename = "Options", default, deserialize_with = "empty_string_as_none")]
    options: Option<String>,
}

impl TaxonomyRow {
    fn question(&self) -> Option<Question> {
        self.question
            .as_deref()
            .map(|text| Question::with_options(text, split_list(self.options.as_deref(), '|')))
    }
}

fn split_list(raw: Option<&str>, separator: char) -> Vec<String> {
    raw.map(|value| {
        value
            .split(separator)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
