//! Qualifying-question taxonomy and the mapping from job categories to it.

mod catalog;
pub mod domain;
mod import;
mod job_categories;
mod mapper;
mod mapping;
pub mod sections;
mod store;

pub use domain::{Question, QuestionSection, SectionKey, TaxonomyCategory, TaxonomyError};
pub use import::{TaxonomyImportError, TaxonomyImporter, BASIC_KEY};
pub use job_categories::{JobCategory, JobCategoryCatalog};
pub use mapper::{
    CategoryMapper, CategoryQuestions, QuestionSections, Resolution, UnmappedCategoryPolicy,
};
pub use mapping::CategoryMapping;
pub use store::TaxonomyStore;
