use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::pricing::PriceTable;
use crate::workflows::taxonomy::{
    CategoryMapper, CategoryMapping, JobCategoryCatalog, TaxonomyImportError, TaxonomyImporter,
    TaxonomyStore, UnmappedCategoryPolicy,
};

/// Immutable reference data shared by every wizard session.
#[derive(Debug, Clone)]
pub struct PostingCatalog {
    mapper: CategoryMapper,
    job_categories: JobCategoryCatalog,
    prices: PriceTable,
}

impl PostingCatalog {
    pub fn new(
        mapper: CategoryMapper,
        job_categories: JobCategoryCatalog,
        prices: PriceTable,
    ) -> Self {
        Self {
            mapper,
            job_categories,
            prices,
        }
    }

    pub fn standard(policy: UnmappedCategoryPolicy) -> Self {
        Self::new(
            CategoryMapper::standard(policy),
            JobCategoryCatalog::standard(),
            PriceTable::standard(),
        )
    }

    /// Built-in catalog, or one whose taxonomy is read from a CSV export.
    pub fn load(
        taxonomy_csv: Option<&Path>,
        policy: UnmappedCategoryPolicy,
    ) -> Result<Self, TaxonomyImportError> {
        let Some(path) = taxonomy_csv else {
            return Ok(Self::standard(policy));
        };

        let store = TaxonomyImporter::from_path(path)?;
        info!(
            path = %path.display(),
            categories = store.len(),
            "loaded question taxonomy from CSV"
        );
        let mapping = CategoryMapping::standard().restricted_to(&store);
        let mapper = CategoryMapper::new(Arc::new(store), mapping, policy)?;
        Ok(Self::new(
            mapper,
            JobCategoryCatalog::standard(),
            PriceTable::standard(),
        ))
    }

    pub fn mapper(&self) -> &CategoryMapper {
        &self.mapper
    }

    pub fn taxonomy(&self) -> &TaxonomyStore {
        self.mapper.store()
    }

    pub fn job_categories(&self) -> &JobCategoryCatalog {
        &self.job_categories
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }
}

impl Default for PostingCatalog {
    fn default() -> Self {
        Self::standard(UnmappedCategoryPolicy::default())
    }
}
