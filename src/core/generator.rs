//! Purchase generation over an immutable product catalog
//!
//! [`PurchaseGenerator`] owns an `Arc` to the catalog and a fake-data source.
//! Every call samples independently; there is no state shared between calls
//! beyond the read-only catalog, so one generator can serve any number of
//! concurrent requests.

use crate::core::catalog::ProductCatalog;
use crate::core::error::{ServiceError, ServiceResult};
use crate::core::faker::FakeDataSource;
use crate::core::purchase::{PurchaseRecord, SENTINEL_PRODUCT, marked_up_price};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which catalog positions are eligible for sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingRange {
    /// Positions `[1, N-1]`; the first catalog row is never sampled
    #[default]
    SkipFirst,
    /// Positions `[0, N-1]`
    Full,
}

impl SamplingRange {
    fn first_position(self) -> usize {
        match self {
            SamplingRange::SkipFirst => 1,
            SamplingRange::Full => 0,
        }
    }
}

/// What a batch does with an item that failed to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchFailurePolicy {
    /// Substitute a sentinel record; the batch keeps its requested length
    #[default]
    Sentinel,
    /// Drop the item; the batch may come back shorter
    Skip,
}

/// Load state of the catalog, fixed when the generator is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogState {
    Loaded { size: usize },
    Unavailable,
}

/// Tunables for [`PurchaseGenerator`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Store identifier stamped on every purchase
    pub store_id: u32,
    /// Factor applied to the catalog price
    pub markup: f64,
    pub sampling: SamplingRange,
    pub batch_failure: BatchFailurePolicy,
    pub max_batch_size: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            store_id: 11,
            markup: 1.2,
            sampling: SamplingRange::default(),
            batch_failure: BatchFailurePolicy::default(),
            max_batch_size: 10_000,
        }
    }
}

/// Synthesizes purchases by sampling the catalog
#[derive(Clone)]
pub struct PurchaseGenerator {
    catalog: Arc<ProductCatalog>,
    fakes: Arc<dyn FakeDataSource>,
    settings: GeneratorSettings,
}

impl PurchaseGenerator {
    pub fn new(
        catalog: Arc<ProductCatalog>,
        fakes: Arc<dyn FakeDataSource>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            catalog,
            fakes,
            settings,
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn state(&self) -> CatalogState {
        if self.catalog.is_empty() {
            CatalogState::Unavailable
        } else {
            CatalogState::Loaded {
                size: self.catalog.len(),
            }
        }
    }

    /// Generate one purchase using the thread-local RNG
    pub fn generate_one(&self) -> ServiceResult<PurchaseRecord> {
        self.generate_one_with(&mut rand::rng())
    }

    /// Generate one purchase drawing positions from `rng`
    pub fn generate_one_with<R: Rng + ?Sized>(&self, rng: &mut R) -> ServiceResult<PurchaseRecord> {
        if self.catalog.is_empty() {
            return Err(ServiceError::CatalogUnavailable);
        }

        let position = self.sample_position(rng)?;
        let product = self.catalog.get(position).ok_or(ServiceError::SampleIndex {
            position,
            len: self.catalog.len(),
        })?;

        Ok(PurchaseRecord {
            client: self.fakes.name(),
            creditcard: self.fakes.credit_card_provider(),
            product: product.name.clone(),
            ean: product.identifier,
            price: marked_up_price(product.price, self.settings.markup),
            client_position: self.fakes.location_on_land(),
            store: self.settings.store_id,
            date_time: self.fakes.iso8601(),
        })
    }

    /// Generate `count` purchases using the thread-local RNG
    pub fn generate_many(&self, count: i64) -> ServiceResult<Vec<PurchaseRecord>> {
        self.generate_many_with(count, &mut rand::rng())
    }

    /// Generate `count` independent purchases
    ///
    /// Items that fail are handled by the configured [`BatchFailurePolicy`] and
    /// never abort the batch.
    pub fn generate_many_with<R: Rng + ?Sized>(
        &self,
        count: i64,
        rng: &mut R,
    ) -> ServiceResult<Vec<PurchaseRecord>> {
        if count < 1 {
            return Err(ServiceError::InvalidCount { count });
        }
        if self.catalog.is_empty() {
            return Err(ServiceError::CatalogUnavailable);
        }
        let requested = usize::try_from(count).unwrap_or(usize::MAX);
        if requested > self.settings.max_batch_size {
            return Err(ServiceError::BatchTooLarge {
                count,
                max: self.settings.max_batch_size,
            });
        }

        let mut records = Vec::with_capacity(requested);
        let mut failed = 0usize;
        for _ in 0..requested {
            match self.generate_one_with(rng) {
                Ok(record) => records.push(record),
                Err(e) => {
                    failed += 1;
                    tracing::warn!(error = %e, policy = ?self.settings.batch_failure, "Purchase generation failed in batch");
                    if self.settings.batch_failure == BatchFailurePolicy::Sentinel {
                        records.push(self.sentinel());
                    }
                }
            }
        }

        if failed > 0 {
            tracing::warn!(requested, failed, returned = records.len(), "Batch completed with failures");
        } else {
            tracing::debug!(requested, "Batch generated");
        }

        Ok(records)
    }

    /// Placeholder record marking a failed generation
    pub fn sentinel(&self) -> PurchaseRecord {
        PurchaseRecord {
            client: self.fakes.name(),
            creditcard: self.fakes.credit_card_provider(),
            product: SENTINEL_PRODUCT.to_string(),
            ean: 0,
            price: 0.0,
            client_position: self.fakes.location_on_land(),
            store: self.settings.store_id,
            date_time: self.fakes.iso8601(),
        }
    }

    fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> ServiceResult<usize> {
        let len = self.catalog.len();
        let first = self.settings.sampling.first_position();
        if len == 0 || first > len - 1 {
            return Err(ServiceError::SampleIndex {
                position: first,
                len,
            });
        }
        Ok(rng.random_range(first..=len - 1))
    }
}
