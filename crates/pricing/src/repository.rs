//! Gold price history port and its in-memory reference adapter.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use thiserror::Error;

use kimhoan_catalog::{GoldMarketPrice, GoldType};

#[derive(Debug, Error)]
pub enum GoldPriceRepositoryError {
    /// A per-type history lock was poisoned by a panicking writer.
    #[error("gold price history lock poisoned for {0}")]
    Poisoned(GoldType),
    /// A durable adapter failed; the in-memory adapter never returns this.
    #[error("gold price storage failure: {0}")]
    Backend(String),
}

/// Persistence port for gold market price history.
///
/// History is **append-only** per gold type: `save_price` never overwrites
/// or removes earlier records. Concurrent saves for the same gold type are
/// serialized; different gold types never block each other.
pub trait GoldPriceRepository: Send + Sync {
    /// The most recently saved price for this gold type, if any.
    fn latest_price(
        &self,
        gold_type: GoldType,
    ) -> Result<Option<GoldMarketPrice>, GoldPriceRepositoryError>;

    /// Append one record to the gold type's history.
    fn save_price(&self, price: GoldMarketPrice) -> Result<(), GoldPriceRepositoryError>;

    /// Records from the last `days` days, oldest first.
    fn price_history(
        &self,
        gold_type: GoldType,
        days: u32,
    ) -> Result<Vec<GoldMarketPrice>, GoldPriceRepositoryError>;
}

/// In-memory reference adapter.
///
/// One mutex-guarded growing list per gold type, indexed by the closed
/// [`GoldType`] enum — per-key write serialization without a repository-wide
/// lock. Reads clone a consistent snapshot.
#[derive(Debug)]
pub struct InMemoryGoldPriceRepository {
    histories: [Mutex<Vec<GoldMarketPrice>>; GoldType::ALL.len()],
}

impl InMemoryGoldPriceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn history_for(&self, gold_type: GoldType) -> &Mutex<Vec<GoldMarketPrice>> {
        &self.histories[gold_type.index()]
    }
}

impl Default for InMemoryGoldPriceRepository {
    fn default() -> Self {
        Self {
            histories: std::array::from_fn(|_| Mutex::new(Vec::new())),
        }
    }
}

impl GoldPriceRepository for InMemoryGoldPriceRepository {
    fn latest_price(
        &self,
        gold_type: GoldType,
    ) -> Result<Option<GoldMarketPrice>, GoldPriceRepositoryError> {
        let history = self
            .history_for(gold_type)
            .lock()
            .map_err(|_| GoldPriceRepositoryError::Poisoned(gold_type))?;
        Ok(history.last().cloned())
    }

    fn save_price(&self, price: GoldMarketPrice) -> Result<(), GoldPriceRepositoryError> {
        let gold_type = price.gold_type;
        let mut history = self
            .history_for(gold_type)
            .lock()
            .map_err(|_| GoldPriceRepositoryError::Poisoned(gold_type))?;
        history.push(price);
        Ok(())
    }

    fn price_history(
        &self,
        gold_type: GoldType,
        days: u32,
    ) -> Result<Vec<GoldMarketPrice>, GoldPriceRepositoryError> {
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        let history = self
            .history_for(gold_type)
            .lock()
            .map_err(|_| GoldPriceRepositoryError::Poisoned(gold_type))?;
        Ok(history
            .iter()
            .filter(|price| price.updated_at >= cutoff)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn price_at_days_ago(gold_type: GoldType, price_per_chi: i64, days_ago: i64) -> GoldMarketPrice {
        GoldMarketPrice::new(
            gold_type,
            price_per_chi,
            "manual",
            Utc::now() - Duration::days(days_ago),
        )
    }

    #[test]
    fn latest_price_is_none_before_any_save() {
        let repo = InMemoryGoldPriceRepository::new();
        assert!(repo.latest_price(GoldType::G750).unwrap().is_none());
    }

    #[test]
    fn saves_append_and_latest_tracks_the_tail() {
        let repo = InMemoryGoldPriceRepository::new();
        repo.save_price(price_at_days_ago(GoldType::G750, 11_000_000, 2))
            .unwrap();
        repo.save_price(price_at_days_ago(GoldType::G750, 11_500_000, 1))
            .unwrap();
        repo.save_price(price_at_days_ago(GoldType::G750, 11_200_000, 0))
            .unwrap();

        let latest = repo.latest_price(GoldType::G750).unwrap().unwrap();
        assert_eq!(latest.price_per_chi, 11_200_000);

        let history = repo.price_history(GoldType::G750, 30).unwrap();
        let quotes: Vec<i64> = history.iter().map(|p| p.price_per_chi).collect();
        assert_eq!(quotes, vec![11_000_000, 11_500_000, 11_200_000]);
    }

    #[test]
    fn history_window_filters_by_timestamp() {
        let repo = InMemoryGoldPriceRepository::new();
        repo.save_price(price_at_days_ago(GoldType::G999, 14_000_000, 10))
            .unwrap();
        repo.save_price(price_at_days_ago(GoldType::G999, 14_500_000, 3))
            .unwrap();
        repo.save_price(price_at_days_ago(GoldType::G999, 15_000_000, 0))
            .unwrap();

        let recent = repo.price_history(GoldType::G999, 7).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent.iter().all(|p| p.price_per_chi >= 14_500_000));
    }

    #[test]
    fn gold_types_keep_independent_histories() {
        let repo = InMemoryGoldPriceRepository::new();
        repo.save_price(price_at_days_ago(GoldType::G750, 11_000_000, 0))
            .unwrap();
        repo.save_price(price_at_days_ago(GoldType::G585, 9_000_000, 0))
            .unwrap();

        assert_eq!(
            repo.latest_price(GoldType::G750)
                .unwrap()
                .unwrap()
                .price_per_chi,
            11_000_000
        );
        assert_eq!(
            repo.latest_price(GoldType::G585)
                .unwrap()
                .unwrap()
                .price_per_chi,
            9_000_000
        );
        assert!(repo.latest_price(GoldType::G416).unwrap().is_none());
    }

    #[test]
    fn concurrent_saves_serialize_per_gold_type() {
        let repo = Arc::new(InMemoryGoldPriceRepository::new());
        let mut handles = Vec::new();

        for worker in 0..8i64 {
            let repo = Arc::clone(&repo);
            handles.push(std::thread::spawn(move || {
                let gold_type = if worker % 2 == 0 {
                    GoldType::G750
                } else {
                    GoldType::G585
                };
                for i in 0..50i64 {
                    repo.save_price(GoldMarketPrice::new(
                        gold_type,
                        10_000_000 + worker * 100 + i,
                        "manual",
                        Utc::now(),
                    ))
                    .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.price_history(GoldType::G750, 1).unwrap().len(), 200);
        assert_eq!(repo.price_history(GoldType::G585, 1).unwrap().len(), 200);
    }
}
