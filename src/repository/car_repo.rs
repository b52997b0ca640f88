use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::errors::RepositoryError;
use crate::constants::API_NAME;
use crate::models::{Car, CarInput, CarPatch};

/// In-memory store owning every car record.
///
/// Clones share the same map. Reads run under the read lock; each write holds
/// the write lock across its lookup and insert, so a record is always swapped
/// for a complete new snapshot or left untouched.
#[derive(Clone, Default)]
pub struct CarRepository {
    cars: Arc<RwLock<HashMap<String, Car>>>,
}

impl CarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_all(&self) -> Vec<Car> {
        let cars = self.cars.read().await;
        cars.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<Car> {
        let cars = self.cars.read().await;
        let car = cars.get(id).cloned();
        if car.is_none() {
            tracing::debug!("{} Car not found: {}", API_NAME, id);
        }
        car
    }

    pub async fn create(&self, input: CarInput) -> Car {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let car = Car::new(id.clone(), input, now, now);

        let mut cars = self.cars.write().await;
        cars.insert(id, car.clone());

        tracing::info!("{} Successfully created car: {}", API_NAME, car.id);
        car
    }

    /// Overwrite every mutable field; `id` and `created_at` are kept.
    pub async fn replace(&self, id: &str, input: CarInput) -> Option<Car> {
        let mut cars = self.cars.write().await;
        let Some(existing) = cars.get_mut(id) else {
            tracing::debug!("{} Car not found for replace: {}", API_NAME, id);
            return None;
        };

        let car = Car::new(
            existing.id.clone(),
            input,
            existing.created_at,
            next_updated_at(existing.updated_at),
        );
        *existing = car.clone();

        tracing::info!("{} Successfully replaced car: {}", API_NAME, id);
        Some(car)
    }

    /// Overwrite only the fields set in `patch`.
    ///
    /// An empty patch is rejected before the lookup, so it fails the same way
    /// for known and unknown ids.
    pub async fn merge(&self, id: &str, patch: &CarPatch) -> Result<Option<Car>, RepositoryError> {
        if patch.is_empty() {
            return Err(RepositoryError::EmptyUpdate);
        }

        let mut cars = self.cars.write().await;
        let Some(existing) = cars.get_mut(id) else {
            tracing::debug!("{} Car not found for merge: {}", API_NAME, id);
            return Ok(None);
        };

        let car = Car::new(
            existing.id.clone(),
            patch.apply(existing),
            existing.created_at,
            next_updated_at(existing.updated_at),
        );
        *existing = car.clone();

        tracing::info!("{} Successfully merged car: {}", API_NAME, id);
        Ok(Some(car))
    }

    /// Returns whether a record was removed.
    pub async fn delete(&self, id: &str) -> bool {
        let mut cars = self.cars.write().await;
        let removed = cars.remove(id).is_some();
        if removed {
            tracing::info!("{} Successfully deleted car: {}", API_NAME, id);
        } else {
            tracing::debug!("{} Car not found for delete: {}", API_NAME, id);
        }
        removed
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.cars.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.cars.read().await.is_empty()
    }
}

// Never earlier than the previous stamp, even if the wall clock steps back.
fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}

#[cfg(test)]
#[path = "car_repo_test.rs"]
mod car_repo_test;
