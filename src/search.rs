#![allow(dead_code)] // Module contains future functionality not yet integrated

//! Search, filter, sort and statistics operations over one user's cars.
//!
//! Every operation works on the owner-scoped snapshot returned by the data
//! source. Callers authenticate the owner before reaching this engine; an
//! empty snapshot yields empty results, never an error.

use crate::car::Car;
use crate::criteria::{CarSearchCriteria, CarSearchRequest, SearchCriteria, DEFAULT_SORT_BY};
use crate::errors::RegistryError;
use crate::filter;
use crate::page::{self, Page};
use crate::sort;
use crate::stats::{self, CarStatistics, YearStatistics};
use crate::store::CarDataSource;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub struct CarSearchEngine<'a> {
    store: &'a dyn CarDataSource,
}

impl<'a> CarSearchEngine<'a> {
    pub fn new(store: &'a dyn CarDataSource) -> Self {
        Self { store }
    }

    /// Cars matching a plate exactly. A blank plate matches nothing; the
    /// result has at most one element since plates are unique.
    pub fn search_by_plate_number(&self, plate_number: &str, user_id: u64) -> Vec<Car> {
        if plate_number.trim().is_empty() {
            return Vec::new();
        }

        self.store
            .find_by_plate(plate_number.trim())
            .filter(|car| car.user_id == user_id)
            .into_iter()
            .collect()
    }

    /// Cars whose model contains the pattern. A blank pattern returns the
    /// full collection.
    pub fn search_by_model(&self, model: &str, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| filter::matches_model(car, Some(model)))
            .collect()
    }

    /// Cars whose brand contains the pattern.
    pub fn search_by_brand(&self, brand: &str, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| filter::matches_brand(car, Some(brand)))
            .collect()
    }

    /// Cars of one exact model year.
    pub fn filter_by_year(&self, year: Option<i32>, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| filter::matches_year(car, year))
            .collect()
    }

    /// Cars within an inclusive year range. On this path a car with an
    /// unknown year never matches.
    pub fn filter_by_year_range(
        &self,
        min_year: Option<i32>,
        max_year: Option<i32>,
        user_id: u64,
    ) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| filter::matches_year_range(car, min_year, max_year))
            .collect()
    }

    /// Cars of one exact color.
    pub fn filter_by_color(&self, color: &str, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| filter::matches_color_exact(car, Some(color)))
            .collect()
    }

    /// Free-text search across brand, model and color.
    pub fn general_search(&self, search_term: &str, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| filter::matches_general_term(car, Some(search_term)))
            .collect()
    }

    /// AND of every supplied criteria field, then the optional enumerated
    /// sort. Empty criteria short-circuit to the full collection.
    pub fn advanced_search(&self, criteria: &SearchCriteria, user_id: u64) -> Vec<Car> {
        let mut cars = if criteria.has_filters() {
            self.store
                .cars_for_user(user_id)
                .into_iter()
                .filter(|car| filter::matches_criteria(car, criteria))
                .collect()
        } else {
            self.store.cars_for_user(user_id)
        };

        if let Some(order) = criteria.sort_order {
            sort::sort_by_order(&mut cars, order);
        }

        cars
    }

    /// Cars at least 25 years old.
    pub fn vintage_cars(&self, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| car.is_vintage())
            .collect()
    }

    /// Cars at most 3 years old.
    pub fn new_cars(&self, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| car.is_new())
            .collect()
    }

    pub fn cars_ordered_by_year_desc(&self, user_id: u64) -> Vec<Car> {
        self.sorted_cars(user_id, "year", false)
    }

    pub fn cars_ordered_by_year_asc(&self, user_id: u64) -> Vec<Car> {
        self.sorted_cars(user_id, "year", true)
    }

    /// Unified search over the boundary DTO.
    ///
    /// With no filters at all this is "get all, sorted by the requested
    /// field" (creation time descending by default). A general term narrows
    /// the base set first; the structured filters are then ANDed on top.
    pub fn search_cars(&self, user_id: u64, request: Option<&CarSearchRequest>) -> Vec<Car> {
        let request = match request {
            Some(request) if request.has_any_filter() => request,
            other => {
                let sort_by = other
                    .map(|r| r.sort_by.as_str())
                    .unwrap_or(DEFAULT_SORT_BY)
                    .to_string();
                let ascending = other.map_or(false, |r| !r.is_sorting_descending());
                return self.sorted_cars(user_id, &sort_by, ascending);
            }
        };

        debug!("Unified search for user {}: {:?}", user_id, request);

        let mut cars = if request.has_search_term() {
            self.general_search(request.search_term.as_deref().unwrap_or(""), user_id)
        } else {
            self.store.cars_for_user(user_id)
        };

        cars.retain(|car| filter::matches_request_filters(car, request));
        sort::sort_by_field(&mut cars, &request.sort_by, !request.is_sorting_descending());
        cars
    }

    /// Point lookup by plate. A blank plate is a caller error; a missing
    /// car is a distinct not-found signal.
    pub fn find_by_plate(&self, user_id: u64, plate_number: &str) -> Result<Car, RegistryError> {
        let trimmed = plate_number.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::validation_error(
                "The plate number is required",
                vec!["ABC123".to_string()],
                Some("plate_number".to_string()),
            ));
        }

        self.store
            .find_by_plate(trimmed)
            .filter(|car| car.user_id == user_id)
            .ok_or_else(|| RegistryError::CarNotFound {
                plate_number: trimmed.to_string(),
            })
    }

    /// Point lookup by internal id, owner-scoped.
    pub fn find_by_id(&self, user_id: u64, id: u64) -> Option<Car> {
        self.store.find_by_id(id).filter(|car| car.user_id == user_id)
    }

    /// Whether a plate is free for anyone to register.
    pub fn is_plate_available(&self, plate_number: &str) -> bool {
        if plate_number.trim().is_empty() {
            return false;
        }
        !self.store.exists_by_plate(plate_number.trim())
    }

    /// Whether a plate is free for this user, so an owner can keep their own
    /// plate when updating.
    pub fn is_plate_available_for_user(&self, plate_number: &str, user_id: u64) -> bool {
        if plate_number.trim().is_empty() {
            return false;
        }
        !self
            .store
            .exists_by_plate_for_other_user(plate_number.trim(), user_id)
    }

    pub fn cars_with_photo(&self, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| car.has_photo())
            .collect()
    }

    pub fn cars_without_photo(&self, user_id: u64) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| !car.has_photo())
            .collect()
    }

    /// The full collection ordered by any field; unknown fields fall back
    /// to creation time.
    pub fn sorted_cars(&self, user_id: u64, sort_by: &str, ascending: bool) -> Vec<Car> {
        let mut cars = self.store.cars_for_user(user_id);
        sort::sort_by_field(&mut cars, sort_by, ascending);
        cars
    }

    /// Brand names ranked by how often they appear, most common first.
    pub fn most_common_brands(&self, user_id: u64) -> Vec<String> {
        stats::most_common_brands(&self.store.cars_for_user(user_id))
    }

    pub fn year_statistics(&self, user_id: u64) -> YearStatistics {
        stats::year_statistics(&self.store.cars_for_user(user_id))
    }

    /// Full statistics over the user's collection.
    pub fn statistics(&self, user_id: u64) -> CarStatistics {
        stats::aggregate(&self.store.cars_for_user(user_id))
    }

    /// Paginated search. Invalid page numbers and sizes are clamped, not
    /// rejected. The criteria shape picks one of three strategies (term,
    /// structured filters, unfiltered listing); a storage adapter may push
    /// each down, but over a snapshot they are filter, then sort, then
    /// slice.
    pub fn search_cars_paginated(
        &self,
        user_id: u64,
        request: Option<&CarSearchRequest>,
        page_number: i64,
        page_size: i64,
        sort_by: Option<&str>,
        sort_direction: Option<&str>,
    ) -> Page<Car> {
        let page_number = page::clamp_page(page_number);
        let page_size = page::clamp_size(page_size);

        let sort_field = sort_by.map(str::trim).filter(|s| !s.is_empty());
        let descending =
            sort_direction.map_or(false, |direction| direction.trim().eq_ignore_ascii_case("desc"));

        let criteria = CarSearchCriteria::from_request(request);

        let mut cars = if criteria.has_search_term() {
            self.general_search(criteria.search_term.as_deref().unwrap_or(""), user_id)
        } else if criteria.has_filters() {
            self.filtered_cars(user_id, &criteria)
        } else {
            self.store.cars_for_user(user_id)
        };

        if let Some(field) = sort_field {
            sort::sort_by_field(&mut cars, field, !descending);
        }

        Page::from_sorted(
            cars,
            page_number,
            page_size,
            sort_field.map(|field| field.to_string()),
            sort_field.map(|_| if descending { "DESC" } else { "ASC" }.to_string()),
        )
    }

    /// Structured-filter strategy for the paginated path: exact string
    /// matches, and unknown years pass the range.
    fn filtered_cars(&self, user_id: u64, criteria: &CarSearchCriteria) -> Vec<Car> {
        self.store
            .cars_for_user(user_id)
            .into_iter()
            .filter(|car| {
                filter::matches_brand_exact(car, criteria.brand.as_deref())
                    && filter::matches_model_exact(car, criteria.model.as_deref())
                    && filter::matches_year(car, criteria.year)
                    && filter::matches_color_exact(car, criteria.color.as_deref())
                    && filter::matches_year_range_lenient(car, criteria.min_year, criteria.max_year)
            })
            .collect()
    }

    /// Run a saved search against the current collection, recording its use.
    pub fn execute_saved_search(
        &self,
        user_id: u64,
        saved_search: &SavedSearch,
        persistence: &SearchPersistenceManager,
    ) -> Result<Vec<Car>, RegistryError> {
        persistence.update_search_usage(&saved_search.id)?;
        Ok(self.search_cars(user_id, Some(&saved_search.request)))
    }
}

/// A named, reusable search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub request: CarSearchRequest,
    pub created_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub use_count: u32,
}

/// Persistence for saved search configurations.
pub struct SearchPersistenceManager {
    storage_path: PathBuf,
}

impl SearchPersistenceManager {
    pub fn new() -> Result<Self, RegistryError> {
        let mut storage_path = dirs::home_dir().ok_or_else(|| {
            RegistryError::system_error(
                "Could not find home directory",
                Some("Please ensure your home directory is properly set".to_string()),
            )
        })?;
        storage_path.push(".rusty_garage");
        storage_path.push("saved_searches.json");

        if let Some(parent) = storage_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RegistryError::system_error_with_source(
                    "Failed to create saved-search directory",
                    Some("Check directory permissions".to_string()),
                    Box::new(e),
                )
            })?;
        }

        Ok(Self { storage_path })
    }

    /// Build a new saved search with a generated identifier.
    pub fn create_saved_search(
        name: String,
        description: Option<String>,
        request: CarSearchRequest,
    ) -> SavedSearch {
        SavedSearch {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            description,
            request,
            created_at: Utc::now(),
            last_used: None,
            use_count: 0,
        }
    }

    /// Save a search configuration, replacing any existing one with the
    /// same id.
    pub fn save_search(&self, search: SavedSearch) -> Result<(), RegistryError> {
        let mut saved_searches = self.load_all_searches().unwrap_or_default();

        if let Some(existing) = saved_searches.iter_mut().find(|s| s.id == search.id) {
            *existing = search;
        } else {
            saved_searches.push(search);
        }

        self.write_all(&saved_searches)
    }

    pub fn load_search(&self, search_id: &str) -> Result<Option<SavedSearch>, RegistryError> {
        let saved_searches = self.load_all_searches()?;
        Ok(saved_searches.into_iter().find(|s| s.id == search_id))
    }

    pub fn load_all_searches(&self) -> Result<Vec<SavedSearch>, RegistryError> {
        if !self.storage_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.storage_path).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to read saved searches",
                Some(format!("Check permissions for {}", self.storage_path.display())),
                Box::new(e),
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Saved searches file is corrupted",
                Some(format!("Remove or repair {}", self.storage_path.display())),
                Box::new(e),
            )
        })
    }

    /// Delete a saved search. Returns whether one was removed.
    pub fn delete_search(&self, search_id: &str) -> Result<bool, RegistryError> {
        let mut saved_searches = self.load_all_searches().unwrap_or_default();
        let original_len = saved_searches.len();

        saved_searches.retain(|s| s.id != search_id);

        if saved_searches.len() < original_len {
            self.write_all(&saved_searches)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn update_search_usage(&self, search_id: &str) -> Result<(), RegistryError> {
        let mut saved_searches = self.load_all_searches().unwrap_or_default();

        if let Some(search) = saved_searches.iter_mut().find(|s| s.id == search_id) {
            search.last_used = Some(Utc::now());
            search.use_count += 1;
            self.write_all(&saved_searches)?;
        }

        Ok(())
    }

    /// Most-used searches first.
    pub fn frequently_used_searches(&self, limit: usize) -> Result<Vec<SavedSearch>, RegistryError> {
        let mut saved_searches = self.load_all_searches()?;
        saved_searches.sort_by(|a, b| b.use_count.cmp(&a.use_count));
        saved_searches.truncate(limit);
        Ok(saved_searches)
    }

    fn write_all(&self, saved_searches: &[SavedSearch]) -> Result<(), RegistryError> {
        let content = serde_json::to_string_pretty(saved_searches).map_err(|e| {
            RegistryError::system_error_with_source("Failed to serialize saved searches", None, Box::new(e))
        })?;

        std::fs::write(&self.storage_path, content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to write saved searches",
                Some(format!("Check permissions for {}", self.storage_path.display())),
                Box::new(e),
            )
        })
    }
}


#[cfg(test)]
mod persistence_tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_persistence_manager() -> (SearchPersistenceManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage_path = temp_dir.path().join("saved_searches.json");

        (SearchPersistenceManager { storage_path }, temp_dir)
    }

    fn toyota_request() -> CarSearchRequest {
        CarSearchRequest {
            brand: Some("Toyota".to_string()),
            ..CarSearchRequest::default()
        }
    }

    #[test]
    fn test_save_and_load_search() {
        let (manager, _temp_dir) = create_test_persistence_manager();

        let saved_search = SearchPersistenceManager::create_saved_search(
            "My Toyotas".to_string(),
            Some("Everything from Toyota".to_string()),
            toyota_request(),
        );
        let search_id = saved_search.id.clone();

        manager.save_search(saved_search).unwrap();

        let loaded = manager.load_search(&search_id).unwrap().unwrap();
        assert_eq!(loaded.name, "My Toyotas");
        assert_eq!(loaded.request.brand.as_deref(), Some("Toyota"));
        assert_eq!(loaded.use_count, 0);
    }

    #[test]
    fn test_delete_search() {
        let (manager, _temp_dir) = create_test_persistence_manager();

        let saved_search = SearchPersistenceManager::create_saved_search(
            "Short lived".to_string(),
            None,
            toyota_request(),
        );
        let search_id = saved_search.id.clone();

        manager.save_search(saved_search).unwrap();
        assert!(manager.delete_search(&search_id).unwrap());
        assert!(manager.load_search(&search_id).unwrap().is_none());
        assert!(!manager.delete_search(&search_id).unwrap());
    }

    #[test]
    fn test_update_search_usage() {
        let (manager, _temp_dir) = create_test_persistence_manager();

        let saved_search = SearchPersistenceManager::create_saved_search(
            "Usage tracked".to_string(),
            None,
            toyota_request(),
        );
        let search_id = saved_search.id.clone();

        manager.save_search(saved_search).unwrap();
        manager.update_search_usage(&search_id).unwrap();

        let loaded = manager.load_search(&search_id).unwrap().unwrap();
        assert_eq!(loaded.use_count, 1);
        assert!(loaded.last_used.is_some());
    }

    #[test]
    fn test_execute_saved_search_runs_and_counts() {
        let (manager, _temp_dir) = create_test_persistence_manager();
        let store = crate::store::CarStore::with_cars(vec![
            Car::new(1, "Toyota", "Corolla", Some(2020), "TOY001", "Red", None, 1),
            Car::new(2, "Honda", "Civic", Some(2019), "HON001", "Blue", None, 1),
        ]);
        let engine = CarSearchEngine::new(&store);

        let saved_search = SearchPersistenceManager::create_saved_search(
            "Toyotas".to_string(),
            None,
            toyota_request(),
        );
        manager.save_search(saved_search.clone()).unwrap();

        let results = engine.execute_saved_search(1, &saved_search, &manager).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].plate_number, "TOY001");

        let reloaded = manager.load_search(&saved_search.id).unwrap().unwrap();
        assert_eq!(reloaded.use_count, 1);
    }
}
