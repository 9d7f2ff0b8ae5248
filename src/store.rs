//! The registry's data source: a trait the search engine consumes and an
//! in-memory implementation persisted as JSON in the user's home directory.

use crate::car::Car;
use crate::errors::RegistryError;
use crate::validation;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Read-side port the search engine consumes.
///
/// Implementations hand back the complete, already owner-scoped collection;
/// the engine never mutates what it receives.
pub trait CarDataSource {
    /// The full current collection for one owner.
    fn cars_for_user(&self, user_id: u64) -> Vec<Car>;

    /// Point lookup by plate, across all owners.
    fn find_by_plate(&self, plate_number: &str) -> Option<Car>;

    /// Point lookup by internal id.
    fn find_by_id(&self, id: u64) -> Option<Car>;

    fn exists_by_plate(&self, plate_number: &str) -> bool;

    /// Whether another owner already uses this plate.
    fn exists_by_plate_for_other_user(&self, plate_number: &str, user_id: u64) -> bool;
}

fn plates_match(registered: &str, candidate: &str) -> bool {
    registered.trim().eq_ignore_ascii_case(candidate.trim())
}

/// In-memory car registry backed by a JSON file.
pub struct CarStore {
    cars: Vec<Car>,
    storage_path: Option<PathBuf>,
}

impl CarStore {
    /// An empty, non-persistent store.
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            storage_path: None,
        }
    }

    /// A non-persistent store seeded with the given cars.
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars,
            storage_path: None,
        }
    }

    fn default_storage_path() -> Result<PathBuf, RegistryError> {
        let mut path = dirs::home_dir().ok_or_else(|| {
            RegistryError::system_error(
                "Unable to determine home directory",
                Some("Please ensure your home directory is properly set".to_string()),
            )
        })?;
        path.push(".rusty_garage");
        path.push("cars.json");
        Ok(path)
    }

    /// Open the registry at its default location, loading any saved cars.
    pub fn open_default() -> Result<Self, RegistryError> {
        Self::open(Self::default_storage_path()?)
    }

    /// Open a registry file; a missing file is an empty registry.
    pub fn open(path: PathBuf) -> Result<Self, RegistryError> {
        if !path.exists() {
            debug!("Registry file not found, starting empty");
            return Ok(Self {
                cars: Vec::new(),
                storage_path: Some(path),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to read registry file",
                Some(format!("Check permissions for {}", path.display())),
                Box::new(e),
            )
        })?;

        let cars: Vec<Car> = serde_json::from_str(&content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Registry file is corrupted",
                Some(format!("Remove or repair {}", path.display())),
                Box::new(e),
            )
        })?;

        debug!("Loaded {} cars from {}", cars.len(), path.display());
        Ok(Self {
            cars,
            storage_path: Some(path),
        })
    }

    /// Persist the registry. A store without a path is in-memory only.
    pub fn save(&self) -> Result<(), RegistryError> {
        let path = match &self.storage_path {
            None => return Ok(()),
            Some(path) => path,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RegistryError::system_error_with_source(
                    "Failed to create registry directory",
                    Some("Check directory permissions".to_string()),
                    Box::new(e),
                )
            })?;
        }

        let content = serde_json::to_string_pretty(&self.cars).map_err(|e| {
            RegistryError::system_error_with_source("Failed to serialize registry", None, Box::new(e))
        })?;

        fs::write(path, content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to write registry file",
                Some(format!("Check permissions for {}", path.display())),
                Box::new(e),
            )
        })?;

        debug!("Saved {} cars to {}", self.cars.len(), path.display());
        Ok(())
    }

    /// Validate and register a car. The plate must not be taken by anyone.
    pub fn add_car(&mut self, car: Car) -> Result<(), RegistryError> {
        validation::validate_car(&car)?;

        if self.exists_by_plate(&car.plate_number) {
            return Err(RegistryError::DuplicatePlate {
                plate_number: validation::normalize_plate(&car.plate_number),
            });
        }

        debug!("Registered car {} ({})", car.plate_number, car.full_description());
        self.cars.push(car);
        Ok(())
    }

    /// Remove one of the owner's cars by plate. Returns whether a car was
    /// removed.
    pub fn remove_car(&mut self, plate_number: &str, user_id: u64) -> bool {
        let before = self.cars.len();
        self.cars
            .retain(|car| car.user_id != user_id || !plates_match(&car.plate_number, plate_number));
        self.cars.len() < before
    }

    /// Replace the photo of one of the owner's cars. Returns whether a car
    /// was updated.
    pub fn set_photo(&mut self, plate_number: &str, user_id: u64, photo_url: Option<String>) -> bool {
        let car = self.cars.iter_mut().find(|car| {
            car.user_id == user_id && plates_match(&car.plate_number, plate_number)
        });
        match car {
            Some(car) => {
                car.photo_url = photo_url;
                car.touch();
                true
            }
            None => false,
        }
    }

    /// Next free internal id.
    pub fn next_id(&self) -> u64 {
        self.cars.iter().map(|car| car.id).max().unwrap_or(0) + 1
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl Default for CarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CarDataSource for CarStore {
    fn cars_for_user(&self, user_id: u64) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|car| car.user_id == user_id)
            .cloned()
            .collect()
    }

    fn find_by_plate(&self, plate_number: &str) -> Option<Car> {
        self.cars
            .iter()
            .find(|car| plates_match(&car.plate_number, plate_number))
            .cloned()
    }

    fn find_by_id(&self, id: u64) -> Option<Car> {
        self.cars.iter().find(|car| car.id == id).cloned()
    }

    fn exists_by_plate(&self, plate_number: &str) -> bool {
        self.cars
            .iter()
            .any(|car| plates_match(&car.plate_number, plate_number))
    }

    fn exists_by_plate_for_other_user(&self, plate_number: &str, user_id: u64) -> bool {
        self.cars
            .iter()
            .any(|car| car.user_id != user_id && plates_match(&car.plate_number, plate_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_car(id: u64, plate: &str, user_id: u64) -> Car {
        Car::new(id, "Toyota", "Corolla", Some(2020), plate, "Red", None, user_id)
    }

    #[test]
    fn test_cars_for_user_scopes_by_owner() {
        let store = CarStore::with_cars(vec![
            test_car(1, "ABC123", 1),
            test_car(2, "DEF456", 2),
            test_car(3, "GHI789", 1),
        ]);

        let mine = store.cars_for_user(1);
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|car| car.user_id == 1));

        assert!(store.cars_for_user(99).is_empty());
    }

    #[test]
    fn test_plate_lookup_ignores_case_and_whitespace() {
        let store = CarStore::with_cars(vec![test_car(1, "ABC123", 1)]);
        assert!(store.find_by_plate(" abc123 ").is_some());
        assert!(store.find_by_plate("ABC124").is_none());
        assert!(store.exists_by_plate("abc123"));
    }

    #[test]
    fn test_other_user_plate_check() {
        let store = CarStore::with_cars(vec![test_car(1, "ABC123", 1)]);
        assert!(store.exists_by_plate_for_other_user("ABC123", 2));
        assert!(!store.exists_by_plate_for_other_user("ABC123", 1));
    }

    #[test]
    fn test_add_car_rejects_duplicate_plate() {
        let mut store = CarStore::new();
        store.add_car(test_car(1, "ABC123", 1)).unwrap();

        let duplicate = store.add_car(test_car(2, "abc123", 2)).unwrap_err();
        assert!(matches!(duplicate, RegistryError::DuplicatePlate { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_car_validates_fields() {
        let mut store = CarStore::new();
        let invalid = store.add_car(test_car(1, "NOT A PLATE", 1)).unwrap_err();
        assert!(matches!(invalid, RegistryError::Validation { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_car_is_owner_scoped() {
        let mut store = CarStore::with_cars(vec![test_car(1, "ABC123", 1)]);
        assert!(!store.remove_car("ABC123", 2));
        assert_eq!(store.len(), 1);
        assert!(store.remove_car("abc123", 1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_photo_updates_car_and_timestamp() {
        let mut store = CarStore::with_cars(vec![test_car(1, "ABC123", 1)]);
        let before = store.find_by_plate("ABC123").unwrap().updated_at;

        assert!(store.set_photo("abc123", 1, Some("https://example.com/car.jpg".to_string())));
        let updated = store.find_by_plate("ABC123").unwrap();
        assert!(updated.has_photo());
        assert!(updated.updated_at >= before);

        // Wrong owner leaves the car untouched.
        assert!(!store.set_photo("ABC123", 2, None));
        assert!(store.find_by_plate("ABC123").unwrap().has_photo());
    }

    #[test]
    fn test_next_id_advances() {
        let mut store = CarStore::new();
        assert_eq!(store.next_id(), 1);
        store.add_car(test_car(7, "ABC123", 1)).unwrap();
        assert_eq!(store.next_id(), 8);
    }

    #[test]
    fn test_save_and_reopen_round_trip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("cars.json");

        let mut store = CarStore::open(path.clone()).unwrap();
        store.add_car(test_car(1, "ABC123", 1)).unwrap();
        store.save().unwrap();

        let reopened = CarStore::open(path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert!(reopened.exists_by_plate("ABC123"));
    }
}
