#![allow(dead_code)] // Module contains future functionality not yet integrated

//! Field validation for car records.
//!
//! Validation applies when a car enters the registry; the search engine
//! itself accepts whatever the store returns.

use crate::car::Car;
use crate::classifier;
use crate::errors::RegistryError;

pub const CAR_MIN_YEAR: i32 = 1900;

pub const BRAND_MIN_LENGTH: usize = 2;
pub const BRAND_MAX_LENGTH: usize = 30;
pub const MODEL_MIN_LENGTH: usize = 1;
pub const MODEL_MAX_LENGTH: usize = 50;
pub const COLOR_MIN_LENGTH: usize = 3;
pub const COLOR_MAX_LENGTH: usize = 20;

/// Accepted plate formats: ABC123 or ABC12D.
const PLATE_PATTERN: &str = r"^[A-Z]{3}[0-9]{3}$|^[A-Z]{3}[0-9]{2}[A-Z]$";

fn plate_examples() -> Vec<String> {
    vec!["ABC123".to_string(), "ABC12D".to_string()]
}

/// Uppercase, trimmed canonical form of a plate.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

pub fn is_valid_plate(plate: &str) -> bool {
    let pattern = regex::Regex::new(PLATE_PATTERN).unwrap();
    pattern.is_match(&normalize_plate(plate))
}

pub fn validate_plate(plate: &str) -> Result<(), RegistryError> {
    if plate.trim().is_empty() {
        return Err(RegistryError::validation_error(
            "The plate number is required",
            plate_examples(),
            Some("plate_number".to_string()),
        ));
    }
    if !is_valid_plate(plate) {
        return Err(RegistryError::validation_error(
            format!("'{}' is not a valid plate format", plate.trim()),
            plate_examples(),
            Some("plate_number".to_string()),
        ));
    }
    Ok(())
}

pub fn is_valid_year(year: Option<i32>) -> bool {
    match year {
        None => false,
        Some(year) => year >= CAR_MIN_YEAR && year <= classifier::current_year(),
    }
}

pub fn is_not_future(year: Option<i32>) -> bool {
    match year {
        None => false,
        Some(year) => year <= classifier::current_year(),
    }
}

pub fn validate_year(year: Option<i32>) -> Result<(), RegistryError> {
    let year = year.ok_or_else(|| {
        RegistryError::validation_error(
            "The model year is required",
            vec!["1968".to_string(), "2020".to_string()],
            Some("year".to_string()),
        )
    })?;

    if year < CAR_MIN_YEAR {
        return Err(RegistryError::validation_error(
            format!("The model year must be {} or later", CAR_MIN_YEAR),
            vec![CAR_MIN_YEAR.to_string()],
            Some("year".to_string()),
        ));
    }

    if year > classifier::current_year() {
        return Err(RegistryError::validation_error(
            "The model year cannot be in the future",
            vec![classifier::current_year().to_string()],
            Some("year".to_string()),
        ));
    }

    Ok(())
}

fn validate_length(
    value: &str,
    field: &str,
    min: usize,
    max: usize,
) -> Result<(), RegistryError> {
    let trimmed = value.trim();
    if trimmed.len() < min || trimmed.len() > max {
        return Err(RegistryError::validation_error(
            format!("The {} must be between {} and {} characters", field, min, max),
            Vec::new(),
            Some(field.to_string()),
        ));
    }
    Ok(())
}

/// Validate every field of a car before it enters the registry.
pub fn validate_car(car: &Car) -> Result<(), RegistryError> {
    validate_length(&car.brand, "brand", BRAND_MIN_LENGTH, BRAND_MAX_LENGTH)?;
    validate_length(&car.model, "model", MODEL_MIN_LENGTH, MODEL_MAX_LENGTH)?;
    validate_length(&car.color, "color", COLOR_MIN_LENGTH, COLOR_MAX_LENGTH)?;
    validate_plate(&car.plate_number)?;
    validate_year(car.year)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier;

    #[test]
    fn test_plate_formats() {
        assert!(is_valid_plate("ABC123"));
        assert!(is_valid_plate("abc123"));
        assert!(is_valid_plate("  ABC12D "));
        assert!(!is_valid_plate("AB1234"));
        assert!(!is_valid_plate("ABCD12"));
        assert!(!is_valid_plate(""));
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  abc123 "), "ABC123");
    }

    #[test]
    fn test_year_bounds() {
        assert!(!is_valid_year(None));
        assert!(!is_valid_year(Some(1899)));
        assert!(is_valid_year(Some(1900)));
        assert!(is_valid_year(Some(classifier::current_year())));
        assert!(!is_valid_year(Some(classifier::current_year() + 1)));
    }

    #[test]
    fn test_validate_year_errors() {
        assert!(validate_year(Some(2000)).is_ok());

        let missing = validate_year(None).unwrap_err();
        assert!(missing.user_message().contains("required"));

        let future = validate_year(Some(classifier::current_year() + 1)).unwrap_err();
        assert!(future.user_message().contains("future"));
    }

    #[test]
    fn test_validate_car_checks_every_field() {
        let valid = Car::new(1, "Toyota", "Corolla", Some(2020), "ABC123", "Red", None, 1);
        assert!(validate_car(&valid).is_ok());

        let short_brand = Car::new(1, "T", "Corolla", Some(2020), "ABC123", "Red", None, 1);
        assert!(validate_car(&short_brand).is_err());

        let bad_plate = Car::new(1, "Toyota", "Corolla", Some(2020), "12345", "Red", None, 1);
        assert!(validate_car(&bad_plate).is_err());

        let short_color = Car::new(1, "Toyota", "Corolla", Some(2020), "ABC123", "Re", None, 1);
        assert!(validate_car(&short_color).is_err());
    }
}
