#![allow(dead_code)] // Module contains future functionality not yet integrated

//! Per-field match predicates over car records.
//!
//! Every predicate treats a missing or blank filter value as "no constraint"
//! and returns true. String comparisons are case-insensitive. Brand, model
//! and color each support a substring mode (simple and general search) and
//! an exact mode (structured filters); the two are deliberately separate.

use crate::car::Car;
use crate::classifier;
use crate::criteria::{CarSearchRequest, SearchCriteria};

/// A blank filter string is the absence of a constraint.
fn active(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Substring match on brand.
pub fn matches_brand(car: &Car, brand: Option<&str>) -> bool {
    match active(brand) {
        None => true,
        Some(pattern) => contains_ci(&car.brand, pattern),
    }
}

/// Exact (case-insensitive) match on brand.
pub fn matches_brand_exact(car: &Car, brand: Option<&str>) -> bool {
    match active(brand) {
        None => true,
        Some(value) => car.brand.trim().eq_ignore_ascii_case(value),
    }
}

/// Substring match on model.
pub fn matches_model(car: &Car, model: Option<&str>) -> bool {
    match active(model) {
        None => true,
        Some(pattern) => contains_ci(&car.model, pattern),
    }
}

/// Exact (case-insensitive) match on model.
pub fn matches_model_exact(car: &Car, model: Option<&str>) -> bool {
    match active(model) {
        None => true,
        Some(value) => car.model.trim().eq_ignore_ascii_case(value),
    }
}

/// Substring match on color.
pub fn matches_color(car: &Car, color: Option<&str>) -> bool {
    match active(color) {
        None => true,
        Some(pattern) => contains_ci(&car.color, pattern),
    }
}

/// Exact (case-insensitive) match on color.
pub fn matches_color_exact(car: &Car, color: Option<&str>) -> bool {
    match active(color) {
        None => true,
        Some(value) => car.color.trim().eq_ignore_ascii_case(value),
    }
}

/// Exact (case-insensitive) match on the trimmed plate number.
pub fn matches_plate(car: &Car, plate_number: Option<&str>) -> bool {
    match active(plate_number) {
        None => true,
        Some(value) => car.plate_number.trim().eq_ignore_ascii_case(value),
    }
}

/// Exact year match; a car with an unknown year never matches.
pub fn matches_year(car: &Car, year: Option<i32>) -> bool {
    match year {
        None => true,
        Some(wanted) => car.year == Some(wanted),
    }
}

/// Inclusive year range with open bounds; a car with an unknown year never
/// matches. Used by the field-specific range filter.
pub fn matches_year_range(car: &Car, min_year: Option<i32>, max_year: Option<i32>) -> bool {
    if min_year.is_none() && max_year.is_none() {
        return true;
    }
    let year = match car.year {
        None => return false,
        Some(year) => year,
    };
    min_year.map_or(true, |min| year >= min) && max_year.map_or(true, |max| year <= max)
}

/// Inclusive year range where a car with an unknown year passes. The
/// criteria paths do not exclude cars whose year was never recorded.
pub fn matches_year_range_lenient(car: &Car, min_year: Option<i32>, max_year: Option<i32>) -> bool {
    let year = match car.year {
        None => return true,
        Some(year) => year,
    };
    min_year.map_or(true, |min| year >= min) && max_year.map_or(true, |max| year <= max)
}

/// Three-way OR: the term matches if it occurs in brand, model or color.
pub fn matches_general_term(car: &Car, term: Option<&str>) -> bool {
    match active(term) {
        None => true,
        Some(term) => {
            contains_ci(&car.brand, term)
                || contains_ci(&car.model, term)
                || contains_ci(&car.color, term)
        }
    }
}

/// Vintage facet: boolean equality against the classifier's derived value.
pub fn matches_vintage(car: &Car, is_vintage: Option<bool>) -> bool {
    match is_vintage {
        None => true,
        Some(wanted) => classifier::is_vintage(car.year) == wanted,
    }
}

/// New-car facet.
pub fn matches_new(car: &Car, is_new: Option<bool>) -> bool {
    match is_new {
        None => true,
        Some(wanted) => classifier::is_new(car.year) == wanted,
    }
}

/// Has-photo facet.
pub fn matches_photo(car: &Car, has_photo: Option<bool>) -> bool {
    match has_photo {
        None => true,
        Some(wanted) => car.has_photo() == wanted,
    }
}

/// AND of every supplied constraint on the advanced-criteria path:
/// substring brand/model, exact color/plate, unknown years pass the range.
pub fn matches_criteria(car: &Car, criteria: &SearchCriteria) -> bool {
    matches_brand(car, criteria.brand.as_deref())
        && matches_model(car, criteria.model.as_deref())
        && matches_year(car, criteria.year)
        && matches_year_range_lenient(car, criteria.min_year, criteria.max_year)
        && matches_color_exact(car, criteria.color.as_deref())
        && matches_plate(car, criteria.plate_number.as_deref())
        && matches_general_term(car, criteria.general_search_term.as_deref())
}

/// AND of every supplied structured filter on the request path: all string
/// fields exact, facets against the classifier, unknown years pass the range.
pub fn matches_request_filters(car: &Car, request: &CarSearchRequest) -> bool {
    matches_brand_exact(car, request.brand.as_deref())
        && matches_model_exact(car, request.model.as_deref())
        && matches_year(car, request.year)
        && matches_year_range_lenient(car, request.min_year, request.max_year)
        && matches_color_exact(car, request.color.as_deref())
        && matches_plate(car, request.plate_number.as_deref())
        && matches_vintage(car, request.is_vintage)
        && matches_new(car, request.is_new)
        && matches_photo(car, request.has_photo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car::Car;
    use crate::classifier;

    fn car(brand: &str, model: &str, year: Option<i32>, color: &str, plate: &str) -> Car {
        Car::new(1, brand, model, year, plate, color, None, 1)
    }

    #[test]
    fn test_substring_and_exact_modes_differ() {
        let corolla = car("Toyota", "Corolla", Some(2020), "Red", "ABC123");

        assert!(matches_brand(&corolla, Some("toyo")));
        assert!(!matches_brand_exact(&corolla, Some("toyo")));
        assert!(matches_brand_exact(&corolla, Some("TOYOTA")));

        assert!(matches_model(&corolla, Some("rol")));
        assert!(!matches_model_exact(&corolla, Some("rol")));

        assert!(matches_color(&corolla, Some("re")));
        assert!(!matches_color_exact(&corolla, Some("re")));
        assert!(matches_color_exact(&corolla, Some("red")));
    }

    #[test]
    fn test_blank_filter_means_unconstrained() {
        let corolla = car("Toyota", "Corolla", Some(2020), "Red", "ABC123");

        assert!(matches_brand(&corolla, None));
        assert!(matches_brand(&corolla, Some("   ")));
        assert!(matches_plate(&corolla, Some("")));
        assert!(matches_general_term(&corolla, Some("  ")));
    }

    #[test]
    fn test_plate_match_trims_and_ignores_case() {
        let corolla = car("Toyota", "Corolla", Some(2020), "Red", "ABC123");
        assert!(matches_plate(&corolla, Some("  abc123  ")));
        assert!(!matches_plate(&corolla, Some("ABC124")));
    }

    #[test]
    fn test_exact_year_requires_known_year() {
        let unknown = car("Lada", "Niva", None, "Green", "LDA001");
        assert!(!matches_year(&unknown, Some(1990)));
        assert!(matches_year(&unknown, None));
    }

    #[test]
    fn test_year_range_excludes_unknown_year_on_field_path() {
        let unknown = car("Lada", "Niva", None, "Green", "LDA001");
        assert!(!matches_year_range(&unknown, Some(1980), Some(2000)));
        // No bounds at all means no constraint.
        assert!(matches_year_range(&unknown, None, None));
    }

    #[test]
    fn test_year_range_passes_unknown_year_on_criteria_path() {
        // Pins the documented quirk: the criteria paths let cars with an
        // unrecorded year through range filters.
        let unknown = car("Lada", "Niva", None, "Green", "LDA001");
        assert!(matches_year_range_lenient(&unknown, Some(1980), Some(2000)));

        let known = car("Lada", "Samara", Some(2010), "Green", "LDA002");
        assert!(!matches_year_range_lenient(&known, Some(1980), Some(2000)));
        assert!(matches_year_range_lenient(&known, Some(2000), None));
        assert!(matches_year_range_lenient(&known, None, Some(2015)));
    }

    #[test]
    fn test_general_term_matches_any_of_three_fields() {
        let corolla = car("Toyota", "Corolla", Some(2020), "Red", "ABC123");
        assert!(matches_general_term(&corolla, Some("TOYO")));
        assert!(matches_general_term(&corolla, Some("rolla")));
        assert!(matches_general_term(&corolla, Some("red")));
        assert!(!matches_general_term(&corolla, Some("honda")));
    }

    #[test]
    fn test_facets_follow_the_classifier() {
        let current_year = classifier::current_year();
        let old = car("Honda", "Civic", Some(current_year - 30), "Blue", "OLD001");
        let recent = car("Honda", "Civic", Some(current_year), "Blue", "NEW001");
        let unknown = car("Honda", "Civic", None, "Blue", "UNK001");

        assert!(matches_vintage(&old, Some(true)));
        assert!(!matches_vintage(&recent, Some(true)));
        assert!(matches_new(&recent, Some(true)));
        assert!(matches_new(&old, Some(false)));

        // Unknown year is neither vintage nor new.
        assert!(matches_vintage(&unknown, Some(false)));
        assert!(matches_new(&unknown, Some(false)));
        assert!(matches_vintage(&unknown, None));
    }

    #[test]
    fn test_criteria_composition_is_an_and() {
        let corolla = car("Toyota", "Corolla", Some(2020), "Red", "ABC123");

        let matching = SearchCriteria::new()
            .with_brand("toyo")
            .with_color("red")
            .with_year_range(Some(2015), Some(2025));
        assert!(matches_criteria(&corolla, &matching));

        // One failing dimension fails the whole criteria.
        let failing = SearchCriteria::new().with_brand("toyo").with_color("blue");
        assert!(!matches_criteria(&corolla, &failing));
    }

    #[test]
    fn test_request_filters_use_exact_mode() {
        let corolla = car("Toyota", "Corolla", Some(2020), "Red", "ABC123");

        let partial = CarSearchRequest {
            brand: Some("Toyo".to_string()),
            ..CarSearchRequest::default()
        };
        assert!(!matches_request_filters(&corolla, &partial));

        let exact = CarSearchRequest {
            brand: Some("toyota".to_string()),
            color: Some("RED".to_string()),
            ..CarSearchRequest::default()
        };
        assert!(matches_request_filters(&corolla, &exact));
    }
}
