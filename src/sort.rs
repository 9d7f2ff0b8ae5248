//! Comparator table for ordering car lists.
//!
//! String fields compare case-insensitively. Cars with an unknown year sort
//! last in both directions: reversing the direction reverses only the order
//! of the known years. All sorts are stable, so ties keep their input order
//! and pagination stays deterministic.

use crate::car::Car;
use crate::criteria::{SortDirection, SortOrder};
use std::cmp::Ordering;

/// Fields a car list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Brand,
    Model,
    Year,
    Color,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    /// Resolve a free-form field name. Unknown names fall back to creation
    /// time instead of failing.
    pub fn parse(sort_by: &str) -> SortKey {
        match sort_by.trim().to_lowercase().as_str() {
            "brand" => SortKey::Brand,
            "model" => SortKey::Model,
            "year" => SortKey::Year,
            "color" => SortKey::Color,
            "updatedat" => SortKey::UpdatedAt,
            _ => SortKey::CreatedAt,
        }
    }

}

/// Each enumerated sort option maps onto the same comparator family as the
/// free-form path.
pub fn sort_spec(order: SortOrder) -> (SortKey, SortDirection) {
    match order {
        SortOrder::YearAsc => (SortKey::Year, SortDirection::Ascending),
        SortOrder::YearDesc => (SortKey::Year, SortDirection::Descending),
        SortOrder::BrandAsc => (SortKey::Brand, SortDirection::Ascending),
        SortOrder::BrandDesc => (SortKey::Brand, SortDirection::Descending),
        SortOrder::ModelAsc => (SortKey::Model, SortDirection::Ascending),
        SortOrder::ModelDesc => (SortKey::Model, SortDirection::Descending),
        SortOrder::CreatedAsc => (SortKey::CreatedAt, SortDirection::Ascending),
        SortOrder::CreatedDesc => (SortKey::CreatedAt, SortDirection::Descending),
    }
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Compare two cars on one key. Unknown years stay at the end regardless of
/// direction; the direction applies only between known values.
pub fn compare(a: &Car, b: &Car, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::Year => match (a.year, b.year) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => apply_direction(x.cmp(&y), direction),
        },
        SortKey::Brand => {
            apply_direction(a.brand.to_lowercase().cmp(&b.brand.to_lowercase()), direction)
        }
        SortKey::Model => {
            apply_direction(a.model.to_lowercase().cmp(&b.model.to_lowercase()), direction)
        }
        SortKey::Color => {
            apply_direction(a.color.to_lowercase().cmp(&b.color.to_lowercase()), direction)
        }
        SortKey::CreatedAt => apply_direction(a.created_at.cmp(&b.created_at), direction),
        SortKey::UpdatedAt => apply_direction(a.updated_at.cmp(&b.updated_at), direction),
    }
}

/// Stable sort by one key and direction.
pub fn sort_cars(cars: &mut [Car], key: SortKey, direction: SortDirection) {
    cars.sort_by(|a, b| compare(a, b, key, direction));
}

/// Sort by an enumerated sort option.
pub fn sort_by_order(cars: &mut [Car], order: SortOrder) {
    let (key, direction) = sort_spec(order);
    sort_cars(cars, key, direction);
}

/// Sort by a free-form field name with an ascending toggle.
pub fn sort_by_field(cars: &mut [Car], sort_by: &str, ascending: bool) {
    let direction = if ascending {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };
    sort_cars(cars, SortKey::parse(sort_by), direction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn car_with_year(plate: &str, brand: &str, year: Option<i32>) -> Car {
        Car::new(1, brand, "Model", year, plate, "Gray", None, 1)
    }

    fn years(cars: &[Car]) -> Vec<Option<i32>> {
        cars.iter().map(|car| car.year).collect()
    }

    fn plates(cars: &[Car]) -> Vec<&str> {
        cars.iter().map(|car| car.plate_number.as_str()).collect()
    }

    #[test]
    fn test_unknown_years_sort_last_in_both_directions() {
        let mut cars = vec![
            car_with_year("A", "Audi", None),
            car_with_year("B", "BMW", Some(2010)),
            car_with_year("C", "Citroen", Some(1995)),
            car_with_year("D", "Dacia", None),
        ];

        sort_cars(&mut cars, SortKey::Year, SortDirection::Ascending);
        assert_eq!(years(&cars), vec![Some(1995), Some(2010), None, None]);

        sort_cars(&mut cars, SortKey::Year, SortDirection::Descending);
        assert_eq!(years(&cars), vec![Some(2010), Some(1995), None, None]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let mut cars = vec![
            car_with_year("A", "Audi", Some(2001)),
            car_with_year("B", "BMW", None),
            car_with_year("C", "Citroen", Some(2020)),
        ];

        sort_cars(&mut cars, SortKey::Year, SortDirection::Descending);
        let first_pass: Vec<String> = plates(&cars).iter().map(|s| s.to_string()).collect();
        sort_cars(&mut cars, SortKey::Year, SortDirection::Descending);
        assert_eq!(plates(&cars), first_pass);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut cars = vec![
            car_with_year("FIRST", "Volvo", Some(2015)),
            car_with_year("SECOND", "Volvo", Some(2015)),
            car_with_year("THIRD", "Volvo", Some(2015)),
        ];

        sort_cars(&mut cars, SortKey::Year, SortDirection::Ascending);
        assert_eq!(plates(&cars), vec!["FIRST", "SECOND", "THIRD"]);

        sort_cars(&mut cars, SortKey::Brand, SortDirection::Descending);
        assert_eq!(plates(&cars), vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_string_sort_is_case_insensitive() {
        let mut cars = vec![
            car_with_year("A", "zebra", Some(2000)),
            car_with_year("B", "Alpha", Some(2000)),
            car_with_year("C", "BETA", Some(2000)),
        ];

        sort_cars(&mut cars, SortKey::Brand, SortDirection::Ascending);
        let brands: Vec<&str> = cars.iter().map(|car| car.brand.as_str()).collect();
        assert_eq!(brands, vec!["Alpha", "BETA", "zebra"]);
    }

    #[test]
    fn test_unknown_field_falls_back_to_created_at() {
        assert_eq!(SortKey::parse("mileage"), SortKey::CreatedAt);
        assert_eq!(SortKey::parse(""), SortKey::CreatedAt);
        assert_eq!(SortKey::parse("  YEAR "), SortKey::Year);
        assert_eq!(SortKey::parse("updatedAt"), SortKey::UpdatedAt);
    }

    #[test]
    fn test_enum_and_field_paths_agree() {
        let now = Utc::now();
        let mut by_order = vec![
            car_with_year("A", "Skoda", Some(2018)),
            car_with_year("B", "Fiat", None),
            car_with_year("C", "Opel", Some(1990)),
        ];
        for (i, car) in by_order.iter_mut().enumerate() {
            car.created_at = now - Duration::days(i as i64);
        }
        let mut by_field = by_order.clone();

        sort_by_order(&mut by_order, SortOrder::YearDesc);
        sort_by_field(&mut by_field, "year", false);
        assert_eq!(plates(&by_order), plates(&by_field));

        sort_by_order(&mut by_order, SortOrder::CreatedAsc);
        sort_by_field(&mut by_field, "createdAt", true);
        assert_eq!(plates(&by_order), plates(&by_field));
    }

    #[test]
    fn test_created_at_descending_puts_newest_first() {
        let now = Utc::now();
        let mut oldest = car_with_year("OLD", "Seat", Some(2001));
        oldest.created_at = now - Duration::days(10);
        let mut newest = car_with_year("NEW", "Seat", Some(2002));
        newest.created_at = now;

        let mut cars = vec![oldest, newest];
        sort_cars(&mut cars, SortKey::CreatedAt, SortDirection::Descending);
        assert_eq!(plates(&cars), vec!["NEW", "OLD"]);
    }
}
