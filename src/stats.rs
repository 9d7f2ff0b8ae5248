//! Aggregate statistics over a collection of cars.
//!
//! Everything here is computed fresh per call and works on any slice, so
//! callers can compose filter-then-aggregate.

use crate::car::Car;
use crate::classifier;
use serde::Serialize;
use std::collections::HashMap;

/// Year aggregates. Cars with an unknown year count toward the total but are
/// excluded from min/max/average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearStatistics {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub average_year: Option<f64>,
    pub total_cars: usize,
}

impl YearStatistics {
    /// Span between the newest and oldest known year, 0 when either bound is
    /// absent.
    pub fn year_range(&self) -> i32 {
        match (self.min_year, self.max_year) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}

/// How often one brand occurs. The display value keeps the first spelling
/// encountered; grouping is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandCount {
    pub brand: String,
    pub count: usize,
}

/// Full aggregate over a (possibly already filtered) collection.
#[derive(Debug, Clone, Serialize)]
pub struct CarStatistics {
    pub total_cars: usize,
    pub vintage_count: usize,
    pub new_count: usize,
    pub with_photo_count: usize,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub average_year: Option<f64>,
    pub most_common_brand: Option<String>,
    pub brand_distribution: Vec<BrandCount>,
}

impl CarStatistics {
    pub fn year_range(&self) -> i32 {
        match (self.min_year, self.max_year) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}

pub fn year_statistics(cars: &[Car]) -> YearStatistics {
    let years: Vec<i32> = cars.iter().filter_map(|car| car.year).collect();

    if years.is_empty() {
        return YearStatistics {
            min_year: None,
            max_year: None,
            average_year: None,
            total_cars: cars.len(),
        };
    }

    let sum: i64 = years.iter().map(|&year| year as i64).sum();
    YearStatistics {
        min_year: years.iter().min().copied(),
        max_year: years.iter().max().copied(),
        average_year: Some(sum as f64 / years.len() as f64),
        total_cars: cars.len(),
    }
}

/// Brand occurrence counts grouped case-insensitively, ordered by descending
/// count. Ties keep first-seen order, so the ranking is deterministic for a
/// given collection.
pub fn brand_frequency(cars: &[Car]) -> Vec<BrandCount> {
    let mut ranking: Vec<BrandCount> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for car in cars {
        let brand = car.brand.trim();
        if brand.is_empty() {
            continue;
        }
        let key = brand.to_lowercase();
        match index_by_key.get(&key) {
            Some(&position) => ranking[position].count += 1,
            None => {
                index_by_key.insert(key, ranking.len());
                ranking.push(BrandCount {
                    brand: brand.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order between equal counts.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// Brand names ranked by frequency, normalized to lowercase.
pub fn most_common_brands(cars: &[Car]) -> Vec<String> {
    brand_frequency(cars)
        .into_iter()
        .map(|entry| entry.brand.to_lowercase())
        .collect()
}

/// Compute the full statistics structure in one pass over the collection.
pub fn aggregate(cars: &[Car]) -> CarStatistics {
    let year_stats = year_statistics(cars);
    let brand_distribution = brand_frequency(cars);

    let mut vintage_count = 0;
    let mut new_count = 0;
    let mut with_photo_count = 0;
    for car in cars {
        let classification = classifier::classify(car.year);
        if classification.is_vintage {
            vintage_count += 1;
        }
        if classification.is_new {
            new_count += 1;
        }
        if car.has_photo() {
            with_photo_count += 1;
        }
    }

    CarStatistics {
        total_cars: cars.len(),
        vintage_count,
        new_count,
        with_photo_count,
        min_year: year_stats.min_year,
        max_year: year_stats.max_year,
        average_year: year_stats.average_year,
        most_common_brand: brand_distribution.first().map(|entry| entry.brand.clone()),
        brand_distribution,
    }
}
