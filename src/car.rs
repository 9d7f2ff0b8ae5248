use crate::classifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A registered car belonging to exactly one user.
///
/// The plate number is the natural key of the registry: equality and hashing
/// are defined by it alone, and no two cars may share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub plate_number: String,
    pub color: String,
    pub photo_url: Option<String>,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Create a car with fresh timestamps.
    pub fn new(
        id: u64,
        brand: impl Into<String>,
        model: impl Into<String>,
        year: Option<i32>,
        plate_number: impl Into<String>,
        color: impl Into<String>,
        photo_url: Option<String>,
        user_id: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            brand: brand.into(),
            model: model.into(),
            year,
            plate_number: plate_number.into(),
            color: color.into(),
            photo_url,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_description(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", self.brand, self.model, year),
            None => format!("{} {}", self.brand, self.model),
        }
    }

    /// A blank photo URL counts as no photo.
    pub fn has_photo(&self) -> bool {
        self.photo_url
            .as_deref()
            .map_or(false, |url| !url.trim().is_empty())
    }

    pub fn is_vintage(&self) -> bool {
        classifier::is_vintage(self.year)
    }

    pub fn is_new(&self) -> bool {
        classifier::is_new(self.year)
    }

    pub fn age_years(&self) -> i32 {
        classifier::classify(self.year).age_years
    }

    /// Bump the update timestamp after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.plate_number == other.plate_number
    }
}

impl Eq for Car {}

impl Hash for Car {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate_number.hash(state);
    }
}
