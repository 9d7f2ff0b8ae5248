use chrono::{Datelike, Local};

/// Age in full years at which a car counts as vintage.
pub const VINTAGE_AGE_YEARS: i32 = 25;

/// Maximum age in full years at which a car still counts as new.
pub const NEW_AGE_YEARS: i32 = 3;

/// Sentinel age for cars with an unknown model year.
pub const UNKNOWN_AGE: i32 = -1;

/// Derived facts about a car's model year. Never stored; recomputed against
/// the wall clock on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_vintage: bool,
    pub is_new: bool,
    pub age_years: i32,
}

/// The calendar year the classification is anchored to.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Classify a model year against the current local calendar year.
pub fn classify(year: Option<i32>) -> Classification {
    classify_at(year, current_year())
}

/// Classify a model year against an explicit reference year.
///
/// A car with an unknown year is never vintage and never new; its age is the
/// `UNKNOWN_AGE` sentinel.
pub fn classify_at(year: Option<i32>, current_year: i32) -> Classification {
    match year {
        None => Classification {
            is_vintage: false,
            is_new: false,
            age_years: UNKNOWN_AGE,
        },
        Some(model_year) => {
            let age_years = current_year - model_year;
            Classification {
                is_vintage: age_years >= VINTAGE_AGE_YEARS,
                is_new: age_years <= NEW_AGE_YEARS,
                age_years,
            }
        }
    }
}

pub fn is_vintage(year: Option<i32>) -> bool {
    classify(year).is_vintage
}

pub fn is_new(year: Option<i32>) -> bool {
    classify(year).is_new
}
