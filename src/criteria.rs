#![allow(dead_code)] // Module contains future functionality not yet integrated

use serde::{Deserialize, Serialize};

/// Default field used when no sort is requested.
pub const DEFAULT_SORT_BY: &str = "createdAt";

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.trim().is_empty())
}

/// Direction of a sort operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Anything other than "desc" (case-insensitive) means ascending.
    pub fn parse(direction: &str) -> SortDirection {
        if direction.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Descending
    }
}

/// Closed set of sort options used by the advanced search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    YearAsc,
    YearDesc,
    BrandAsc,
    BrandDesc,
    ModelAsc,
    ModelDesc,
    CreatedAsc,
    CreatedDesc,
}

/// Multi-field criteria for the advanced search path. Every field is
/// optional; a blank string means the dimension is unconstrained.
///
/// Brand and model are substring matches on this path, color and plate are
/// exact (case-insensitive) matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub color: Option<String>,
    pub plate_number: Option<String>,
    pub general_search_term: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_year_range(mut self, min_year: Option<i32>, max_year: Option<i32>) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_plate_number(mut self, plate_number: impl Into<String>) -> Self {
        self.plate_number = Some(plate_number.into());
        self
    }

    pub fn with_general_search(mut self, term: impl Into<String>) -> Self {
        self.general_search_term = Some(term.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// True when any filter dimension is constrained. The sort order is not
    /// a filter.
    pub fn has_filters(&self) -> bool {
        is_present(&self.brand)
            || is_present(&self.model)
            || self.year.is_some()
            || self.min_year.is_some()
            || self.max_year.is_some()
            || is_present(&self.color)
            || is_present(&self.plate_number)
            || is_present(&self.general_search_term)
    }
}

/// Boundary DTO for the unified search endpoint: free text, structured
/// filters, derived facets and sort directives in one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarSearchRequest {
    pub search_term: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub color: Option<String>,
    pub plate_number: Option<String>,
    pub sort_by: String,
    pub sort_direction: String,
    pub is_vintage: Option<bool>,
    pub is_new: Option<bool>,
    pub has_photo: Option<bool>,
}

impl Default for CarSearchRequest {
    fn default() -> Self {
        Self {
            search_term: None,
            brand: None,
            model: None,
            year: None,
            min_year: None,
            max_year: None,
            color: None,
            plate_number: None,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_direction: "desc".to_string(),
            is_vintage: None,
            is_new: None,
            has_photo: None,
        }
    }
}

impl CarSearchRequest {
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn has_search_term(&self) -> bool {
        is_present(&self.search_term)
    }

    pub fn has_brand_filter(&self) -> bool {
        is_present(&self.brand)
    }

    pub fn has_model_filter(&self) -> bool {
        is_present(&self.model)
    }

    pub fn has_year_filter(&self) -> bool {
        self.year.is_some()
    }

    pub fn has_year_range_filter(&self) -> bool {
        self.min_year.is_some() || self.max_year.is_some()
    }

    pub fn has_color_filter(&self) -> bool {
        is_present(&self.color)
    }

    pub fn has_plate_filter(&self) -> bool {
        is_present(&self.plate_number)
    }

    pub fn has_any_filter(&self) -> bool {
        self.has_search_term()
            || self.has_brand_filter()
            || self.has_model_filter()
            || self.has_year_filter()
            || self.has_year_range_filter()
            || self.has_color_filter()
            || self.has_plate_filter()
            || self.is_vintage.is_some()
            || self.is_new.is_some()
            || self.has_photo.is_some()
    }

    pub fn is_sorting_descending(&self) -> bool {
        SortDirection::parse(&self.sort_direction).is_descending()
    }
}

/// Slim criteria used to pick a paginated query strategy. A storage adapter
/// could push these down as an equivalent query; over a snapshot they select
/// between the term, structured-filter and unfiltered paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarSearchCriteria {
    pub search_term: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl CarSearchCriteria {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total conversion from the boundary DTO; an absent request converts to
    /// empty criteria.
    pub fn from_request(request: Option<&CarSearchRequest>) -> Self {
        match request {
            None => Self::empty(),
            Some(request) => Self {
                search_term: request.search_term.clone(),
                brand: request.brand.clone(),
                model: request.model.clone(),
                year: request.year,
                color: request.color.clone(),
                min_year: request.min_year,
                max_year: request.max_year,
            },
        }
    }

    pub fn has_search_term(&self) -> bool {
        is_present(&self.search_term)
    }

    pub fn has_filters(&self) -> bool {
        is_present(&self.brand)
            || is_present(&self.model)
            || self.year.is_some()
            || is_present(&self.color)
            || self.min_year.is_some()
            || self.max_year.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_search_term() && !self.has_filters()
    }
}
