#![allow(dead_code)] // Module contains future functionality not yet integrated

use crate::car::Car;
use crate::page::Page;
use crate::stats::{CarStatistics, YearStatistics};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Trait for formatting output data in different formats
pub trait OutputFormatter {
    fn format_cars(&self, cars: &[Car]) -> String;
    fn format_page(&self, page: &Page<Car>) -> String;
    fn format_statistics(&self, stats: &CarStatistics) -> String;
    fn format_year_statistics(&self, stats: &YearStatistics) -> String;
    fn format_brands(&self, brands: &[String]) -> String;
    fn format_success_message(&self, message: &str) -> String;
    fn format_error(&self, error: &str) -> String;
}

/// Human-readable formatter for interactive display
pub struct HumanFormatter {
    timezone: Tz,
}

impl HumanFormatter {
    pub fn new() -> Self {
        // Default to local timezone, fallback to UTC if detection fails
        let timezone = match iana_time_zone::get_timezone() {
            Ok(tz_name) => tz_name.parse().unwrap_or(Tz::UTC),
            Err(_) => Tz::UTC,
        };

        Self { timezone }
    }

    /// Use a configured timezone name instead of the detected one.
    pub fn with_timezone(timezone: &str) -> Self {
        Self {
            timezone: timezone.parse().unwrap_or(Tz::UTC),
        }
    }

    fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.timezone)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }

    fn format_badges(car: &Car) -> String {
        let mut badges = Vec::new();
        if car.is_vintage() {
            badges.push("🏛 Vintage");
        }
        if car.is_new() {
            badges.push("✨ New");
        }
        if car.has_photo() {
            badges.push("📷 Photo");
        }
        if badges.is_empty() {
            String::new()
        } else {
            format!("  [{}]", badges.join(", "))
        }
    }

    fn format_car_line(&self, car: &Car) -> String {
        format!(
            "  {}  {} — {}{}\n    registered {}\n",
            car.plate_number,
            car.full_description(),
            car.color,
            Self::format_badges(car),
            self.format_timestamp(car.created_at),
        )
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_cars(&self, cars: &[Car]) -> String {
        let mut output = String::new();
        output.push_str("🚗 Your Cars:\n");

        if cars.is_empty() {
            output.push_str("  No cars found in your registry.\n");
            return output;
        }

        for car in cars {
            output.push_str(&self.format_car_line(car));
        }
        output.push_str(&format!("  {} car(s) total\n", cars.len()));
        output
    }

    fn format_page(&self, page: &Page<Car>) -> String {
        let mut output = self.format_cars(&page.content);
        output.push_str(&format!(
            "  Page {} of {} ({} match(es))",
            page.page + 1,
            page.total_pages.max(1),
            page.total_elements,
        ));
        if let Some(sorted_by) = &page.sorted_by {
            output.push_str(&format!(
                ", sorted by {} {}",
                sorted_by,
                page.sort_direction.as_deref().unwrap_or("ASC"),
            ));
        }
        output.push('\n');
        output
    }

    fn format_statistics(&self, stats: &CarStatistics) -> String {
        let mut output = String::new();
        output.push_str("📊 Collection Statistics:\n");
        output.push_str(&format!("  Total cars:     {}\n", stats.total_cars));
        output.push_str(&format!("  Vintage (25y+): {}\n", stats.vintage_count));
        output.push_str(&format!("  New (≤3y):      {}\n", stats.new_count));
        output.push_str(&format!("  With photo:     {}\n", stats.with_photo_count));

        match (stats.min_year, stats.max_year) {
            (Some(min), Some(max)) => {
                output.push_str(&format!(
                    "  Years:          {} – {} (range {})\n",
                    min,
                    max,
                    stats.year_range()
                ));
            }
            _ => output.push_str("  Years:          unknown\n"),
        }
        if let Some(average) = stats.average_year {
            output.push_str(&format!("  Average year:   {:.1}\n", average));
        }
        if let Some(brand) = &stats.most_common_brand {
            output.push_str(&format!("  Top brand:      {}\n", brand));
        }
        for entry in &stats.brand_distribution {
            output.push_str(&format!("    {} × {}\n", entry.count, entry.brand));
        }
        output
    }

    fn format_year_statistics(&self, stats: &YearStatistics) -> String {
        match (stats.min_year, stats.max_year, stats.average_year) {
            (Some(min), Some(max), Some(average)) => format!(
                "Years {} – {} (range {}), average {:.1}, {} car(s)\n",
                min,
                max,
                stats.year_range(),
                average,
                stats.total_cars,
            ),
            _ => format!("No known years across {} car(s)\n", stats.total_cars),
        }
    }

    fn format_brands(&self, brands: &[String]) -> String {
        if brands.is_empty() {
            return "No brands registered yet.\n".to_string();
        }
        let mut output = String::from("🏷 Brands by frequency:\n");
        for (position, brand) in brands.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", position + 1, brand));
        }
        output
    }

    fn format_success_message(&self, message: &str) -> String {
        format!("✅ {}\n", message)
    }

    fn format_error(&self, error: &str) -> String {
        format!("❌ {}\n", error)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_cars(&self, cars: &[Car]) -> String {
        serde_json::to_string_pretty(cars).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_page(&self, page: &Page<Car>) -> String {
        serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_statistics(&self, stats: &CarStatistics) -> String {
        serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_year_statistics(&self, stats: &YearStatistics) -> String {
        serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_brands(&self, brands: &[String]) -> String {
        serde_json::to_string_pretty(brands).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_success_message(&self, message: &str) -> String {
        serde_json::json!({ "status": "success", "message": message }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({ "status": "error", "message": error }).to_string()
    }
}

/// Pick a formatter based on the requested output mode.
pub fn create_formatter(json_output: bool) -> Box<dyn OutputFormatter> {
    if json_output {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new())
    }
}
