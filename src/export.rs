#![allow(dead_code)] // Module contains future functionality not yet integrated

use crate::car::Car;
use crate::errors::RegistryError;
use crate::stats::CarStatistics;
use chrono::{DateTime, Utc};
use csv::Writer;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Export manager for writing search results in various formats
pub struct ExportManager;

/// Supported export formats
#[derive(Debug, Clone, PartialEq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Flattened car record for export, including the derived facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarExportRecord {
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub plate_number: String,
    pub color: String,
    pub has_photo: bool,
    pub is_vintage: bool,
    pub is_new: bool,
    pub age_years: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CarExportRecord {
    fn from_car(car: &Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand.clone(),
            model: car.model.clone(),
            year: car.year,
            plate_number: car.plate_number.clone(),
            color: car.color.clone(),
            has_photo: car.has_photo(),
            is_vintage: car.is_vintage(),
            is_new: car.is_new(),
            age_years: car.age_years(),
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// Parse an export format name from the CLI.
pub fn parse_export_format(format: &str) -> Result<ExportFormat, String> {
    match format.to_lowercase().as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        _ => Err(format!("Invalid export format '{}'. Use 'csv' or 'json'", format)),
    }
}

impl ExportManager {
    /// Write cars to a file in the requested format. Returns the number of
    /// records written.
    pub fn export_cars(
        cars: &[Car],
        format: &ExportFormat,
        output_path: &Path,
    ) -> Result<usize, RegistryError> {
        let records: Vec<CarExportRecord> = cars.iter().map(CarExportRecord::from_car).collect();

        match format {
            ExportFormat::Csv => Self::write_csv(&records, output_path)?,
            ExportFormat::Json => Self::write_json(&records, output_path)?,
        }

        debug!(
            "Exported {} cars to {}",
            records.len(),
            output_path.display()
        );
        Ok(records.len())
    }

    /// Write a statistics structure as pretty JSON.
    pub fn export_statistics(
        stats: &CarStatistics,
        output_path: &Path,
    ) -> Result<(), RegistryError> {
        let content = serde_json::to_string_pretty(stats).map_err(|e| {
            RegistryError::system_error_with_source("Failed to serialize statistics", None, Box::new(e))
        })?;

        fs::write(output_path, content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to write statistics export",
                Some(format!("Check permissions for {}", output_path.display())),
                Box::new(e),
            )
        })
    }

    /// Default export file name, stamped with the current time.
    pub fn default_export_path(format: &ExportFormat) -> PathBuf {
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        PathBuf::from(format!(
            "cars_export_{}.{}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            extension
        ))
    }

    fn write_csv(records: &[CarExportRecord], output_path: &Path) -> Result<(), RegistryError> {
        let mut writer = Writer::from_path(output_path).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to create CSV export file",
                Some(format!("Check permissions for {}", output_path.display())),
                Box::new(e),
            )
        })?;

        for record in records {
            writer.serialize(record).map_err(|e| {
                RegistryError::system_error_with_source(
                    "Failed to write CSV record",
                    None,
                    Box::new(e),
                )
            })?;
        }

        writer.flush().map_err(|e| {
            RegistryError::system_error_with_source("Failed to flush CSV export", None, Box::new(e))
        })
    }

    fn write_json(records: &[CarExportRecord], output_path: &Path) -> Result<(), RegistryError> {
        let content = serde_json::to_string_pretty(records).map_err(|e| {
            RegistryError::system_error_with_source("Failed to serialize export", None, Box::new(e))
        })?;

        fs::write(output_path, content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to write JSON export",
                Some(format!("Check permissions for {}", output_path.display())),
                Box::new(e),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;
    use tempfile::TempDir;

    fn test_car(brand: &str, year: Option<i32>, plate: &str) -> Car {
        Car::new(1, brand, "Model", year, plate, "Gray", None, 1)
    }

    #[test]
    fn test_parse_export_format() {
        assert_eq!(parse_export_format("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(parse_export_format("JSON").unwrap(), ExportFormat::Json);
        assert!(parse_export_format("xml").is_err());
    }

    #[test]
    fn test_csv_export_writes_every_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cars.csv");
        let cars = vec![
            test_car("Toyota", Some(2020), "TOY001"),
            test_car("Honda", None, "HON001"),
        ];

        let written = ExportManager::export_cars(&cars, &ExportFormat::Csv, &path).unwrap();
        assert_eq!(written, 2);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("TOY001"));
        assert!(content.contains("HON001"));
        assert!(content.lines().next().unwrap().contains("plate_number"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cars.json");
        let cars = vec![test_car("Toyota", Some(2020), "TOY001")];

        ExportManager::export_cars(&cars, &ExportFormat::Json, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let records: Vec<CarExportRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].plate_number, "TOY001");
        assert_eq!(records[0].year, Some(2020));
    }

    #[test]
    fn test_statistics_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stats.json");
        let cars = vec![test_car("Toyota", Some(2020), "TOY001")];

        ExportManager::export_statistics(&stats::aggregate(&cars), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["total_cars"], 1);
    }

    #[test]
    fn test_default_export_path_extension() {
        assert!(ExportManager::default_export_path(&ExportFormat::Csv)
            .to_string_lossy()
            .ends_with(".csv"));
        assert!(ExportManager::default_export_path(&ExportFormat::Json)
            .to_string_lossy()
            .ends_with(".json"));
    }
}
