use crate::errors::RegistryError;
use crate::page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-tunable display and search defaults, stored as TOML in the home
/// directory.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserPreferences {
    pub date_format: String,
    pub time_format: String,
    pub timezone: String,
    pub default_page_size: usize,
    pub default_sort_by: String,
    pub default_sort_direction: String,
    pub use_colors: bool,
    pub compact_mode: bool,
    pub max_results: usize,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M:%S".to_string(),
            timezone: "UTC".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            default_sort_by: "createdAt".to_string(),
            default_sort_direction: "desc".to_string(),
            use_colors: true,
            compact_mode: false,
            max_results: 500,
        }
    }
}

impl UserPreferences {
    /// Get the path to the user preferences file
    fn get_preferences_path() -> Result<PathBuf, RegistryError> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            RegistryError::system_error(
                "Unable to determine home directory",
                Some("Please ensure your home directory is properly set".to_string()),
            )
        })?;

        Ok(home_dir.join(".rusty_garage_preferences.toml"))
    }

    /// Load user preferences from file, or return defaults if file doesn't exist
    pub fn load() -> Result<Self, RegistryError> {
        let prefs_path = Self::get_preferences_path()?;

        if !prefs_path.exists() {
            debug!("Preferences file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&prefs_path).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to read preferences file",
                Some(format!("Check permissions for {}", prefs_path.display())),
                Box::new(e),
            )
        })?;

        let preferences: UserPreferences = toml::from_str(&content).map_err(|_e| {
            RegistryError::configuration_error(
                "Invalid preferences file format, try resetting with reset-config",
                Some(prefs_path.display().to_string()),
            )
        })?;

        debug!("Loaded user preferences from {}", prefs_path.display());
        Ok(preferences)
    }

    /// Save user preferences to file
    pub fn save(&self) -> Result<(), RegistryError> {
        let prefs_path = Self::get_preferences_path()?;

        if let Some(parent) = prefs_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RegistryError::system_error_with_source(
                    "Failed to create preferences directory",
                    Some("Check directory permissions".to_string()),
                    Box::new(e),
                )
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            RegistryError::system_error_with_source("Failed to serialize preferences", None, Box::new(e))
        })?;

        fs::write(&prefs_path, content).map_err(|e| {
            RegistryError::system_error_with_source(
                "Failed to write preferences file",
                Some(format!("Check permissions for {}", prefs_path.display())),
                Box::new(e),
            )
        })?;

        debug!("Saved user preferences to {}", prefs_path.display());
        Ok(())
    }

    /// Validate preferences and return feedback
    pub fn validate(&self) -> Result<Vec<String>, RegistryError> {
        let mut feedback = Vec::new();

        // Validate date format
        match chrono::format::strftime::StrftimeItems::new(&self.date_format).next() {
            Some(_) => feedback.push("Date format is valid".to_string()),
            None => {
                return Err(RegistryError::validation_error(
                    "Invalid date format".to_string(),
                    vec!["%Y-%m-%d".to_string(), "%m/%d/%Y".to_string()],
                    Some("date_format".to_string()),
                ));
            }
        }

        // Validate time format
        match chrono::format::strftime::StrftimeItems::new(&self.time_format).next() {
            Some(_) => feedback.push("Time format is valid".to_string()),
            None => {
                return Err(RegistryError::validation_error(
                    "Invalid time format".to_string(),
                    vec!["%H:%M:%S".to_string(), "%H:%M".to_string()],
                    Some("time_format".to_string()),
                ));
            }
        }

        // Validate timezone
        if self.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(RegistryError::validation_error(
                "Invalid timezone".to_string(),
                vec![
                    "UTC".to_string(),
                    "America/Bogota".to_string(),
                    "Europe/London".to_string(),
                ],
                Some("timezone".to_string()),
            ));
        } else {
            feedback.push("Timezone is valid".to_string());
        }

        // Validate page size
        if self.default_page_size == 0 || self.default_page_size > MAX_PAGE_SIZE {
            return Err(RegistryError::validation_error(
                format!("Default page size must be between 1 and {}", MAX_PAGE_SIZE),
                vec!["20".to_string(), "50".to_string()],
                Some("default_page_size".to_string()),
            ));
        } else {
            feedback.push(format!("Default page size set to {}", self.default_page_size));
        }

        // Validate sort direction
        match self.default_sort_direction.to_lowercase().as_str() {
            "asc" | "desc" => {
                feedback.push(format!("Default sort direction is {}", self.default_sort_direction))
            }
            _ => {
                return Err(RegistryError::validation_error(
                    "Default sort direction must be 'asc' or 'desc'".to_string(),
                    vec!["asc".to_string(), "desc".to_string()],
                    Some("default_sort_direction".to_string()),
                ));
            }
        }

        // Validate max results
        if self.max_results == 0 {
            return Err(RegistryError::validation_error(
                "Max results must be greater than 0".to_string(),
                vec!["100".to_string(), "500".to_string()],
                Some("max_results".to_string()),
            ));
        } else {
            feedback.push(format!("Max results set to {}", self.max_results));
        }

        Ok(feedback)
    }

    /// Reset preferences to default values
    pub fn reset() -> Result<(), RegistryError> {
        let prefs_path = Self::get_preferences_path()?;

        if prefs_path.exists() {
            fs::remove_file(&prefs_path).map_err(|e| {
                RegistryError::system_error_with_source(
                    "Failed to remove preferences file",
                    Some(format!("Check permissions for {}", prefs_path.display())),
                    Box::new(e),
                )
            })?;
            debug!("Removed preferences file: {}", prefs_path.display());
        }

        let default_prefs = Self::default();
        default_prefs.save()?;

        Ok(())
    }
}
