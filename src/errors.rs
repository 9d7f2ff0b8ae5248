use thiserror::Error;

/// Error types for the Rusty Garage registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Input validation errors (invalid formats, missing parameters)
    #[error("Invalid input: {message}")]
    Validation {
        message: String,
        examples: Vec<String>,
        field: Option<String>,
    },

    /// Point lookup found no car for the given plate
    #[error("Car not found: {plate_number}")]
    CarNotFound { plate_number: String },

    /// A car with this plate is already registered
    #[error("A car with plate {plate_number} already exists")]
    DuplicatePlate { plate_number: String },

    /// System errors (file system issues, permission problems)
    #[error("System error: {message}")]
    System {
        message: String,
        suggestion: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid config files, missing settings)
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        config_path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RegistryError {
    pub fn validation_error(
        message: impl Into<String>,
        examples: Vec<String>,
        field: Option<String>,
    ) -> Self {
        RegistryError::Validation {
            message: message.into(),
            examples,
            field,
        }
    }

    pub fn system_error(message: impl Into<String>, suggestion: Option<String>) -> Self {
        RegistryError::System {
            message: message.into(),
            suggestion,
            source: None,
        }
    }

    pub fn system_error_with_source(
        message: impl Into<String>,
        suggestion: Option<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        RegistryError::System {
            message: message.into(),
            suggestion,
            source: Some(source),
        }
    }

    pub fn configuration_error(
        message: impl Into<String>,
        config_path: Option<String>,
    ) -> Self {
        RegistryError::Configuration {
            message: message.into(),
            config_path,
            source: None,
        }
    }

    /// Get a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            RegistryError::Validation { message, examples, field } => {
                let mut msg = format!("Invalid input: {}", message);
                if let Some(field_name) = field {
                    msg.push_str(&format!(" (field: {})", field_name));
                }
                if !examples.is_empty() {
                    msg.push_str(&format!("\nValid examples: {}", examples.join(", ")));
                }
                msg
            }
            RegistryError::CarNotFound { plate_number } => {
                format!("No car with plate '{}' was found in your registry.", plate_number)
            }
            RegistryError::DuplicatePlate { plate_number } => {
                format!(
                    "The plate '{}' is already taken. Each car needs a unique plate number.",
                    plate_number
                )
            }
            RegistryError::System { message, suggestion, .. } => {
                let mut msg = format!("System error: {}", message);
                if let Some(suggestion_text) = suggestion {
                    msg.push_str(&format!("\nSuggestion: {}", suggestion_text));
                }
                msg
            }
            RegistryError::Configuration { message, config_path, .. } => {
                let mut msg = format!("Configuration error: {}", message);
                if let Some(path) = config_path {
                    msg.push_str(&format!(" (config: {})", path));
                }
                msg
            }
        }
    }

    /// Whether this error is a not-found signal rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::CarNotFound { .. })
    }
}
