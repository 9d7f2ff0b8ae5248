use crate::criteria::CarSearchRequest;
use clap::{Args, Parser, Subcommand};

/// Rusty Garage CLI - your personal car registry
#[derive(Parser, Debug)]
#[command(name = "rusty_garage")]
#[command(about = "A CLI registry for managing and searching your personal car collection")]
#[command(version)]
pub struct CliArgs {
    /// Output in JSON format instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Owner whose collection the command operates on
    #[arg(long, global = true, default_value_t = 1)]
    pub user: u64,

    /// Subcommand to execute (if not provided, runs in interactive mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Filter and sort flags shared by search-style commands
#[derive(Args, Debug, Clone)]
pub struct SearchFlags {
    /// Free-text term matched against brand, model and color
    #[arg(long)]
    pub term: Option<String>,

    /// Exact brand filter
    #[arg(long)]
    pub brand: Option<String>,

    /// Exact model filter
    #[arg(long)]
    pub model: Option<String>,

    /// Exact model year
    #[arg(long)]
    pub year: Option<i32>,

    /// Minimum model year (inclusive)
    #[arg(long)]
    pub min_year: Option<i32>,

    /// Maximum model year (inclusive)
    #[arg(long)]
    pub max_year: Option<i32>,

    /// Exact color filter
    #[arg(long)]
    pub color: Option<String>,

    /// Exact plate number
    #[arg(long)]
    pub plate: Option<String>,

    /// Only cars that are (or are not) vintage
    #[arg(long)]
    pub vintage: Option<bool>,

    /// Only cars that are (or are not) new
    #[arg(long)]
    pub new: Option<bool>,

    /// Only cars with (or without) a photo
    #[arg(long)]
    pub has_photo: Option<bool>,

    /// Sort field: brand, model, year, color, createdAt, updatedAt
    #[arg(long, default_value = "createdAt")]
    pub sort_by: String,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub sort_direction: String,

    /// Page number (0-based); enables paginated output
    #[arg(long)]
    pub page: Option<i64>,

    /// Page size (1-100)
    #[arg(long)]
    pub size: Option<i64>,
}

impl Default for SearchFlags {
    fn default() -> Self {
        Self {
            term: None,
            brand: None,
            model: None,
            year: None,
            min_year: None,
            max_year: None,
            color: None,
            plate: None,
            vintage: None,
            new: None,
            has_photo: None,
            sort_by: "createdAt".to_string(),
            sort_direction: "desc".to_string(),
            page: None,
            size: None,
        }
    }
}

impl SearchFlags {
    /// Map the flag set onto the boundary search DTO.
    pub fn to_request(&self) -> CarSearchRequest {
        CarSearchRequest {
            search_term: self.term.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            min_year: self.min_year,
            max_year: self.max_year,
            color: self.color.clone(),
            plate_number: self.plate.clone(),
            sort_by: self.sort_by.clone(),
            sort_direction: self.sort_direction.clone(),
            is_vintage: self.vintage,
            is_new: self.new,
            has_photo: self.has_photo,
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.page.is_some() || self.size.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all cars in your registry
    List {
        /// Sort field: brand, model, year, color, createdAt, updatedAt
        #[arg(long, default_value = "createdAt")]
        sort_by: String,
        /// Sort ascending instead of the default descending
        #[arg(long)]
        asc: bool,
    },

    /// Search cars by free text and structured filters
    Search {
        #[command(flatten)]
        flags: SearchFlags,
    },

    /// Show statistics for your collection
    Stats,

    /// List brands ranked by how often they appear
    Brands,

    /// List vintage cars (25 years or older)
    Vintage,

    /// List new cars (3 years or newer)
    New,

    /// Check whether a plate number is still available
    CheckPlate {
        /// Plate number to check
        plate: String,
    },

    /// Add a car to the registry
    Add {
        brand: String,
        model: String,
        /// Model year
        year: i32,
        /// Plate number (e.g. ABC123)
        plate: String,
        color: String,
        /// URL of a photo of the car
        #[arg(long)]
        photo_url: Option<String>,
    },

    /// Remove a car from the registry by plate
    Remove {
        /// Plate number of the car to remove
        plate: String,
    },

    /// Set or clear the photo of a registered car
    SetPhoto {
        /// Plate number of the car to update
        plate: String,
        /// Photo URL; omit to clear the photo
        #[arg(long)]
        url: Option<String>,
    },

    /// Export cars to CSV or JSON
    Export {
        /// Export format: 'csv' or 'json'
        #[arg(long, default_value = "csv")]
        format: String,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
        /// Restrict the export to cars matching this term
        #[arg(long)]
        term: Option<String>,
    },

    /// Reset configuration to default values
    ResetConfig {
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Determines the CLI mode based on command-line arguments
#[derive(Debug, PartialEq)]
pub enum CliMode {
    /// Interactive mode with menu-driven interface
    Interactive,
    /// Headless mode with direct command execution
    Headless,
}

impl CliArgs {
    /// Parse command-line arguments and return the CLI arguments structure
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Determine whether to run in interactive or headless mode
    pub fn get_mode(&self) -> CliMode {
        match &self.command {
            Some(_) => CliMode::Headless,
            None => CliMode::Interactive,
        }
    }

    pub fn is_json_output(&self) -> bool {
        self.json
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_mode_detection() {
        let args = CliArgs {
            json: false,
            verbose: false,
            user: 1,
            command: None,
        };
        assert_eq!(args.get_mode(), CliMode::Interactive);

        let args = CliArgs {
            json: false,
            verbose: false,
            user: 1,
            command: Some(Commands::Stats),
        };
        assert_eq!(args.get_mode(), CliMode::Headless);
    }

    #[test]
    fn test_search_flags_map_onto_the_request() {
        let flags = SearchFlags {
            term: Some("toyota".to_string()),
            min_year: Some(2000),
            vintage: Some(true),
            sort_by: "year".to_string(),
            sort_direction: "asc".to_string(),
            ..SearchFlags::default()
        };

        let request = flags.to_request();
        assert_eq!(request.search_term.as_deref(), Some("toyota"));
        assert_eq!(request.min_year, Some(2000));
        assert_eq!(request.is_vintage, Some(true));
        assert_eq!(request.sort_by, "year");
        assert!(!request.is_sorting_descending());
        assert!(request.has_any_filter());
    }

    #[test]
    fn test_default_flags_build_an_unfiltered_request() {
        let request = SearchFlags::default().to_request();
        assert!(!request.has_any_filter());
    }

    #[test]
    fn test_pagination_flag_detection() {
        let mut flags = SearchFlags::default();
        assert!(!flags.is_paginated());

        flags.page = Some(0);
        assert!(flags.is_paginated());
    }
}
