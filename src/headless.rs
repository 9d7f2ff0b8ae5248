//! Headless mode: execute one subcommand directly and print the result.

use crate::car::Car;
use crate::cli::{CliArgs, Commands};
use crate::config::UserPreferences;
use crate::errors::RegistryError;
use crate::export::{self, ExportManager};
use crate::formatters::create_formatter;
use crate::search::CarSearchEngine;
use crate::store::CarStore;
use log::debug;
use std::path::PathBuf;

/// Execute the parsed command against the registry.
pub fn execute(store: &mut CarStore, args: &CliArgs) -> Result<(), RegistryError> {
    let command = args.command.as_ref().ok_or_else(|| {
        RegistryError::validation_error(
            "No command specified for headless mode",
            vec!["rusty_garage list".to_string()],
            None,
        )
    })?;

    run_command(store, command, args)
}

fn run_command(
    store: &mut CarStore,
    command: &Commands,
    args: &CliArgs,
) -> Result<(), RegistryError> {
    let formatter = create_formatter(args.is_json_output());
    let user_id = args.user;
    debug!("Executing {:?} for user {}", command, user_id);

    match command {
        Commands::List { sort_by, asc } => {
            let engine = CarSearchEngine::new(&*store);
            let cars = engine.sorted_cars(user_id, sort_by, *asc);
            print!("{}", formatter.format_cars(&cars));
        }

        Commands::Search { flags } => {
            let engine = CarSearchEngine::new(&*store);
            let request = flags.to_request();
            if flags.is_paginated() {
                let page = engine.search_cars_paginated(
                    user_id,
                    Some(&request),
                    flags.page.unwrap_or(0),
                    flags.size.unwrap_or(0),
                    Some(&flags.sort_by),
                    Some(&flags.sort_direction),
                );
                print!("{}", formatter.format_page(&page));
            } else {
                let cars = engine.search_cars(user_id, Some(&request));
                print!("{}", formatter.format_cars(&cars));
            }
        }

        Commands::Stats => {
            let engine = CarSearchEngine::new(&*store);
            print!("{}", formatter.format_statistics(&engine.statistics(user_id)));
        }

        Commands::Brands => {
            let engine = CarSearchEngine::new(&*store);
            print!("{}", formatter.format_brands(&engine.most_common_brands(user_id)));
        }

        Commands::Vintage => {
            let engine = CarSearchEngine::new(&*store);
            print!("{}", formatter.format_cars(&engine.vintage_cars(user_id)));
        }

        Commands::New => {
            let engine = CarSearchEngine::new(&*store);
            print!("{}", formatter.format_cars(&engine.new_cars(user_id)));
        }

        Commands::CheckPlate { plate } => {
            let engine = CarSearchEngine::new(&*store);
            let message = if engine.is_plate_available(plate) {
                format!("Plate '{}' is available", plate.trim())
            } else {
                format!("Plate '{}' is already taken", plate.trim())
            };
            print!("{}", formatter.format_success_message(&message));
        }

        Commands::Add {
            brand,
            model,
            year,
            plate,
            color,
            photo_url,
        } => {
            let car = Car::new(
                store.next_id(),
                brand.clone(),
                model.clone(),
                Some(*year),
                crate::validation::normalize_plate(plate),
                color.clone(),
                photo_url.clone(),
                user_id,
            );
            let description = car.full_description();
            store.add_car(car)?;
            store.save()?;
            print!(
                "{}",
                formatter.format_success_message(&format!("Registered {}", description))
            );
        }

        Commands::Remove { plate } => {
            if store.remove_car(plate, user_id) {
                store.save()?;
                print!(
                    "{}",
                    formatter.format_success_message(&format!("Removed car {}", plate.trim()))
                );
            } else {
                return Err(RegistryError::CarNotFound {
                    plate_number: plate.trim().to_string(),
                });
            }
        }

        Commands::SetPhoto { plate, url } => {
            if store.set_photo(plate, user_id, url.clone()) {
                store.save()?;
                print!(
                    "{}",
                    formatter.format_success_message(&format!("Updated photo for {}", plate.trim()))
                );
            } else {
                return Err(RegistryError::CarNotFound {
                    plate_number: plate.trim().to_string(),
                });
            }
        }

        Commands::Export {
            format,
            output,
            term,
        } => {
            let engine = CarSearchEngine::new(&*store);
            let export_format = export::parse_export_format(format)
                .map_err(|message| RegistryError::validation_error(message, Vec::new(), Some("format".to_string())))?;

            let cars = match term {
                Some(term) => engine.general_search(term, user_id),
                None => engine.sorted_cars(user_id, "createdAt", false),
            };

            let output_path = output
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| ExportManager::default_export_path(&export_format));

            let written = ExportManager::export_cars(&cars, &export_format, &output_path)?;
            print!(
                "{}",
                formatter.format_success_message(&format!(
                    "Exported {} car(s) to {}",
                    written,
                    output_path.display()
                ))
            );
        }

        Commands::ResetConfig { yes } => {
            if !yes {
                return Err(RegistryError::validation_error(
                    "Pass --yes to confirm resetting your preferences",
                    vec!["rusty_garage reset-config --yes".to_string()],
                    None,
                ));
            }
            UserPreferences::reset()?;
            print!("{}", formatter.format_success_message("Preferences reset to defaults"));
        }
    }

    Ok(())
}
