mod car;
mod classifier;
mod cli;
mod config;
mod criteria;
mod errors;
mod export;
mod filter;
mod formatters;
mod headless;
mod page;
mod search;
mod sort;
mod stats;
mod store;
mod validation;

use crate::cli::{CliArgs, CliMode};
use crate::config::UserPreferences;
use crate::formatters::{HumanFormatter, OutputFormatter};
use crate::search::CarSearchEngine;
use crate::store::CarStore;
use console::style;
use env_logger::{Builder, Target};
use log::{debug, error, warn};

fn main() -> std::io::Result<()> {
    let args = CliArgs::parse_args();

    let mut builder = Builder::from_default_env();
    builder.target(Target::Stdout);
    if args.is_verbose() {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let preferences = UserPreferences::load().unwrap_or_else(|e| {
        warn!("Falling back to default preferences: {}", e);
        UserPreferences::default()
    });

    let mut store = CarStore::open_default().unwrap_or_else(|e| {
        error!("Failed to open registry: {}", e.user_message());
        CarStore::new()
    });
    debug!("Registry contains {} car(s)", store.len());

    match args.get_mode() {
        CliMode::Headless => {
            if let Err(e) = headless::execute(&mut store, &args) {
                error!("Command failed: {}", e);
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
        }
        CliMode::Interactive => {
            if atty::is(atty::Stream::Stdout) {
                run_interactive(&store, &args, &preferences)?;
            } else {
                // No terminal attached; nothing sensible to prompt for.
                eprintln!("No command given and no terminal attached. Try 'rusty_garage --help'.");
            }
        }
    }

    Ok(())
}

fn run_interactive(
    store: &CarStore,
    args: &CliArgs,
    preferences: &UserPreferences,
) -> std::io::Result<()> {
    ctrlc::set_handler(move || {}).expect("setting Ctrl-C handler");
    cliclack::clear_screen()?;

    cliclack::intro(style(" Rusty Garage - Your Car Registry ").on_cyan().black())?;

    if store.is_empty() {
        cliclack::log::info("Your registry is empty. Add a car with 'rusty_garage add'.")?;
    }

    let op = cliclack::select(format!("What would you like to do?"))
        .initial_value("ls")
        .item("ls", "List cars", "")
        .item("se", "Search", "")
        .item("st", "Statistics", "")
        .item("br", "Brands", "")
        .interact()?;

    let engine = CarSearchEngine::new(store);
    let formatter = HumanFormatter::with_timezone(&preferences.timezone);
    let user_id = args.user;

    match op {
        "ls" => {
            debug!("Performing list operation");
            let cars = engine.sorted_cars(
                user_id,
                &preferences.default_sort_by,
                preferences.default_sort_direction.eq_ignore_ascii_case("asc"),
            );
            println!("{}", formatter.format_cars(&cars));
        }
        "se" => {
            debug!("Performing search operation");
            let term: String = cliclack::input("Search term (brand, model or color)")
                .placeholder("toyota")
                .interact()?;
            let results = engine.general_search(&term, user_id);
            println!("{}", formatter.format_cars(&results));
        }
        "st" => {
            debug!("Performing statistics operation");
            println!("{}", formatter.format_statistics(&engine.statistics(user_id)));
        }
        "br" => {
            debug!("Performing brands operation");
            println!("{}", formatter.format_brands(&engine.most_common_brands(user_id)));
        }
        _ => {
            println!("This is an invalid operation");
            error!("Invalid operation")
        }
    }

    Ok(())
}
