//! CLI command definitions for the `dineai` binary.
//!
//! One subcommand per feature. Choice fields are clap value enums and
//! numeric fields are range-checked while parsing, so only blank text can
//! reach the pipeline's presence check.

pub mod config;
pub mod feature;
pub mod render;

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// AI assistant for restaurant managers, backed by Gemini.
#[derive(Parser)]
#[command(name = "dineai", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Print only the generated text; logs are limited to errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logs (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout as OpenTelemetry data.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan an event for a reservation.
    Event {
        /// Occasion (e.g., Birthday, Anniversary, Business Meeting).
        #[arg(long)]
        occasion: String,

        /// Number of guests.
        #[arg(long, value_parser = parse_people)]
        people: u32,

        #[arg(long, value_enum)]
        cuisine: Cuisine,

        /// Budget range (e.g., "$2000-$3000").
        #[arg(long)]
        budget: String,

        /// Preferred drinks; "No preference" when omitted.
        #[arg(long, value_enum)]
        drinks: Option<Drink>,
    },

    /// Recommend a menu and generate a picture of it.
    Menu {
        #[arg(long, value_enum)]
        meal_type: MealType,

        /// Dietary preference (e.g., Vegan, Gluten-free, Keto).
        #[arg(long)]
        dietary_pref: String,

        /// Where to save the generated image (default: the data directory's images folder).
        #[arg(long)]
        image_out: Option<PathBuf>,
    },

    /// Suggest ways to use leftover food.
    #[command(alias = "leftover")]
    Leftovers {
        /// What is left over (e.g., Rice, Bread, Grilled chicken).
        #[arg(long)]
        leftover_type: String,

        /// Quantity in kilograms.
        #[arg(long, value_parser = parse_quantity)]
        quantity: f64,
    },

    /// Ask the assistant a question.
    Chat {
        /// Your question.
        message: String,
    },

    /// Recommend a promotion for today's date.
    Today {
        /// Use this date instead of today (e.g., "February 14").
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the resolved configuration.
    Config,
}

/// Preferred cuisine for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Cuisine {
    Veg,
    NonVeg,
    Vegan,
    Mixed,
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cuisine::Veg => write!(f, "Veg"),
            Cuisine::NonVeg => write!(f, "Non-Veg"),
            Cuisine::Vegan => write!(f, "Vegan"),
            Cuisine::Mixed => write!(f, "Mixed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Drink {
    SoftDrinks,
    Mocktails,
    Cocktails,
    Beer,
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drink::SoftDrinks => write!(f, "Soft Drinks"),
            Drink::Mocktails => write!(f, "Mocktails"),
            Drink::Cocktails => write!(f, "Cocktails"),
            Drink::Beer => write!(f, "Beer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
            MealType::Snack => write!(f, "Snack"),
        }
    }
}

/// Guest count: an integer of at least 1.
fn parse_people(s: &str) -> Result<u32, String> {
    let people: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    if people < 1 {
        return Err("number of guests must be at least 1".to_string());
    }
    Ok(people)
}

/// Leftover quantity in kg: at least 0.1.
fn parse_quantity(s: &str) -> Result<f64, String> {
    let quantity: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !quantity.is_finite() || quantity < 0.1 {
        return Err("quantity must be at least 0.1 kg".to_string());
    }
    Ok(quantity)
}

/// Log filter directives for the given flags.
pub fn log_directives(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,dineai_core=debug,dineai_infra=debug,dineai_cli=debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dineai").chain(args.iter().copied()))
    }

    #[test]
    fn test_event_command_parses() {
        let cli = parse(&[
            "event",
            "--occasion",
            "Wedding",
            "--people",
            "50",
            "--cuisine",
            "mixed",
            "--budget",
            "$5000",
        ])
        .unwrap();

        match cli.command {
            Commands::Event {
                occasion,
                people,
                cuisine,
                budget,
                drinks,
            } => {
                assert_eq!(occasion, "Wedding");
                assert_eq!(people, 50);
                assert_eq!(cuisine, Cuisine::Mixed);
                assert_eq!(budget, "$5000");
                assert!(drinks.is_none());
            }
            _ => panic!("expected event command"),
        }
    }

    #[test]
    fn test_zero_people_is_rejected() {
        let result = parse(&[
            "event", "--occasion", "x", "--people", "0", "--cuisine", "veg", "--budget", "$1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quantity_lower_bound() {
        assert!(parse(&["leftovers", "--leftover-type", "Rice", "--quantity", "0.05"]).is_err());
        assert!(parse(&["leftovers", "--leftover-type", "Rice", "--quantity", "0.1"]).is_ok());
        assert!(parse(&["leftovers", "--leftover-type", "Rice", "--quantity", "NaN"]).is_err());
    }

    #[test]
    fn test_value_enums_display_like_form_options() {
        assert_eq!(Cuisine::NonVeg.to_string(), "Non-Veg");
        assert_eq!(Drink::SoftDrinks.to_string(), "Soft Drinks");
        assert_eq!(MealType::Lunch.to_string(), "Lunch");
        assert!(parse(&["menu", "--meal-type", "brunch", "--dietary-pref", "Vegan"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["chat", "hello", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_log_directives() {
        assert_eq!(log_directives(0, true), "error");
        assert_eq!(log_directives(0, false), "warn");
        assert_eq!(log_directives(3, false), "trace");
    }
}
