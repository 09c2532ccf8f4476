#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line front end for the kerala-guide catalog.
//!
//! Subcommands mirror the app's screens: `districts` lists the fixed
//! district set, `search` runs the filter/enrichment pipeline against the
//! embedded catalog, and `weather` fetches a district reading (falling
//! back to a synthesized one when no API key is available or the fetch
//! fails).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use kerala_guide_catalog::Catalog;
use kerala_guide_destination_models::{District, EnrichedRecord};
use kerala_guide_search::{FilterSet, SearchContext};
use kerala_guide_weather::{DetailedWeather, OpenWeatherClient};

/// Environment variable holding the OpenWeatherMap API key.
const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Browse Kerala destinations and district weather.
#[derive(Parser)]
#[command(name = "kerala_guide_cli")]
#[command(about = "Browse Kerala destinations and district weather")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the 14 districts in canonical order.
    Districts,

    /// Search the destination catalog.
    Search {
        /// Free-text query matched against name, description, and district.
        #[arg(long)]
        query: Option<String>,

        /// Category tag to keep (repeatable, e.g. --category beach).
        #[arg(long)]
        category: Vec<String>,

        /// Minimum rating threshold.
        #[arg(long)]
        min_rating: Option<f64>,

        /// Maximum distance from the origin district in kilometers.
        #[arg(long)]
        max_distance: Option<f64>,

        /// Best-time tag to keep (repeatable, e.g. --season Oct-Mar).
        #[arg(long)]
        season: Vec<String>,

        /// District distances are measured from.
        #[arg(long, default_value = "Ernakulam")]
        origin: String,

        /// Reference date (YYYY-MM-DD) for crowd/suitability derivation.
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit results as a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show current conditions and forecast for a district.
    Weather {
        /// District name (e.g. "Idukki").
        district: String,

        /// Emit the reading as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Districts => {
            for district in Catalog::districts() {
                println!("{district}");
            }
        }
        Commands::Search {
            query,
            category,
            min_rating,
            max_distance,
            season,
            origin,
            date,
            json,
        } => {
            let catalog = Catalog::embedded()?;
            let origin = parse_district(&origin)?;
            let ctx = date.map_or_else(
                || SearchContext::today(origin),
                |date| SearchContext::new(origin, date),
            );

            let mut filters = FilterSet {
                query: query.unwrap_or_default(),
                category: category.into_iter().collect::<BTreeSet<_>>(),
                best_time: season.into_iter().collect::<BTreeSet<_>>(),
                ..FilterSet::default()
            };
            if let Some(rating) = min_rating {
                filters.rating = rating;
            }
            if let Some(distance) = max_distance {
                filters.distance = distance;
            }

            let results = kerala_guide_search::search(&catalog, &filters, &ctx);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
        }
        Commands::Weather { district, json } => {
            let district = parse_district(&district)?;
            let today = chrono::Local::now().date_naive();

            let weather = match std::env::var(API_KEY_ENV) {
                Ok(api_key) => {
                    let client = OpenWeatherClient::new(api_key)?;
                    kerala_guide_weather::fetch_with_fallback(&client, district, today).await
                }
                Err(_) => {
                    log::warn!("{API_KEY_ENV} not set, using synthesized weather");
                    kerala_guide_weather::fallback::synthesize(district, today)
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&weather)?);
            } else {
                print_weather(district, &weather);
            }
        }
    }

    Ok(())
}

/// Parses a district name, listing the valid names on failure.
fn parse_district(name: &str) -> Result<District, String> {
    name.parse().map_err(|_| {
        let valid: Vec<&str> = District::ALL.iter().map(District::as_ref).collect();
        format!(
            "unknown district '{name}', expected one of: {}",
            valid.join(", ")
        )
    })
}

fn print_results(results: &[EnrichedRecord]) {
    if results.is_empty() {
        println!("No destinations match.");
        return;
    }

    for r in results {
        let star = if r.is_recommended { " ★" } else { "" };
        println!(
            "{} {} ({}){star}",
            r.record.category.icon(),
            r.record.name,
            r.record.district
        );
        println!(
            "   rating {:.1} | {:.0} km away | crowd {} | weather {} | best time {}",
            r.record.rating,
            r.distance_km,
            r.crowd_level,
            r.weather_suitability,
            r.record.best_time.as_deref().unwrap_or_default()
        );
    }
    println!();
    println!("{} destination(s)", results.len());
}

fn print_weather(district: District, weather: &DetailedWeather) {
    let c = &weather.current;
    println!(
        "{district}: {} {} ({}°C, feels like {}°C)",
        c.icon, c.description, c.temp, c.feels_like
    );
    println!(
        "   humidity {}% | wind {} km/h | sunrise {} | sunset {}",
        c.humidity, c.wind_speed, c.sunrise, c.sunset
    );
    for day in &weather.forecast {
        println!(
            "   {} {} {}-{}°C {} ({}% humidity)",
            day.date, day.icon, day.temp_min, day.temp_max, day.description, day.humidity
        );
    }
}
