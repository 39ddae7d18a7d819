use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use std::env;
use std::fs;
use std::path::PathBuf;

use foodcal::food_model::Food;
use foodcal::ics_export;
use foodcal::labels;
use foodcal::schedule::ScheduleGenerator;
use foodcal::schedule_store::ScheduleStore;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    info!("Starting foodcal schedule generator");

    let foods_path = env::args()
        .nth(1)
        .or_else(|| env::var("FOODCAL_FOODS").ok())
        .context("Pass a foods JSON file as the first argument or set FOODCAL_FOODS")?;

    let content = fs::read_to_string(&foods_path)
        .with_context(|| format!("Failed to read foods file {}", foods_path))?;
    let foods: Vec<Food> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse foods file {}", foods_path))?;

    info!("Loaded {} foods from {}", foods.len(), foods_path);

    let until = match env::args().nth(2).or_else(|| env::var("FOODCAL_UNTIL").ok()) {
        Some(raw) => Some(
            raw.parse::<NaiveDate>()
                .with_context(|| format!("Invalid end date: {}", raw))?,
        ),
        None => None,
    };

    let generator = ScheduleGenerator::new();
    let mut store = ScheduleStore::new();
    let mut all_occurrences = Vec::new();

    for food in &foods {
        let occurrences = match until {
            Some(until) => generator.generate(food, until),
            None => generator.generate_with_horizon(food),
        };

        println!("{}", food);
        println!(
            "  {}",
            labels::frequency_label(&food.frequency, food.start_date)
        );
        println!("  {}", labels::progression_label(food));
        println!("  {}", labels::time_label(food));

        store.insert(occurrences.clone());
        all_occurrences.extend(occurrences);
    }

    println!();
    print!("{}", labels::format_schedule(&all_occurrences));
    info!("Stored {} schedule entries", store.len());

    if let Ok(ics_path) = env::var("FOODCAL_ICS_OUT") {
        let calendar = ics_export::render_calendar(&foods, &all_occurrences);
        ics_export::write_calendar(&PathBuf::from(&ics_path), &calendar)?;
        println!("Wrote calendar to {}", ics_path);
    }

    Ok(())
}
