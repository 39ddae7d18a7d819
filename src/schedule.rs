//! # Schedule Generation
//!
//! This module ties the frequency expander and the progression calculator
//! together: a food plus a date range becomes an annotated list of
//! occurrences ready for the caller to persist or render.
//!
//! Generation is a two-pass computation by necessity. Every per-occurrence
//! value depends on the total occurrence count, so the full date sequence is
//! materialized before any single entry's amount or time is computed.
//!
//! ## Usage
//!
//! ```rust
//! use foodcal::food_model::{Food, ProgressionDuration, ProgressionType};
//! use foodcal::schedule::ScheduleGenerator;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let food = Food::new("Psyllium husk", "Every day", start).with_amount_progression(
//!     "1 teaspoon",
//!     "3 teaspoon",
//!     ProgressionType::Buildup,
//!     ProgressionDuration::Days(10),
//! );
//!
//! let generator = ScheduleGenerator::new();
//! let occurrences = generator.generate_with_horizon(&food);
//! assert_eq!(occurrences.len(), 10);
//! assert_eq!(occurrences[0].calculated_amount.as_deref(), Some("1.00 teaspoon"));
//! assert_eq!(occurrences[9].calculated_amount.as_deref(), Some("3.00 teaspoon"));
//! ```

use chrono::{Duration, NaiveDate};
use log::{info, warn};

use crate::food_model::{Food, Occurrence, ProgressionDuration};
use crate::frequency;
use crate::progression;

/// Annotate an expanded date sequence with computed amounts and times
///
/// The sequence length is the `total_occurrences` coordinate of the
/// progression, and each date's position is its `occurrence_number`. The
/// output order matches the input order.
pub fn annotate(dates: &[NaiveDate], food: &Food) -> Vec<Occurrence> {
    let total_occurrences = dates.len();

    dates
        .iter()
        .enumerate()
        .map(|(occurrence_number, date)| Occurrence {
            food_name: food.name.clone(),
            date: *date,
            occurrence_number,
            calculated_amount: progression::amount_at(food, occurrence_number, total_occurrences),
            calculated_time: progression::time_at(food, occurrence_number),
        })
        .collect()
}

/// Configuration options for schedule generation
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Window length in days used when a food has no finite progression
    /// duration to derive one from
    pub default_horizon_days: u32,
    /// Upper bound on the generated window, keeping a single request's
    /// computation bounded
    pub max_range_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_horizon_days: 30,
            max_range_days: 730,
        }
    }
}

/// Generates annotated schedules for foods
pub struct ScheduleGenerator {
    config: ScheduleConfig,
}

impl ScheduleGenerator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self {
            config: ScheduleConfig::default(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Generate the annotated schedule for a food through `until` inclusive
    ///
    /// Expansion runs from the food's start date. A window that ends before
    /// the start date yields an empty schedule.
    pub fn generate(&self, food: &Food, until: NaiveDate) -> Vec<Occurrence> {
        let until = self.clamp_until(food, until);
        let dates = frequency::expand(&food.frequency, food.start_date, until);

        info!(
            "Expanded '{}' ({}) to {} occurrence dates through {}",
            food.name,
            food.frequency,
            dates.len(),
            until
        );

        annotate(&dates, food)
    }

    /// Generate the annotated schedule over the food's own window
    ///
    /// A finite progression duration sizes the window; anything else falls
    /// back to the configured default horizon.
    pub fn generate_with_horizon(&self, food: &Food) -> Vec<Occurrence> {
        let days = match food.progression_duration {
            Some(ProgressionDuration::Days(days)) if days > 0 => days,
            _ => self.config.default_horizon_days,
        };

        let until = food.start_date + Duration::days(i64::from(days) - 1);
        self.generate(food, until)
    }

    fn clamp_until(&self, food: &Food, until: NaiveDate) -> NaiveDate {
        let max_until =
            food.start_date + Duration::days(i64::from(self.config.max_range_days) - 1);

        if until > max_until {
            warn!(
                "Clamping schedule window for '{}' from {} to {} ({} day limit)",
                food.name, until, max_until, self.config.max_range_days
            );
            max_until
        } else {
            until
        }
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
