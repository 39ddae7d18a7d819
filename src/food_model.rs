//! # Food and Schedule Data Model
//!
//! This module defines data structures for representing foods and their
//! generated schedule entries. A food couples a free-form frequency rule with
//! optional dose-progression and time-progression settings; an occurrence is
//! one dated schedule entry computed from those settings.
//!
//! ## Core Concepts
//!
//! - **Food**: an item with administration instructions and a frequency rule
//! - **Occurrence**: one scheduled calendar-date instance of a food, with its
//!   computed dose amount and clock time
//! - **Progression**: a rule describing how a dose amount or clock time
//!   changes across successive occurrences
//!
//! ## Usage
//!
//! ```rust
//! use foodcal::food_model::{Food, ProgressionDuration, ProgressionType};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! // Simple food taken every day
//! let oats = Food::new("Oats", "Every day", start);
//!
//! // Food with a dose that builds up over a month
//! let psyllium = Food::new("Psyllium husk", "3 times a week", start)
//!     .with_instructions("Stir into a full glass of water")
//!     .with_amount_progression(
//!         "1 teaspoon",
//!         "3 teaspoon",
//!         ProgressionType::Buildup,
//!         ProgressionDuration::Days(30),
//!     );
//! assert!(psyllium.has_amount_progression());
//! assert!(!oats.has_amount_progression());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A food item with its frequency rule and optional progression settings
///
/// The six progression fields are individually optional on purpose: a food
/// with only some of them set behaves as if no progression were configured,
/// which is how partially filled records degrade without erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Display name of the food (e.g. "Psyllium husk")
    pub name: String,

    /// Optional administration instructions shown alongside schedule entries
    #[serde(default)]
    pub instructions: Option<String>,

    /// Free-form frequency rule (e.g. "Every day", "3 times a week")
    pub frequency: String,

    /// First calendar date the food can occur on
    pub start_date: NaiveDate,

    /// Optional meal category
    #[serde(default)]
    pub category: Option<MealCategory>,

    /// Dose at the first occurrence, unit text included (e.g. "1 teaspoon")
    #[serde(default)]
    pub starting_amount: Option<String>,

    /// Dose at the final occurrence, unit text included
    #[serde(default)]
    pub target_amount: Option<String>,

    /// How the dose moves from starting to target amount
    #[serde(default)]
    pub progression_type: Option<ProgressionType>,

    /// How long the progression runs
    #[serde(default)]
    pub progression_duration: Option<ProgressionDuration>,

    /// Clock time of the first occurrence as "HH:MM"
    #[serde(default)]
    pub start_time: Option<String>,

    /// How the clock time moves across occurrences
    #[serde(default)]
    pub time_progression: Option<TimeProgression>,

    /// Minutes added or removed per occurrence step
    #[serde(default)]
    pub time_progression_amount: Option<u32>,
}

/// How a dose amount changes across occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionType {
    /// The starting amount is used for every occurrence
    Static,
    /// Linear ascent from starting to target amount
    Buildup,
    /// Linear descent from starting to target amount
    Reduction,
    /// Ramp up, hold at the midpoint, then ramp to target
    Custom,
}

/// How long a dose progression runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionDuration {
    /// Fixed window in days
    Days(u32),
    /// Open-ended; the progression runs for as long as entries are generated
    Forever,
}

/// How the clock time changes across occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeProgression {
    /// The start time is used for every occurrence
    Static,
    /// Each occurrence is scheduled later than the previous one
    Later,
    /// Each occurrence is scheduled earlier than the previous one
    Earlier,
}

/// Meal category a food belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// Breakfast foods
    Breakfast,
    /// Lunch foods
    Lunch,
    /// Dinner foods
    Dinner,
    /// Between-meal snacks
    Snack,
    /// Anything that does not fit the fixed categories
    Other(String),
}

/// One scheduled calendar-date instance of a food
///
/// Occurrences are computed fresh on each generation request. The
/// `occurrence_number` is the entry's position within the sequence produced
/// by a single request, starting at 0; regenerating over a different range
/// may renumber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Name of the food this entry belongs to
    pub food_name: String,

    /// Calendar date of the entry
    pub date: NaiveDate,

    /// Zero-based position within the generated sequence
    pub occurrence_number: usize,

    /// Computed dose amount with the unit text preserved, when configured
    pub calculated_amount: Option<String>,

    /// Computed clock time as "HH:MM", when configured
    pub calculated_time: Option<String>,
}

impl Food {
    /// Create a new food with a name, frequency rule, and start date
    pub fn new(name: &str, frequency: &str, start_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            instructions: None,
            frequency: frequency.to_string(),
            start_date,
            category: None,
            starting_amount: None,
            target_amount: None,
            progression_type: None,
            progression_duration: None,
            start_time: None,
            time_progression: None,
            time_progression_amount: None,
        }
    }

    /// Add administration instructions
    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = Some(instructions.to_string());
        self
    }

    /// Set the meal category
    pub fn with_category(mut self, category: MealCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set a fixed dose amount without any progression
    pub fn with_starting_amount(mut self, amount: &str) -> Self {
        self.starting_amount = Some(amount.to_string());
        self
    }

    /// Configure a full dose progression
    pub fn with_amount_progression(
        mut self,
        starting_amount: &str,
        target_amount: &str,
        progression_type: ProgressionType,
        duration: ProgressionDuration,
    ) -> Self {
        self.starting_amount = Some(starting_amount.to_string());
        self.target_amount = Some(target_amount.to_string());
        self.progression_type = Some(progression_type);
        self.progression_duration = Some(duration);
        self
    }

    /// Set a fixed clock time without any progression
    pub fn with_start_time(mut self, start_time: &str) -> Self {
        self.start_time = Some(start_time.to_string());
        self
    }

    /// Configure a full time progression
    pub fn with_time_progression(
        mut self,
        start_time: &str,
        time_progression: TimeProgression,
        minutes_per_step: u32,
    ) -> Self {
        self.start_time = Some(start_time.to_string());
        self.time_progression = Some(time_progression);
        self.time_progression_amount = Some(minutes_per_step);
        self
    }

    /// Check whether every field of the dose progression is present
    pub fn has_amount_progression(&self) -> bool {
        self.starting_amount.is_some()
            && self.target_amount.is_some()
            && self.progression_type.is_some()
            && self.progression_duration.is_some()
    }

    /// Check whether every field of the time progression is present
    pub fn has_time_progression(&self) -> bool {
        self.start_time.is_some()
            && self.time_progression.is_some()
            && self.time_progression_amount.is_some()
    }
}

impl Occurrence {
    /// Create a bare occurrence without computed values
    pub fn new(food_name: &str, date: NaiveDate, occurrence_number: usize) -> Self {
        Self {
            food_name: food_name.to_string(),
            date,
            occurrence_number,
            calculated_amount: None,
            calculated_time: None,
        }
    }
}

impl ProgressionDuration {
    /// Get the day count for a fixed window
    pub fn days(&self) -> Option<u32> {
        match self {
            ProgressionDuration::Days(days) => Some(*days),
            ProgressionDuration::Forever => None,
        }
    }

    /// Check whether the progression is open-ended
    pub fn is_forever(&self) -> bool {
        matches!(self, ProgressionDuration::Forever)
    }
}

impl MealCategory {
    /// Get a human-readable label for the category
    pub fn label(&self) -> &str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
            MealCategory::Other(name) => name,
        }
    }
}

impl fmt::Display for ProgressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionType::Static => write!(f, "static"),
            ProgressionType::Buildup => write!(f, "buildup"),
            ProgressionType::Reduction => write!(f, "reduction"),
            ProgressionType::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for ProgressionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(ProgressionType::Static),
            "buildup" => Ok(ProgressionType::Buildup),
            "reduction" => Ok(ProgressionType::Reduction),
            "custom" => Ok(ProgressionType::Custom),
            _ => Err(format!("Unknown progression type: {}", s)),
        }
    }
}

impl fmt::Display for ProgressionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionDuration::Days(days) => write!(f, "{} days", days),
            ProgressionDuration::Forever => write!(f, "forever"),
        }
    }
}

impl fmt::Display for TimeProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeProgression::Static => write!(f, "static"),
            TimeProgression::Later => write!(f, "later"),
            TimeProgression::Earlier => write!(f, "earlier"),
        }
    }
}

impl FromStr for TimeProgression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(TimeProgression::Static),
            "later" => Ok(TimeProgression::Later),
            "earlier" => Ok(TimeProgression::Earlier),
            _ => Err(format!("Unknown time progression: {}", s)),
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MealCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "breakfast" => MealCategory::Breakfast,
            "lunch" => MealCategory::Lunch,
            "dinner" => MealCategory::Dinner,
            "snack" => MealCategory::Snack,
            other => MealCategory::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} from {})", self.name, self.frequency, self.start_date)?;

        if let Some(category) = &self.category {
            write!(f, " [{}]", category)?;
        }

        Ok(())
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;

        if let Some(time) = &self.calculated_time {
            write!(f, " {}", time)?;
        }

        write!(f, " {}", self.food_name)?;

        if let Some(amount) = &self.calculated_amount {
            write!(f, " ({})", amount)?;
        }

        Ok(())
    }
}
