//! # Foodcal
//!
//! A personal food-scheduling calendar engine. Foods carry a free-form
//! frequency rule and optional dose and time progressions; the engine
//! expands them into dated schedule entries with per-entry computed amounts
//! and clock times.
//!
//! ```rust
//! use foodcal::food_model::Food;
//! use foodcal::frequency::expand;
//! use foodcal::schedule::annotate;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let food = Food::new("Oats", "Every day", start);
//!
//! let dates = expand(&food.frequency, start, end);
//! let occurrences = annotate(&dates, &food);
//! assert_eq!(occurrences.len(), 10);
//! ```

pub mod food_model;
pub mod frequency;
pub mod ics_export;
pub mod labels;
pub mod progression;
pub mod schedule;
pub mod schedule_store;
