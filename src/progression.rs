//! # Progression Calculator
//!
//! This module computes per-occurrence dose amounts and clock times along a
//! food's configured progression. It operates on the already-expanded
//! occurrence sequence: each value depends on the occurrence's position and
//! on the sequence length, so the full sequence must exist before any single
//! value can be computed.
//!
//! ## Features
//!
//! - Linear buildup and reduction between a starting and target amount
//! - A three-phase custom curve with a plateau across the middle third
//! - Unit text from the starting amount preserved verbatim in the output
//! - Time shifts that wrap across midnight instead of going negative
//!
//! All parsing is defensive: unparseable numeric or time fragments fall back
//! to usable defaults, and a partially configured progression degrades to a
//! static passthrough. Nothing in this module returns an error.
//!
//! ## Usage
//!
//! ```rust
//! use foodcal::food_model::{Food, ProgressionDuration, ProgressionType};
//! use foodcal::progression::amount_at;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let food = Food::new("Psyllium husk", "Every day", start).with_amount_progression(
//!     "1 teaspoon",
//!     "3 teaspoon",
//!     ProgressionType::Buildup,
//!     ProgressionDuration::Days(30),
//! );
//!
//! assert_eq!(amount_at(&food, 0, 5), Some("1.00 teaspoon".to_string()));
//! assert_eq!(amount_at(&food, 4, 5), Some("3.00 teaspoon".to_string()));
//! ```

use crate::food_model::{Food, ProgressionType, TimeProgression};
use regex::Regex;
use std::sync::LazyLock;

/// Regex patterns for parsing progression inputs
static PROGRESSION_PATTERNS: LazyLock<ProgressionPatterns> =
    LazyLock::new(ProgressionPatterns::new);

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Compiled regex patterns for parsing
struct ProgressionPatterns {
    /// Matches the leading numeric magnitude: "1.5" in "1.5 tsp"
    leading_number: Regex,
    /// Matches a clock time: "08:30", "8:30"
    clock: Regex,
}

impl ProgressionPatterns {
    fn new() -> Self {
        Self {
            leading_number: Regex::new(r"^[\d.]+").unwrap(),
            clock: Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap(),
        }
    }
}

/// Compute the dose amount for one occurrence
///
/// `occurrence_number` is the occurrence's zero-based position and
/// `total_occurrences` the length of the full sequence it belongs to.
///
/// Returns `None` when no starting amount is configured. When the rest of
/// the progression (target amount, type, duration) is incomplete, or the
/// type is static, the starting amount passes through unchanged.
pub fn amount_at(
    food: &Food,
    occurrence_number: usize,
    total_occurrences: usize,
) -> Option<String> {
    let starting = food.starting_amount.as_deref()?;

    let (target, kind) = match (
        food.target_amount.as_deref(),
        food.progression_type,
        food.progression_duration,
    ) {
        (Some(target), Some(kind), Some(_)) => (target, kind),
        _ => return Some(starting.to_string()),
    };

    let start_value = leading_magnitude(starting);
    let target_value = leading_magnitude(target);
    let p = progress(occurrence_number, total_occurrences);

    let value = match kind {
        ProgressionType::Static => return Some(starting.to_string()),
        ProgressionType::Buildup => start_value + (target_value - start_value) * p,
        // Algebraically the same as buildup; spelled as a descent to keep
        // the intent readable
        ProgressionType::Reduction => start_value - (start_value - target_value) * p,
        ProgressionType::Custom => three_phase(start_value, target_value, p),
    };

    Some(format!("{:.2}{}", value, unit_suffix(starting)))
}

/// Compute the clock time for one occurrence
///
/// Returns `None` when no start time is configured. When the time
/// progression is incomplete or static, the start time passes through
/// unchanged; so does a start time that does not parse as "HH:MM".
pub fn time_at(food: &Food, occurrence_number: usize) -> Option<String> {
    let start_time = food.start_time.as_deref()?;

    let (kind, step_minutes) = match (food.time_progression, food.time_progression_amount) {
        (Some(kind), Some(step)) => (kind, step),
        _ => return Some(start_time.to_string()),
    };

    let shift = match kind {
        TimeProgression::Static => return Some(start_time.to_string()),
        TimeProgression::Later => step_minutes as i64 * occurrence_number as i64,
        TimeProgression::Earlier => -(step_minutes as i64) * occurrence_number as i64,
    };

    let minutes = match parse_clock(start_time) {
        Some(minutes) => minutes,
        None => return Some(start_time.to_string()),
    };

    // Wrap into [0, 1440); crossing midnight lands on the adjacent day's
    // clock time without carrying a date change
    let wrapped = (minutes + shift).rem_euclid(MINUTES_PER_DAY);

    Some(format!("{:02}:{:02}", wrapped / 60, wrapped % 60))
}

/// Normalized progress for an occurrence, reaching 1.0 at the last one
///
/// The divisor is clamped so a single-occurrence sequence does not divide
/// by zero, and the result is capped at 1.0.
fn progress(occurrence_number: usize, total_occurrences: usize) -> f64 {
    let span = total_occurrences.saturating_sub(1).max(1) as f64;
    (occurrence_number as f64 / span).min(1.0)
}

/// Extract the leading numeric magnitude of an amount, defaulting to 1
fn leading_magnitude(text: &str) -> f64 {
    PROGRESSION_PATTERNS
        .leading_number
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(1.0)
}

/// The amount text with its leading numeric magnitude stripped
///
/// When nothing numeric leads the text the whole string is the suffix.
fn unit_suffix(text: &str) -> &str {
    match PROGRESSION_PATTERNS.leading_number.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Three-phase curve: ramp to the midpoint, hold, ramp to the target
///
/// The plateau spans the middle third of the progression and holds exactly
/// 50% of the start-to-target range. Boundaries are not smoothed.
fn three_phase(start: f64, target: f64, p: f64) -> f64 {
    let midpoint = start + (target - start) * 0.5;

    if p < 0.33 {
        start + (midpoint - start) * (p / 0.33)
    } else if p < 0.67 {
        midpoint
    } else {
        midpoint + (target - midpoint) * ((p - 0.67) / 0.33)
    }
}

fn parse_clock(text: &str) -> Option<i64> {
    let captures = PROGRESSION_PATTERNS.clock.captures(text.trim())?;
    let hours: i64 = captures[1].parse().ok()?;
    let minutes: i64 = captures[2].parse().ok()?;
    Some(hours * 60 + minutes)
}
