//! # Frequency Expander
//!
//! This module turns a food's free-form frequency text into the concrete
//! calendar dates it occurs on within a date range.
//!
//! ## Features
//!
//! - Recognizes daily, weekly, "N times a week", and every-other-day rules
//! - Falls back to a daily schedule for anything it cannot classify
//! - Maps "N times a week" onto a fixed weekday set rather than a rolling
//!   counter, so the same weekdays are hit in every week of the range
//!
//! ## Usage
//!
//! ```rust
//! use foodcal::frequency::expand;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
//!
//! let dates = expand("Every 2 days", start, end);
//! assert_eq!(dates.len(), 4); // Jan 1, 3, 5, 7
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

// Lazy static regex to avoid recompilation
lazy_static! {
    static ref COUNT_REGEX: Regex =
        Regex::new(r"(\d+)").expect("Count pattern should be valid");
}

/// Weekday count used when an "N times a week" rule carries no number
const DEFAULT_TIMES_PER_WEEK: u32 = 3;

/// A classified frequency rule
///
/// Classification is priority-ordered; see [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyPattern {
    /// Occurs on every date of the range
    EveryDay,
    /// Occurs on the weekday of the start date
    Weekly,
    /// Occurs on a fixed set of weekdays derived from the count
    TimesPerWeek(u32),
    /// Occurs on every second day counted from the start date
    EveryOtherDay,
}

impl FrequencyPattern {
    /// Check whether a single date matches this rule
    ///
    /// `start_date` anchors the weekly rule (its weekday) and the
    /// every-other-day rule (its day parity).
    pub fn matches_date(&self, date: NaiveDate, start_date: NaiveDate) -> bool {
        match self {
            FrequencyPattern::EveryDay => true,
            FrequencyPattern::Weekly => date.weekday() == start_date.weekday(),
            FrequencyPattern::TimesPerWeek(count) => {
                weekday_set(*count, start_date).contains(&date.weekday())
            }
            FrequencyPattern::EveryOtherDay => (date - start_date).num_days() % 2 == 0,
        }
    }
}

/// Classify free-form frequency text into a [`FrequencyPattern`]
///
/// Rules are tested in priority order and the first match wins, which is what
/// keeps strings like "daily" from being read as number-bearing patterns:
///
/// 1. Exactly "daily" or "every day"
/// 2. Exactly "weekly" or "once a week"
/// 3. Contains "times per week", "x week", or "times a week"
/// 4. Contains "every 2 days" or "every other day"
/// 5. Anything else falls back to a daily schedule
pub fn classify(frequency_text: &str) -> FrequencyPattern {
    let text = frequency_text.trim().to_lowercase();

    let pattern = if text == "daily" || text == "every day" {
        FrequencyPattern::EveryDay
    } else if text == "weekly" || text == "once a week" {
        FrequencyPattern::Weekly
    } else if text.contains("times per week")
        || text.contains("x week")
        || text.contains("times a week")
    {
        let count = COUNT_REGEX
            .find(&text)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TIMES_PER_WEEK);
        FrequencyPattern::TimesPerWeek(count)
    } else if text.contains("every 2 days") || text.contains("every other day") {
        FrequencyPattern::EveryOtherDay
    } else {
        // Unrecognized rules schedule daily rather than erroring
        FrequencyPattern::EveryDay
    };

    debug!("Classified frequency '{}' as {:?}", frequency_text, pattern);
    pattern
}

/// Expand frequency text into the ordered dates it occurs on
///
/// Every date of `[start_date, end_date]` is tested once, ascending, so the
/// output is strictly increasing and bounded by the range. An inverted range
/// yields an empty vector.
pub fn expand(
    frequency_text: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<NaiveDate> {
    let pattern = classify(frequency_text);
    let mut dates = Vec::new();

    let mut date = start_date;
    while date <= end_date {
        if pattern.matches_date(date, start_date) {
            dates.push(date);
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    dates
}

/// The fixed weekday set for an "N times a week" rule
///
/// This is a literal lookup table, not a distribution formula. The rows for
/// 4 (skips Wednesday) and 6 (skips only Sunday) are asymmetric on purpose
/// and must stay as they are. Counts above 7 behave as 7; a count of 0 gets
/// the same set as an absent count.
pub(crate) fn weekday_set(count: u32, start_date: NaiveDate) -> Vec<Weekday> {
    use chrono::Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};

    match count {
        0 => vec![Mon, Wed, Fri],
        1 => vec![start_date.weekday()],
        2 => vec![Tue, Fri],
        3 => vec![Mon, Wed, Fri],
        4 => vec![Mon, Tue, Thu, Fri],
        5 => vec![Mon, Tue, Wed, Thu, Fri],
        6 => vec![Mon, Tue, Wed, Thu, Fri, Sat],
        _ => vec![Mon, Tue, Wed, Thu, Fri, Sat, Sun],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(classify("daily"), FrequencyPattern::EveryDay);
        assert_eq!(classify("Every Day"), FrequencyPattern::EveryDay);
        assert_eq!(classify("weekly"), FrequencyPattern::Weekly);
        assert_eq!(classify("once a week"), FrequencyPattern::Weekly);
        assert_eq!(classify("3 times a week"), FrequencyPattern::TimesPerWeek(3));
        assert_eq!(classify("5 times per week"), FrequencyPattern::TimesPerWeek(5));
        assert_eq!(classify("2x week"), FrequencyPattern::TimesPerWeek(2));
        assert_eq!(classify("every 2 days"), FrequencyPattern::EveryOtherDay);
        assert_eq!(classify("every other day"), FrequencyPattern::EveryOtherDay);
    }

    #[test]
    fn test_classify_defaults_missing_count_to_three() {
        assert_eq!(
            classify("a few times a week"),
            FrequencyPattern::TimesPerWeek(3)
        );
    }

    #[test]
    fn test_classify_unrecognized_falls_back_to_daily() {
        assert_eq!(classify("every 3 days"), FrequencyPattern::EveryDay);
        assert_eq!(classify("whenever"), FrequencyPattern::EveryDay);
        assert_eq!(classify(""), FrequencyPattern::EveryDay);
    }

    #[test]
    fn test_expand_every_day() {
        let dates = expand("Every day", jan(1), jan(10));
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], jan(1));
        assert_eq!(dates[9], jan(10));
    }

    #[test]
    fn test_expand_weekly_uses_start_weekday() {
        // 2025-01-01 is a Wednesday
        let dates = expand("weekly", jan(1), jan(31));
        assert_eq!(dates, vec![jan(1), jan(8), jan(15), jan(22), jan(29)]);
        assert!(dates.iter().all(|d| d.weekday() == Weekday::Wed));
    }

    #[test]
    fn test_expand_three_times_a_week_is_fixed_set() {
        // Starting Wednesday; a rolling counter would pick different days,
        // the fixed set stays on Mon/Wed/Fri
        let dates = expand("3 times a week", jan(1), jan(14));
        assert_eq!(dates, vec![jan(1), jan(3), jan(6), jan(8), jan(10), jan(13)]);
    }

    #[test]
    fn test_expand_every_two_days() {
        let dates = expand("Every 2 days", jan(1), jan(7));
        assert_eq!(dates, vec![jan(1), jan(3), jan(5), jan(7)]);
    }

    #[test]
    fn test_expand_inverted_range_is_empty() {
        assert!(expand("Every day", jan(10), jan(1)).is_empty());
    }

    #[test]
    fn test_expand_single_day_range() {
        assert_eq!(expand("Every day", jan(5), jan(5)), vec![jan(5)]);
        // Jan 5 2025 is a Sunday, not in the Mon/Wed/Fri set
        assert!(expand("3 times a week", jan(5), jan(5)).is_empty());
    }

    #[test]
    fn test_expand_output_is_strictly_increasing_and_bounded() {
        for frequency in ["Every day", "weekly", "4 times a week", "every other day"] {
            let dates = expand(frequency, jan(1), jan(31));
            assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(dates.iter().all(|d| *d >= jan(1) && *d <= jan(31)));
        }
    }

    #[test]
    fn test_weekday_set_table() {
        use chrono::Weekday::{Fri, Mon, Sun, Thu, Tue, Wed};

        assert_eq!(weekday_set(7, jan(1)).len(), 7);
        // 6 skips only Sunday
        let six = weekday_set(6, jan(1));
        assert_eq!(six.len(), 6);
        assert!(!six.contains(&Sun));
        assert_eq!(weekday_set(5, jan(1)), vec![Mon, Tue, Wed, Thu, Fri]);
        // 4 skips Wednesday
        assert_eq!(weekday_set(4, jan(1)), vec![Mon, Tue, Thu, Fri]);
        assert_eq!(weekday_set(3, jan(1)), vec![Mon, Wed, Fri]);
        assert_eq!(weekday_set(2, jan(1)), vec![Tue, Fri]);
        // 1 follows the start date's weekday
        assert_eq!(weekday_set(1, jan(1)), vec![Wed]);
        assert_eq!(weekday_set(1, jan(6)), vec![Mon]);
    }

    #[test]
    fn test_weekday_set_out_of_table_counts() {
        assert_eq!(weekday_set(12, jan(1)).len(), 7);
        assert_eq!(weekday_set(0, jan(1)), weekday_set(3, jan(1)));
    }

    #[test]
    fn test_expand_one_time_a_week_follows_start_weekday() {
        // 2025-01-02 is a Thursday
        let dates = expand("1 times a week", jan(2), jan(16));
        assert_eq!(dates, vec![jan(2), jan(9), jan(16)]);
    }

    #[test]
    fn test_expand_is_idempotent() {
        let first = expand("3 times a week", jan(1), jan(31));
        let second = expand("3 times a week", jan(1), jan(31));
        assert_eq!(first, second);
    }
}
