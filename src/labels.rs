//! User-facing labels for frequency and progression settings, plus plain
//! text schedule formatting

use chrono::{Datelike, NaiveDate, Weekday};

use crate::food_model::{Food, Occurrence, ProgressionDuration, ProgressionType, TimeProgression};
use crate::frequency::{self, FrequencyPattern};

/// Describe a frequency rule the way it will actually behave
pub fn frequency_label(frequency_text: &str, start_date: NaiveDate) -> String {
    match frequency::classify(frequency_text) {
        FrequencyPattern::EveryDay => "Every day".to_string(),
        FrequencyPattern::Weekly => {
            format!("Weekly on {}", weekday_name(start_date.weekday()))
        }
        FrequencyPattern::TimesPerWeek(count) => {
            let days: Vec<&str> = frequency::weekday_set(count, start_date)
                .iter()
                .map(|w| weekday_short(*w))
                .collect();
            if count == 1 {
                format!("Once a week ({})", days.join(", "))
            } else {
                format!("{} times a week ({})", count, days.join(", "))
            }
        }
        FrequencyPattern::EveryOtherDay => "Every other day".to_string(),
    }
}

/// Describe a food's dose progression
pub fn progression_label(food: &Food) -> String {
    let starting = match &food.starting_amount {
        Some(starting) => starting,
        None => return "No amount configured".to_string(),
    };

    let (target, kind, duration) = match (
        &food.target_amount,
        food.progression_type,
        food.progression_duration,
    ) {
        (Some(target), Some(kind), Some(duration)) => (target, kind, duration),
        _ => return format!("Always {}", starting),
    };

    let span = match duration {
        ProgressionDuration::Days(days) => format!("over {} days", days),
        ProgressionDuration::Forever => "indefinitely".to_string(),
    };

    match kind {
        ProgressionType::Static => format!("Always {}", starting),
        ProgressionType::Buildup => {
            format!("Builds up from {} to {} {}", starting, target, span)
        }
        ProgressionType::Reduction => {
            format!("Reduces from {} to {} {}", starting, target, span)
        }
        ProgressionType::Custom => format!(
            "Ramps from {} to {} {} with a hold at the halfway dose",
            starting, target, span
        ),
    }
}

/// Describe a food's time progression
pub fn time_label(food: &Food) -> String {
    let start_time = match &food.start_time {
        Some(start_time) => start_time,
        None => return "No time configured".to_string(),
    };

    let (kind, step) = match (food.time_progression, food.time_progression_amount) {
        (Some(kind), Some(step)) => (kind, step),
        _ => return format!("At {}", start_time),
    };

    match kind {
        TimeProgression::Static => format!("At {}", start_time),
        TimeProgression::Later => format!(
            "Starts at {}, {} minutes later each time",
            start_time, step
        ),
        TimeProgression::Earlier => format!(
            "Starts at {}, {} minutes earlier each time",
            start_time, step
        ),
    }
}

/// Format occurrences as a simple numbered list for review
pub fn format_schedule(occurrences: &[Occurrence]) -> String {
    let mut result = String::new();

    for (i, occurrence) in occurrences.iter().enumerate() {
        result.push_str(&format!("{}. {}\n", i + 1, occurrence));
    }

    result
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mondays",
        Weekday::Tue => "Tuesdays",
        Weekday::Wed => "Wednesdays",
        Weekday::Thu => "Thursdays",
        Weekday::Fri => "Fridays",
        Weekday::Sat => "Saturdays",
        Weekday::Sun => "Sundays",
    }
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_frequency_labels() {
        assert_eq!(frequency_label("daily", jan(1)), "Every day");
        assert_eq!(frequency_label("weekly", jan(1)), "Weekly on Wednesdays");
        assert_eq!(
            frequency_label("3 times a week", jan(1)),
            "3 times a week (Mon, Wed, Fri)"
        );
        assert_eq!(
            frequency_label("1 times a week", jan(1)),
            "Once a week (Wed)"
        );
        assert_eq!(frequency_label("every other day", jan(1)), "Every other day");
        assert_eq!(frequency_label("whenever I remember", jan(1)), "Every day");
    }

    #[test]
    fn test_progression_labels() {
        use crate::food_model::{ProgressionDuration, ProgressionType};

        let plain = Food::new("Oats", "Every day", jan(1));
        assert_eq!(progression_label(&plain), "No amount configured");

        let fixed = plain.clone().with_starting_amount("1 bowl");
        assert_eq!(progression_label(&fixed), "Always 1 bowl");

        let buildup = plain.clone().with_amount_progression(
            "1 teaspoon",
            "3 teaspoon",
            ProgressionType::Buildup,
            ProgressionDuration::Days(30),
        );
        assert_eq!(
            progression_label(&buildup),
            "Builds up from 1 teaspoon to 3 teaspoon over 30 days"
        );

        let forever = plain.with_amount_progression(
            "10 ml",
            "4 ml",
            ProgressionType::Reduction,
            ProgressionDuration::Forever,
        );
        assert_eq!(
            progression_label(&forever),
            "Reduces from 10 ml to 4 ml indefinitely"
        );
    }

    #[test]
    fn test_time_labels() {
        let plain = Food::new("Oats", "Every day", jan(1));
        assert_eq!(time_label(&plain), "No time configured");

        let fixed = plain.clone().with_start_time("08:00");
        assert_eq!(time_label(&fixed), "At 08:00");

        let later = plain.with_time_progression("22:00", TimeProgression::Earlier, 15);
        assert_eq!(
            time_label(&later),
            "Starts at 22:00, 15 minutes earlier each time"
        );
    }

    #[test]
    fn test_format_schedule() {
        let occurrences = vec![
            Occurrence::new("Oats", jan(1), 0),
            Occurrence::new("Oats", jan(2), 1),
        ];

        let listing = format_schedule(&occurrences);
        assert!(listing.starts_with("1. 2025-01-01 Oats\n"));
        assert!(listing.contains("2. 2025-01-02 Oats\n"));
    }
}
