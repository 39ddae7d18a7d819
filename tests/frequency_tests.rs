#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use foodcal::frequency::{classify, expand, FrequencyPattern};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_every_day_covers_whole_range() {
        let dates = expand("Every day", date(2025, 1, 1), date(2025, 1, 10));

        assert_eq!(dates.len(), 10);
        assert_eq!(dates.first(), Some(&date(2025, 1, 1)));
        assert_eq!(dates.last(), Some(&date(2025, 1, 10)));
    }

    #[test]
    fn test_three_times_a_week_is_a_fixed_weekday_set() {
        // Start on Wednesday 2025-01-01; the rule selects Mon/Wed/Fri as a
        // fixed set, not three occurrences counted from the start
        let dates = expand("3 times a week", date(2025, 1, 1), date(2025, 1, 14));

        let expected: Vec<NaiveDate> = [1, 3, 6, 8, 10, 13]
            .iter()
            .map(|d| date(2025, 1, *d))
            .collect();
        assert_eq!(dates, expected);
        assert!(dates.iter().all(|d| matches!(
            d.weekday(),
            Weekday::Mon | Weekday::Wed | Weekday::Fri
        )));
    }

    #[test]
    fn test_every_two_days() {
        let dates = expand("Every 2 days", date(2025, 1, 1), date(2025, 1, 7));

        let expected: Vec<NaiveDate> = [1, 3, 5, 7].iter().map(|d| date(2025, 1, *d)).collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_weekly_follows_start_weekday_across_months() {
        // 2025-01-30 is a Thursday
        let dates = expand("once a week", date(2025, 1, 30), date(2025, 2, 20));

        assert_eq!(
            dates,
            vec![
                date(2025, 1, 30),
                date(2025, 2, 6),
                date(2025, 2, 13),
                date(2025, 2, 20),
            ]
        );
    }

    #[test]
    fn test_output_is_strictly_increasing_and_bounded_for_all_patterns() {
        let frequencies = [
            "daily",
            "weekly",
            "once a week",
            "2 times a week",
            "4 times per week",
            "6x week",
            "every other day",
            "something unrecognizable",
        ];

        for frequency in frequencies {
            let dates = expand(frequency, date(2025, 3, 15), date(2025, 5, 15));
            assert!(
                dates.windows(2).all(|pair| pair[0] < pair[1]),
                "{} produced out-of-order dates",
                frequency
            );
            assert!(
                dates
                    .iter()
                    .all(|d| *d >= date(2025, 3, 15) && *d <= date(2025, 5, 15)),
                "{} escaped the range",
                frequency
            );
        }
    }

    #[test]
    fn test_unrecognized_patterns_schedule_daily() {
        // "every 3 days" has no special case of its own
        let dates = expand("every 3 days", date(2025, 1, 1), date(2025, 1, 6));
        assert_eq!(dates.len(), 6);
    }

    #[test]
    fn test_inverted_range_yields_empty_sequence() {
        assert!(expand("daily", date(2025, 1, 10), date(2025, 1, 1)).is_empty());
        assert!(expand("weekly", date(2025, 6, 1), date(2025, 5, 1)).is_empty());
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let first = expand("5 times a week", date(2025, 1, 1), date(2025, 3, 1));
        let second = expand("5 times a week", date(2025, 1, 1), date(2025, 3, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_seven_times_a_week_covers_every_day() {
        let dates = expand("7 times a week", date(2025, 1, 1), date(2025, 1, 14));
        assert_eq!(dates.len(), 14);
    }

    #[test]
    fn test_six_times_a_week_skips_sundays_only() {
        let dates = expand("6 times a week", date(2025, 1, 1), date(2025, 1, 28));
        assert!(dates.iter().all(|d| d.weekday() != Weekday::Sun));
        // Four full weeks minus four Sundays
        assert_eq!(dates.len(), 24);
    }

    #[test]
    fn test_four_times_a_week_skips_wednesday() {
        let dates = expand("4 times a week", date(2025, 1, 6), date(2025, 1, 12));
        let weekdays: Vec<Weekday> = dates.iter().map(|d| d.weekday()).collect();
        assert_eq!(
            weekdays,
            vec![Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri]
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("EVERY DAY"), FrequencyPattern::EveryDay);
        assert_eq!(classify("Weekly"), FrequencyPattern::Weekly);
        assert_eq!(
            classify("3 Times A Week"),
            FrequencyPattern::TimesPerWeek(3)
        );
    }

    #[test]
    fn test_count_extraction_and_default() {
        assert_eq!(classify("2x week"), FrequencyPattern::TimesPerWeek(2));
        assert_eq!(
            classify("several times a week"),
            FrequencyPattern::TimesPerWeek(3)
        );
    }
}
