use crate::models::{Recommendation, RecordSet, StatsResponse};
use chrono::{Datelike, Duration, Local, NaiveDate};

const CAUTION_THRESHOLD: u64 = 3;
const NOT_RECOMMENDED_THRESHOLD: u64 = 4;

pub fn build_stats(records: &RecordSet) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), records)
}

pub fn build_stats_at(today: NaiveDate, records: &RecordSet) -> StatsResponse {
    let start = week_start(today);
    let end = start + Duration::days(6);

    let mut year = 0u64;
    let mut week = 0u64;
    // Unparsable dates still count toward the total but never fall in a range.
    for date in records.iter().filter_map(|record| parse_date(&record.date)) {
        if date.year() == today.year() {
            year += 1;
        }
        if date >= start && date <= end {
            week += 1;
        }
    }

    let recommendation = recommend(week);
    StatsResponse {
        total: records.len() as u64,
        year,
        week,
        week_start: date_key(start),
        week_end: date_key(end),
        recommendation,
        recommendation_text: recommendation.label(),
    }
}

pub fn recommend(week_count: u64) -> Recommendation {
    if week_count >= NOT_RECOMMENDED_THRESHOLD {
        Recommendation::NotRecommended
    } else if week_count >= CAUTION_THRESHOLD {
        Recommendation::Caution
    } else {
        Recommendation::Acceptable
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set_of(dates: &[&str]) -> RecordSet {
        RecordSet::new(
            dates
                .iter()
                .enumerate()
                .map(|(i, date)| Record::new(*date, i as i64))
                .collect(),
        )
    }

    #[test]
    fn week_includes_monday_and_sunday() {
        // 2026-10-14 is a Wednesday; its week runs 10-12 .. 10-18.
        let today = day(2026, 10, 14);
        let records = set_of(&["2026-10-12", "2026-10-18"]);
        let stats = build_stats_at(today, &records);
        assert_eq!(stats.week, 2);
        assert_eq!(stats.week_start, "2026-10-12");
        assert_eq!(stats.week_end, "2026-10-18");
    }

    #[test]
    fn week_excludes_neighbouring_days() {
        let today = day(2026, 10, 14);
        let records = set_of(&["2026-10-11", "2026-10-19"]);
        let stats = build_stats_at(today, &records);
        assert_eq!(stats.week, 0);
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn sunday_belongs_to_preceding_monday() {
        let today = day(2026, 10, 18);
        let stats = build_stats_at(today, &set_of(&["2026-10-12"]));
        assert_eq!(stats.week_start, "2026-10-12");
        assert_eq!(stats.week, 1);
    }

    #[test]
    fn year_counts_only_current_calendar_year() {
        let today = day(2026, 1, 2);
        let records = set_of(&["2025-12-31", "2026-01-01", "2026-12-31", "2027-01-01"]);
        let stats = build_stats_at(today, &records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.year, 2);
        // The week of 2026-01-02 starts on Monday 2025-12-29.
        assert_eq!(stats.week, 2);
    }

    #[test]
    fn malformed_dates_only_count_toward_total() {
        let today = day(2026, 10, 14);
        let stats = build_stats_at(today, &set_of(&["not-a-date", "2026-10-13"]));
        assert_eq!(stats.total, 2);
        assert_eq!(stats.year, 1);
        assert_eq!(stats.week, 1);
    }

    #[test]
    fn recommendation_thresholds() {
        assert_eq!(recommend(0), Recommendation::Acceptable);
        assert_eq!(recommend(2), Recommendation::Acceptable);
        assert_eq!(recommend(3), Recommendation::Caution);
        assert_eq!(recommend(4), Recommendation::NotRecommended);
        assert_eq!(recommend(9), Recommendation::NotRecommended);
        assert_eq!(recommend(3).label(), "use caution");
        assert_eq!(recommend(4).label(), "not recommended");
        assert_eq!(recommend(2).label(), "acceptable");
    }

    #[test]
    fn stats_text_follows_week_count() {
        let today = day(2026, 10, 14);
        let records = set_of(&["2026-10-12", "2026-10-12", "2026-10-13", "2026-10-14"]);
        let stats = build_stats_at(today, &records);
        assert_eq!(stats.week, 4);
        assert_eq!(stats.recommendation_text, "not recommended");
    }
}
