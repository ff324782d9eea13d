use crate::models::{CalendarDay, MonthGrid, RecordSet};
use crate::stats::date_key;
use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Visible month; `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns `None` when the pair does not name a representable month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Builds a cursor from raw query values, falling back to `today`'s month.
    pub fn from_query(year: Option<&str>, month: Option<&str>, today: NaiveDate) -> Self {
        let fallback = Self::containing(today);
        let year = year.and_then(|value| value.trim().parse::<i32>().ok());
        let month = month.and_then(|value| value.trim().parse::<u32>().ok());
        match (year, month) {
            (Some(year), Some(month)) => Self::new(year, month).unwrap_or(fallback),
            (None, Some(month)) => Self::new(fallback.year, month).unwrap_or(fallback),
            _ => fallback,
        }
    }

    pub fn shift(self, delta: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.shift(1);
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 31,
        }
    }

    pub fn title(self) -> String {
        format!("{} {}", self.year, MONTH_NAMES[(self.month - 1) as usize])
    }
}

pub fn build_month(
    records: &RecordSet,
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<&str>,
) -> MonthGrid {
    // Sunday-first grid.
    let leading_blanks = cursor
        .first_day()
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);

    let days = (1..=cursor.days_in_month())
        .filter_map(|day| NaiveDate::from_ymd_opt(cursor.year, cursor.month, day))
        .map(|date| {
            let key = date_key(date);
            let count = records.count(&key);
            CalendarDay {
                day: date.day(),
                count,
                has_record: count > 0,
                is_today: date == today,
                is_selected: selected == Some(key.as_str()),
                date: key,
            }
        })
        .collect();

    let prev = cursor.shift(-1);
    let next = cursor.shift(1);
    MonthGrid {
        year: cursor.year,
        month: cursor.month,
        title: cursor.title(),
        leading_blanks,
        days,
        prev: (prev.year, prev.month),
        next: (next.year, next.month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_wraps_across_years() {
        let dec = MonthCursor::new(2026, 12).unwrap();
        assert_eq!(dec.shift(1), MonthCursor { year: 2027, month: 1 });
        let jan = MonthCursor::new(2026, 1).unwrap();
        assert_eq!(jan.shift(-1), MonthCursor { year: 2025, month: 12 });
        assert_eq!(jan.shift(-13), MonthCursor { year: 2024, month: 12 });
        assert_eq!(jan.shift(0), jan);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(MonthCursor::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthCursor::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthCursor::new(2026, 12).unwrap().days_in_month(), 31);
        assert_eq!(MonthCursor::new(2026, 11).unwrap().days_in_month(), 30);
    }

    #[test]
    fn from_query_rejects_invalid_month() {
        let today = day(2026, 10, 18);
        let cursor = MonthCursor::from_query(Some("2026"), Some("13"), today);
        assert_eq!(cursor, MonthCursor { year: 2026, month: 10 });
        let cursor = MonthCursor::from_query(None, None, today);
        assert_eq!(cursor, MonthCursor { year: 2026, month: 10 });
        let cursor = MonthCursor::from_query(Some("2025"), Some("3"), today);
        assert_eq!(cursor, MonthCursor { year: 2025, month: 3 });
    }

    #[test]
    fn from_query_ignores_non_numeric_values() {
        let today = day(2026, 10, 18);
        let current = MonthCursor { year: 2026, month: 10 };
        assert_eq!(
            MonthCursor::from_query(Some("abc"), Some("5"), today),
            MonthCursor { year: 2026, month: 5 }
        );
        assert_eq!(MonthCursor::from_query(Some("2025"), Some(""), today), current);
        assert_eq!(MonthCursor::from_query(Some(""), Some(""), today), current);
        assert_eq!(
            MonthCursor::from_query(Some(" 2031 "), Some(" 7 "), today),
            MonthCursor { year: 2031, month: 7 }
        );
    }

    #[test]
    fn grid_layout_and_counts() {
        let records = RecordSet::new(vec![
            Record::new("2026-10-05", 1),
            Record::new("2026-10-05", 2),
            Record::new("2026-11-01", 3),
        ]);
        let cursor = MonthCursor::new(2026, 10).unwrap();
        let grid = build_month(&records, cursor, day(2026, 10, 18), Some("2026-10-05"));

        // 2026-10-01 is a Thursday.
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.title, "2026 October");
        assert_eq!(grid.prev, (2026, 9));
        assert_eq!(grid.next, (2026, 11));

        let fifth = &grid.days[4];
        assert_eq!(fifth.date, "2026-10-05");
        assert_eq!(fifth.count, 2);
        assert!(fifth.has_record);
        assert!(fifth.is_selected);
        assert!(!fifth.is_today);

        let today = &grid.days[17];
        assert!(today.is_today);
        assert!(!today.has_record);
        assert_eq!(grid.days.iter().filter(|d| d.is_selected).count(), 1);
    }

    #[test]
    fn sunday_first_month_has_no_blanks() {
        // 2026-02-01 is a Sunday.
        let grid = build_month(
            &RecordSet::default(),
            MonthCursor::new(2026, 2).unwrap(),
            day(2026, 10, 18),
            None,
        );
        assert_eq!(grid.leading_blanks, 0);
        assert!(grid.days.iter().all(|d| !d.is_today && !d.is_selected));
    }
}
