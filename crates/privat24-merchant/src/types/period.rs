/*
[INPUT]:  Optional start/end dates and the current local date
[OUTPUT]: Resolved statement periods in DD.MM.YYYY form
[POS]:    Data layer - statement date range
[UPDATE]: When the default range or date format changes
*/

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format expected by the bank
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format a date as `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Inclusive date range of a card statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatementPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// One calendar month back from `today`, through `today`
    ///
    /// Short months clamp to their last day (31.03 -> 29.02 in a leap year).
    pub fn month_until(today: NaiveDate) -> Self {
        Self::new(month_before(today), today)
    }

    /// Fill missing bounds relative to `today`
    ///
    /// A missing start is one month before `today`, not before `end`.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self::new(
            start.unwrap_or_else(|| month_before(today)),
            end.unwrap_or(today),
        )
    }

    /// Fill missing bounds relative to the local date at call time
    pub fn resolve_now(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::resolve(start, end, Local::now().date_naive())
    }

    pub fn start_formatted(&self) -> String {
        format_date(self.start)
    }

    pub fn end_formatted(&self) -> String {
        format_date(self.end)
    }
}

fn month_before(date: NaiveDate) -> NaiveDate {
    // Only fails before the minimum representable date.
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_default_range_on_fixed_day() {
        let period = StatementPeriod::month_until(date(2024, 3, 15));
        assert_eq!(period.start_formatted(), "15.02.2024");
        assert_eq!(period.end_formatted(), "15.03.2024");
    }

    #[rstest]
    #[case(date(2024, 3, 31), date(2024, 2, 29))]
    #[case(date(2023, 3, 31), date(2023, 2, 28))]
    #[case(date(2024, 1, 10), date(2023, 12, 10))]
    fn test_month_back_clamps(#[case] today: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(StatementPeriod::month_until(today).start, expected);
    }

    #[test]
    fn test_resolve_keeps_given_bounds() {
        let today = date(2024, 3, 15);
        let period = StatementPeriod::resolve(None, Some(date(2024, 1, 1)), today);
        assert_eq!(period.start, date(2024, 2, 15));
        assert_eq!(period.end, date(2024, 1, 1));

        let period = StatementPeriod::resolve(Some(date(2023, 5, 4)), None, today);
        assert_eq!(period.start_formatted(), "04.05.2023");
        assert_eq!(period.end, today);
    }

    #[test]
    fn test_format_pads_day_and_month() {
        assert_eq!(format_date(date(2025, 1, 2)), "02.01.2025");
    }
}
