//! Calendar helpers shared by the calculations.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Returns the first day of the month containing `date`.
pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Returns the last day of the month containing `date`.
///
/// The only month without a successor is December of the last year chrono
/// represents, which ends on `NaiveDate::MAX`.
pub(crate) fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Yields the first day of every month from the month of `from` to the month of `to`.
pub(crate) fn month_starts(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let last = month_start(to);
    std::iter::successors(Some(month_start(from)), move |m| {
        if *m < last {
            m.checked_add_months(Months::new(1))
        } else {
            None
        }
    })
    .take_while(move |m| *m <= last)
}

/// Yields every date from `from` to `to`, both inclusive.
pub(crate) fn days_between(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(from), move |d| if *d < to { d.succ_opt() } else { None })
        .take_while(move |d| *d <= to)
}

/// Returns true for Monday to Friday.
pub(crate) fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_bounds_in_leap_february() {
        assert_eq!(month_start(make_date("2024-02-17")), make_date("2024-02-01"));
        assert_eq!(month_end(make_date("2024-02-17")), make_date("2024-02-29"));
        assert_eq!(month_end(make_date("2023-02-01")), make_date("2023-02-28"));
        assert_eq!(month_end(make_date("2024-12-31")), make_date("2024-12-31"));
    }

    #[test]
    fn test_month_starts_spans_year_change() {
        let months: Vec<NaiveDate> =
            month_starts(make_date("2023-11-20"), make_date("2024-02-01")).collect();
        assert_eq!(
            months,
            vec![
                make_date("2023-11-01"),
                make_date("2023-12-01"),
                make_date("2024-01-01"),
                make_date("2024-02-01"),
            ]
        );
    }

    #[test]
    fn test_days_between_is_inclusive() {
        let days: Vec<NaiveDate> =
            days_between(make_date("2024-01-30"), make_date("2024-02-01")).collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days_between(make_date("2024-01-02"), make_date("2024-01-01")).count(), 0);
    }

    #[test]
    fn test_helpers_reach_the_last_representable_month() {
        let last_year = NaiveDate::MAX.year();
        let ymd = |month, day| NaiveDate::from_ymd_opt(last_year, month, day).unwrap();
        assert_eq!(NaiveDate::MAX, ymd(12, 31));
        assert_eq!(month_end(ymd(12, 1)), NaiveDate::MAX);

        let months: Vec<NaiveDate> = month_starts(ymd(11, 30), NaiveDate::MAX).collect();
        assert_eq!(months, vec![ymd(11, 1), ymd(12, 1)]);

        let days: Vec<NaiveDate> = days_between(ymd(12, 30), NaiveDate::MAX).collect();
        assert_eq!(days, vec![ymd(12, 30), NaiveDate::MAX]);
    }

    #[test]
    fn test_is_weekday() {
        assert!(is_weekday(make_date("2024-01-05"))); // Friday
        assert!(!is_weekday(make_date("2024-01-06"))); // Saturday
        assert!(!is_weekday(make_date("2024-01-07"))); // Sunday
    }
}
