use chrono::{Datelike, Local, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the system time in `tz`, or in the host's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub tz: Option<Tz>,
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// Friday of the week containing `today`, weeks starting on Sunday.
/// A Saturday therefore maps to the day before.
pub fn next_friday(today: NaiveDate) -> NaiveDate {
    let offset = 5 - i64::from(today.weekday().num_days_from_sunday());
    today + TimeDelta::days(offset)
}

/// `month/day` without zero padding, e.g. `6/13`.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_before_friday() {
        // Tuesday
        assert_eq!(short_date(next_friday(date(2025, 6, 10))), "6/13");
        // Sunday starts the week
        assert_eq!(short_date(next_friday(date(2025, 6, 15))), "6/20");
    }

    #[test]
    fn test_on_friday() {
        assert_eq!(short_date(next_friday(date(2025, 6, 13))), "6/13");
    }

    #[test]
    fn test_saturday_goes_back() {
        assert_eq!(short_date(next_friday(date(2025, 6, 14))), "6/13");
    }

    #[test]
    fn test_crosses_month_and_year() {
        // Wednesday
        assert_eq!(short_date(next_friday(date(2025, 7, 30))), "8/1");
        // Monday
        assert_eq!(short_date(next_friday(date(2024, 12, 30))), "1/3");
    }
}
