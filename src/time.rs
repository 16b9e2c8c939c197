//! Timestamps for log events.
use std::time::SystemTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub min: i64,
    pub sec: i64,
}
impl DateTime {
    // Epoch time assumes that every day is the same length, 24 * 60 * 60 seconds.
    // It ignores leap seconds.
    #[must_use]
    pub fn new(epoch_seconds: i64) -> Self {
        let days = epoch_seconds.div_euclid(86400);
        let secs_of_day = epoch_seconds.rem_euclid(86400);
        // Converts days since 1970-01-01 to a proleptic Gregorian date.
        // Years start on March 1 so the leap day is last.
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let day_of_era = z.rem_euclid(146_097);
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let mp = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = year_of_era + era * 400 + i64::from(month <= 2);
        Self {
            year,
            month,
            day,
            hour: secs_of_day / 3600,
            min: (secs_of_day % 3600) / 60,
            sec: secs_of_day % 60,
        }
    }
}

#[allow(clippy::module_name_repetitions)]
pub trait FormatTime {
    fn epoch_ns(&self) -> u128;
    fn to_datetime(&self) -> DateTime;
    fn iso8601_utc(&self) -> String;
}

impl FormatTime for SystemTime {
    /// Times before the epoch come out as zero.
    fn epoch_ns(&self) -> u128 {
        self.duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    }

    fn to_datetime(&self) -> DateTime {
        let secs = self
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        DateTime::new(i64::try_from(secs).unwrap_or(i64::MAX / 2))
    }

    fn iso8601_utc(&self) -> String {
        let dt = self.to_datetime();
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            dt.year, dt.month, dt.day, dt.hour, dt.min, dt.sec
        )
    }
}
