use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Get today's date in the timezone named by `canonical_timezone`,
/// e.g. "Pacific/Auckland".
pub fn current_local_date(canonical_timezone: &str) -> Result<Date, Error> {
    let Some(local_offset) = get_local_offset(canonical_timezone) else {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        return Err(Error::InvalidTimezone(canonical_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

#[cfg(test)]
mod timezone_tests {
    use super::{current_local_date, get_local_offset};

    #[test]
    fn utc_resolves_to_zero_offset() {
        let offset = get_local_offset("Etc/UTC").expect("Etc/UTC should be a valid timezone");
        assert!(offset.is_utc());
    }

    #[test]
    fn invalid_timezone_returns_none() {
        assert!(get_local_offset("Not/AZone").is_none());
    }

    #[test]
    fn current_local_date_rejects_invalid_timezone() {
        assert!(current_local_date("Not/AZone").is_err());
    }
}
