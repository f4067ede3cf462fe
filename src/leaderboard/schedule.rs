//! Daily announcement times.

use chrono::{DateTime, Days, NaiveTime, Utc};

/// The first of `hours_utc` (on the hour) strictly after `now`.
///
/// Returns `None` when no valid hour is configured.
pub fn next_announcement(now: DateTime<Utc>, hours_utc: &[u32]) -> Option<DateTime<Utc>> {
    let mut times: Vec<NaiveTime> = hours_utc
        .iter()
        .filter_map(|&hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect();
    times.sort();

    let today = now.date_naive();
    if let Some(time) = times.iter().find(|&&time| today.and_time(time).and_utc() > now) {
        return Some(today.and_time(*time).and_utc());
    }

    let tomorrow = today.checked_add_days(Days::new(1))?;
    times.first().map(|&time| tomorrow.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_later_today() {
        assert_eq!(next_announcement(utc(14, 0, 15), &[1, 7]), Some(utc(14, 1, 0)));
        assert_eq!(next_announcement(utc(14, 3, 0), &[7, 1]), Some(utc(14, 7, 0)));
    }

    #[test]
    fn test_exactly_on_the_hour_moves_on() {
        assert_eq!(next_announcement(utc(14, 1, 0), &[1, 7]), Some(utc(14, 7, 0)));
    }

    #[test]
    fn test_wraps_to_tomorrow() {
        assert_eq!(next_announcement(utc(14, 9, 0), &[1, 7]), Some(utc(15, 1, 0)));
        assert_eq!(next_announcement(utc(31, 23, 59), &[1, 7]), Some(Utc.with_ymd_and_hms(2025, 4, 1, 1, 0, 0).unwrap()));
    }

    #[test]
    fn test_no_hours() {
        assert_eq!(next_announcement(utc(14, 9, 0), &[]), None);
        assert_eq!(next_announcement(utc(14, 9, 0), &[25]), None);
    }
}
