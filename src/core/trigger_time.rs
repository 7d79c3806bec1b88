use crate::errors::AppError;
use chrono::{DateTime, Local, TimeZone, Timelike};
use std::fmt;
use std::str::FromStr;

/// Which of a camera's two mode-switch URLs to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Sunrise,
    Sunset,
}

impl Transition {
    pub const ALL: [Transition; 2] = [Transition::Sunrise, Transition::Sunset];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Sunrise => "sunrise",
            Transition::Sunset => "sunset",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunrise" => Ok(Transition::Sunrise),
            "sunset" => Ok(Transition::Sunset),
            other => Err(AppError::Config(format!(
                "Unknown transition '{}'. Must be 'sunrise' or 'sunset'.",
                other
            ))),
        }
    }
}

/// Local wall-clock time at which a daily trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerTime {
    pub hour: u32,
    pub minute: u32,
}

impl TriggerTime {
    /// Decomposes a UTC epoch into hour and minute in `tz`, dropping seconds.
    pub fn from_epoch_in<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> Result<Self, AppError> {
        let utc = DateTime::from_timestamp(epoch_secs, 0)
            .ok_or_else(|| AppError::Time(format!("Epoch {} is out of range", epoch_secs)))?;
        let local = utc.with_timezone(tz);
        Ok(TriggerTime {
            hour: local.hour(),
            minute: local.minute(),
        })
    }

    /// Same as [`TriggerTime::from_epoch_in`] using the host's timezone.
    pub fn from_epoch_local(epoch_secs: i64) -> Result<Self, AppError> {
        Self::from_epoch_in(epoch_secs, &Local)
    }

    /// Daily cron schedule: `"<minute> <hour> * * *"`.
    pub fn cron_expression(&self) -> String {
        format!("{} {} * * *", self.minute, self.hour)
    }
}

impl fmt::Display for TriggerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Convert an epoch to the cron schedule that fires at its local hour and minute.
pub fn epoch_to_cron(epoch_secs: i64) -> Result<String, AppError> {
    Ok(TriggerTime::from_epoch_local(epoch_secs)?.cron_expression())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn transition_parses_any_case() {
        assert_eq!("SunRise".parse::<Transition>().unwrap(), Transition::Sunrise);
        assert_eq!(" sunset ".parse::<Transition>().unwrap(), Transition::Sunset);
        assert!("noon".parse::<Transition>().is_err());
    }

    #[test]
    fn utc_decomposition_drops_seconds() {
        // 2023-11-14T22:13:20Z
        let t = TriggerTime::from_epoch_in(1_700_000_000, &Utc).unwrap();
        assert_eq!(t, TriggerTime { hour: 22, minute: 13 });
        assert_eq!(t.cron_expression(), "13 22 * * *");
        assert_eq!(t.to_string(), "22:13");
    }

    #[test]
    fn offset_shifts_hour_and_wraps_day() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let t = TriggerTime::from_epoch_in(1_700_000_000, &cet).unwrap();
        assert_eq!(t, TriggerTime { hour: 23, minute: 13 });

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let t = TriggerTime::from_epoch_in(1_700_000_000, &plus_two).unwrap();
        assert_eq!(t, TriggerTime { hour: 0, minute: 13 });
    }

    #[test]
    fn out_of_range_epoch_is_an_error() {
        assert!(TriggerTime::from_epoch_in(i64::MAX, &Utc).is_err());
    }

    #[test]
    fn epoch_to_cron_matches_local_decomposition() {
        let expected = TriggerTime::from_epoch_in(1_700_038_200, &Local).unwrap();
        assert_eq!(
            epoch_to_cron(1_700_038_200).unwrap(),
            format!("{} {} * * *", expected.minute, expected.hour)
        );
    }
}
