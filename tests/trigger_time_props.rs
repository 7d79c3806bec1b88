use camdaynight::core::sun_times::SunTimes;
use camdaynight::core::trigger_time::{epoch_to_cron, TriggerTime};
use chrono::{DateTime, FixedOffset, Local, Timelike};
use proptest::prelude::*;

/// Instants between 1970 and 2100.
fn epoch_strategy() -> impl Strategy<Value = i64> {
    0i64..4_102_444_800
}

proptest! {
    #[test]
    fn cron_encodes_local_hour_and_minute(epoch in epoch_strategy()) {
        let cron = epoch_to_cron(epoch).unwrap();
        let fields: Vec<&str> = cron.split(' ').collect();
        prop_assert_eq!(fields.len(), 5);
        prop_assert_eq!(&fields[2..], &["*", "*", "*"]);

        let minute: u32 = fields[0].parse().unwrap();
        let hour: u32 = fields[1].parse().unwrap();
        prop_assert!(minute <= 59);
        prop_assert!(hour <= 23);

        let local = DateTime::from_timestamp(epoch, 0).unwrap().with_timezone(&Local);
        prop_assert_eq!(hour, local.hour());
        prop_assert_eq!(minute, local.minute());
    }

    #[test]
    fn fixed_offsets_stay_in_range(epoch in epoch_strategy(), offset_minutes in -720i32..=840) {
        let tz = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let t = TriggerTime::from_epoch_in(epoch, &tz).unwrap();
        prop_assert!(t.hour <= 23);
        prop_assert!(t.minute <= 59);
    }

    #[test]
    fn adjustment_never_touches_sunrise(
        sunrise in epoch_strategy(),
        sunset in epoch_strategy(),
        adjustment in -7200i64..=7200,
    ) {
        let times = SunTimes::new(sunrise, sunset, adjustment).unwrap();
        prop_assert_eq!(times.sunrise_epoch, sunrise);
        prop_assert_eq!(times.sunset_epoch, sunset + adjustment);
    }
}
