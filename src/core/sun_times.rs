use crate::app_config::GlobalConfig;
use crate::core::trigger_time::TriggerTime;
use crate::errors::AppError;
use chrono::TimeZone;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    sys: WeatherSys,
}

#[derive(Debug, Deserialize)]
struct WeatherSys {
    sunrise: i64,
    sunset: i64,
}

/// Sunrise/sunset instants as UTC epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise_epoch: i64,
    pub raw_sunset_epoch: i64,
    pub sunset_epoch: i64, // raw sunset plus the configured adjustment
}

impl SunTimes {
    /// Applies `sunset_adjustment` to sunset only.
    pub fn new(sunrise_epoch: i64, raw_sunset_epoch: i64, sunset_adjustment: i64) -> Result<Self, AppError> {
        let sunset_epoch = raw_sunset_epoch.checked_add(sunset_adjustment).ok_or_else(|| {
            AppError::Time(format!(
                "Sunset epoch {} adjusted by {} seconds is out of range",
                raw_sunset_epoch, sunset_adjustment
            ))
        })?;
        Ok(SunTimes {
            sunrise_epoch,
            raw_sunset_epoch,
            sunset_epoch,
        })
    }

    pub fn trigger_times_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<(TriggerTime, TriggerTime), AppError> {
        Ok((
            TriggerTime::from_epoch_in(self.sunrise_epoch, tz)?,
            TriggerTime::from_epoch_in(self.sunset_epoch, tz)?,
        ))
    }

    pub fn local_trigger_times(&self) -> Result<(TriggerTime, TriggerTime), AppError> {
        Ok((
            TriggerTime::from_epoch_local(self.sunrise_epoch)?,
            TriggerTime::from_epoch_local(self.sunset_epoch)?,
        ))
    }
}

pub struct SunTimesClient {
    http_client: Client,
    api_url: String,
}

impl SunTimesClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        SunTimesClient {
            http_client: Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.weather_api_url.clone())
    }

    /// Queries current weather for `city_name` and returns today's sun instants.
    pub async fn fetch_sun_times(
        &self,
        api_key: &str,
        city_name: &str,
        sunset_adjustment: i64,
    ) -> Result<SunTimes, AppError> {
        let start_time = Instant::now();
        info!("🌍 Requesting sunrise/sunset for '{}' from {}", city_name, self.api_url);

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("q", city_name), ("appid", api_key)])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Weather request for '{}' failed: {}", city_name, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Weather(format!(
                "Weather provider returned {} for city '{}'",
                status, city_name
            )));
        }

        let body: WeatherResponse = response.json().await.map_err(|e| {
            AppError::Weather(format!("Unexpected weather response for '{}': {}", city_name, e))
        })?;

        let sun_times = SunTimes::new(body.sys.sunrise, body.sys.sunset, sunset_adjustment)?;
        debug!("Sunrise EPOCH: {}", sun_times.sunrise_epoch);
        debug!("Original Sunset EPOCH: {}", sun_times.raw_sunset_epoch);
        debug!("Adjusted Sunset EPOCH: {}", sun_times.sunset_epoch);
        debug!("Fetched sun times in {:?}", start_time.elapsed());
        Ok(sun_times)
    }

    /// Fetches sun times and converts them to local trigger times (sunrise, sunset).
    pub async fn fetch_trigger_times(
        &self,
        api_key: &str,
        city_name: &str,
        sunset_adjustment: i64,
    ) -> Result<(TriggerTime, TriggerTime), AppError> {
        let sun_times = self.fetch_sun_times(api_key, city_name, sunset_adjustment).await?;
        let (sunrise, sunset) = sun_times.local_trigger_times()?;
        debug!("Sunrise cron time: {}", sunrise.cron_expression());
        debug!("Sunset cron time: {}", sunset.cron_expression());
        info!("🌅 Sunrise at {} / 🌇 sunset at {} (local)", sunrise, sunset);
        Ok((sunrise, sunset))
    }
}
