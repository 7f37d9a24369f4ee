use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    format,
    icon::{IconCategory, classify},
};

/// Conditions at the moment the forecast was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Seconds since the Unix epoch.
    pub observed_at: i64,
    pub temperature_f: f64,
    /// 0.0..=1.0
    pub humidity: f64,
    /// 0.0..=1.0
    pub precip_probability: f64,
    pub condition_code: String,
    pub summary: String,
    /// IANA name used to render `observed_at`.
    pub timezone: String,
}

impl CurrentConditions {
    pub fn temperature(&self) -> i32 {
        format::rounded_temperature(self.temperature_f)
    }

    pub fn precip_percent(&self) -> i32 {
        format::precip_percent(self.precip_probability)
    }

    pub fn icon(&self) -> IconCategory {
        classify(&self.condition_code)
    }

    pub fn formatted_time(&self) -> Result<String> {
        format::formatted_clock_time(self.observed_at, &self.timezone)
    }
}

/// One forecasted hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    pub time: i64,
    pub temperature_f: f64,
    pub summary: String,
    pub condition_code: String,
    pub timezone: String,
}

impl HourlyConditions {
    pub fn temperature(&self) -> i32 {
        format::rounded_temperature(self.temperature_f)
    }

    pub fn icon(&self) -> IconCategory {
        classify(&self.condition_code)
    }

    /// Rendered in the local timezone, not `self.timezone`.
    pub fn hour_label(&self) -> Result<String> {
        format::formatted_hour_label(self.time)
    }
}

/// One forecasted day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyConditions {
    pub time: i64,
    pub summary: String,
    pub temperature_max_f: f64,
    pub condition_code: String,
    pub timezone: String,
}

impl DailyConditions {
    pub fn temperature_max(&self) -> i32 {
        format::rounded_temperature(self.temperature_max_f)
    }

    pub fn icon(&self) -> IconCategory {
        classify(&self.condition_code)
    }

    pub fn day_of_week(&self) -> Result<String> {
        format::formatted_day_of_week(self.time, &self.timezone)
    }
}

/// Current, hourly and daily conditions from a single payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyConditions>,
    pub daily: Vec<DailyConditions>,
}

impl Forecast {
    /// Timezone shared by every record in this forecast.
    pub fn timezone(&self) -> &str {
        &self.current.timezone
    }

    /// Labels for the daily view: `Today` for the first entry, weekday names after.
    pub fn daily_labels(&self) -> Result<Vec<String>> {
        self.daily
            .iter()
            .enumerate()
            .map(|(i, day)| if i == 0 { Ok("Today".to_string()) } else { day.day_of_week() })
            .collect()
    }
}
