use serde::Deserialize;
use tracing::debug;

use crate::{
    error::Result,
    model::{CurrentConditions, DailyConditions, Forecast, HourlyConditions},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DsCurrently {
    time: i64,
    temperature: f64,
    humidity: f64,
    precip_probability: f64,
    icon: String,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct DsHour {
    time: i64,
    temperature: f64,
    icon: String,
    summary: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DsDay {
    time: i64,
    temperature_max: f64,
    icon: String,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct DsBlock<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct DsResponse {
    timezone: String,
    currently: DsCurrently,
    hourly: DsBlock<DsHour>,
    daily: DsBlock<DsDay>,
}

/// Parse a forecast payload into a [`Forecast`].
///
/// Every section must be present and well-typed; a single bad field anywhere
/// fails the whole parse with [`ForecastError::MalformedPayload`]. Fields the
/// model does not use are ignored.
///
/// [`ForecastError::MalformedPayload`]: crate::ForecastError::MalformedPayload
pub fn parse(json: &str) -> Result<Forecast> {
    let parsed: DsResponse = serde_json::from_str(json)?;
    let timezone = parsed.timezone;

    let current = CurrentConditions {
        observed_at: parsed.currently.time,
        temperature_f: parsed.currently.temperature,
        humidity: parsed.currently.humidity,
        precip_probability: parsed.currently.precip_probability,
        condition_code: parsed.currently.icon,
        summary: parsed.currently.summary,
        timezone: timezone.clone(),
    };

    let hourly: Vec<HourlyConditions> = parsed
        .hourly
        .data
        .into_iter()
        .map(|h| HourlyConditions {
            time: h.time,
            temperature_f: h.temperature,
            summary: h.summary,
            condition_code: h.icon,
            timezone: timezone.clone(),
        })
        .collect();

    let daily: Vec<DailyConditions> = parsed
        .daily
        .data
        .into_iter()
        .map(|d| DailyConditions {
            time: d.time,
            summary: d.summary,
            temperature_max_f: d.temperature_max,
            condition_code: d.icon,
            timezone: timezone.clone(),
        })
        .collect();

    debug!(%timezone, hours = hourly.len(), days = daily.len(), "parsed forecast payload");

    Ok(Forecast { current, hourly, daily })
}
