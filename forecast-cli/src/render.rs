//! Plain-text views of a parsed forecast.

use forecast_core::{Forecast, error::Result};

pub fn current(forecast: &Forecast) -> Result<String> {
    let current = &forecast.current;
    let icon = current.icon();

    Ok(format!(
        "At {} it will be\n\
         {}°  {} ({})\n\
         HUMIDITY     {}\n\
         RAIN/SNOW?   {}%\n\
         {}\n",
        current.formatted_time()?,
        current.temperature(),
        icon,
        icon.asset_name(),
        current.humidity,
        current.precip_percent(),
        current.summary,
    ))
}

pub fn hourly(forecast: &Forecast) -> Result<String> {
    let mut out = String::new();
    for hour in &forecast.hourly {
        out.push_str(&format!(
            "{:>5}  {:<19}  {:>4}°  {}\n",
            hour.hour_label()?,
            hour.icon(),
            hour.temperature(),
            hour.summary
        ));
    }
    Ok(out)
}

pub fn daily(forecast: &Forecast) -> Result<String> {
    let mut out = String::new();
    for (label, day) in forecast.daily_labels()?.iter().zip(&forecast.daily) {
        out.push_str(&format!(
            "{:<9}  {:<19}  {:>4}°  {}\n",
            label,
            day.icon(),
            day.temperature_max(),
            day.summary
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "timezone": "America/Los_Angeles",
        "currently": { "time": 1439233200, "temperature": 64.49, "humidity": 0.81,
                       "precipProbability": 0.73, "icon": "partly-cloudy-night", "summary": "Mostly Cloudy" },
        "hourly": { "data": [
            { "time": 1439229600, "temperature": 64.49, "icon": "rain", "summary": "Light Rain" },
            { "time": 1439233200, "temperature": 66.5, "icon": "cloudy", "summary": "Overcast" }
        ] },
        "daily": { "data": [
            { "time": 1439190000, "temperatureMax": 71.52, "icon": "rain", "summary": "Rain." },
            { "time": 1439276400, "temperatureMax": 69.04, "icon": "hail", "summary": "Hail?" }
        ] }
    }"#;

    fn forecast() -> Forecast {
        forecast_core::parse(PAYLOAD).unwrap()
    }

    #[test]
    fn current_view() {
        let text = current(&forecast()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "At 12:00 PM it will be");
        assert_eq!(lines[1], "64°  partly-cloudy-night (cloudy_night)");
        assert_eq!(lines[2], "HUMIDITY     0.81");
        assert_eq!(lines[3], "RAIN/SNOW?   73%");
        assert_eq!(lines[4], "Mostly Cloudy");
    }

    #[test]
    fn hourly_view_has_one_line_per_hour() {
        let text = hourly(&forecast()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("  64°  Light Rain"));
        assert!(lines[1].contains("cloudy"));
        assert!(lines[1].ends_with("  67°  Overcast"));
    }

    #[test]
    fn daily_view_starts_with_today() {
        let text = daily(&forecast()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Today "));
        assert!(lines[0].contains("  72°  "));
        assert!(lines[1].starts_with("Tuesday "));
        // unknown code falls back to clear-day
        assert!(lines[1].contains("clear-day"));
    }
}
