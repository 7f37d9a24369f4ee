use serde::{Deserialize, Serialize};

/// Visual bucket for a provider condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    ClearDay,
    ClearNight,
    Rain,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
}

impl IconCategory {
    /// Canonical provider code for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::ClearDay => "clear-day",
            IconCategory::ClearNight => "clear-night",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Sleet => "sleet",
            IconCategory::Wind => "wind",
            IconCategory::Fog => "fog",
            IconCategory::Cloudy => "cloudy",
            IconCategory::PartlyCloudyDay => "partly-cloudy-day",
            IconCategory::PartlyCloudyNight => "partly-cloudy-night",
        }
    }

    /// Name of the image asset drawn for this category.
    pub fn asset_name(&self) -> &'static str {
        match self {
            IconCategory::ClearDay => "clear_day",
            IconCategory::ClearNight => "clear_night",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Sleet => "sleet",
            IconCategory::Wind => "wind",
            IconCategory::Fog => "fog",
            IconCategory::Cloudy => "cloudy",
            IconCategory::PartlyCloudyDay => "partly_cloudy",
            IconCategory::PartlyCloudyNight => "cloudy_night",
        }
    }

    pub const fn all() -> &'static [IconCategory] {
        &[
            IconCategory::ClearDay,
            IconCategory::ClearNight,
            IconCategory::Rain,
            IconCategory::Snow,
            IconCategory::Sleet,
            IconCategory::Wind,
            IconCategory::Fog,
            IconCategory::Cloudy,
            IconCategory::PartlyCloudyDay,
            IconCategory::PartlyCloudyNight,
        ]
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<&str> for IconCategory {
    fn from(code: &str) -> Self {
        classify(code)
    }
}

/// Map a provider condition code to its icon category.
///
/// Matching is exact and case-sensitive. Anything outside the ten known codes,
/// including the empty string and codes the provider adds later, falls back to
/// [`IconCategory::ClearDay`].
pub fn classify(code: &str) -> IconCategory {
    match code {
        "clear-night" => IconCategory::ClearNight,
        "rain" => IconCategory::Rain,
        "snow" => IconCategory::Snow,
        "sleet" => IconCategory::Sleet,
        "wind" => IconCategory::Wind,
        "fog" => IconCategory::Fog,
        "cloudy" => IconCategory::Cloudy,
        "partly-cloudy-day" => IconCategory::PartlyCloudyDay,
        "partly-cloudy-night" => IconCategory::PartlyCloudyNight,
        // "clear-day" and every unrecognized code
        _ => IconCategory::ClearDay,
    }
}
