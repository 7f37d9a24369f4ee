use thiserror::Error;

/// Errors produced while turning a forecast payload into display values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Required structure or field is absent or has the wrong type.
    #[error("Malformed forecast payload: {0}")]
    MalformedPayload(String),

    /// Timezone name is not a known IANA identifier.
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::MalformedPayload(err.to_string())
    }
}

pub type Result<T, E = ForecastError> = std::result::Result<T, E>;
