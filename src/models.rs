use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_MESSAGE;

// ============================================================================
// Tool Request Models
// ============================================================================

/// Arguments the model supplies when it calls the weather tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// The city name to get the weather for
    #[serde(default)]
    pub city: Option<String>,
    /// The latitude of the city, in decimal format, range should be in (-90, 90)
    pub latitude: f64,
    /// The longitude of the city, in decimal format, range should be in (-180, 180)
    pub longitude: f64,
}

// ============================================================================
// Lookup Outcome
// ============================================================================

/// Result of a single provider call.
///
/// Provider-side errors (bad key, unknown location) still arrive as a body and
/// are reported as `Success`; only a failed exchange is a `TransportFailure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success(String),
    TransportFailure(String),
}

impl LookupOutcome {
    /// Collapses the outcome into the text handed back to the model.
    pub fn into_llm_text(self) -> String {
        match self {
            LookupOutcome::Success(body) => body,
            LookupOutcome::TransportFailure(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_optional() {
        let request: GetWeatherRequest =
            serde_json::from_str(r#"{"latitude": 48.8566, "longitude": 2.3522}"#).unwrap();
        assert!(request.city.is_none());
        assert_eq!(request.latitude, 48.8566);
    }

    #[test]
    fn out_of_range_coordinates_are_accepted() {
        let request: GetWeatherRequest =
            serde_json::from_str(r#"{"city": "Nowhere", "latitude": 123.0, "longitude": -500.5}"#)
                .unwrap();
        assert_eq!(request.latitude, 123.0);
        assert_eq!(request.longitude, -500.5);
    }

    #[test]
    fn transport_failure_collapses_to_fallback() {
        let outcome = LookupOutcome::TransportFailure("connection refused".into());
        assert_eq!(outcome.into_llm_text(), FALLBACK_MESSAGE);
    }

    #[test]
    fn success_keeps_body() {
        let outcome = LookupOutcome::Success(r#"{"cod":401}"#.into());
        assert_eq!(outcome.into_llm_text(), r#"{"cod":401}"#);
    }
}
