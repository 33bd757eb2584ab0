/// User agent string for HTTP requests
pub const USER_AGENT: &str = "get-weather/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHERMAP_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Unit system requested from the provider
pub const UNITS: &str = "metric";

/// Returned to the model when the provider cannot be reached
pub const FALLBACK_MESSAGE: &str = "can not get the weather information at the moment";

/// Data tags this handler subscribes to
pub const DATA_TAGS: &[u32] = &[0x62];

pub const TOOL_NAME: &str = "get_weather";

/// Tool description shown to the model when it selects a function
pub const DESCRIPTION: &str = "Get current weather for a given city. If no city is provided, you \
should ask to clarify the city. If the city name is given, you should convert the city name to \
Latitude and Longitude geo coordinates, keeping Latitude and Longitude in decimal format.";
