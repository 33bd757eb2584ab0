use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;

use crate::capability::Capability;
use crate::constants::{
    API_KEY_ENV, DATA_TAGS, DESCRIPTION, OPENWEATHERMAP_API_BASE, TOOL_NAME, UNITS, USER_AGENT,
};
use crate::models::{GetWeatherRequest, LookupOutcome};

/// Weather lookup handler, served as an MCP tool and usable as a [`Capability`]
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    base_url: String,
    api_key_env: String,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: OPENWEATHERMAP_API_BASE.to_string(),
            api_key_env: API_KEY_ENV.to_string(),
            tool_router: Self::tool_router(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[cfg(test)]
    fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    /// Builds the current-weather URL for the given coordinates
    fn request_url(&self, latitude: f64, longitude: f64, api_key: &str) -> String {
        format!(
            "{}/weather?lat={:.6}&lon={:.6}&appid={}&units={}",
            self.base_url, latitude, longitude, api_key, UNITS
        )
    }

    /// Makes a single GET against the provider and keeps the body as-is
    async fn fetch_current_weather(&self, latitude: f64, longitude: f64) -> LookupOutcome {
        // Read on every call so a rotated key takes effect without a restart.
        let api_key = std::env::var(&self.api_key_env).unwrap_or_default();
        let url = self.request_url(latitude, longitude, &api_key);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::TransportFailure(e.without_url().to_string()),
        };

        match response.bytes().await {
            Ok(body) => LookupOutcome::Success(String::from_utf8_lossy(&body).into_owned()),
            Err(e) => LookupOutcome::TransportFailure(e.without_url().to_string()),
        }
    }

    /// Looks up the weather and returns the text to hand back to the model
    pub async fn lookup(&self, request: &GetWeatherRequest) -> String {
        let outcome = self
            .fetch_current_weather(request.latitude, request.longitude)
            .await;

        match outcome {
            LookupOutcome::Success(_) => {
                let city = request.city.as_deref().unwrap_or_default();
                let result = outcome.into_llm_text();
                tracing::info!(city, result = %result, "get-weather");
                result
            }
            LookupOutcome::TransportFailure(ref error) => {
                tracing::error!(error = %error, "Failed to get weather from provider");
                outcome.into_llm_text()
            }
        }
    }
}

#[async_trait]
impl Capability for Weather {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        schemars::schema_for!(GetWeatherRequest).to_value()
    }

    fn data_tags(&self) -> &[u32] {
        DATA_TAGS
    }

    async fn invoke(&self, arguments: Value) -> Result<String> {
        let request: GetWeatherRequest =
            serde_json::from_value(arguments).context("Invalid get_weather arguments")?;
        Ok(self.lookup(&request).await)
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "get-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Current weather for any coordinates, powered by the OpenWeatherMap API. \
                Results are returned as the provider's raw JSON in metric units."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current weather for a pair of coordinates
    #[tool(description = "Get current weather for a given city. If no city is provided, you \
should ask to clarify the city. If the city name is given, you should convert the city name to \
Latitude and Longitude geo coordinates, keeping Latitude and Longitude in decimal format.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.lookup(&request).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
