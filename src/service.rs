use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::agent::{AgentProfile, SAMPLE_AGENT};
use crate::constants::SERVER_NAME;
use crate::models::{CityRequest, ToolOutcome};
use crate::timezone::{get_current_time_at, Clock, SystemClock, TimeError};
use crate::weather::get_weather;

/// Tool handler exposing the weather and time lookups to agent runtimes
#[derive(Clone)]
pub struct CityAgent {
    profile: AgentProfile,
    clock: Arc<dyn Clock>,
    tool_router: ToolRouter<Self>,
}

impl CityAgent {
    /// Creates a handler for the sample agent backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            profile: SAMPLE_AGENT,
            clock,
            tool_router: Self::tool_router(),
        }
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Registered tools, sorted by name
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }
}

impl Default for CityAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a lookup outcome onto an MCP tool result; unknown cities are tool
/// errors, not protocol errors
fn outcome_to_result(outcome: ToolOutcome) -> Result<CallToolResult, McpError> {
    let success = outcome.is_success();
    let value = serde_json::to_value(&outcome)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))?;

    if success {
        Ok(CallToolResult::structured(value))
    } else {
        Ok(CallToolResult::structured_error(value))
    }
}

/// Timezone failures are host misconfiguration, surfaced as protocol errors
fn time_error_to_mcp(e: TimeError) -> McpError {
    tracing::error!("Timezone database unusable: {}", e);
    McpError::internal_error(format!("Failed to resolve timezone: {}", e), None)
}

#[tool_handler]
impl ServerHandler for CityAgent {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: Some(self.profile.name.to_string()),
                website_url: None,
            },
            instructions: Some(format!(
                "{} {} Supported cities: New York, London, Tokyo, Paris, Sydney.",
                self.profile.description, self.profile.instruction
            )),
        }
    }
}

#[tool_router]
impl CityAgent {
    /// Retrieves the canned weather report for a city
    #[tool(description = "Retrieves the current weather report for a specified city. Provide the city name (e.g., 'London' or 'new york').")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for city: {}", request.city);

        let outcome = get_weather(&request.city);
        if !outcome.is_success() {
            tracing::debug!("No weather data for city: {}", request.city);
        }

        outcome_to_result(outcome)
    }

    /// Returns the current time in a city
    #[tool(description = "Returns the current time in a specified city. Provide the city name (e.g., 'Tokyo' or 'paris').")]
    async fn get_current_time(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting current time for city: {}", request.city);

        let outcome =
            get_current_time_at(&request.city, self.clock.as_ref()).map_err(time_error_to_mcp)?;

        outcome_to_result(outcome)
    }
}
