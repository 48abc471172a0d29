/// Name reported to MCP clients in the `initialize` handshake
pub const SERVER_NAME: &str = "weather-time-agent";

/// Agent identity advertised alongside the tools
pub const AGENT_NAME: &str = "sample_agent";
pub const AGENT_MODEL: &str = "gemini-2.5-flash";
pub const AGENT_DESCRIPTION: &str =
    "Agent to answer questions about the time and weather in a city.";
pub const AGENT_INSTRUCTION: &str =
    "You are a helpful agent who can answer user questions about the time and weather in a city.";

/// Environment variables read once at startup
pub const ENV_HOST: &str = "A2A_HOST";
pub const ENV_PORT: &str = "A2A_PORT";
pub const ENV_PROTOCOL: &str = "A2A_PROTOCOL";
pub const ENV_TRANSPORT: &str = "AGENT_TRANSPORT";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_TRANSPORT: &str = "http";

/// HTTP paths served in HTTP transport mode
pub const MCP_PATH: &str = "/mcp";
pub const AGENT_CARD_PATH: &str = "/.well-known/agent-card.json";

/// Agent card protocol fields
pub const A2A_PROTOCOL_VERSION: &str = "0.3.0";
pub const A2A_PREFERRED_TRANSPORT: &str = "JSONRPC";

/// strftime pattern for time reports, e.g. `2024-07-01 14:00:00 CEST+0200`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";
