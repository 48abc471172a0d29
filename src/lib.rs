//! Weather and time lookup tools for a city-aware LLM agent, served over MCP.

pub mod agent;
pub mod config;
pub mod constants;
pub mod formatters;
pub mod models;
pub mod server;
pub mod service;
pub mod timezone;
pub mod weather;

pub use config::{Config, ConfigError, Protocol, Transport};
pub use models::ToolOutcome;
pub use service::CityAgent;
pub use timezone::{get_current_time, get_current_time_at, Clock, SystemClock, TimeError};
pub use weather::get_weather;
