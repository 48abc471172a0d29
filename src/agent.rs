use rmcp::model::Tool;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::{
    A2A_PREFERRED_TRANSPORT, A2A_PROTOCOL_VERSION, AGENT_DESCRIPTION, AGENT_INSTRUCTION,
    AGENT_MODEL, AGENT_NAME,
};

/// Identity of the LLM agent the tools are built for. The reasoning loop
/// itself runs in the remote agent runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub model: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
}

pub const SAMPLE_AGENT: AgentProfile = AgentProfile {
    name: AGENT_NAME,
    model: AGENT_MODEL,
    description: AGENT_DESCRIPTION,
    instruction: AGENT_INSTRUCTION,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    pub streaming: bool,
    pub push_notifications: bool,
    pub state_transition_history: bool,
}

/// A2A discovery document published at the well-known agent card path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub protocol_version: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub preferred_transport: String,
    pub version: String,
    pub capabilities: AgentCapabilities,
    pub default_input_modes: Vec<String>,
    pub default_output_modes: Vec<String>,
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    pub fn new(profile: &AgentProfile, config: &Config, tools: &[Tool]) -> Self {
        let skills = tools
            .iter()
            .map(|tool| AgentSkill {
                id: format!("{}-{}", profile.name, tool.name),
                name: tool.name.to_string(),
                description: tool
                    .description
                    .as_deref()
                    .unwrap_or(profile.description)
                    .to_string(),
                tags: vec![profile.name.to_string(), tool.name.to_string()],
            })
            .collect();

        Self {
            protocol_version: A2A_PROTOCOL_VERSION.to_string(),
            name: profile.name.to_string(),
            description: profile.description.to_string(),
            url: config.public_url(),
            preferred_transport: A2A_PREFERRED_TRANSPORT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            capabilities: AgentCapabilities {
                streaming: true,
                push_notifications: false,
                state_transition_history: false,
            },
            default_input_modes: vec!["text/plain".to_string()],
            default_output_modes: vec!["text/plain".to_string()],
            skills,
        }
    }
}
