//! Chat execution service — maps the conversation payload onto the agent.

use pohora_config::Settings;
use pohora_core::Message;
use pohora_llm::{AgentOutcome, LlmClient, ToolCallingAgent, ToolRegistry, LIVE_SYSTEM_PROMPT};

use crate::dto::ConversationPayload;
use crate::error::AppError;

/// Runs the agent with the last message as input and the rest as history.
pub async fn run_agent(
    settings: &Settings,
    chat: ConversationPayload,
) -> Result<AgentOutcome, AppError> {
    let (latest, earlier) = chat
        .messages
        .split_last()
        .ok_or_else(|| AppError::BadRequest("Chat must contain at least one message".into()))?;

    let history: Vec<Message> = earlier
        .iter()
        .map(|m| Message { sender: m.sender, content: m.content.clone() })
        .collect();

    let client = LlmClient::new(
        &settings.chat_model,
        settings.chat_api_base.as_deref(),
        settings.chat_api_key.as_deref(),
    );

    // The agent toolkit (contextualizers) is empty for now.
    let agent = ToolCallingAgent::new(client, ToolRegistry::new(), LIVE_SYSTEM_PROMPT)
        .verbose(settings.agent_verbose);

    agent
        .invoke(&latest.content, &history)
        .await
        .map_err(|e| AppError::Agent(e.to_string()))
}
