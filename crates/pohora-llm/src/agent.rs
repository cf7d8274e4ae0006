//! Tool-calling agent executor.
//!
//! The agent runs the standard function-calling loop: send the conversation
//! plus tool schemas, execute any tool calls the model returns, feed the
//! results back, and repeat until the model produces plain content (max 10
//! iterations). With an empty registry the first response is always final.

use std::time::Instant;

use pohora_core::{AgentError, Message};
use serde::Serialize;
use tracing::{debug, info};

use crate::client::{history_messages, ChatResponse, LlmClient};
use crate::tools::ToolRegistry;

/// Maximum number of tool call iterations to prevent infinite loops.
const MAX_TOOL_ITERATIONS: usize = 10;

/// Final result of an agent invocation.
///
/// Serialized as-is into the chat endpoint's `data` field; downstream
/// consumers read `output`.
#[derive(Debug, Clone, Serialize)]
pub struct AgentOutcome {
    /// The user input that triggered this invocation.
    pub input: String,
    /// The conversation history the agent was given.
    pub chat_history: Vec<Message>,
    /// The agent's final answer.
    pub output: String,
}

/// A conversational agent that may call registered tools before answering.
pub struct ToolCallingAgent {
    client: LlmClient,
    registry: ToolRegistry,
    system_prompt: String,
    verbose: bool,
}

impl ToolCallingAgent {
    /// Creates an agent over the given client, toolkit, and system prompt.
    pub fn new(client: LlmClient, registry: ToolRegistry, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            registry,
            system_prompt: system_prompt.into(),
            verbose: false,
        }
    }

    /// Enables per-iteration logging.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Invokes the agent with the latest user input and prior history.
    pub async fn invoke(&self, input: &str, history: &[Message]) -> Result<AgentOutcome, AgentError> {
        let start = Instant::now();

        let mut messages = history_messages(history)?;
        messages.push(LlmClient::user_message(input)?);

        let schemas = self.registry.list();
        let mut iterations = 0usize;

        loop {
            iterations += 1;
            if iterations > MAX_TOOL_ITERATIONS {
                return Err(AgentError::MaxToolIterations(MAX_TOOL_ITERATIONS));
            }

            let response = self
                .client
                .chat_with_tools(&self.system_prompt, &messages, &schemas)
                .await?;

            match response {
                ChatResponse::Content(llm_response) => {
                    if self.verbose {
                        info!(
                            "Agent finished after {} iteration(s) in {}ms ({} chars)",
                            iterations,
                            start.elapsed().as_millis(),
                            llm_response.content.len()
                        );
                    }
                    return Ok(AgentOutcome {
                        input: input.to_string(),
                        chat_history: history.to_vec(),
                        output: llm_response.content,
                    });
                }
                ChatResponse::ToolCalls { calls, metrics: _ } => {
                    if self.verbose {
                        info!(
                            "Agent requested tools: {:?}",
                            calls.iter().map(|c| &c.name).collect::<Vec<_>>()
                        );
                    }

                    messages.push(LlmClient::assistant_tool_calls_message(&calls)?);

                    for call in &calls {
                        let tool = self
                            .registry
                            .get(&call.name)
                            .ok_or_else(|| AgentError::UnknownTool(call.name.clone()))?;

                        let result = tool
                            .execute(call.arguments.clone())
                            .await
                            .map_err(|e| AgentError::ToolFailed(e.to_string()))?;

                        debug!("Tool {} returned {} chars", call.name, result.len());
                        messages.push(LlmClient::tool_result_message(&call.id, &result)?);
                    }
                }
            }
        }
    }
}
