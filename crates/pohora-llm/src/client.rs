//! OpenAI-compatible chat client.
//!
//! Works with the OpenAI API and any compatible endpoint; the production
//! deployment points it at Groq. Supports plain chat and tool calling.

use std::time::Instant;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionTool, ChatCompletionToolType, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse, FunctionCall, FunctionObject,
    },
    Client,
};
use pohora_core::{AgentError, Message, MessageAuthor, ToolCall, ToolSchema};
use tracing::info;

/// Token usage and timing metrics from an LLM call.
#[derive(Debug, Clone, Default)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// Complete response from an LLM call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}

/// Response from an LLM that may include tool calls.
#[derive(Debug, Clone)]
pub enum ChatResponse {
    Content(LlmResponse),
    ToolCalls { calls: Vec<ToolCall>, metrics: LlmMetrics },
}

/// Converts any error into an AgentError::LlmError.
fn llm_err(e: impl ToString) -> AgentError {
    AgentError::LlmError(e.to_string())
}

/// Maps a conversation history to chat-completion request messages.
pub fn history_messages(
    history: &[Message],
) -> Result<Vec<ChatCompletionRequestMessage>, AgentError> {
    history
        .iter()
        .map(|msg| match msg.sender {
            MessageAuthor::Human => LlmClient::user_message(&msg.content),
            MessageAuthor::Ai => LlmClient::assistant_message(&msg.content),
        })
        .collect()
}

/// Extracts content and metrics from a completion response.
fn extract_response(
    response: CreateChatCompletionResponse,
    elapsed_ms: u64,
) -> Result<LlmResponse, AgentError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| AgentError::LlmError("No response content".into()))?;

    let (input_tokens, output_tokens) = response
        .usage
        .map(|u| (u.prompt_tokens, u.completion_tokens))
        .unwrap_or((0, 0));

    info!(
        "LLM: {}ms, tokens: {}/{} (in/out)",
        elapsed_ms, input_tokens, output_tokens
    );

    Ok(LlmResponse {
        content,
        metrics: LlmMetrics { input_tokens, output_tokens, elapsed_ms },
    })
}

/// Client for OpenAI-compatible chat completion APIs.
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    default_model: String,
}

impl LlmClient {
    /// Creates a new client for the given model, API base URL, and key.
    ///
    /// With no base URL the client targets the OpenAI API and reads its key
    /// from the SDK's default environment variable.
    pub fn new(model: &str, api_base: Option<&str>, api_key: Option<&str>) -> Self {
        let mut config = OpenAIConfig::default();
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }

        Self {
            client: Client::with_config(config),
            default_model: model.to_string(),
        }
    }

    /// Sends a chat request with history and returns the complete response.
    pub async fn chat(
        &self,
        system_prompt: &str,
        history: &[Message],
        user_input: &str,
    ) -> Result<LlmResponse, AgentError> {
        let start = Instant::now();

        let mut messages = vec![Self::system_message(system_prompt)?];
        messages.extend(history_messages(history)?);
        messages.push(Self::user_message(user_input)?);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.default_model)
            .messages(messages)
            .build()
            .map_err(llm_err)?;

        let response = self.client.chat().create(request).await.map_err(llm_err)?;
        extract_response(response, start.elapsed().as_millis() as u64)
    }

    /// Sends a chat request with tools and returns content or tool calls.
    ///
    /// With an empty `tools` slice this degrades to a plain completion
    /// request (no `tools` field is sent).
    pub async fn chat_with_tools(
        &self,
        system_prompt: &str,
        messages: &[ChatCompletionRequestMessage],
        tools: &[ToolSchema],
    ) -> Result<ChatResponse, AgentError> {
        let start = Instant::now();

        let openai_tools: Vec<ChatCompletionTool> = tools
            .iter()
            .map(|t| ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject {
                    name: t.name.clone(),
                    description: Some(t.description.clone()),
                    parameters: Some(t.parameters.clone()),
                    strict: None,
                },
            })
            .collect();

        let mut all_messages = vec![Self::system_message(system_prompt)?];
        all_messages.extend(messages.iter().cloned());

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.default_model).messages(all_messages);

        if !openai_tools.is_empty() {
            request_builder.tools(openai_tools);
        }

        let request = request_builder.build().map_err(llm_err)?;
        let response = self.client.chat().create(request).await.map_err(llm_err)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let (input_tokens, output_tokens) = response
            .usage
            .as_ref()
            .map(|u| (u.prompt_tokens, u.completion_tokens))
            .unwrap_or((0, 0));

        let metrics = LlmMetrics { input_tokens, output_tokens, elapsed_ms };

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::LlmError("No response choices".into()))?;

        // Check for tool calls
        if let Some(tool_calls) = choice.message.tool_calls {
            if !tool_calls.is_empty() {
                let calls = tool_calls
                    .into_iter()
                    .map(|tc| {
                        let args: serde_json::Value = serde_json::from_str(&tc.function.arguments)
                            .unwrap_or(serde_json::Value::Null);
                        ToolCall {
                            id: tc.id,
                            name: tc.function.name,
                            arguments: args,
                        }
                    })
                    .collect();
                return Ok(ChatResponse::ToolCalls { calls, metrics });
            }
        }

        // Regular content response
        let content = choice
            .message
            .content
            .ok_or_else(|| AgentError::LlmError("No response content".into()))?;

        info!("LLM: {}ms, tokens: {}/{} (in/out)", elapsed_ms, input_tokens, output_tokens);

        Ok(ChatResponse::Content(LlmResponse { content, metrics }))
    }

    /// Helper to build a system message.
    pub fn system_message(content: &str) -> Result<ChatCompletionRequestMessage, AgentError> {
        Ok(ChatCompletionRequestMessage::System(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(content)
                .build()
                .map_err(llm_err)?,
        ))
    }

    /// Helper to build a user message.
    pub fn user_message(content: &str) -> Result<ChatCompletionRequestMessage, AgentError> {
        Ok(ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()
                .map_err(llm_err)?,
        ))
    }

    /// Helper to build an assistant message.
    pub fn assistant_message(content: &str) -> Result<ChatCompletionRequestMessage, AgentError> {
        Ok(ChatCompletionRequestMessage::Assistant(
            ChatCompletionRequestAssistantMessageArgs::default()
                .content(content)
                .build()
                .map_err(llm_err)?,
        ))
    }

    /// Helper to build the assistant message carrying tool call requests.
    pub fn assistant_tool_calls_message(
        calls: &[ToolCall],
    ) -> Result<ChatCompletionRequestMessage, AgentError> {
        let tool_calls: Vec<ChatCompletionMessageToolCall> = calls
            .iter()
            .map(|call| ChatCompletionMessageToolCall {
                id: call.id.clone(),
                r#type: ChatCompletionToolType::Function,
                function: FunctionCall {
                    name: call.name.clone(),
                    arguments: call.arguments.to_string(),
                },
            })
            .collect();

        Ok(ChatCompletionRequestMessage::Assistant(
            ChatCompletionRequestAssistantMessageArgs::default()
                .tool_calls(tool_calls)
                .build()
                .map_err(llm_err)?,
        ))
    }

    /// Helper to build a tool result message.
    pub fn tool_result_message(
        tool_call_id: &str,
        content: &str,
    ) -> Result<ChatCompletionRequestMessage, AgentError> {
        Ok(ChatCompletionRequestMessage::Tool(
            ChatCompletionRequestToolMessageArgs::default()
                .tool_call_id(tool_call_id)
                .content(content)
                .build()
                .map_err(llm_err)?,
        ))
    }
}
