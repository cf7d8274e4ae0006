//! Core domain types and error definitions for the Pohora.LK services.
//!
//! This crate provides the fundamental types shared across the workspace:
//!
//! - [`AgentError`] — Error type for agent and LLM operations
//! - [`Message`] and [`MessageAuthor`] — Conversation message types
//! - [`ToolCall`], [`ToolResult`], [`ToolSchema`] — Tool interaction types
//!
//! # Example
//!
//! ```rust
//! use pohora_core::{Message, MessageAuthor};
//!
//! let msg = Message::human("How much urea per acre for paddy?");
//! assert_eq!(msg.sender, MessageAuthor::Human);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during agent execution or LLM operations.
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM API request failed.
    #[error("LLM request failed: {0}")]
    LlmError(String),

    /// Failed to parse structured output from the LLM.
    #[error("Failed to parse structured output: {0}")]
    ParseError(String),

    /// A tool requested by the LLM is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool execution failed.
    #[error("Tool execution failed: {0}")]
    ToolFailed(String),

    /// Maximum tool-loop iterations exceeded.
    #[error("Max tool iterations ({0}) exceeded")]
    MaxToolIterations(usize),
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::ParseError(err.to_string())
    }
}

/// Author of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAuthor {
    /// Message produced by the agent.
    Ai,
    /// Message typed by the user.
    Human,
}

/// A single message in a conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub sender: MessageAuthor,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new human message.
    pub fn human(content: impl Into<String>) -> Self {
        Self { sender: MessageAuthor::Human, content: content.into() }
    }

    /// Creates a new AI message.
    pub fn ai(content: impl Into<String>) -> Self {
        Self { sender: MessageAuthor::Ai, content: content.into() }
    }
}

// ============================================================================
// Tool Types
// ============================================================================

/// A tool call requested by the LLM.
///
/// When an LLM decides to use a tool, it returns one or more `ToolCall`
/// instances with the tool name and arguments to execute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call (used to match results).
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments to pass to the tool (JSON object).
    pub arguments: serde_json::Value,
}

/// Result of a tool execution to be sent back to the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID from the original tool call request.
    pub tool_call_id: String,
    /// Output content from the tool execution.
    pub content: String,
}

/// JSON schema describing a tool for LLM function calling.
///
/// This follows the OpenAI function calling format and is used
/// to inform the LLM about available tools and their parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique name of the tool (e.g., "fetch_news_by_category").
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema object describing the tool's parameters.
    pub parameters: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Message::ai("hello")).unwrap();
        assert_eq!(json, r#"{"sender":"ai","content":"hello"}"#);
    }

    #[test]
    fn message_deserializes_human_sender() {
        let msg: Message =
            serde_json::from_str(r#"{"sender":"human","content":"hi"}"#).unwrap();
        assert_eq!(msg.sender, MessageAuthor::Human);
        assert_eq!(msg.content, "hi");
    }
}
