//! LLM client and agent runtime for the Pohora.LK chat service.
//!
//! This crate provides the conversational side of the intelligence service:
//!
//! - [`LlmClient`] — OpenAI-compatible chat-completions client (works with
//!   Groq's OpenAI-compatible endpoint)
//! - [`ToolCallingAgent`] — agent loop that executes registered tools until
//!   the model produces a final answer
//! - [`ToolRegistry`] / [`Tool`] — the function-calling seam; the production
//!   agent runs with an empty registry
//! - [`LIVE_SYSTEM_PROMPT`] — the fixed Pohora.LK instruction prompt
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pohora_llm::{LlmClient, ToolCallingAgent, ToolRegistry, LIVE_SYSTEM_PROMPT};
//!
//! let client = LlmClient::new("llama-3.3-70b-versatile", Some(api_base), api_key);
//! let agent = ToolCallingAgent::new(client, ToolRegistry::new(), LIVE_SYSTEM_PROMPT);
//! let outcome = agent.invoke("How do I raise soil pH?", &history).await?;
//! println!("{}", outcome.output);
//! ```

mod agent;
mod client;
mod prompts;
mod tools;

pub use agent::{AgentOutcome, ToolCallingAgent};
pub use client::{ChatResponse, LlmClient, LlmMetrics, LlmResponse};
pub use pohora_core::{ToolCall, ToolResult, ToolSchema};
pub use prompts::LIVE_SYSTEM_PROMPT;
pub use tools::{Tool, ToolError, ToolRegistry};
