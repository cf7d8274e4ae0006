//! Data transfer objects for HTTP message serialization.

use pohora_core::MessageAuthor;
use pohora_llm::AgentOutcome;
use serde::{Deserialize, Serialize};

// === Chat Types ===

/// A single message in a conversation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    pub content: String,
    #[serde(default = "default_sender")]
    pub sender: MessageAuthor,
}

fn default_sender() -> MessageAuthor {
    MessageAuthor::Human
}

/// Complete chat payload: the last message is the user's latest input,
/// everything before it is history.
#[derive(Debug, Deserialize)]
pub struct ConversationPayload {
    pub messages: Vec<MessagePayload>,
}

/// Response from the chat agent endpoint.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub data: AgentOutcome,
    /// Execution time in whole seconds.
    pub time: u64,
}

// === Recommendation Types ===

/// Features for a crop recommendation, in model feature order.
#[derive(Debug, Deserialize)]
pub struct CropFeatures {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

/// Features for a fertilizer recommendation.
///
/// `soil` and `crop` are validated against the hard-coded category lists
/// in `pohora-inference`.
#[derive(Debug, Deserialize)]
pub struct FertilizerFeatures {
    pub temperature: f64,
    pub moisture: f64,
    pub rainfall: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorous: f64,
    pub potassium: f64,
    pub carbon: f64,
    pub soil: String,
    pub crop: String,
}

/// One entry of a top-k confidence list for crops.
#[derive(Debug, Serialize)]
pub struct CropConfidence {
    pub crop: String,
    pub probability: f64,
}

/// Response from the crop recommendation endpoint.
#[derive(Debug, Serialize)]
pub struct CropRecommendation {
    pub crop: String,
    pub confidences: Vec<CropConfidence>,
}

/// One entry of a top-k confidence list for fertilizers.
#[derive(Debug, Serialize)]
pub struct FertilizerConfidence {
    pub fertilizer: String,
    pub probability: f64,
}

/// Response from the fertilizer recommendation endpoint.
#[derive(Debug, Serialize)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
    pub confidences: Vec<FertilizerConfidence>,
}

// === Service Banners ===

/// Banner message returned by the root and ping routes.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}
