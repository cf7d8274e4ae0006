//! Model loading and inference for the Pohora.LK recommendation services.
//!
//! Trained models are shipped as flat JSON artifacts (exported parameter
//! dumps) and deserialized with serde on demand:
//!
//! - [`ModelArtifact`] — tagged union of the supported model families
//! - [`LabelEncoder`] — class-id to class-name lookup
//! - [`one_hot`] — categorical encoding against a fixed category list
//! - [`top_k`] — highest-probability class extraction
//!
//! # Example
//!
//! ```rust,ignore
//! use ndarray::array;
//! use pohora_inference::{ModelArtifact, LabelEncoder, top_k};
//!
//! let model = ModelArtifact::from_file("models/random_forest.json")?;
//! let encoder = LabelEncoder::from_file("models/encoder.json")?;
//!
//! let features = array![90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9];
//! let probs = model.predict_proba(features.view())?;
//! for (class_id, probability) in top_k(probs.view(), 3) {
//!     println!("{}: {:.3}", encoder.inverse_transform(class_id)?, probability);
//! }
//! ```

mod artifacts;
mod encoding;
mod error;

pub use artifacts::{
    DecisionTree, LabelEncoder, LinearModel, ModelArtifact, RandomForest, TreeRegressor, LEAF,
};
pub use encoding::{one_hot, top_k, CROP_TYPES, SOIL_TYPES};
pub use error::InferenceError;
