//! Categorical encoding and confidence extraction.

use ndarray::{Array1, ArrayView1};

use crate::error::InferenceError;

/// Soil types the fertilizer model was trained on, in training order.
pub const SOIL_TYPES: [&str; 5] =
    ["Acidic Soil", "Alkaline Soil", "Loamy Soil", "Neutral Soil", "Peaty Soil"];

/// Crop types the fertilizer model was trained on, in training order.
pub const CROP_TYPES: [&str; 16] = [
    "Barley",
    "Coffee",
    "Cotton",
    "Ground Nuts",
    "Jute",
    "Maize",
    "Millets",
    "Oil Seeds",
    "Paddy",
    "Pulses",
    "Rice",
    "Rubber",
    "Sugarcane",
    "Tea",
    "Tobacco",
    "Wheat",
];

/// One-hot encodes `value` against a fixed category list.
///
/// The position is found by linear scan; a value missing from the list is an
/// [`InferenceError::UnknownCategory`].
pub fn one_hot(value: &str, categories: &[&str]) -> Result<Array1<f64>, InferenceError> {
    let position = categories
        .iter()
        .position(|c| *c == value)
        .ok_or_else(|| InferenceError::UnknownCategory(value.to_string()))?;

    let mut encoded = Array1::zeros(categories.len());
    encoded[position] = 1.0;
    Ok(encoded)
}

/// Returns the `k` highest-probability class ids, highest first.
///
/// Yields fewer than `k` entries when the distribution is shorter than `k`.
pub fn top_k(probs: ArrayView1<f64>, k: usize) -> Vec<(usize, f64)> {
    let mut indexed: Vec<(usize, f64)> = probs.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
    indexed.truncate(k);
    indexed
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn one_hot_sets_the_matching_position() {
        let encoded = one_hot("Loamy Soil", &SOIL_TYPES).unwrap();
        assert_eq!(encoded.len(), SOIL_TYPES.len());
        assert_eq!(encoded[2], 1.0);
        assert_eq!(encoded.sum(), 1.0);
    }

    #[test]
    fn one_hot_rejects_unknown_category() {
        let err = one_hot("Sandy Soil", &SOIL_TYPES).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownCategory(v) if v == "Sandy Soil"));
    }

    #[test]
    fn one_hot_is_case_sensitive() {
        assert!(one_hot("loamy soil", &SOIL_TYPES).is_err());
    }

    #[test]
    fn top_k_orders_by_descending_probability() {
        let probs = array![0.1, 0.5, 0.05, 0.35];
        let top = top_k(probs.view(), 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], (1, 0.5));
        assert_eq!(top[1], (3, 0.35));
        assert_eq!(top[2], (0, 0.1));
    }

    #[test]
    fn top_k_truncates_to_distribution_length() {
        let probs = array![0.7, 0.3];
        assert_eq!(top_k(probs.view(), 3).len(), 2);
    }
}
