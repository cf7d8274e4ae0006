//! Recommendation service — artifact loading, encoding, and inference.
//!
//! Artifacts are re-loaded from disk on every request; they are small
//! parameter dumps and the handlers carry no shared runtime state.

use ndarray::{array, Array1};
use pohora_config::Settings;
use pohora_inference::{
    one_hot, top_k, InferenceError, LabelEncoder, ModelArtifact, CROP_TYPES, SOIL_TYPES,
};

use crate::dto::{
    CropConfidence, CropFeatures, CropRecommendation, FertilizerConfidence, FertilizerFeatures,
    FertilizerRecommendation,
};
use crate::error::AppError;

/// Number of classes reported back in the confidence list.
const TOP_K: usize = 3;

fn model_load(e: InferenceError) -> AppError {
    AppError::ModelLoad(format!("Failed to load model files: {e}"))
}

fn prediction(e: InferenceError) -> AppError {
    AppError::BadRequest(format!("Prediction failed: {e}"))
}

/// Predicts the best crop plus the top-3 class confidences.
pub fn recommend_crop(
    settings: &Settings,
    features: &CropFeatures,
) -> Result<CropRecommendation, AppError> {
    let model = ModelArtifact::from_file(&settings.crop_model).map_err(model_load)?;
    let encoder = LabelEncoder::from_file(&settings.crop_encoder).map_err(model_load)?;

    let input = array![
        features.n,
        features.p,
        features.k,
        features.temperature,
        features.humidity,
        features.ph,
        features.rainfall,
    ];

    let encoded = model.predict(input.view()).map_err(prediction)?;
    let crop = encoder
        .inverse_transform(encoded.round() as usize)
        .map_err(prediction)?
        .to_string();

    let probs = model.predict_proba(input.view()).map_err(prediction)?;
    let confidences = top_k(probs.view(), TOP_K)
        .into_iter()
        .map(|(class_id, probability)| {
            Ok(CropConfidence {
                crop: encoder.inverse_transform(class_id).map_err(prediction)?.to_string(),
                probability,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(CropRecommendation { crop, confidences })
}

/// Predicts the best fertilizer plus the top-3 class confidences.
pub fn recommend_fertilizer(
    settings: &Settings,
    features: &FertilizerFeatures,
) -> Result<FertilizerRecommendation, AppError> {
    let model = ModelArtifact::from_file(&settings.fertilizer_model).map_err(model_load)?;
    let encoder = LabelEncoder::from_file(&settings.fertilizer_encoder).map_err(model_load)?;

    let input = fertilizer_features(features).map_err(prediction)?;

    let encoded = model.predict(input.view()).map_err(prediction)?;
    let fertilizer = encoder
        .inverse_transform(encoded.round() as usize)
        .map_err(prediction)?
        .to_string();

    let probs = model.predict_proba(input.view()).map_err(prediction)?;
    let confidences = top_k(probs.view(), TOP_K)
        .into_iter()
        .map(|(class_id, probability)| {
            Ok(FertilizerConfidence {
                fertilizer: encoder.inverse_transform(class_id).map_err(prediction)?.to_string(),
                probability,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(FertilizerRecommendation { fertilizer, confidences })
}

/// Builds the fertilizer feature vector: numeric measurements first, then the
/// one-hot soil and crop indicators, matching the training column order.
fn fertilizer_features(features: &FertilizerFeatures) -> Result<Array1<f64>, InferenceError> {
    let numeric = [
        features.temperature,
        features.moisture,
        features.rainfall,
        features.ph,
        features.nitrogen,
        features.phosphorous,
        features.potassium,
        features.carbon,
    ];

    let soil = one_hot(&features.soil, &SOIL_TYPES)?;
    let crop = one_hot(&features.crop, &CROP_TYPES)?;

    let mut input = Vec::with_capacity(numeric.len() + soil.len() + crop.len());
    input.extend_from_slice(&numeric);
    input.extend(soil.iter());
    input.extend(crop.iter());
    Ok(Array1::from(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features(soil: &str, crop: &str) -> FertilizerFeatures {
        FertilizerFeatures {
            temperature: 26.0,
            moisture: 38.0,
            rainfall: 120.0,
            ph: 6.2,
            nitrogen: 12.0,
            phosphorous: 8.0,
            potassium: 10.0,
            carbon: 1.5,
            soil: soil.into(),
            crop: crop.into(),
        }
    }

    #[test]
    fn fertilizer_vector_is_numeric_then_soil_then_crop() {
        let input = fertilizer_features(&sample_features("Loamy Soil", "Rice")).unwrap();
        assert_eq!(input.len(), 8 + SOIL_TYPES.len() + CROP_TYPES.len());
        assert_eq!(input[0], 26.0);
        // "Loamy Soil" is index 2 of the soil block.
        assert_eq!(input[8 + 2], 1.0);
        assert_eq!(input.slice(ndarray::s![8..8 + SOIL_TYPES.len()]).sum(), 1.0);
        // "Rice" is index 10 of the crop block.
        assert_eq!(input[8 + SOIL_TYPES.len() + 10], 1.0);
        assert_eq!(input.slice(ndarray::s![8 + SOIL_TYPES.len()..]).sum(), 1.0);
    }

    #[test]
    fn unknown_soil_is_rejected() {
        let err = fertilizer_features(&sample_features("Sandy Soil", "Rice")).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownCategory(_)));
    }
}
