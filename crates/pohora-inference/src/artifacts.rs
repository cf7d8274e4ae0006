//! Model artifact schemas and inference routines.
//!
//! Artifacts are parameter dumps of trained estimators. Trees use the
//! parallel-array layout of their source estimators: `children_left[i] == -1`
//! marks node `i` as a leaf, and `value[i]` holds the leaf payload (per-class
//! counts for classifiers, a single mean for regressors).

use std::fs;
use std::path::Path;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Sentinel child index marking a leaf node.
pub const LEAF: i64 = -1;

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, InferenceError> {
    let content = fs::read_to_string(path)
        .map_err(|e| InferenceError::io(path.display().to_string(), e))?;
    serde_json::from_str(&content).map_err(|e| InferenceError::parse(path.display().to_string(), e))
}

/// A linear model: `y = coefficients · x + intercept`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    fn predict(&self, x: ArrayView1<f64>) -> Result<f64, InferenceError> {
        if x.len() != self.coefficients.len() {
            return Err(InferenceError::FeatureMismatch {
                expected: self.coefficients.len(),
                got: x.len(),
            });
        }
        Ok(ndarray::aview1(&self.coefficients).dot(&x) + self.intercept)
    }
}

/// A single decision tree in parallel-array form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self) -> Result<(), InferenceError> {
        let n = self.node_count();
        if n == 0 {
            return Err(InferenceError::MalformedModel("tree has no nodes".into()));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(InferenceError::MalformedModel(
                "tree node arrays disagree on length".into(),
            ));
        }
        Ok(())
    }

    /// Walks the tree from the root and returns the leaf value row.
    ///
    /// Branch rule: `x[feature] <= threshold` descends left, otherwise right.
    pub fn apply(&self, x: ArrayView1<f64>) -> Result<&[f64], InferenceError> {
        let n = self.node_count();
        let mut node = 0usize;

        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..n {
            let left = self.children_left[node];
            if left == LEAF {
                return Ok(&self.value[node]);
            }

            let feature = usize::try_from(self.feature[node]).map_err(|_| {
                InferenceError::MalformedModel(format!("negative feature index at node {node}"))
            })?;
            if feature >= x.len() {
                return Err(InferenceError::FeatureMismatch { expected: feature + 1, got: x.len() });
            }

            let next = if x[feature] <= self.threshold[node] { left } else { self.children_right[node] };
            node = usize::try_from(next)
                .ok()
                .filter(|&i| i < n)
                .ok_or_else(|| {
                    InferenceError::MalformedModel(format!("child index {next} out of range"))
                })?;
        }

        Err(InferenceError::MalformedModel("tree traversal did not reach a leaf".into()))
    }
}

/// A single-tree regressor with a recorded feature count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeRegressor {
    pub n_features: usize,
    pub tree: DecisionTree,
}

impl TreeRegressor {
    fn predict(&self, x: ArrayView1<f64>) -> Result<f64, InferenceError> {
        if x.len() != self.n_features {
            return Err(InferenceError::FeatureMismatch { expected: self.n_features, got: x.len() });
        }
        let leaf = self.tree.apply(x)?;
        leaf.first()
            .copied()
            .ok_or_else(|| InferenceError::MalformedModel("empty leaf value".into()))
    }
}

/// A random-forest classifier: an ensemble of trees whose leaf rows hold
/// per-class sample counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    fn validate(&self) -> Result<(), InferenceError> {
        if self.trees.is_empty() {
            return Err(InferenceError::MalformedModel("forest has no trees".into()));
        }
        for tree in &self.trees {
            tree.validate()?;
        }
        Ok(())
    }

    fn n_classes(&self) -> Result<usize, InferenceError> {
        self.trees
            .first()
            .and_then(|t| t.value.first())
            .map(|row| row.len())
            .ok_or_else(|| InferenceError::MalformedModel("forest has no trees".into()))
    }

    /// Averages the normalized leaf distributions of every tree.
    fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, InferenceError> {
        if x.len() != self.n_features {
            return Err(InferenceError::FeatureMismatch { expected: self.n_features, got: x.len() });
        }

        let n_classes = self.n_classes()?;
        let mut summed = Array1::<f64>::zeros(n_classes);

        for tree in &self.trees {
            let leaf = tree.apply(x)?;
            if leaf.len() != n_classes {
                return Err(InferenceError::MalformedModel(
                    "trees disagree on class count".into(),
                ));
            }
            let total: f64 = leaf.iter().sum();
            if total <= 0.0 {
                return Err(InferenceError::MalformedModel(
                    "leaf with non-positive sample count".into(),
                ));
            }
            for (slot, count) in summed.iter_mut().zip(leaf) {
                *slot += count / total;
            }
        }

        Ok(summed / self.trees.len() as f64)
    }
}

/// A model artifact loaded from a flat JSON file, tagged by `model_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression(LinearModel),
    DecisionTreeRegressor(TreeRegressor),
    RandomForestClassifier(RandomForest),
}

impl ModelArtifact {
    /// Loads and validates an artifact from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let artifact: Self = load_json(path.as_ref())?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), InferenceError> {
        match self {
            Self::LinearRegression(model) => {
                if model.coefficients.is_empty() {
                    return Err(InferenceError::MalformedModel(
                        "linear model has no coefficients".into(),
                    ));
                }
                Ok(())
            }
            Self::DecisionTreeRegressor(model) => model.tree.validate(),
            Self::RandomForestClassifier(model) => model.validate(),
        }
    }

    /// Number of input features the model expects.
    pub fn n_features(&self) -> usize {
        match self {
            Self::LinearRegression(model) => model.coefficients.len(),
            Self::DecisionTreeRegressor(model) => model.n_features,
            Self::RandomForestClassifier(model) => model.n_features,
        }
    }

    /// Predicts a single numeric outcome.
    ///
    /// For the forest classifier the outcome is the encoded class id
    /// (the argmax of the averaged class distribution).
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, InferenceError> {
        match self {
            Self::LinearRegression(model) => model.predict(x),
            Self::DecisionTreeRegressor(model) => model.predict(x),
            Self::RandomForestClassifier(model) => {
                let probs = model.predict_proba(x)?;
                Ok(argmax(probs.view()) as f64)
            }
        }
    }

    /// Predicts the per-class probability distribution.
    ///
    /// Only classifiers expose probabilities; regressors return
    /// [`InferenceError::NotAClassifier`].
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, InferenceError> {
        match self {
            Self::RandomForestClassifier(model) => model.predict_proba(x),
            _ => Err(InferenceError::NotAClassifier),
        }
    }
}

/// Index of the largest value; ties resolve to the lowest index.
fn argmax(values: ArrayView1<f64>) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

/// Maps encoded class ids back to class names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Loads an encoder from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        load_json(path.as_ref())
    }

    /// Returns the class name for an encoded id.
    pub fn inverse_transform(&self, id: usize) -> Result<&str, InferenceError> {
        self.classes
            .get(id)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClass(id))
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the encoder holds no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Stump splitting on feature 0 at 0.5; leaves hold class counts.
    fn stump(low: [f64; 2], high: [f64; 2]) -> DecisionTree {
        DecisionTree {
            children_left: vec![1, LEAF, LEAF],
            children_right: vec![2, LEAF, LEAF],
            feature: vec![0, -2, -2],
            threshold: vec![0.5, -2.0, -2.0],
            value: vec![vec![0.0, 0.0], low.to_vec(), high.to_vec()],
        }
    }

    #[test]
    fn linear_predict_is_dot_plus_intercept() {
        let model = ModelArtifact::LinearRegression(LinearModel {
            coefficients: vec![2.0, -1.0, 0.5],
            intercept: 10.0,
        });
        let y = model.predict(array![1.0, 2.0, 4.0].view()).unwrap();
        assert_eq!(y, 2.0 - 2.0 + 2.0 + 10.0);
    }

    #[test]
    fn linear_rejects_wrong_feature_count() {
        let model = ModelArtifact::LinearRegression(LinearModel {
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
        });
        let err = model.predict(array![1.0].view()).unwrap_err();
        assert!(matches!(err, InferenceError::FeatureMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn tree_traversal_picks_the_right_leaf() {
        let tree = stump([4.0, 0.0], [0.0, 4.0]);
        assert_eq!(tree.apply(array![0.2, 9.9].view()).unwrap(), &[4.0, 0.0]);
        assert_eq!(tree.apply(array![0.9, 9.9].view()).unwrap(), &[0.0, 4.0]);
        // Boundary goes left.
        assert_eq!(tree.apply(array![0.5, 9.9].view()).unwrap(), &[4.0, 0.0]);
    }

    #[test]
    fn tree_regressor_returns_leaf_mean() {
        let model = ModelArtifact::DecisionTreeRegressor(TreeRegressor {
            n_features: 1,
            tree: DecisionTree {
                children_left: vec![1, LEAF, LEAF],
                children_right: vec![2, LEAF, LEAF],
                feature: vec![0, -2, -2],
                threshold: vec![10.0, -2.0, -2.0],
                value: vec![vec![0.0], vec![3.5], vec![7.25]],
            },
        });
        assert_eq!(model.predict(array![4.0].view()).unwrap(), 3.5);
        assert_eq!(model.predict(array![40.0].view()).unwrap(), 7.25);
    }

    #[test]
    fn forest_averages_normalized_leaf_counts() {
        let forest = RandomForest {
            n_features: 2,
            // First tree votes [1, 0], second splits 3:1.
            trees: vec![stump([4.0, 0.0], [0.0, 4.0]), stump([3.0, 1.0], [1.0, 3.0])],
        };
        let model = ModelArtifact::RandomForestClassifier(forest);

        let probs = model.predict_proba(array![0.0, 0.0].view()).unwrap();
        assert!((probs[0] - 0.875).abs() < 1e-12);
        assert!((probs[1] - 0.125).abs() < 1e-12);
        assert!((probs.sum() - 1.0).abs() < 1e-12);

        // predict returns the argmax as an encoded class id.
        assert_eq!(model.predict(array![0.0, 0.0].view()).unwrap(), 0.0);
        assert_eq!(model.predict(array![1.0, 0.0].view()).unwrap(), 1.0);
    }

    #[test]
    fn forest_rejects_wrong_feature_count() {
        let model = ModelArtifact::RandomForestClassifier(RandomForest {
            n_features: 2,
            trees: vec![stump([1.0, 0.0], [0.0, 1.0])],
        });
        let err = model.predict_proba(array![1.0].view()).unwrap_err();
        assert!(matches!(err, InferenceError::FeatureMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn empty_forest_is_malformed() {
        let model = ModelArtifact::RandomForestClassifier(RandomForest {
            n_features: 2,
            trees: vec![],
        });
        assert!(matches!(
            model.predict_proba(array![1.0, 2.0].view()).unwrap_err(),
            InferenceError::MalformedModel(_)
        ));
    }

    #[test]
    fn regressor_has_no_probabilities() {
        let model = ModelArtifact::LinearRegression(LinearModel {
            coefficients: vec![1.0],
            intercept: 0.0,
        });
        assert!(matches!(
            model.predict_proba(array![1.0].view()).unwrap_err(),
            InferenceError::NotAClassifier
        ));
    }

    #[test]
    fn artifact_json_round_trips_through_model_type_tag() {
        let json = r#"{
            "model_type": "linear_regression",
            "coefficients": [1.5, 2.5],
            "intercept": -3.0
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(matches!(artifact, ModelArtifact::LinearRegression(_)));
        assert_eq!(artifact.n_features(), 2);
    }

    #[test]
    fn label_encoder_inverse_transform() {
        let encoder = LabelEncoder { classes: vec!["maize".into(), "rice".into()] };
        assert_eq!(encoder.inverse_transform(1).unwrap(), "rice");
        assert!(matches!(
            encoder.inverse_transform(2).unwrap_err(),
            InferenceError::UnknownClass(2)
        ));
    }
}
