use thiserror::Error;

use crate::schema::FeatureVector;
use crate::store::FormationStore;

/// Errors from a security-assessment activation.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("prediction failed: {0}")]
    Model(String),
    #[error("model returned {got} probabilities for {expected} records")]
    BatchShape { expected: usize, got: usize },
    #[error("model probability {0} outside [0,1]")]
    Probability(f64),
}

/// Boundary to the pre-trained containment classifier. The production model
/// is an opaque collaborator; everything this crate needs from it is one
/// batch call returning the positive-class probability per feature vector.
pub trait SecurityModel {
    fn predict_proba(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ScoreError>;
}

/// Scores every record in the store in one batch and writes the rounded
/// probability onto each row. All-or-nothing: any model failure or shape
/// mismatch aborts the activation before a single score is written, so
/// whatever scores the rows carried before remain untouched. Re-running over
/// the same records is idempotent.
pub fn score_store(
    store: &mut FormationStore,
    model: &dyn SecurityModel,
) -> Result<(), ScoreError> {
    if store.is_empty() {
        return Ok(());
    }

    let batch: Vec<FeatureVector> = store.records().iter().map(|r| r.feature_vector()).collect();
    let probs = model.predict_proba(&batch)?;
    if probs.len() != batch.len() {
        return Err(ScoreError::BatchShape {
            expected: batch.len(),
            got: probs.len(),
        });
    }
    for p in &probs {
        if !(0.0..=1.0).contains(p) {
            return Err(ScoreError::Probability(*p));
        }
    }

    for (record, p) in store.records_mut().iter_mut().zip(probs) {
        record.security = Some((p * 100.0).round() / 100.0);
    }
    Ok(())
}

/// Deterministic logistic stand-in for the shipped pipeline, usable wherever
/// a serialized model is not available. Each feature is shifted and scaled
/// by fixed calibration constants, then pushed through a weighted logistic.
#[derive(Debug, Clone)]
pub struct LogisticSurrogate {
    pub weights: FeatureVector,
    pub centers: FeatureVector,
    pub scales: FeatureVector,
    pub bias: f64,
}

impl LogisticSurrogate {
    /// Calibration over typical ranges of natural CO₂ reservoir data:
    /// deeper burial, thicker seals, and stacked systems push toward secure;
    /// faulting and high temperature push away.
    pub fn default_calibration() -> Self {
        LogisticSurrogate {
            weights: [0.6, 0.2, -0.3, 0.5, 0.1, -1.2, 0.9, 0.2, 0.4],
            centers: [1200.0, 12.0, 50.0, 500.0, 100.0, 0.5, 100.0, 50.0, 0.5],
            scales: [800.0, 8.0, 25.0, 250.0, 500.0, 0.5, 150.0, 60.0, 0.5],
            bias: 0.8,
        }
    }
}

impl SecurityModel for LogisticSurrogate {
    fn predict_proba(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ScoreError> {
        for (i, s) in self.scales.iter().enumerate() {
            if *s <= 0.0 {
                return Err(ScoreError::Model(format!(
                    "non-positive scale for feature {i}"
                )));
            }
        }
        let probs = batch
            .iter()
            .map(|x| {
                let z: f64 = self
                    .weights
                    .iter()
                    .zip(x.iter())
                    .zip(self.centers.iter().zip(self.scales.iter()))
                    .map(|((w, xi), (c, s))| w * (xi - c) / s)
                    .sum::<f64>()
                    + self.bias;
                1.0 / (1.0 + (-z).exp())
            })
            .collect();
        Ok(probs)
    }
}
