use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::idx::{ImageTensor, LabelSet};
use crate::neighbors::nearest_neighbors;
use crate::vote::majority_label;
use crate::{IMAGE_AREA, K_NEIGHBORS};

// Predict the label of one query image: find its nearest reference images,
// look up their labels, and take the majority.
pub fn classify(
    reference: &ImageTensor,
    reference_labels: &LabelSet,
    query: &ImageTensor,
    query_index: usize,
) -> u8 {
    let neighbors = nearest_neighbors(K_NEIGHBORS, reference, query, query_index);
    majority_label(
        neighbors
            .into_iter()
            .map(|(_, reference_index)| reference_labels.get(reference_index)),
    )
}

#[derive(Debug)]
pub struct Evaluation {
    pub predictions: Vec<u8>,
    pub correct: usize,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.predictions.len()
    }

    // Accuracy as a percentage.
    pub fn accuracy(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total() as f64
    }
}

// Classify every query image against the reference set and count how many
// predictions match the ground truth. Both tensor/label pairings must agree
// on item count before any distance is computed. Queries are independent, so
// the scans run in parallel and each query writes only its own prediction
// slot.
pub fn evaluate(
    reference: &ImageTensor,
    reference_labels: &LabelSet,
    query: &ImageTensor,
    query_labels: &LabelSet,
) -> Result<Evaluation> {
    ensure_paired(reference, reference_labels)?;
    ensure_paired(query, query_labels)?;
    assert!(reference.item_count() > 0, "No reference images found!");
    // The distance scan indexes both buffers in 784-byte strides; validate
    // that once here instead of per pixel pair.
    assert_eq!(
        reference.data().len(),
        reference.item_count() * IMAGE_AREA,
        "reference images are not 28x28"
    );
    assert_eq!(
        query.data().len(),
        query.item_count() * IMAGE_AREA,
        "query images are not 28x28"
    );

    let predictions: Vec<u8> = (0..query.item_count())
        .into_par_iter()
        .map(|query_index| classify(reference, reference_labels, query, query_index))
        .collect();

    let correct = predictions
        .iter()
        .zip(query_labels.as_slice())
        .filter(|(prediction, truth)| prediction == truth)
        .count();

    Ok(Evaluation {
        predictions,
        correct,
    })
}

fn ensure_paired(tensor: &ImageTensor, labels: &LabelSet) -> Result<()> {
    if tensor.item_count() != labels.len() {
        return Err(Error::Consistency {
            images: tensor.item_count(),
            labels: labels.len(),
        });
    }
    Ok(())
}
