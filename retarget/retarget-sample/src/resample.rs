//! Latent-density resampling.
//!
//! Raw pose batches oversample the fringes of the human pose distribution.
//! Downstream, each batch is scored by a latent density model (how probable
//! each pose's latent code is under the prior); this module draws a subset
//! through inverse-CDF sampling on those scores so the kept poses follow
//! the latent distribution instead of the uniform joint-space one.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, warn};

use retarget_types::SeedBatch;

use crate::error::{Result, SampleError};

/// Floor on the rejection-loop attempt budget.
const MIN_ATTEMPTS: usize = 4096;

/// Attempt budget per requested index.
const ATTEMPTS_PER_INDEX: usize = 64;

/// Maps a uniform draw through a cumulative distribution.
///
/// Returns the first index whose cumulative sum reaches `value`, or `None`
/// when the draw exceeds the final cumulative sum (possible when rounding
/// leaves the CDF ending slightly below 1.0). Callers treat `None` as a
/// miss and redraw.
#[must_use]
pub fn draw_index(cdf: &[f64], value: f64) -> Option<usize> {
    let index = cdf.partition_point(|&cum| cum < value);
    (index < cdf.len()).then_some(index)
}

/// Draws `count` distinct indices with probability proportional to `scores`.
///
/// Scores are normalized internally; they need not sum to one. Index 0 is
/// never selected (the first pose of a batch is the reference pose and is
/// excluded by convention), and indices with zero probability cannot be
/// drawn. The result is sorted ascending.
///
/// # Errors
///
/// - [`SampleError::EmptyScores`] for an empty slice.
/// - [`SampleError::InvalidScores`] for negative or non-finite entries, or
///   zero total mass.
/// - [`SampleError::CountUnreachable`] when `count` exceeds the eligible
///   index count (positive probability, index > 0).
/// - [`SampleError::ResampleAttemptsExhausted`] when the rejection loop
///   burns its budget of `max(4096, 64 * count)` attempts. The budget only
///   binds in pathological cases; hitting it means the score distribution
///   concentrates nearly all mass on already-selected or excluded indices.
pub fn resample_by_density<R: Rng>(
    scores: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if scores.is_empty() {
        return Err(SampleError::EmptyScores);
    }
    for (index, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score < 0.0 {
            return Err(SampleError::invalid_scores(format!(
                "score {score} at index {index} (must be finite and >= 0)"
            )));
        }
    }
    let total: f64 = scores.iter().sum();
    if total <= 0.0 {
        return Err(SampleError::invalid_scores("total mass is zero"));
    }

    let eligible = scores.iter().skip(1).filter(|&&score| score > 0.0).count();
    if count > eligible {
        return Err(SampleError::CountUnreachable {
            requested: count,
            available: eligible,
        });
    }

    let mut cdf = Vec::with_capacity(scores.len());
    let mut acc = 0.0;
    for &score in scores {
        acc += score / total;
        cdf.push(acc);
    }

    let budget = MIN_ATTEMPTS.max(ATTEMPTS_PER_INDEX.saturating_mul(count));
    let mut selected = BTreeSet::new();
    let mut attempts = 0;
    let mut warned = false;

    while selected.len() < count {
        if attempts == budget {
            return Err(SampleError::ResampleAttemptsExhausted {
                attempts,
                selected: selected.len(),
                requested: count,
            });
        }
        attempts += 1;
        if !warned && attempts * 2 > budget {
            warn!(
                attempts,
                budget,
                selected = selected.len(),
                requested = count,
                "Rejection loop past half its attempt budget"
            );
            warned = true;
        }

        let value: f64 = rng.r#gen();
        let Some(index) = draw_index(&cdf, value) else {
            continue;
        };
        if index == 0 {
            continue;
        }
        selected.insert(index);
    }

    debug!(attempts, count, "Resampling complete");
    Ok(selected.into_iter().collect())
}

/// Resamples one seed batch down to `keep` poses by latent density.
///
/// `scores[i]` must score `batch.samples[i]`. The kept poses stay in their
/// original order under the original seed.
///
/// # Errors
///
/// Returns [`SampleError::ScoreCountMismatch`] when scores and poses
/// disagree on length, plus everything [`resample_by_density`] raises.
pub fn balance_batch<R: Rng>(
    batch: &SeedBatch,
    scores: &[f64],
    keep: usize,
    rng: &mut R,
) -> Result<SeedBatch> {
    if scores.len() != batch.len() {
        return Err(SampleError::ScoreCountMismatch {
            scores: scores.len(),
            poses: batch.len(),
        });
    }

    let indices = resample_by_density(scores, keep, rng)?;
    let samples = indices
        .into_iter()
        .map(|index| batch.samples[index].clone())
        .collect();
    Ok(SeedBatch::new(batch.seed, samples))
}
