//! Train/test holdout splits over seed batches.

use tracing::info;

use retarget_types::SeedBatch;

use crate::error::{Result, SampleError};

/// Splits seed batches into `(train, test)` by a leading-block holdout.
///
/// The first `batches / denominator` batches (in the order given, which the
/// generator keeps as seed order) become the test set; the rest train. There
/// is no shuffling: seeds are already independent draws, and a deterministic
/// split means the same seed list always lands in the same partition.
///
/// With fewer batches than `denominator` the test set is empty, which is the
/// honest answer for a holdout that would round down to nothing.
///
/// # Errors
///
/// Returns [`SampleError::InvalidSplit`] when `denominator` is zero.
///
/// # Example
///
/// ```
/// use retarget_sample::split_holdout;
/// use retarget_types::SeedBatch;
///
/// let batches: Vec<SeedBatch> = (0..20).map(|s| SeedBatch::new(s, Vec::new())).collect();
/// let (train, test) = split_holdout(batches, 10)?;
/// assert_eq!(test.len(), 2);
/// assert_eq!(train.len(), 18);
/// assert_eq!(test[0].seed, 0);
/// # Ok::<(), retarget_sample::SampleError>(())
/// ```
pub fn split_holdout(
    batches: Vec<SeedBatch>,
    denominator: usize,
) -> Result<(Vec<SeedBatch>, Vec<SeedBatch>)> {
    if denominator == 0 {
        return Err(SampleError::InvalidSplit { denominator });
    }

    let holdout = batches.len() / denominator;
    let mut test = batches;
    let train = test.split_off(holdout);

    info!(
        train = train.len(),
        test = test.len(),
        denominator,
        "Holdout split complete"
    );
    Ok((train, test))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn batches(n: u64) -> Vec<SeedBatch> {
        (0..n).map(|seed| SeedBatch::new(seed, Vec::new())).collect()
    }

    #[test]
    fn split_takes_leading_block_as_test() {
        let (train, test) = split_holdout(batches(20), 10).unwrap();

        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 18);
        assert_eq!(test[0].seed, 0);
        assert_eq!(test[1].seed, 1);
        assert_eq!(train[0].seed, 2);
        assert_eq!(train.last().unwrap().seed, 19);
    }

    #[test]
    fn split_rounds_down() {
        // 7 / 3 = 2 test batches.
        let (train, test) = split_holdout(batches(7), 3).unwrap();
        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 5);
    }

    #[test]
    fn split_fewer_batches_than_denominator() {
        let (train, test) = split_holdout(batches(4), 10).unwrap();
        assert!(test.is_empty());
        assert_eq!(train.len(), 4);
    }

    #[test]
    fn split_denominator_one_holds_out_everything() {
        let (train, test) = split_holdout(batches(5), 1).unwrap();
        assert!(train.is_empty());
        assert_eq!(test.len(), 5);
    }

    #[test]
    fn split_rejects_zero_denominator() {
        assert!(matches!(
            split_holdout(batches(5), 0),
            Err(SampleError::InvalidSplit { denominator: 0 })
        ));
    }

    #[test]
    fn split_empty_input() {
        let (train, test) = split_holdout(Vec::new(), 10).unwrap();
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
