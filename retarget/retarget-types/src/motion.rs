//! Joint-space motion sequences.

use serde::{Deserialize, Serialize};

use crate::angles::JointAngleVector;

/// An ordered sequence of joint configurations over time.
///
/// Frames are uniformly spaced in time as far as this crate is concerned;
/// timing metadata lives with whatever recorded the motion. Motions are
/// compared frame-by-frame, so predicted and ground-truth sequences must
/// have equal length.
///
/// # Example
///
/// ```
/// use retarget_types::{JointAngleVector, MotionSequence};
///
/// let motion: MotionSequence = (0..3)
///     .map(|i| JointAngleVector::from_pairs([("neck_yaw", f64::from(i) * 0.1)]))
///     .collect();
/// assert_eq!(motion.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSequence {
    frames: Vec<JointAngleVector>,
}

impl MotionSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing frames.
    #[must_use]
    pub const fn from_frames(frames: Vec<JointAngleVector>) -> Self {
        Self { frames }
    }

    /// Appends a frame.
    pub fn push(&mut self, frame: JointAngleVector) {
        self.frames.push(frame);
    }

    /// The frames in time order.
    #[must_use]
    pub fn frames(&self) -> &[JointAngleVector] {
        &self.frames
    }

    /// Frame at index `i`, if present.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&JointAngleVector> {
        self.frames.get(i)
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over frames in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, JointAngleVector> {
        self.frames.iter()
    }
}

impl FromIterator<JointAngleVector> for MotionSequence {
    fn from_iter<I: IntoIterator<Item = JointAngleVector>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MotionSequence {
    type Item = &'a JointAngleVector;
    type IntoIter = std::slice::Iter<'a, JointAngleVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
