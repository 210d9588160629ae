//! Joint angle ranges, per-robot bounds tables, and angle vectors.
//!
//! Both [`JointBounds`] and [`JointAngleVector`] keep their entries in a
//! `BTreeMap` keyed by joint name. Sorted-key iteration order is load-bearing:
//! it is the order in which the sampler advances its random stream and the
//! column order of every serialized angle record, so two processes agree on
//! both without exchanging anything beyond the joint names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetargetError};

/// Inclusive angle range for one joint, in radians.
///
/// # Example
///
/// ```
/// use retarget_types::AngleRange;
///
/// let range = AngleRange::new(-1.57, 1.57)?;
/// assert!(range.contains(0.0));
/// assert!(!range.contains(2.0));
/// # Ok::<(), retarget_types::RetargetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    min: f64,
    max: f64,
}

impl AngleRange {
    /// Creates a validated angle range.
    ///
    /// # Errors
    ///
    /// Returns [`RetargetError::InvalidRange`] if either bound is non-finite
    /// or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RetargetError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    /// Creates a range symmetric about zero, `[-half_span, half_span]`.
    ///
    /// # Errors
    ///
    /// Returns [`RetargetError::InvalidRange`] if `half_span` is negative or
    /// non-finite.
    pub fn symmetric(half_span: f64) -> Result<Self> {
        Self::new(-half_span, half_span)
    }

    /// Lower bound in radians.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound in radians.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Width of the range in radians.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Whether `angle` lies within the range (bounds inclusive).
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }
}

/// Named joint angle ranges for one robot.
///
/// The joint set is fixed when the robot profile is built and never changes
/// afterwards. Iteration is always in sorted joint-name order.
///
/// # Example
///
/// ```
/// use retarget_types::{AngleRange, JointBounds};
///
/// let bounds = JointBounds::from_pairs([
///     ("r_elbow_pitch", AngleRange::new(-2.182, 0.0)?),
///     ("neck_roll", AngleRange::new(-0.4, 0.4)?),
/// ]);
///
/// let names: Vec<&str> = bounds.joint_names().collect();
/// assert_eq!(names, ["neck_roll", "r_elbow_pitch"]);
/// # Ok::<(), retarget_types::RetargetError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JointBounds {
    ranges: BTreeMap<String, AngleRange>,
}

impl JointBounds {
    /// Creates an empty bounds table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bounds table from `(name, range)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, AngleRange)>,
        S: Into<String>,
    {
        Self {
            ranges: pairs
                .into_iter()
                .map(|(name, range)| (name.into(), range))
                .collect(),
        }
    }

    /// Inserts or replaces the range for one joint.
    pub fn insert(&mut self, joint: impl Into<String>, range: AngleRange) {
        self.ranges.insert(joint.into(), range);
    }

    /// Range for a joint, if present.
    #[must_use]
    pub fn get(&self, joint: &str) -> Option<&AngleRange> {
        self.ranges.get(joint)
    }

    /// Whether the table contains `joint`.
    #[must_use]
    pub fn contains_joint(&self, joint: &str) -> bool {
        self.ranges.contains_key(joint)
    }

    /// Number of joints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Joint names in sorted order.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }

    /// `(name, range)` pairs in sorted joint-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AngleRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), range))
    }
}

/// One joint configuration: joint name to angle, in radians.
///
/// Values are produced in-range by the sampler; the type itself does not
/// re-validate them. Sorted-key iteration gives the stable column order used
/// by serialized angle records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngleVector {
    angles: BTreeMap<String, f64>,
}

impl JointAngleVector {
    /// Creates an empty angle vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an angle vector from `(name, angle)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            angles: pairs
                .into_iter()
                .map(|(name, angle)| (name.into(), angle))
                .collect(),
        }
    }

    /// Inserts or replaces the angle for one joint.
    pub fn insert(&mut self, joint: impl Into<String>, angle: f64) {
        self.angles.insert(joint.into(), angle);
    }

    /// Angle for a joint, if present.
    #[must_use]
    pub fn get(&self, joint: &str) -> Option<f64> {
        self.angles.get(joint).copied()
    }

    /// Number of joints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Joint names in sorted order.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.angles.keys().map(String::as_str)
    }

    /// `(name, angle)` pairs in sorted joint-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.angles.iter().map(|(name, angle)| (name.as_str(), *angle))
    }

    /// Angles in sorted joint-name order.
    ///
    /// This is the canonical flat layout for training tensors and serialized
    /// records.
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        self.angles.values().copied().collect()
    }

    /// Joint names present in both vectors, sorted.
    #[must_use]
    pub fn common_joints(&self, other: &Self) -> Vec<String> {
        self.angles
            .keys()
            .filter(|name| other.angles.contains_key(*name))
            .cloned()
            .collect()
    }

    /// Whether every angle is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.angles.values().all(|angle| angle.is_finite())
    }
}
