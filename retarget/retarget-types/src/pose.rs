//! Link poses, assembled pose samples, and per-seed batches.

use nalgebra::{Point3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::angles::JointAngleVector;
use crate::error::{Result, RetargetError};
use crate::rotation::Rotation6;

/// World-frame pose of one robot link.
///
/// Produced by the forward kinematics collaborator and consumed read-only
/// from there on.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use retarget_types::{LinkPose, Rotation6};
///
/// let pose = LinkPose::from_position(Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(pose.rotation_6d(), Rotation6::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkPose {
    /// Position in world coordinates.
    pub position: Point3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for LinkPose {
    fn default() -> Self {
        Self::identity()
    }
}

impl LinkPose {
    /// Creates a pose from position and orientation.
    #[must_use]
    pub const fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// An identity pose (origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Creates a pose from position only (identity orientation).
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// The orientation in the continuous 6-D representation.
    #[must_use]
    pub fn rotation_6d(&self) -> Rotation6 {
        Rotation6::from_quaternion(&self.rotation)
    }

    /// Whether position and orientation are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|v| v.is_finite())
            && self.rotation.coords.iter().all(|v| v.is_finite())
    }
}

/// One fully assembled training pose.
///
/// Bundles the joint angles that generated the pose with every derived
/// representation: per-link world positions, per-link 6-D rotations (same
/// link order), and the canonical human keypoints. Built atomically by the
/// pose assembler; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    angles: JointAngleVector,
    link_positions: Vec<Point3<f64>>,
    link_rotations: Vec<Rotation6>,
    keypoints: Vec<Point3<f64>>,
}

impl PoseSample {
    /// Creates a pose sample from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`RetargetError::PoseMisaligned`] when the per-link arrays
    /// disagree on length.
    pub fn new(
        angles: JointAngleVector,
        link_positions: Vec<Point3<f64>>,
        link_rotations: Vec<Rotation6>,
        keypoints: Vec<Point3<f64>>,
    ) -> Result<Self> {
        if link_positions.len() != link_rotations.len() {
            return Err(RetargetError::PoseMisaligned {
                positions: link_positions.len(),
                rotations: link_rotations.len(),
            });
        }
        Ok(Self {
            angles,
            link_positions,
            link_rotations,
            keypoints,
        })
    }

    /// The joint angles that generated this pose.
    #[must_use]
    pub const fn angles(&self) -> &JointAngleVector {
        &self.angles
    }

    /// Link positions, in profile link order.
    #[must_use]
    pub fn link_positions(&self) -> &[Point3<f64>] {
        &self.link_positions
    }

    /// Link 6-D rotations, in profile link order.
    #[must_use]
    pub fn link_rotations(&self) -> &[Rotation6] {
        &self.link_rotations
    }

    /// Derived human keypoints, in canonical keypoint order.
    #[must_use]
    pub fn keypoints(&self) -> &[Point3<f64>] {
        &self.keypoints
    }

    /// Number of links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_positions.len()
    }

    /// Number of keypoints.
    #[must_use]
    pub fn keypoint_count(&self) -> usize {
        self.keypoints.len()
    }

    /// Link positions flattened row-major to `links * 3` values.
    #[must_use]
    pub fn flat_positions(&self) -> Vec<f64> {
        self.link_positions
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }

    /// Link rotations flattened row-major to `links * 6` values.
    #[must_use]
    pub fn flat_rotations(&self) -> Vec<f64> {
        self.link_rotations
            .iter()
            .flat_map(|r| r.into_array())
            .collect()
    }

    /// Keypoints flattened row-major to `keypoints * 3` values.
    #[must_use]
    pub fn flat_keypoints(&self) -> Vec<f64> {
        self.keypoints
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }
}

/// All poses drawn under one random seed.
///
/// Batches from different seeds never interact; downstream dataset assembly
/// concatenates them in seed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedBatch {
    /// The seed the batch was drawn under.
    pub seed: u64,
    /// The drawn poses, in draw order.
    pub samples: Vec<PoseSample>,
}

impl SeedBatch {
    /// Creates a batch from a seed and its samples.
    #[must_use]
    pub const fn new(seed: u64, samples: Vec<PoseSample>) -> Self {
        Self { seed, samples }
    }

    /// Number of poses in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the batch holds no poses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
