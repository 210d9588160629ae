//! Robot capability profiles.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use retarget_types::JointBounds;

use crate::error::{ProfileError, Result};
use crate::keypoint::{KeypointRule, KeypointSpec};
use crate::reachy;
use crate::robot::RobotType;

/// A limb direction for the cosine metric: `position(to) - position(from)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbVector {
    /// Link at the limb's proximal end.
    pub from: String,
    /// Link at the limb's distal end.
    pub to: String,
}

impl LimbVector {
    /// Creates a limb vector between two links.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Everything the pipeline needs to know about one robot.
///
/// A profile bundles the sampling ranges, the canonical link ordering that
/// fixes every serialized array layout, the keypoint derivation rules, and
/// the link sets the comparison metrics read. Profiles are plain serde data:
/// robots without a curated built-in load theirs from configuration, and
/// loaders should call [`validate`](Self::validate) after deserializing.
///
/// # Example
///
/// ```
/// use retarget_robot::{RobotProfile, RobotType};
///
/// let profile = RobotProfile::for_robot(RobotType::Reachy)?;
/// assert_eq!(profile.joint_count(), 17);
/// assert_eq!(profile.link_count(), 31);
/// assert_eq!(profile.keypoint_count(), 21);
/// # Ok::<(), retarget_robot::ProfileError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotProfile {
    robot: RobotType,
    joint_bounds: JointBounds,
    link_order: Vec<String>,
    keypoints: Vec<KeypointSpec>,
    evaluation_links: Vec<String>,
    limb_vectors: Vec<LimbVector>,
}

impl RobotProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; see [`validate`](Self::validate).
    pub fn new(
        robot: RobotType,
        joint_bounds: JointBounds,
        link_order: Vec<String>,
        keypoints: Vec<KeypointSpec>,
        evaluation_links: Vec<String>,
        limb_vectors: Vec<LimbVector>,
    ) -> Result<Self> {
        let profile = Self {
            robot,
            joint_bounds,
            link_order,
            keypoints,
            evaluation_links,
            limb_vectors,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// The curated built-in profile for a robot.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NoBuiltinProfile`] for robots without curated
    /// tables in this build.
    pub fn for_robot(robot: RobotType) -> Result<Self> {
        match robot {
            RobotType::Reachy => Self::reachy(),
            other => Err(ProfileError::NoBuiltinProfile(other)),
        }
    }

    /// The curated Reachy profile: 17 joints, 31 links, 21 keypoints.
    ///
    /// # Errors
    ///
    /// Construction validates the curated tables; an error indicates the
    /// tables themselves are inconsistent.
    pub fn reachy() -> Result<Self> {
        reachy::build()
    }

    /// Checks internal consistency.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::EmptyBounds`] / [`ProfileError::EmptyKeypoints`]
    ///   when a required table is empty.
    /// - [`ProfileError::UnknownLink`] when a keypoint rule, evaluation link,
    ///   or limb vector references a link missing from the link ordering.
    pub fn validate(&self) -> Result<()> {
        if self.joint_bounds.is_empty() {
            return Err(ProfileError::EmptyBounds);
        }
        if self.keypoints.is_empty() {
            return Err(ProfileError::EmptyKeypoints);
        }

        for spec in &self.keypoints {
            if let Some(link) = spec.rule.link() {
                if self.link_index(link).is_none() {
                    return Err(ProfileError::unknown_link(
                        link,
                        format!("keypoint rule {:?}", spec.name),
                    ));
                }
            }
        }
        for link in &self.evaluation_links {
            if self.link_index(link).is_none() {
                return Err(ProfileError::unknown_link(link, "evaluation links"));
            }
        }
        for limb in &self.limb_vectors {
            if self.link_index(&limb.from).is_none() {
                return Err(ProfileError::unknown_link(&limb.from, "limb vectors"));
            }
            if self.link_index(&limb.to).is_none() {
                return Err(ProfileError::unknown_link(&limb.to, "limb vectors"));
            }
        }
        Ok(())
    }

    /// The robot platform.
    #[must_use]
    pub const fn robot(&self) -> RobotType {
        self.robot
    }

    /// Per-joint sampling ranges.
    #[must_use]
    pub const fn joint_bounds(&self) -> &JointBounds {
        &self.joint_bounds
    }

    /// The canonical link ordering.
    ///
    /// Every per-link array in the pipeline follows this order.
    #[must_use]
    pub fn link_order(&self) -> &[String] {
        &self.link_order
    }

    /// Keypoint derivation rules, in canonical keypoint order.
    #[must_use]
    pub fn keypoints(&self) -> &[KeypointSpec] {
        &self.keypoints
    }

    /// Links scored by the link-distance metric.
    #[must_use]
    pub fn evaluation_links(&self) -> &[String] {
        &self.evaluation_links
    }

    /// Limb pairs scored by the cosine metric.
    #[must_use]
    pub fn limb_vectors(&self) -> &[LimbVector] {
        &self.limb_vectors
    }

    /// Index of a link in the canonical ordering.
    #[must_use]
    pub fn link_index(&self, link: &str) -> Option<usize> {
        self.link_order.iter().position(|name| name == link)
    }

    /// Number of joints.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joint_bounds.len()
    }

    /// Number of links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_order.len()
    }

    /// Number of keypoints.
    #[must_use]
    pub fn keypoint_count(&self) -> usize {
        self.keypoints.len()
    }

    /// Width of a flattened angle record (one value per joint).
    #[must_use]
    pub fn angle_dim(&self) -> usize {
        self.joint_count()
    }

    /// Width of a flattened link position record (`links * 3`).
    #[must_use]
    pub fn position_dim(&self) -> usize {
        self.link_count() * 3
    }

    /// Width of a flattened link rotation record (`links * 6`).
    #[must_use]
    pub fn rotation_dim(&self) -> usize {
        self.link_count() * 6
    }

    /// Width of a flattened keypoint record (`keypoints * 3`).
    #[must_use]
    pub fn keypoint_dim(&self) -> usize {
        self.keypoint_count() * 3
    }

    /// Applies the keypoint rules to link positions in canonical order.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::LinkCountMismatch`] when `positions` does not have
    ///   exactly [`link_count`](Self::link_count) entries.
    /// - [`ProfileError::UnknownLink`] when a rule references a link outside
    ///   the ordering (possible on profiles deserialized without
    ///   [`validate`](Self::validate)).
    pub fn derive_keypoints(&self, positions: &[Point3<f64>]) -> Result<Vec<Point3<f64>>> {
        if positions.len() != self.link_order.len() {
            return Err(ProfileError::link_count_mismatch(
                self.link_order.len(),
                positions.len(),
            ));
        }

        self.keypoints
            .iter()
            .map(|spec| match &spec.rule {
                KeypointRule::Constant { position } => Ok(*position),
                KeypointRule::FromLink { link, offset } => {
                    let index = self.link_index(link).ok_or_else(|| {
                        ProfileError::unknown_link(link, format!("keypoint rule {:?}", spec.name))
                    })?;
                    Ok(positions[index] + offset)
                }
            })
            .collect()
    }
}
