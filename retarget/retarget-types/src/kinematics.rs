//! The forward kinematics seam.

use std::collections::HashMap;

use crate::angles::JointAngleVector;
use crate::error::Result;
use crate::pose::LinkPose;

/// Solves world-frame link poses for a joint configuration.
///
/// Implementations wrap a kinematic chain loaded elsewhere (URDF, MJCF, a
/// hardware service). The chain is fixed for the lifetime of the solver and
/// queries are pure: the same angle vector always yields the same poses.
/// Pipeline code adds a `Sync` bound where it fans queries out across
/// threads.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use nalgebra::Point3;
/// use retarget_types::{ForwardKinematics, JointAngleVector, LinkPose, Result};
///
/// struct FixedChain;
///
/// impl ForwardKinematics for FixedChain {
///     fn forward_kinematics(
///         &self,
///         _angles: &JointAngleVector,
///     ) -> Result<HashMap<String, LinkPose>> {
///         let mut poses = HashMap::new();
///         poses.insert(
///             "torso".to_string(),
///             LinkPose::from_position(Point3::new(0.0, 0.0, 1.0)),
///         );
///         Ok(poses)
///     }
/// }
///
/// let poses = FixedChain.forward_kinematics(&JointAngleVector::new())?;
/// assert!(poses.contains_key("torso"));
/// # Ok::<(), retarget_types::RetargetError>(())
/// ```
pub trait ForwardKinematics {
    /// Computes world-frame poses for every link of the chain.
    ///
    /// The returned map is keyed by link name. Callers select and order
    /// links through their robot profile; extra links in the map are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RetargetError::Kinematics`] when the underlying solver
    /// rejects the configuration. Callers treat this as fatal for the
    /// enclosing batch; there is no retry.
    ///
    /// [`RetargetError::Kinematics`]: crate::RetargetError::Kinematics
    fn forward_kinematics(&self, angles: &JointAngleVector) -> Result<HashMap<String, LinkPose>>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nalgebra::Point3;

    use super::*;

    struct TwoLink;

    impl ForwardKinematics for TwoLink {
        fn forward_kinematics(
            &self,
            angles: &JointAngleVector,
        ) -> Result<HashMap<String, LinkPose>> {
            let reach = angles.get("j").unwrap_or(0.0);
            let mut poses = HashMap::new();
            poses.insert("base".to_string(), LinkPose::identity());
            poses.insert(
                "tip".to_string(),
                LinkPose::from_position(Point3::new(reach, 0.0, 0.0)),
            );
            Ok(poses)
        }
    }

    #[test]
    fn trait_object_usable() {
        let solver: &dyn ForwardKinematics = &TwoLink;
        let angles = JointAngleVector::from_pairs([("j", 2.0)]);
        let poses = solver.forward_kinematics(&angles).unwrap();

        assert_eq!(poses.len(), 2);
        let tip = poses.get("tip").unwrap();
        assert!((tip.position.x - 2.0).abs() < 1e-12);
    }
}
