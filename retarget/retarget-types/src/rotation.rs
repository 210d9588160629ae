//! Continuous 6-D rotation representation.

use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Six-number continuous rotation representation.
///
/// Stores the first two columns of the 3x3 rotation matrix, flattened
/// column-major: `[m00, m10, m20, m01, m11, m21]`. The third column is
/// implied (cross product of the first two), so nothing is lost.
///
/// Quaternions double-cover rotation space: `q` and `-q` encode the same
/// rotation, which makes them poor regression targets. This mapping is
/// continuous and single-valued, so antipodal quaternions produce identical
/// values.
///
/// # Example
///
/// ```
/// use nalgebra::UnitQuaternion;
/// use retarget_types::Rotation6;
///
/// let identity = Rotation6::from_quaternion(&UnitQuaternion::identity());
/// assert_eq!(identity, Rotation6::IDENTITY);
/// assert_eq!(identity.as_array(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation6([f64; 6]);

impl Rotation6 {
    /// The identity rotation.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// Builds the representation from a unit quaternion.
    ///
    /// Antipodal quaternions map to the same value. A quaternion built with
    /// `new_unchecked` from non-unit coordinates produces garbage in,
    /// garbage out; no normalization is applied here.
    #[must_use]
    pub fn from_quaternion(rotation: &UnitQuaternion<f64>) -> Self {
        Self::from_matrix(rotation.to_rotation_matrix().matrix())
    }

    /// Builds the representation from a rotation matrix.
    #[must_use]
    pub fn from_matrix(matrix: &Matrix3<f64>) -> Self {
        Self([
            matrix[(0, 0)],
            matrix[(1, 0)],
            matrix[(2, 0)],
            matrix[(0, 1)],
            matrix[(1, 1)],
            matrix[(2, 1)],
        ])
    }

    /// Wraps a raw 6-element array (column-major, first two columns).
    #[must_use]
    pub const fn from_array(values: [f64; 6]) -> Self {
        Self(values)
    }

    /// The raw values, column-major.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; 6] {
        &self.0
    }

    /// Consumes self into the raw array.
    #[must_use]
    pub const fn into_array(self) -> [f64; 6] {
        self.0
    }

    /// First rotation-matrix column (the rotated x axis).
    #[must_use]
    pub const fn x_axis(&self) -> Vector3<f64> {
        Vector3::new(self.0[0], self.0[1], self.0[2])
    }

    /// Second rotation-matrix column (the rotated y axis).
    #[must_use]
    pub const fn y_axis(&self) -> Vector3<f64> {
        Vector3::new(self.0[3], self.0[4], self.0[5])
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Default for Rotation6 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Rotation6> for [f64; 6] {
    fn from(rotation: Rotation6) -> Self {
        rotation.0
    }
}
