//! Per-seed dataset archives.
//!
//! Each seed persists as two JSON files: `poses_{seed:04}.json` with the
//! three aligned pose arrays, and `angles_{seed:04}.json` with the joint
//! angle records. Training code reads the pose file; replay and debugging
//! tools read the angle file. Joint keys serialize in sorted order (BTreeMap
//! underneath), so angle columns are stable across runs and machines.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use retarget_types::{JointAngleVector, SeedBatch};

use crate::error::{Result, SampleError};

/// The three aligned pose arrays of one seed batch.
///
/// Shapes are `[poses, links, 3]` positions, `[poses, links, 6]` rotations,
/// and `[poses, keypoints, 3]` keypoints; the outer index agrees across all
/// three. Downstream loaders depend on those shapes and on the profile's
/// link/keypoint ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseArrays {
    /// Link positions per pose, `[poses, links, 3]`.
    pub positions: Vec<Vec<[f64; 3]>>,
    /// Link 6-D rotations per pose, `[poses, links, 6]`.
    pub rotations: Vec<Vec<[f64; 6]>>,
    /// Canonical keypoints per pose, `[poses, keypoints, 3]`.
    pub keypoints: Vec<Vec<[f64; 3]>>,
}

impl PoseArrays {
    /// Extracts the aligned arrays from a batch.
    #[must_use]
    pub fn from_batch(batch: &SeedBatch) -> Self {
        let positions = batch
            .samples
            .iter()
            .map(|s| s.link_positions().iter().map(|p| [p.x, p.y, p.z]).collect())
            .collect();
        let rotations = batch
            .samples
            .iter()
            .map(|s| s.link_rotations().iter().map(|r| r.into_array()).collect())
            .collect();
        let keypoints = batch
            .samples
            .iter()
            .map(|s| s.keypoints().iter().map(|p| [p.x, p.y, p.z]).collect())
            .collect();
        Self {
            positions,
            rotations,
            keypoints,
        }
    }

    /// Number of poses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the arrays hold no poses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks the arrays are aligned and rectangular.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidArchive`] when the three arrays disagree
    /// on pose count, or when per-pose rows disagree on link/keypoint count.
    pub fn validate(&self) -> Result<()> {
        if self.rotations.len() != self.positions.len()
            || self.keypoints.len() != self.positions.len()
        {
            return Err(SampleError::invalid_archive(format!(
                "pose count mismatch: {} positions, {} rotations, {} keypoints",
                self.positions.len(),
                self.rotations.len(),
                self.keypoints.len()
            )));
        }

        let links = self.positions.first().map_or(0, Vec::len);
        let keypoints = self.keypoints.first().map_or(0, Vec::len);
        for (pose, (position_row, rotation_row)) in
            self.positions.iter().zip(&self.rotations).enumerate()
        {
            if position_row.len() != links || rotation_row.len() != links {
                return Err(SampleError::invalid_archive(format!(
                    "pose {pose} has {} positions and {} rotations, expected {links} links",
                    position_row.len(),
                    rotation_row.len()
                )));
            }
        }
        for (pose, keypoint_row) in self.keypoints.iter().enumerate() {
            if keypoint_row.len() != keypoints {
                return Err(SampleError::invalid_archive(format!(
                    "pose {pose} has {} keypoints, expected {keypoints}",
                    keypoint_row.len()
                )));
            }
        }
        Ok(())
    }
}

/// One seed's pose arrays, as persisted in the pose file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedArchive {
    /// The seed the arrays were drawn under.
    pub seed: u64,
    /// The aligned pose arrays.
    pub arrays: PoseArrays,
}

/// One seed's joint angle records, as persisted in the angle file.
///
/// Records keep the full name-to-angle mapping rather than bare columns;
/// the sorted serialization order makes reloaded column layouts stable
/// anyway, and named records survive joint-set changes between software
/// versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleRecords {
    /// The seed the angles were drawn under.
    pub seed: u64,
    /// One joint configuration per pose, in draw order.
    pub angles: Vec<JointAngleVector>,
}

/// Path of the pose file for `seed` under `dir`.
#[must_use]
pub fn pose_file_path(dir: &Path, seed: u64) -> PathBuf {
    dir.join(format!("poses_{seed:04}.json"))
}

/// Path of the angle file for `seed` under `dir`.
#[must_use]
pub fn angle_file_path(dir: &Path, seed: u64) -> PathBuf {
    dir.join(format!("angles_{seed:04}.json"))
}

/// Writes one batch as its pose/angle file pair under `dir`.
///
/// Existing files for the same seed are overwritten.
///
/// # Errors
///
/// Returns [`SampleError::Io`] / [`SampleError::Serialization`] on file or
/// encoding failures.
pub fn write_seed_archive(dir: &Path, batch: &SeedBatch) -> Result<()> {
    let archive = SeedArchive {
        seed: batch.seed,
        arrays: PoseArrays::from_batch(batch),
    };
    let records = AngleRecords {
        seed: batch.seed,
        angles: batch.samples.iter().map(|s| s.angles().clone()).collect(),
    };

    let pose_file = BufWriter::new(File::create(pose_file_path(dir, batch.seed))?);
    serde_json::to_writer(pose_file, &archive)?;

    let angle_file = BufWriter::new(File::create(angle_file_path(dir, batch.seed))?);
    serde_json::to_writer(angle_file, &records)?;

    debug!(seed = batch.seed, poses = batch.len(), "Seed archive written");
    Ok(())
}

/// Reads one seed's pose arrays back from `dir`, validating their shape.
///
/// # Errors
///
/// Returns [`SampleError::Io`] / [`SampleError::Serialization`] on file or
/// decoding failures, and [`SampleError::InvalidArchive`] when the stored
/// arrays are misaligned or the file holds a different seed.
pub fn read_seed_archive(dir: &Path, seed: u64) -> Result<SeedArchive> {
    let file = BufReader::new(File::open(pose_file_path(dir, seed))?);
    let archive: SeedArchive = serde_json::from_reader(file)?;

    if archive.seed != seed {
        return Err(SampleError::invalid_archive(format!(
            "pose file for seed {seed} holds seed {}",
            archive.seed
        )));
    }
    archive.arrays.validate()?;
    Ok(archive)
}

/// Reads one seed's angle records back from `dir`.
///
/// # Errors
///
/// Returns [`SampleError::Io`] / [`SampleError::Serialization`] on file or
/// decoding failures, and [`SampleError::InvalidArchive`] when the file
/// holds a different seed.
pub fn read_angle_records(dir: &Path, seed: u64) -> Result<AngleRecords> {
    let file = BufReader::new(File::open(angle_file_path(dir, seed))?);
    let records: AngleRecords = serde_json::from_reader(file)?;

    if records.seed != seed {
        return Err(SampleError::invalid_archive(format!(
            "angle file for seed {seed} holds seed {}",
            records.seed
        )));
    }
    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use nalgebra::Point3;

    use retarget_types::{PoseSample, Rotation6};

    use super::*;

    fn batch(seed: u64, poses: usize) -> SeedBatch {
        let samples = (0..poses)
            .map(|i| {
                let v = i as f64;
                PoseSample::new(
                    JointAngleVector::from_pairs([("b_joint", v), ("a_joint", -v)]),
                    vec![Point3::new(v, 0.0, 0.0), Point3::new(0.0, v, 0.0)],
                    vec![Rotation6::IDENTITY; 2],
                    vec![Point3::new(0.0, 0.0, v); 3],
                )
                .unwrap()
            })
            .collect();
        SeedBatch::new(seed, samples)
    }

    #[test]
    fn pose_arrays_shapes_follow_batch() {
        let arrays = PoseArrays::from_batch(&batch(0, 4));

        assert_eq!(arrays.len(), 4);
        assert_eq!(arrays.positions[0].len(), 2);
        assert_eq!(arrays.rotations[0].len(), 2);
        assert_eq!(arrays.keypoints[0].len(), 3);
        assert_eq!(arrays.rotations[1][0], [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        arrays.validate().unwrap();
    }

    #[test]
    fn pose_arrays_validate_rejects_misalignment() {
        let mut arrays = PoseArrays::from_batch(&batch(0, 3));
        arrays.rotations.pop();
        assert!(matches!(
            arrays.validate(),
            Err(SampleError::InvalidArchive { .. })
        ));

        let mut ragged = PoseArrays::from_batch(&batch(0, 3));
        ragged.positions[1].pop();
        assert!(matches!(
            ragged.validate(),
            Err(SampleError::InvalidArchive { .. })
        ));

        let mut bad_keypoints = PoseArrays::from_batch(&batch(0, 3));
        bad_keypoints.keypoints[2].push([9.0, 9.0, 9.0]);
        assert!(matches!(
            bad_keypoints.validate(),
            Err(SampleError::InvalidArchive { .. })
        ));
    }

    #[test]
    fn archive_file_names_are_zero_padded() {
        let dir = Path::new("/data");
        assert_eq!(pose_file_path(dir, 7), Path::new("/data/poses_0007.json"));
        assert_eq!(
            angle_file_path(dir, 123),
            Path::new("/data/angles_0123.json")
        );
        assert_eq!(
            pose_file_path(dir, 10_000),
            Path::new("/data/poses_10000.json")
        );
    }

    #[test]
    fn archive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let batch = batch(3, 5);

        write_seed_archive(dir.path(), &batch).unwrap();

        let archive = read_seed_archive(dir.path(), 3).unwrap();
        assert_eq!(archive.seed, 3);
        assert_eq!(archive.arrays, PoseArrays::from_batch(&batch));

        let records = read_angle_records(dir.path(), 3).unwrap();
        assert_eq!(records.angles.len(), 5);
        assert_eq!(records.angles[2].get("b_joint"), Some(2.0));
    }

    #[test]
    fn angle_json_keys_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_seed_archive(dir.path(), &batch(0, 1)).unwrap();

        let json = std::fs::read_to_string(angle_file_path(dir.path(), 0)).unwrap();
        let a = json.find("a_joint").unwrap();
        let b = json.find("b_joint").unwrap();
        assert!(a < b, "joint keys must serialize in sorted order");
    }

    #[test]
    fn read_missing_seed_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_seed_archive(dir.path(), 42),
            Err(SampleError::Io(_))
        ));
    }

    #[test]
    fn read_rejects_seed_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let wrong = SeedArchive {
            seed: 9,
            arrays: PoseArrays::from_batch(&batch(9, 1)),
        };
        let file = File::create(pose_file_path(dir.path(), 4)).unwrap();
        serde_json::to_writer(file, &wrong).unwrap();

        assert!(matches!(
            read_seed_archive(dir.path(), 4),
            Err(SampleError::InvalidArchive { .. })
        ));
    }
}
