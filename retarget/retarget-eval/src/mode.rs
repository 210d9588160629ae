//! Comparison metric selection.

use serde::{Deserialize, Serialize};

/// Which error metric scores a predicted motion.
///
/// The three metrics trade off what they are sensitive to:
///
/// - [`Joint`](Self::Joint) works in joint space with circular distance;
///   cheap, needs no kinematics, but weighs a wrist joint like a shoulder.
/// - [`Link`](Self::Link) measures Euclidean drift of selected links in
///   workspace coordinates; sensitive to absolute placement.
/// - [`Cosine`](Self::Cosine) scores limb directions only, ignoring limb
///   lengths and absolute position; closest to "does the pose look alike".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    /// Mean circular joint-angle distance, bounded by pi.
    Joint,
    /// Mean Euclidean distance over the profile's evaluation links.
    Link,
    /// One minus the cosine similarity of concatenated limb directions,
    /// bounded in `[0, 2]`.
    Cosine,
}

impl CompareMode {
    /// Lowercase metric name, matching CLI and report conventions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Joint => "joint",
            Self::Link => "link",
            Self::Cosine => "cosine",
        }
    }

    /// All supported metrics.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Joint, Self::Link, Self::Cosine]
    }

    /// Whether this metric queries the forward kinematics collaborator.
    #[must_use]
    pub const fn needs_kinematics(&self) -> bool {
        !matches!(self, Self::Joint)
    }
}

impl std::fmt::Display for CompareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
