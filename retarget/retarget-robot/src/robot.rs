//! Supported robot platforms.

use serde::{Deserialize, Serialize};

/// The robot platforms this pipeline knows about.
///
/// The variant selects which capability profile drives sampling and
/// evaluation. Only Reachy ships with a curated built-in profile; the
/// others accept profiles loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotType {
    /// Pollen Robotics Reachy: two 7-DoF arms plus a 3-DoF neck.
    Reachy,
    /// IIT COMAN humanoid.
    Coman,
    /// SoftBank NAO humanoid.
    Nao,
}

impl RobotType {
    /// Lowercase platform name, matching dataset directory conventions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reachy => "reachy",
            Self::Coman => "coman",
            Self::Nao => "nao",
        }
    }

    /// All supported platforms.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Reachy, Self::Coman, Self::Nao]
    }
}

impl std::fmt::Display for RobotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn robot_type_names() {
        assert_eq!(RobotType::Reachy.name(), "reachy");
        assert_eq!(RobotType::Coman.name(), "coman");
        assert_eq!(RobotType::Nao.name(), "nao");
        assert_eq!(RobotType::Reachy.to_string(), "reachy");
    }

    #[test]
    fn robot_type_serde_lowercase() {
        let json = serde_json::to_string(&RobotType::Reachy).unwrap();
        assert_eq!(json, "\"reachy\"");

        let parsed: RobotType = serde_json::from_str("\"nao\"").unwrap();
        assert_eq!(parsed, RobotType::Nao);
    }

    #[test]
    fn robot_type_all_distinct() {
        let all = RobotType::all();
        assert_eq!(all.len(), 3);
        assert_ne!(all[0], all[1]);
        assert_ne!(all[1], all[2]);
    }
}
