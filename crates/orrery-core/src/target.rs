//! Navigation target descriptors

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// Identifier of a navigable scene object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a target's anchor position is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    /// The object never moves; its initial position is authoritative
    #[default]
    Static,
    /// The object moves on its own and must be looked up every tick
    Dynamic,
}

/// What the user selected, as handed to the navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub id: TargetId,
    pub kind: AnchorKind,
    /// Position at selection time, also the fallback for dynamic targets
    pub initial_position: Vec3,
}

impl TargetDescriptor {
    pub fn fixed(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: TargetId::new(id),
            kind: AnchorKind::Static,
            initial_position: position,
        }
    }

    pub fn moving(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: TargetId::new(id),
            kind: AnchorKind::Dynamic,
            initial_position: position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id_display() {
        let id = TargetId::new("orion-nebula");
        assert_eq!(id.to_string(), "orion-nebula");
        assert_eq!(id.as_str(), "orion-nebula");
    }

    #[test]
    fn test_anchor_kind_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: AnchorKind,
        }
        let w: Wrapper = toml::from_str(r#"kind = "dynamic""#).unwrap();
        assert_eq!(w.kind, AnchorKind::Dynamic);
    }
}
