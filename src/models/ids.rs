//! Identifier newtypes for upstream-assigned entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identifier assigned by the upstream league provider.
///
/// Carried through the engine untouched; equality and hashing are on the
/// raw string.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new EntityId from a raw string.
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Type alias for team IDs
pub type TeamId = EntityId;

/// Type alias for league IDs
pub type LeagueId = EntityId;

/// Type alias for owner (manager) IDs
pub type OwnerId = EntityId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new("team-7".to_string());
        assert_eq!(format!("{}", id), "team-7");
    }

    #[test]
    fn test_entity_id_from_string() {
        let id = EntityId::from("12".to_string());
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn test_entity_id_from_str() {
        let id = EntityId::from("owner-abc");
        assert_eq!(id.as_str(), "owner-abc");
    }

    #[test]
    fn test_entity_id_equality() {
        let id1 = TeamId::from("same");
        let id2 = TeamId::from("same");
        let id3 = TeamId::from("different");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_entity_id_serialization() {
        let id = EntityId::from("league-3334");
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_entity_id_debug() {
        let id = EntityId::from("dbg");
        assert!(format!("{:?}", id).contains("dbg"));
    }
}
