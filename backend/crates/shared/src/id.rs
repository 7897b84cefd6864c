//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Identity and content items both
//! use UUIDs; the marker parameter keeps a `PostId` from being passed where a
//! `UserId` is expected.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

/// Raised when an id string is empty or not a UUID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("id is empty")]
    Empty,

    #[error("id is not a valid UUID: {0}")]
    Malformed(String),
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// The nil id. Never assigned to a persisted entity.
    pub fn nil() -> Self {
        Self::from_uuid(Uuid::nil())
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse from a path segment or token subject
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdParseError::Empty);
        }
        Uuid::parse_str(trimmed)
            .map(Self::from_uuid)
            .map_err(|_| IdParseError::Malformed(trimmed.to_string()))
    }

    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for identity (user account) IDs
    pub struct User;

    /// Marker for content item (post) IDs
    pub struct Post;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type PostId = Id<markers::Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new_is_v4() {
        let user_id = UserId::new();
        assert_eq!(user_id.as_uuid().get_version_num(), 4);
        assert!(!user_id.is_nil());
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: PostId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_parse() {
        let uuid = Uuid::new_v4();
        let parsed = UserId::parse(&uuid.to_string()).unwrap();
        assert_eq!(parsed.into_uuid(), uuid);

        assert_eq!(UserId::parse(""), Err(IdParseError::Empty));
        assert_eq!(UserId::parse("   "), Err(IdParseError::Empty));
        assert!(matches!(
            UserId::parse("not-a-uuid"),
            Err(IdParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_nil() {
        assert!(UserId::nil().is_nil());
        assert_eq!(UserId::parse(&Uuid::nil().to_string()).unwrap(), UserId::nil());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = PostId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: PostId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
