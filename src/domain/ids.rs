//! Domain identifier types with validation
//!
//! Components and bodies are compared by opaque host-assigned keys, never by
//! structure: two occurrences of the same component yield equal
//! [`ComponentId`]s even though the host hands out distinct proxies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Component identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use filtered_export::domain::ids::ComponentId;
/// use std::str::FromStr;
///
/// let id = ComponentId::from_str("leg").unwrap();
/// assert_eq!(id.as_str(), "leg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a new ComponentId, rejecting blank keys
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Component ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the component ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComponentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Body identifier newtype wrapper
///
/// Unique within a design. Hosts typically derive it from the owning
/// component and the body's position in that component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(String);

impl BodyId {
    /// Creates a new BodyId, rejecting blank keys
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Body ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Builds the conventional `<component>#<index>` key
    pub fn for_component(component: &ComponentId, index: usize) -> Self {
        Self(format!("{}#{}", component.as_str(), index))
    }

    /// Returns the body ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BodyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
