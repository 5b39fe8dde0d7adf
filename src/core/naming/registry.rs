//! Run-scoped registry of assigned file names

use std::collections::HashSet;

/// File names already assigned during one export run
///
/// Names are never released, so suffix search is monotonic for the lifetime
/// of the registry.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or the first free `base_(n)` for n = 1, 2, ...
    ///
    /// # Examples
    ///
    /// ```
    /// use filtered_export::core::naming::NameRegistry;
    ///
    /// let mut registry = NameRegistry::new();
    /// assert_eq!(registry.claim("Arm"), "Arm");
    /// assert_eq!(registry.claim("Arm"), "Arm_(1)");
    /// assert_eq!(registry.claim("Arm"), "Arm_(2)");
    /// ```
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 1usize;

        while self.names.contains(&candidate) {
            candidate = format!("{base}_({suffix})");
            suffix += 1;
        }

        if suffix > 1 {
            tracing::debug!(base = %base, name = %candidate, "Resolved file name collision");
        }

        self.names.insert(candidate.clone());
        candidate
    }

    /// Returns true if `name` has been assigned
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of assigned names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
