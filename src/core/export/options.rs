//! Export run inputs: selection, STEP mode and per-format options

use crate::adapters::host::StlExportSettings;
use crate::core::naming::NamingOptions;
use crate::domain::Occurrence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user selected before starting the export
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected: the whole design
    #[default]
    Everything,
    /// The root component itself was selected
    RootComponent,
    /// Specific occurrences were selected
    Occurrences(Vec<Occurrence>),
}

impl Selection {
    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            Selection::Everything => "everything".to_string(),
            Selection::RootComponent => "root component".to_string(),
            Selection::Occurrences(occurrences) => {
                format!("{} occurrence(s)", occurrences.len())
            }
        }
    }
}

/// Which components a STEP export writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepExportMode {
    /// The selected (or top level) components only
    #[default]
    TopLevel,
    /// Components with bodies and no child occurrences; mixed ones are skipped
    Leaves,
    /// Every component reachable from the selection
    MixedLeaves,
}

impl fmt::Display for StepExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepExportMode::TopLevel => write!(f, "Top level"),
            StepExportMode::Leaves => write!(f, "Leaves"),
            StepExportMode::MixedLeaves => write!(f, "Mixed leaves"),
        }
    }
}

impl FromStr for StepExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "top_level" => Ok(StepExportMode::TopLevel),
            "leaves" => Ok(StepExportMode::Leaves),
            "mixed_leaves" => Ok(StepExportMode::MixedLeaves),
            _ => Err(format!(
                "Invalid STEP mode '{s}'. Must be one of: top-level, leaves, mixed-leaves"
            )),
        }
    }
}

/// Options of an STL export run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StlExportOptions {
    /// Encoding settings forwarded to the host
    pub settings: StlExportSettings,

    /// Skip linked (referenced) occurrences during traversal
    pub filter_linked_components: bool,

    /// File naming
    pub naming: NamingOptions,
}

/// Options of a STEP export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepExportOptions {
    /// File naming
    pub naming: NamingOptions,
}

impl Default for StepExportOptions {
    fn default() -> Self {
        Self {
            naming: NamingOptions::plain(),
        }
    }
}
