//! File naming
//!
//! - [`clean`] - name and path cleaning
//! - [`registry`] - run-scoped set of assigned names
//! - [`derive`] - base name construction and uniquification

pub mod clean;
pub mod derive;
pub mod registry;

pub use clean::{clean_component_path, clean_name};
pub use derive::{
    body_base_name, derive_component_file_name, derive_file_name, ComponentNameMode,
    NamingOptions,
};
pub use registry::NameRegistry;
