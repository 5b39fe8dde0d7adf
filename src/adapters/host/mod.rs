//! Host collaborator contracts

pub mod traits;

pub use traits::{
    DesignModel, FolderPrompt, MeshRefinement, ModelExporter, StlExportSettings, StlFormat,
};
