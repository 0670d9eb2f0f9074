#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod userdata;
pub mod workspace;
pub mod assets;
pub mod settings;
pub mod context;
pub mod errors;

pub use userdata::UserDataStore;
pub use workspace::{Workspace, WorkspaceRegistry};
pub use assets::{AssetCategory, AssetFilter, AssetItem, AssetProvider, AssetScope, ResourceResolver};
pub use settings::EngineSettings;
pub use context::EditorContext;
pub use errors::VoltrayError;
