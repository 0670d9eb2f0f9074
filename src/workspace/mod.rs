//! Workspace Management
//!
//! A workspace is a project directory holding user-specific content such
//! as scenes, scripts, materials and models. Built-in assets (cube,
//! sphere, ...) are not part of any workspace; they live in the shared
//! global asset library managed by the user data store.
//!
//! - [`Workspace`] is the metadata record the engine keeps per project.
//! - [`WorkspaceRegistry`] creates, persists, selects and cleans up
//!   workspaces.

pub mod registry;

pub use registry::WorkspaceRegistry;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Marker file identifying a directory as a Voltray workspace.
pub const WORKSPACE_MARKER_FILE: &str = ".voltray_workspace";

/// Directories created inside every new workspace.
///
/// Intentionally no `Assets` entry: built-in assets are global and
/// shared across all workspaces.
pub const WORKSPACE_SUBDIRS: [&str; 8] = [
    "Scenes",    // Scene files (.scene)
    "Scripts",   // User scripts
    "Materials", // Custom materials
    "Textures",  // Custom textures
    "Models",    // Custom 3D models
    "Audio",     // Custom audio files
    "Prefabs",   // Reusable objects
    ".voltray",  // Internal engine data
];

/// A workspace record: display metadata plus the directory it points at.
///
/// The `path` doubles as the workspace's identity inside the registry;
/// no two records may share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workspace {
    /// Display name of the workspace.
    pub name: String,
    /// Optional description.
    pub description: String,
    /// Full path to the workspace directory.
    pub path: PathBuf,
    /// Last access time, Unix seconds.
    pub last_opened: i64,
    /// Creation time, Unix seconds.
    pub created: i64,
    /// Whether the workspace directory existed when last checked.
    pub is_valid: bool,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            path: PathBuf::new(),
            last_opened: 0,
            created: 0,
            is_valid: true,
        }
    }
}

impl Workspace {
    /// Serializes the record to a JSON object string.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a record from a JSON string.
    ///
    /// Never fails: malformed input yields a default record flagged
    /// invalid, which the registry's cleanup pass then removes.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(workspace) => workspace,
            Err(e) => {
                log::warn!("Error parsing workspace JSON: {e}");
                Self {
                    is_valid: false,
                    ..Self::default()
                }
            }
        }
    }

    /// Same contract as [`from_json`](Self::from_json) for an
    /// already-parsed JSON value.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(workspace) => workspace,
            Err(e) => {
                log::warn!("Error parsing workspace JSON: {e}");
                Self {
                    is_valid: false,
                    ..Self::default()
                }
            }
        }
    }

    /// Whether the workspace path currently exists and is a directory.
    #[must_use]
    pub fn is_path_valid(&self) -> bool {
        self.path.is_dir()
    }
}
