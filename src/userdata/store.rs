//! User Data Store
//!
//! Owns the engine's per-user data directory and prepares its layout:
//!
//! ```text
//! Voltray/
//! ├── Workspaces/      staging area for newly created workspaces
//! ├── Settings/        workspaces.json, settings.json
//! ├── Cache/           derived data, safe to delete
//! └── GlobalAssets/    built-in asset library shared by all workspaces
//! ```
//!
//! The store follows a two-phase lifecycle: construction is cheap and
//! infallible, [`UserDataStore::initialize`] resolves the platform root,
//! creates the tree and seeds the default global assets. Other subsystems
//! refuse to operate on a store that has not completed initialization.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, VoltrayError};

use super::paths;

/// Subdirectories maintained directly under the application data root.
const USER_DATA_SUBDIRS: [&str; 4] = ["Workspaces", "Settings", "Cache", "GlobalAssets"];

/// Asset category directories maintained under `GlobalAssets`.
const GLOBAL_ASSET_CATEGORIES: [&str; 4] = ["Primitives", "Materials", "Textures", "Scripts"];

/// Placeholder primitive meshes seeded into `GlobalAssets/Primitives`.
const DEFAULT_PRIMITIVES: [&str; 5] = [
    "cube.obj",
    "sphere.obj",
    "plane.obj",
    "cylinder.obj",
    "cone.obj",
];

/// Sentinel file marking the global asset library as seeded.
///
/// While this file exists, `initialize` never writes into `GlobalAssets`
/// again, so user edits to the seeded files survive restarts.
pub const ASSETS_INITIALIZED_MARKER: &str = ".assets_initialized";

/// Manages the per-user data directory tree.
///
/// ```rust,ignore
/// let mut store = UserDataStore::new();
/// store.initialize()?;
/// let settings = store.settings_dir()?;
/// ```
#[derive(Debug)]
pub struct UserDataStore {
    root: Option<PathBuf>,
    initialized: bool,
}

impl UserDataStore {
    /// Creates a store that resolves the platform-conventional data
    /// directory on [`initialize`](Self::initialize).
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            initialized: false,
        }
    }

    /// Creates a store rooted at an explicit directory, bypassing platform
    /// path resolution. Used by tools and tests that must not touch the
    /// real user profile.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            initialized: false,
        }
    }

    /// Resolves the data root (unless one was given), creates the directory
    /// tree and seeds the default global assets.
    ///
    /// Safe to call repeatedly: existing directories are kept and the asset
    /// seeding is guarded by [`ASSETS_INITIALIZED_MARKER`]. On error the
    /// store stays uninitialized; directories already created remain on
    /// disk.
    pub fn initialize(&mut self) -> Result<()> {
        if self.root.is_none() {
            self.root = Some(paths::platform_data_dir()?);
        }

        self.create_directory_structure()?;
        self.seed_default_global_assets()?;

        self.initialized = true;
        if let Some(root) = &self.root {
            log::info!("User data store initialized at: {}", root.display());
        }
        Ok(())
    }

    /// Whether [`initialize`](Self::initialize) has completed successfully.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The application data root.
    pub fn app_data_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.to_path_buf())
    }

    /// Staging directory for workspaces created without an explicit location.
    pub fn workspaces_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.join("Workspaces"))
    }

    /// Directory holding the workspace registry and engine settings files.
    pub fn settings_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.join("Settings"))
    }

    /// Directory for derived data the engine can regenerate at any time.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.join("Cache"))
    }

    /// Root of the built-in asset library shared by all workspaces.
    pub fn global_assets_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.join("GlobalAssets"))
    }

    fn root(&self) -> Result<&Path> {
        self.root
            .as_deref()
            .ok_or(VoltrayError::Uninitialized("UserDataStore"))
    }

    fn create_directory_structure(&self) -> Result<()> {
        let root = self.root()?;
        fs::create_dir_all(root)?;
        for subdir in USER_DATA_SUBDIRS {
            fs::create_dir_all(root.join(subdir))?;
        }
        Ok(())
    }

    /// Seeds the global asset library on first launch.
    ///
    /// Category directories are always ensured. The placeholder primitive
    /// files and the sentinel are only written while the sentinel is
    /// absent, with a per-file existence check so partially seeded
    /// libraries are completed rather than overwritten.
    fn seed_default_global_assets(&self) -> Result<()> {
        let assets_dir = self.global_assets_dir()?;

        for category in GLOBAL_ASSET_CATEGORIES {
            fs::create_dir_all(assets_dir.join(category))?;
        }

        let marker = assets_dir.join(ASSETS_INITIALIZED_MARKER);
        if marker.exists() {
            log::debug!("Global assets already initialized, skipping seed");
            return Ok(());
        }

        let primitives_dir = assets_dir.join("Primitives");
        for primitive in DEFAULT_PRIMITIVES {
            let file_path = primitives_dir.join(primitive);
            if !file_path.exists() {
                let body = format!(
                    "# {primitive} - Placeholder\n# This would contain the actual mesh data\n"
                );
                fs::write(&file_path, body)?;
            }
        }

        fs::write(&marker, "Global assets initialized\n")?;
        log::info!("Seeded default global assets");
        Ok(())
    }
}

impl Default for UserDataStore {
    fn default() -> Self {
        Self::new()
    }
}
