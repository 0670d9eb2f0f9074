//! Editor Context
//!
//! This module contains [`EditorContext`], the owner of everything the
//! editor persists for a user. There is no process-wide state: the
//! application root constructs one context and hands references down to
//! the editor shell, the workspace dialog and the asset browser.
//!
//! # Architecture
//!
//! - **`UserDataStore`**: per-user directory tree and global asset seeding
//! - **`WorkspaceRegistry`**: workspace list, selection and persistence
//! - **`EngineSettings`**: editor tunables, loaded from the settings directory
//!
//! # Example
//!
//! ```rust,ignore
//! use voltray::EditorContext;
//!
//! let mut context = EditorContext::new();
//! let workspace_count = context.initialize()?;
//! if let Some(workspace) = context.workspaces.current_workspace() {
//!     println!("resuming {}", workspace.name);
//! }
//! ```

use std::path::PathBuf;

use crate::assets::{AssetProvider, ResourceResolver};
use crate::errors::Result;
use crate::settings::{EngineSettings, SETTINGS_FILE_NAME};
use crate::userdata::UserDataStore;
use crate::workspace::WorkspaceRegistry;

/// The persistence subsystems of the editor, initialized in dependency
/// order and shared through one explicit object.
///
/// # Lifecycle
///
/// 1. Create with [`EditorContext::new`] or
///    [`EditorContext::with_data_root`]
/// 2. Bring the subsystems up with [`EditorContext::initialize`]
/// 3. Mutate through the public fields; persistence happens inside the
///    subsystems
pub struct EditorContext {
    pub user_data: UserDataStore,
    pub workspaces: WorkspaceRegistry,
    pub settings: EngineSettings,
}

impl EditorContext {
    /// Creates a context that resolves the platform data directory on
    /// [`initialize`](Self::initialize).
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_data: UserDataStore::new(),
            workspaces: WorkspaceRegistry::new(),
            settings: EngineSettings::default(),
        }
    }

    /// Creates a context rooted at an explicit data directory instead of
    /// the platform-resolved one. For tools and tests.
    #[must_use]
    pub fn with_data_root(root: impl Into<PathBuf>) -> Self {
        Self {
            user_data: UserDataStore::with_root(root),
            workspaces: WorkspaceRegistry::new(),
            settings: EngineSettings::default(),
        }
    }

    /// Brings every subsystem up: the user data store first, then the
    /// engine settings, then the workspace registry. Returns the number
    /// of workspaces known after the registry's cleanup pass.
    ///
    /// A store failure is fatal and aborts initialization. Unreadable
    /// settings fall back to the defaults.
    pub fn initialize(&mut self) -> Result<usize> {
        self.user_data.initialize()?;

        let settings_file = self.settings_file()?;
        self.settings = match EngineSettings::load(&settings_file) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load engine settings, using defaults: {e}");
                EngineSettings::default()
            }
        };

        self.workspaces.initialize(&self.user_data)
    }

    /// Persists the current engine settings to the settings directory.
    pub fn save_settings(&self) -> Result<()> {
        self.settings.save(&self.settings_file()?)
    }

    /// Provider over the global asset library.
    pub fn global_asset_provider(&self) -> Result<AssetProvider> {
        AssetProvider::global(self.user_data.global_assets_dir()?)
    }

    /// Provider over the currently open workspace, or `None` when no
    /// workspace is open.
    pub fn current_workspace_provider(&self) -> Result<Option<AssetProvider>> {
        match self.workspaces.current_workspace() {
            Some(workspace) => Ok(Some(AssetProvider::workspace(&workspace.path)?)),
            None => Ok(None),
        }
    }

    /// Resolver that prefers the currently open workspace over the
    /// global asset library.
    pub fn resource_resolver(&self) -> Result<ResourceResolver> {
        let mut resolver = ResourceResolver::new(self.user_data.global_assets_dir()?);
        resolver
            .set_workspace_root(self.workspaces.current_workspace().map(|w| w.path.clone()));
        Ok(resolver)
    }

    fn settings_file(&self) -> Result<PathBuf> {
        Ok(self.user_data.settings_dir()?.join(SETTINGS_FILE_NAME))
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new()
    }
}
