//! Workspace Registry
//!
//! Keeps the list of known workspaces, persists it to `workspaces.json`
//! in the settings directory and tracks which workspace is currently
//! open. The current selection is stored as the workspace's path and
//! resolved against the list on every access, so removing a workspace
//! can never leave a dangling selection.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

use crate::errors::{Result, VoltrayError};
use crate::userdata::UserDataStore;

use super::{WORKSPACE_MARKER_FILE, WORKSPACE_SUBDIRS, Workspace};

/// Format version written to the registry config file.
const CONFIG_VERSION: &str = "1.0";

/// Name of the registry config file inside the settings directory.
const CONFIG_FILE_NAME: &str = "workspaces.json";

/// Version stamps written into new workspace marker files.
const WORKSPACE_VERSION: &str = "1.0";
const ENGINE_VERSION: &str = "Voltray 1.0";

/// Metadata blob stored in a workspace's marker file.
#[derive(Serialize)]
struct WorkspaceMarker {
    workspace_version: &'static str,
    engine_version: &'static str,
    created: i64,
}

/// Top-level document persisted to the registry config file.
#[derive(Serialize)]
struct ConfigDocument<'a> {
    version: &'static str,
    workspaces: &'a [Workspace],
}

/// Manages workspace creation, persistence and selection.
///
/// Mirrors the two-phase lifecycle of the user data store: construct,
/// then [`initialize`](Self::initialize) against an initialized store
/// before using any operation that touches the config file.
#[derive(Debug, Default)]
pub struct WorkspaceRegistry {
    workspaces: Vec<Workspace>,
    current: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl WorkspaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the persisted workspace list and drops records whose
    /// directories no longer qualify. Returns the number of workspaces
    /// available afterwards.
    ///
    /// The store must have completed its own initialization first; the
    /// registry's config file lives in the store's settings directory.
    pub fn initialize(&mut self, store: &UserDataStore) -> Result<usize> {
        if !store.is_initialized() {
            log::error!("The user data store must be initialized before the workspace registry");
            return Err(VoltrayError::Uninitialized("UserDataStore"));
        }

        self.config_file = Some(store.settings_dir()?.join(CONFIG_FILE_NAME));

        // A corrupt config file is not fatal: start from an empty list
        // and let the next save rewrite it.
        if let Err(e) = self.load_workspaces() {
            log::error!("Error loading workspaces: {e}");
        }

        let removed = self.cleanup_invalid_workspaces();
        if removed > 0 {
            log::info!("Cleaned up {removed} invalid workspaces");
        }

        log::info!(
            "Workspace registry initialized with {} workspaces",
            self.workspaces.len()
        );
        Ok(self.workspaces.len())
    }

    /// Reads the workspace list from the config file.
    ///
    /// An absent file is a normal first run and leaves the list empty.
    /// Records are decoded individually so one malformed entry cannot
    /// take down the rest; records without a path are skipped. The
    /// persisted validity flag is advisory only, each record is
    /// re-checked against the filesystem here.
    pub fn load_workspaces(&mut self) -> Result<()> {
        let config_file = self.config_file()?.to_path_buf();
        self.workspaces.clear();

        if !config_file.exists() {
            log::info!("No workspace config file found, starting with an empty workspace list");
            return Ok(());
        }

        let contents = fs::read_to_string(&config_file)?;
        let document: Value = serde_json::from_str(&contents)?;

        if let Some(records) = document.get("workspaces").and_then(Value::as_array) {
            for record in records {
                let mut workspace = Workspace::from_value(record.clone());
                if workspace.path.as_os_str().is_empty() {
                    log::warn!("Skipping workspace record without a path");
                    continue;
                }
                workspace.is_valid = workspace.is_path_valid();
                self.workspaces.push(workspace);
            }
        }

        log::info!("Loaded {} workspaces from config", self.workspaces.len());
        Ok(())
    }

    /// Writes the workspace list to the config file, replacing its
    /// previous contents. A list that cannot be serialized (a path
    /// outside UTF-8) is reported as an error, never a panic.
    pub fn save_workspaces(&self) -> Result<()> {
        let config_file = self.config_file()?;
        let document = ConfigDocument {
            version: CONFIG_VERSION,
            workspaces: &self.workspaces,
        };
        fs::write(config_file, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }

    /// Creates a new workspace directory with the standard layout and
    /// registers it.
    ///
    /// Fails with [`VoltrayError::DuplicatePath`] before touching the
    /// disk when a workspace is already registered at `path`. Creation
    /// is not atomic: when an I/O error interrupts it, directories
    /// already created stay on disk and no record is added. Retrying
    /// the create re-uses them.
    pub fn create_workspace(
        &mut self,
        name: &str,
        path: impl Into<PathBuf>,
        description: &str,
    ) -> Result<()> {
        self.config_file()?;
        let path = path.into();

        if self.workspaces.iter().any(|w| w.path == path) {
            log::error!("Workspace already exists at path: {}", path.display());
            return Err(VoltrayError::DuplicatePath(path));
        }

        fs::create_dir_all(&path)?;
        Self::create_workspace_structure(&path)?;

        let now = unix_now();
        self.workspaces.push(Workspace {
            name: name.to_owned(),
            description: description.to_owned(),
            path: path.clone(),
            last_opened: now,
            created: now,
            is_valid: true,
        });
        self.persist("creating a workspace");

        log::info!("Created workspace: {name} at {}", path.display());
        Ok(())
    }

    /// Whether `path` is a directory carrying the workspace marker file.
    #[must_use]
    pub fn is_workspace_directory(path: &Path) -> bool {
        path.is_dir() && path.join(WORKSPACE_MARKER_FILE).exists()
    }

    /// Drops every record whose directory is gone or no longer carries
    /// the marker file. Returns how many records were removed. Running
    /// it twice in a row removes nothing the second time.
    pub fn cleanup_invalid_workspaces(&mut self) -> usize {
        let current = &mut self.current;
        let before = self.workspaces.len();

        self.workspaces.retain(|workspace| {
            if workspace.is_path_valid() && Self::is_workspace_directory(&workspace.path) {
                return true;
            }
            log::info!(
                "Removing invalid workspace: {} ({})",
                workspace.name,
                workspace.path.display()
            );
            if current.as_deref() == Some(workspace.path.as_path()) {
                *current = None;
            }
            false
        });

        let removed = before - self.workspaces.len();
        if removed > 0 {
            self.persist("cleaning up invalid workspaces");
        }
        removed
    }

    /// Snapshot of all registered workspaces, in registration order.
    #[must_use]
    pub fn all_workspaces(&self) -> Vec<Workspace> {
        self.workspaces.clone()
    }

    /// Snapshot of all registered workspaces, most recently opened first.
    #[must_use]
    pub fn recent_workspaces(&self) -> Vec<Workspace> {
        let mut sorted = self.workspaces.clone();
        sorted.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
        sorted
    }

    /// Makes the workspace at `path` the current one and refreshes its
    /// last-opened time.
    ///
    /// When no workspace is registered at `path` the current selection
    /// is cleared and [`VoltrayError::WorkspaceNotFound`] is returned,
    /// so a stale selection can never survive a failed switch.
    pub fn set_current_workspace(&mut self, path: &Path) -> Result<()> {
        let now = unix_now();
        if let Some(workspace) = self.workspaces.iter_mut().find(|w| w.path == path) {
            workspace.last_opened = now;
            self.current = Some(path.to_path_buf());
            self.persist("selecting a workspace");
            Ok(())
        } else {
            self.current = None;
            Err(VoltrayError::WorkspaceNotFound(path.to_path_buf()))
        }
    }

    /// Refreshes the last-opened time of the workspace at `path`.
    pub fn update_last_opened(&mut self, path: &Path) -> Result<()> {
        match self.workspaces.iter_mut().find(|w| w.path == path) {
            Some(workspace) => {
                workspace.last_opened = unix_now();
                self.persist("updating a workspace timestamp");
                Ok(())
            }
            None => Err(VoltrayError::WorkspaceNotFound(path.to_path_buf())),
        }
    }

    /// Unregisters the workspace at `path`. The directory and its files
    /// are left untouched.
    pub fn remove_workspace(&mut self, path: &Path) -> Result<()> {
        let index = self
            .workspaces
            .iter()
            .position(|w| w.path == path)
            .ok_or_else(|| VoltrayError::WorkspaceNotFound(path.to_path_buf()))?;

        if self.current.as_deref() == Some(path) {
            self.current = None;
        }
        self.workspaces.remove(index);
        self.persist("removing a workspace");
        Ok(())
    }

    /// The currently selected workspace, if any.
    ///
    /// Resolved by path against the list on every call; returns `None`
    /// when nothing is selected or the selected record was removed.
    #[must_use]
    pub fn current_workspace(&self) -> Option<&Workspace> {
        let current = self.current.as_deref()?;
        self.workspaces.iter().find(|w| w.path == current)
    }

    /// Number of registered workspaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    fn config_file(&self) -> Result<&Path> {
        self.config_file
            .as_deref()
            .ok_or(VoltrayError::Uninitialized("WorkspaceRegistry"))
    }

    /// Persists after a successful mutation. A failed save keeps the
    /// in-memory change; the next successful save writes it out.
    fn persist(&self, operation: &str) {
        if let Err(e) = self.save_workspaces() {
            log::error!("Failed to save workspaces after {operation}: {e}");
        }
    }

    fn create_workspace_structure(path: &Path) -> Result<()> {
        for subdir in WORKSPACE_SUBDIRS {
            fs::create_dir_all(path.join(subdir))?;
        }

        let marker = WorkspaceMarker {
            workspace_version: WORKSPACE_VERSION,
            engine_version: ENGINE_VERSION,
            created: unix_now(),
        };
        fs::write(
            path.join(WORKSPACE_MARKER_FILE),
            serde_json::to_string_pretty(&marker)?,
        )?;
        Ok(())
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_secs()).ok())
        .unwrap_or(0)
}
