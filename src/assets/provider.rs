//! Asset Providers
//!
//! A provider turns one browse root into display-ready directory
//! listings. The editor keeps two: one over the global asset library
//! and one over the currently open workspace.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::Result;

use super::filter::AssetFilter;

/// Which browse root an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetScope {
    /// The shared asset library under the user data root.
    Global,
    /// The currently open workspace.
    Workspace,
}

/// One entry in an asset browser listing.
#[derive(Debug, Clone)]
pub struct AssetItem {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    /// True for the synthetic ".." entry navigating to the parent.
    pub is_parent: bool,
    pub scope: AssetScope,
    /// File size in bytes; 0 for directories.
    pub file_size: u64,
    /// Last modification time; `None` for directories.
    pub last_modified: Option<SystemTime>,
}

/// Lists directory contents under one browse root.
#[derive(Debug, Clone)]
pub struct AssetProvider {
    root: PathBuf,
    scope: AssetScope,
    filter: AssetFilter,
}

impl AssetProvider {
    /// Provider over the global asset library, with the default noise
    /// filter applied. Creates the root if it is missing.
    pub fn global(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_filter(root.into(), AssetScope::Global, AssetFilter::new())
    }

    /// Provider over a workspace directory. Workspace content is the
    /// user's own, so only hidden files and the search string filter it.
    pub fn workspace(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_filter(root.into(), AssetScope::Workspace, AssetFilter::permissive())
    }

    fn with_filter(root: PathBuf, scope: AssetScope, filter: AssetFilter) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            scope,
            filter,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn scope(&self) -> AssetScope {
        self.scope
    }

    #[must_use]
    pub fn filter(&self) -> &AssetFilter {
        &self.filter
    }

    /// Mutable access to the filter, for the browser's filter menu.
    pub fn filter_mut(&mut self) -> &mut AssetFilter {
        &mut self.filter
    }

    /// Re-points the provider at a new root, creating it if missing.
    /// Used when the user switches workspaces.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        self.root = root;
        Ok(())
    }

    /// Lists `directory` for display: the parent entry first (absent at
    /// the browse root), then directories, then files, names ascending.
    ///
    /// An unreadable directory yields whatever was gathered instead of
    /// an error; browsing must not take the editor down.
    #[must_use]
    pub fn list(&self, directory: &Path, search: &str) -> Vec<AssetItem> {
        let mut items = Vec::new();

        if directory != self.root {
            if let Some(parent) = directory.parent() {
                items.push(AssetItem {
                    name: "..".to_owned(),
                    path: parent.to_path_buf(),
                    is_directory: true,
                    is_parent: true,
                    scope: self.scope,
                    file_size: 0,
                    last_modified: None,
                });
            }
        }

        match fs::read_dir(directory) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if self.filter.should_show(&path, search) {
                        items.push(self.asset_item(path));
                    }
                }
            }
            Err(e) => {
                log::warn!("Failed to read directory {}: {e}", directory.display());
            }
        }

        items.sort_by(|a, b| {
            b.is_parent
                .cmp(&a.is_parent)
                .then(b.is_directory.cmp(&a.is_directory))
                .then_with(|| a.name.cmp(&b.name))
        });
        items
    }

    fn asset_item(&self, path: PathBuf) -> AssetItem {
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        let metadata = fs::metadata(&path).ok();
        let is_directory = metadata.as_ref().is_some_and(fs::Metadata::is_dir);
        let (file_size, last_modified) = match &metadata {
            Some(m) if !is_directory => (m.len(), m.modified().ok()),
            _ => (0, None),
        };

        AssetItem {
            name,
            path,
            is_directory,
            is_parent: false,
            scope: self.scope,
            file_size,
            last_modified,
        }
    }
}
