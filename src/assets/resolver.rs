//! Resource Resolution
//!
//! Maps engine-relative resource paths such as `Primitives/cube.obj` to
//! files on disk. The current workspace is searched before the global
//! asset library, so a workspace can shadow a built-in asset with its
//! own version.

use std::path::{Path, PathBuf};

/// Resolves relative resource paths against the current workspace and
/// the global asset library, in that order.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    global_root: PathBuf,
    workspace_root: Option<PathBuf>,
}

impl ResourceResolver {
    /// Resolver over the global asset library only.
    #[must_use]
    pub fn new(global_root: impl Into<PathBuf>) -> Self {
        Self {
            global_root: global_root.into(),
            workspace_root: None,
        }
    }

    /// Sets or clears the workspace searched before the global library.
    pub fn set_workspace_root(&mut self, root: Option<PathBuf>) {
        self.workspace_root = root;
    }

    #[must_use]
    pub fn global_root(&self) -> &Path {
        &self.global_root
    }

    #[must_use]
    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    /// Finds `relative` in the workspace first, then in the global
    /// library. `None` when the resource exists in neither.
    #[must_use]
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        let relative = relative.as_ref();

        if let Some(workspace) = &self.workspace_root {
            let candidate = workspace.join(relative);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        let candidate = self.global_root.join(relative);
        if candidate.exists() {
            Some(candidate)
        } else {
            log::debug!("Resource not found: {}", relative.display());
            None
        }
    }

    /// Whether `relative` resolves in either root.
    #[must_use]
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.resolve(relative).is_some()
    }
}
