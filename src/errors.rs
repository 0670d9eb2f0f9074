//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`VoltrayError`] covers all failure modes including:
//! - Platform path resolution failures
//! - User-data and workspace I/O errors
//! - Configuration parsing errors
//! - Workspace registry lookup errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, VoltrayError>`.
//!
//! ```rust,ignore
//! use voltray::errors::{VoltrayError, Result};
//!
//! fn open_workspace() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the Voltray engine.
///
/// This enum covers all possible error conditions that can occur
/// while managing user data and workspaces. Each variant provides
/// specific context about what went wrong.
#[derive(Error, Debug)]
pub enum VoltrayError {
    // ========================================================================
    // Platform Errors
    // ========================================================================
    /// The per-user application data directory could not be determined.
    #[error("Failed to resolve the platform application data directory")]
    PathResolutionFailed,

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Workspace Registry Errors
    // ========================================================================
    /// A workspace is already registered at this path.
    #[error("A workspace is already registered at '{}'", .0.display())]
    DuplicatePath(PathBuf),

    /// No registered workspace matches this path.
    #[error("No workspace registered at '{}'", .0.display())]
    WorkspaceNotFound(PathBuf),

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================
    /// A subsystem was used before its `initialize` call succeeded.
    #[error("{0} has not been initialized")]
    Uninitialized(&'static str),
}

/// Alias for `Result<T, VoltrayError>`.
pub type Result<T> = std::result::Result<T, VoltrayError>;
