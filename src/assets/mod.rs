//! Asset Browsing
//!
//! Non-UI core of the asset browser: filtering rules, directory listings
//! for the two browse roots (the shared global library and the current
//! workspace) and relative resource resolution.
//!
//! - [`AssetFilter`] decides which files a listing shows.
//! - [`AssetProvider`] produces sorted [`AssetItem`] listings per root.
//! - [`ResourceResolver`] maps engine-relative paths to files on disk.

pub mod filter;
pub mod provider;
pub mod resolver;

pub use filter::{AssetCategory, AssetFilter};
pub use provider::{AssetItem, AssetProvider, AssetScope};
pub use resolver::ResourceResolver;
