//! Asset Browsing Tests
//!
//! Tests for:
//! - AssetFilter: dotfiles, category tables, custom extensions, search
//! - AssetProvider: listing order, parent entry, scope filters, metadata
//! - ResourceResolver: workspace-first resolution and global fallback

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use voltray::assets::{AssetCategory, AssetFilter, AssetProvider, AssetScope, ResourceResolver};

fn touch(path: &Path) {
    fs::write(path, "x").unwrap();
}

// ============================================================================
// AssetFilter
// ============================================================================

#[test]
fn filter_always_hides_dotfiles() {
    let strict = AssetFilter::new();
    let permissive = AssetFilter::permissive();

    assert!(!strict.should_show(Path::new("dir/.hidden"), ""));
    assert!(!permissive.should_show(Path::new("dir/.hidden"), ""));
    assert!(strict.should_show(Path::new("dir/visible.txt"), ""));
}

#[test]
fn default_filter_hides_noise_but_keeps_content() {
    let filter = AssetFilter::new();

    // System, project, IDE and VCS files are hidden out of the box.
    assert!(!filter.should_show(Path::new("build/output.log"), ""));
    assert!(!filter.should_show(Path::new("proj/editor.sln"), ""));

    // Archives, media and documents stay visible.
    assert!(filter.should_show(Path::new("pack/textures.zip"), ""));
    assert!(filter.should_show(Path::new("audio/theme.mp3"), ""));
    assert!(filter.should_show(Path::new("docs/manual.pdf"), ""));
    assert!(filter.should_show(Path::new("scenes/level.scene"), ""));
}

#[test]
fn category_toggle_hides_and_reveals() {
    let mut filter = AssetFilter::new();
    assert!(filter.should_show(Path::new("clip.mp4"), ""));

    filter.set_category_filtered(AssetCategory::Media, true);
    assert!(filter.is_category_filtered(AssetCategory::Media));
    assert!(!filter.should_show(Path::new("clip.mp4"), ""));

    filter.set_category_filtered(AssetCategory::Media, false);
    assert!(filter.should_show(Path::new("clip.mp4"), ""));
}

#[test]
fn custom_extensions_filter_with_normalization() {
    let mut filter = AssetFilter::permissive();
    filter.add_filtered_extension("FOO");

    assert!(!filter.should_show(Path::new("a.foo"), ""));
    assert!(!filter.should_show(Path::new("b.FOO"), ""));
    assert!(filter.is_filtered_extension(".foo"));

    filter.remove_filtered_extension(".foo");
    assert!(filter.should_show(Path::new("a.foo"), ""));
}

#[test]
fn search_is_case_insensitive_substring() {
    let filter = AssetFilter::permissive();
    assert!(filter.should_show(Path::new("CubeMesh.scene"), "cube"));
    assert!(filter.should_show(Path::new("CubeMesh.scene"), "MESH"));
    assert!(!filter.should_show(Path::new("CubeMesh.scene"), "sphere"));
}

#[test]
fn extension_lookup_uses_category_priority() {
    // ".obj" appears in both the executable and media tables; the
    // earlier category claims it.
    assert_eq!(
        AssetCategory::of_extension(".obj"),
        Some(AssetCategory::Executable)
    );
    assert_eq!(AssetCategory::of_extension(".scene"), None);
}

#[test]
fn reset_restores_the_default_category_set() {
    let mut filter = AssetFilter::new();
    filter.set_category_filtered(AssetCategory::Media, true);
    filter.set_category_filtered(AssetCategory::System, false);
    filter.add_filtered_extension(".scene");

    filter.reset_to_defaults();
    assert!(!filter.is_category_filtered(AssetCategory::Media));
    assert!(filter.is_category_filtered(AssetCategory::System));
    assert!(!filter.is_filtered_extension(".scene"));
}

// ============================================================================
// AssetProvider
// ============================================================================

#[test]
fn listing_sorts_directories_before_files_alphabetically() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("zeta_dir")).unwrap();
    fs::create_dir(temp.path().join("alpha_dir")).unwrap();
    touch(&temp.path().join("beta.txt"));
    touch(&temp.path().join("apple.txt"));

    let provider = AssetProvider::workspace(temp.path()).unwrap();
    let names: Vec<_> = provider
        .list(temp.path(), "")
        .into_iter()
        .map(|item| item.name)
        .collect();

    assert_eq!(names, ["alpha_dir", "zeta_dir", "apple.txt", "beta.txt"]);
}

#[test]
fn listing_adds_parent_entry_below_the_root_only() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("sub");
    fs::create_dir(&sub).unwrap();
    touch(&sub.join("file.txt"));

    let provider = AssetProvider::workspace(temp.path()).unwrap();

    let at_root = provider.list(temp.path(), "");
    assert!(at_root.iter().all(|item| !item.is_parent));

    let below = provider.list(&sub, "");
    assert!(below[0].is_parent);
    assert_eq!(below[0].name, "..");
    assert_eq!(below[0].path, temp.path());
    assert!(below[0].is_directory);
}

#[test]
fn listing_applies_the_search_string() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("cube.scene"));
    touch(&temp.path().join("sphere.scene"));

    let provider = AssetProvider::workspace(temp.path()).unwrap();
    let names: Vec<_> = provider
        .list(temp.path(), "cub")
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["cube.scene"]);
}

#[test]
fn global_provider_filters_noise_workspace_provider_does_not() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("debug.log"));
    touch(&temp.path().join("mesh.fbx"));

    let global = AssetProvider::global(temp.path()).unwrap();
    assert_eq!(global.scope(), AssetScope::Global);
    let global_names: Vec<_> = global
        .list(temp.path(), "")
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(global_names, ["mesh.fbx"], "system noise is hidden");

    let workspace = AssetProvider::workspace(temp.path()).unwrap();
    assert_eq!(workspace.scope(), AssetScope::Workspace);
    let workspace_names: Vec<_> = workspace
        .list(temp.path(), "")
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(workspace_names, ["debug.log", "mesh.fbx"]);
}

#[test]
fn constructors_create_a_missing_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("not_yet_there");
    let provider = AssetProvider::global(&root).unwrap();
    assert!(root.is_dir());
    assert_eq!(provider.root(), root);
}

#[test]
fn listing_an_unreadable_directory_degrades_gracefully() {
    let temp = TempDir::new().unwrap();
    let provider = AssetProvider::workspace(temp.path()).unwrap();

    let items = provider.list(&temp.path().join("missing"), "");
    assert_eq!(items.len(), 1, "only the parent entry");
    assert!(items[0].is_parent);
}

#[test]
fn set_root_repoints_the_listing() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    touch(&second.join("here.txt"));

    let mut provider = AssetProvider::workspace(&first).unwrap();
    provider.set_root(&second).unwrap();

    let names: Vec<_> = provider
        .list(&second, "")
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["here.txt"]);
}

#[test]
fn items_carry_file_metadata() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("mesh.fbx"), b"12345").unwrap();
    fs::create_dir(temp.path().join("textures")).unwrap();

    let provider = AssetProvider::workspace(temp.path()).unwrap();
    let items = provider.list(temp.path(), "");

    let dir = items.iter().find(|i| i.name == "textures").unwrap();
    assert!(dir.is_directory);
    assert_eq!(dir.file_size, 0);
    assert!(dir.last_modified.is_none());

    let file = items.iter().find(|i| i.name == "mesh.fbx").unwrap();
    assert!(!file.is_directory);
    assert_eq!(file.file_size, 5);
    assert!(file.last_modified.is_some());
}

// ============================================================================
// ResourceResolver
// ============================================================================

#[test]
fn resolver_prefers_the_workspace_copy() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("global");
    let workspace = temp.path().join("workspace");
    fs::create_dir_all(global.join("Primitives")).unwrap();
    fs::create_dir_all(workspace.join("Primitives")).unwrap();
    touch(&global.join("Primitives/cube.obj"));
    touch(&workspace.join("Primitives/cube.obj"));

    let mut resolver = ResourceResolver::new(&global);
    resolver.set_workspace_root(Some(workspace.clone()));

    let resolved = resolver.resolve("Primitives/cube.obj").unwrap();
    assert_eq!(resolved, workspace.join("Primitives/cube.obj"));
}

#[test]
fn resolver_falls_back_to_the_global_library() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("global");
    let workspace = temp.path().join("workspace");
    fs::create_dir_all(global.join("Primitives")).unwrap();
    fs::create_dir_all(&workspace).unwrap();
    touch(&global.join("Primitives/cube.obj"));

    let mut resolver = ResourceResolver::new(&global);
    resolver.set_workspace_root(Some(workspace));

    let resolved = resolver.resolve("Primitives/cube.obj").unwrap();
    assert_eq!(resolved, global.join("Primitives/cube.obj"));
}

#[test]
fn resolver_reports_missing_resources() {
    let temp = TempDir::new().unwrap();
    let resolver = ResourceResolver::new(temp.path());

    assert!(resolver.resolve("Primitives/teapot.obj").is_none());
    assert!(!resolver.exists("Primitives/teapot.obj"));
}

#[test]
fn resolver_without_a_workspace_searches_global_only() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Scripts")).unwrap();
    touch(&temp.path().join("Scripts/init.lua"));

    let resolver = ResourceResolver::new(temp.path());
    assert!(resolver.workspace_root().is_none());
    assert!(resolver.exists("Scripts/init.lua"));
}
