//! A tour of the workspace and user-data subsystem.
//!
//! Runs entirely inside a scratch directory; the real user profile is
//! never touched. Set `RUST_LOG=info` to watch the subsystems talk.

use std::fs;

use voltray::EditorContext;

fn main() -> voltray::errors::Result<()> {
    env_logger::init();

    // === 1. Bring up the editor context in a scratch directory ===
    let scratch = tempfile::tempdir()?;
    let mut context = EditorContext::with_data_root(scratch.path().join("Voltray"));
    let known = context.initialize()?;
    println!("context up, {known} workspaces known");

    // === 2. Create a couple of workspaces ===
    let island = scratch.path().join("projects/island");
    let racer = scratch.path().join("projects/racer");
    context
        .workspaces
        .create_workspace("Island", &island, "tropical scene sandbox")?;
    context
        .workspaces
        .create_workspace("Racer", &racer, "vehicle physics playground")?;

    // === 3. Open one of them ===
    context.workspaces.set_current_workspace(&island)?;
    if let Some(current) = context.workspaces.current_workspace() {
        println!("current workspace: {} ({})", current.name, current.path.display());
    }

    // === 4. Browse the seeded global asset library ===
    let library = context.global_asset_provider()?;
    let primitives = library.root().join("Primitives");
    println!("global primitives:");
    for item in library.list(&primitives, "") {
        println!("  {} ({} bytes)", item.name, item.file_size);
    }

    // === 5. Shadow a built-in asset from the open workspace ===
    let resolver = context.resource_resolver()?;
    let before = resolver.resolve("Primitives/cube.obj");
    fs::create_dir_all(island.join("Primitives"))?;
    fs::write(island.join("Primitives/cube.obj"), "v 0 0 0\n")?;
    let after = resolver.resolve("Primitives/cube.obj");
    println!("cube.obj resolved from {:?} then {:?}", before, after);

    // === 6. Recent list, the way the workspace dialog shows it ===
    println!("recent workspaces:");
    for workspace in context.workspaces.recent_workspaces() {
        println!("  {} (last opened {})", workspace.name, workspace.last_opened);
    }

    // === 7. Tweak and persist the editor settings ===
    context.settings.camera_orbit_speed = 0.5;
    context.save_settings()?;
    println!("settings saved");

    Ok(())
}
