use std::env;
use std::fs;
use std::path::Path;
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

/// Config profiles shipped next to the binary
const PROFILES: [&str; 2] = ["debug", "release"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Emit build metadata at build time
    let build = BuildBuilder::default()
        .build_timestamp(true) // Build timestamp
        .build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true) // Optimization level
        .target_triple(true) // Target triple (e.g., x86_64-unknown-linux-gnu)
        .build()?;

    let rustc = RustcBuilder::default()
        .semver(true) // Rust compiler version
        .channel(true) // Rust channel (stable, beta, nightly)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    // Git metadata is optional; build_info falls back when it is missing
    if let Err(e) = emit_git() {
        println!("cargo:warning=git metadata unavailable: {}", e);
    }

    // Copy config files to output directory
    copy_configs()?;

    Ok(())
}

/// Emits git metadata using the git command line
fn emit_git() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::default()
        .sha(true) // Git commit SHA
        .branch(true) // Git branch name
        .dirty(true) // Whether working tree is dirty
        .build()?;

    GitEmitter::default().add_instructions(&gitcl)?.emit()?;
    Ok(())
}

/// Copies config/{profile}.toml next to the binary
fn copy_configs() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let profile = env::var("PROFILE")?;

    // Get the target directory (OUT_DIR is deep in build artifacts)
    // OUT_DIR is like: target/debug/build/swipe-xxx/out
    // We want: target/debug/config
    let target_dir = Path::new(&out_dir)
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .ok_or("Could not determine target directory")?;

    let config_out_dir = target_dir.join("config");
    fs::create_dir_all(&config_out_dir)?;

    // Release builds only ship release.toml, debug builds ship both
    let wanted = PROFILES
        .iter()
        .filter(|name| profile != "release" || **name == "release");

    for name in wanted {
        let file = format!("{}.toml", name);
        let source = Path::new("config").join(&file);
        println!("cargo:rerun-if-changed={}", source.display());
        if source.exists() {
            fs::copy(&source, config_out_dir.join(&file))?;
        }
    }

    Ok(())
}
