//! Build automation tasks for Portal 2D
//!
//! Usage:
//!   cargo xtask build-web [--dev]          # dist/web: wasm, loader page, data
//!   cargo xtask package [--platform P]     # dist/<platform>: release binary, data

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const BINARY: &str = "portal2d";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
/// Loader script matching the macroquad version in Cargo.toml
const MQ_JS_BUNDLE: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for Portal 2D")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the WASM game and its loader page into dist/web
    BuildWeb {
        /// Tag the page title with [DEV]
        #[arg(long)]
        dev: bool,
    },
    /// Build a native release into dist/<platform>
    Package {
        /// Defaults to the host platform
        #[arg(long, value_enum)]
        platform: Option<Platform>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Platform {
    Windows,
    Macos,
    Linux,
}

impl Platform {
    fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Macos
        } else {
            Platform::Linux
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
        }
    }

    fn binary_name(self) -> String {
        match self {
            Platform::Windows => format!("{BINARY}.exe"),
            _ => BINARY.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let root = workspace_root()?;
    match Cli::parse().command {
        Commands::BuildWeb { dev } => build_web(&root, dev),
        Commands::Package { platform } => package(&root, platform.unwrap_or_else(Platform::host)),
    }
}

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().with_context(|| format!("Failed to start {:?}", cmd.get_program()))?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd.get_program(), status);
    }
    Ok(())
}

/// `cargo build --release` of the game binary, optionally for another target
fn cargo_release(root: &Path, target: Option<&str>) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.current_dir(root).args(["build", "--release", "--bin", BINARY]);
    if let Some(target) = target {
        cmd.args(["--target", target]);
    }
    run(&mut cmd)
}

/// Empty `dir`, creating it if needed
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("Clearing {}", dir.display()))?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Copy the level, settings and images next to the binary. `data/` is flat.
fn stage_data(root: &Path, dist: &Path) -> Result<usize> {
    let src = root.join("data");
    let dst = dist.join("data");
    fs::create_dir_all(&dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(&src).with_context(|| format!("Reading {}", src.display()))? {
        let path = entry?.path();
        if let Some(name) = path.file_name().filter(|_| path.is_file()) {
            fs::copy(&path, dst.join(name))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn build_web(root: &Path, dev: bool) -> Result<()> {
    let dist = root.join("dist/web");

    println!("Building {BINARY} for {WASM_TARGET}...");
    cargo_release(root, Some(WASM_TARGET))?;
    fresh_dir(&dist)?;

    let wasm = format!("{BINARY}.wasm");
    fs::copy(
        root.join("target").join(WASM_TARGET).join("release").join(&wasm),
        dist.join(&wasm),
    )
    .context("WASM binary missing after build")?;

    let title = if dev { "<title>[DEV] Portal 2D" } else { "<title>Portal 2D" };
    let page = fs::read_to_string(root.join("web/index.html"))?.replace("<title>Portal 2D", title);
    fs::write(dist.join("index.html"), page)?;

    println!("Fetching macroquad loader...");
    run(Command::new("curl").args(["-sSL", "-o"]).arg(dist.join("mq_js_bundle.js")).arg(MQ_JS_BUNDLE))?;

    let files = stage_data(root, &dist)?;
    println!("Web build complete: {} ({files} data files)", dist.display());
    Ok(())
}

fn package(root: &Path, platform: Platform) -> Result<()> {
    let dist = root.join("dist").join(platform.dir_name());
    let binary = platform.binary_name();

    println!("Packaging {BINARY} for {}...", platform.dir_name());
    cargo_release(root, None)?;
    fresh_dir(&dist)?;

    fs::copy(root.join("target/release").join(&binary), dist.join(&binary))
        .with_context(|| format!("{binary} missing after build"))?;

    let files = stage_data(root, &dist)?;
    println!("Package complete: {} ({files} data files)", dist.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_name_per_platform() {
        assert_eq!(Platform::Windows.binary_name(), "portal2d.exe");
        assert_eq!(Platform::Linux.binary_name(), "portal2d");
        assert_eq!(Platform::Macos.dir_name(), "macos");
    }
}
