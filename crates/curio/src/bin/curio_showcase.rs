//! # CURIO Showcase
//!
//! Loads a showcase manifest, builds every asset and prints the scene.
//!
//! ```bash
//! curio_showcase data/showcase.toml
//! curio_showcase data/showcase.toml --tree
//! curio_showcase data/showcase.toml --flat -v
//! RUST_LOG=curio_assets=trace curio_showcase data/showcase.toml
//! ```
//!
//! Exit code 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;

use curio::{
    build_showcase, init_logging, render_tree, AssetRegistry, LoggingConfig, Showcase, ShowcaseConfig,
};

const USAGE: &str = "usage: curio_showcase <manifest.toml> [--tree] [--flat] [-v|-vv]";

/// Parsed command line.
#[derive(Debug)]
struct Args {
    manifest: PathBuf,
    tree: bool,
    flat: bool,
    verbose: u8,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut manifest = None;
    let mut tree = false;
    let mut flat = false;
    let mut verbose = 0_u8;

    for arg in raw {
        match arg.as_str() {
            "--tree" => tree = true,
            "--flat" => flat = true,
            "-v" | "--verbose" => verbose = verbose.saturating_add(1),
            "-vv" => verbose = verbose.saturating_add(2),
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with('-') => return Err(format!("unknown flag {flag}\n{USAGE}")),
            _ if manifest.is_some() => return Err(format!("unexpected argument {arg}\n{USAGE}")),
            _ => manifest = Some(PathBuf::from(&arg)),
        }
    }

    let manifest = manifest.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { manifest, tree, flat, verbose })
}

fn print_summary(showcase: &Showcase) {
    let stats = &showcase.stats;
    let build = &showcase.build;

    println!("═══════════════════════════════════════════════════════════════════");
    println!("  SHOWCASE: {}", showcase.root.name());
    println!("═══════════════════════════════════════════════════════════════════");
    println!(
        "  assets:     {} ({} workers, {:.2} ms)",
        build.assets,
        build.workers,
        build.elapsed.as_secs_f64() * 1000.0
    );
    println!("  nodes:      {} groups, {} meshes", stats.groups, stats.meshes);
    println!(
        "  primitives: {} box, {} cylinder, {} cone, {} sphere, {} plane",
        stats.boxes, stats.cylinders, stats.cones, stats.spheres, stats.planes
    );
    println!("  materials:  {} distinct", stats.distinct_materials);
    println!("  depth:      {}", stats.max_depth);
}

fn print_draw_list(showcase: &Showcase) {
    for item in showcase.root.flatten() {
        let p = item.world.translation();
        println!(
            "{:<14} {:<9} ({:>6.2}, {:>6.2}, {:>6.2})  {}",
            item.name,
            item.primitive.kind().name(),
            p.x,
            p.y,
            p.z,
            item.material.base_color
        );
    }
}

fn run(args: &Args) -> Result<(), curio::ShowcaseError> {
    let config = ShowcaseConfig::load(&args.manifest)?;
    let showcase = build_showcase(&config, AssetRegistry::global())?;

    print_summary(&showcase);
    if args.tree {
        println!();
        print!("{}", render_tree(&showcase.root));
    }
    if args.flat {
        println!();
        print_draw_list(&showcase);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(LoggingConfig::verbose(args.verbose));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["scene.toml", "--tree"]).unwrap();
        assert_eq!(parsed.manifest, PathBuf::from("scene.toml"));
        assert!(parsed.tree);
        assert!(!parsed.flat);
        assert_eq!(parsed.verbose, 0);

        assert_eq!(args(&["-v", "scene.toml"]).unwrap().verbose, 1);
        assert_eq!(args(&["scene.toml", "-vv", "--verbose"]).unwrap().verbose, 3);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(args(&[]).is_err());
        assert!(args(&["--bogus", "a.toml"]).is_err());
        assert!(args(&["a.toml", "b.toml"]).is_err());
    }
}
