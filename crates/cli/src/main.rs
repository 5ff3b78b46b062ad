//! mp3sort - command line entry point
//!
//! Moves the `*.mp3` files of a source directory into
//! `<dest>/<artist>/<album>/` and renames them after their ID3v2 tags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mp3sort_core::{
    load_config, load_default_config, validate_config, BatchDriver, Config, FsPlacer,
    Id3TagReader,
};

/// Filter used when neither `RUST_LOG` nor a loaded config provides one
const FALLBACK_FILTER: &str = "info";

/// Command-line arguments for mp3sort
#[derive(Parser, Debug)]
#[command(name = "mp3sort")]
#[command(about = "Sort *.mp3 files into <artist>/<album> directories using their ID3v2 tags")]
#[command(version)]
struct Args {
    /// Source directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    src_dir: Option<PathBuf>,

    /// Destination directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    dst_dir: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "MP3SORT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_settings(args.config.as_deref());

    let filter = config
        .as_ref()
        .map(|c| c.logging.filter.as_str())
        .unwrap_or(FALLBACK_FILTER);
    init_logging(filter);

    let config = config?;

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let source_dir = resolve_dir(args.src_dir, config.sorter.source_dir.as_ref(), &cwd);
    let dest_dir = resolve_dir(args.dst_dir, config.sorter.dest_dir.as_ref(), &cwd);

    info!(
        "Sorting {} into {}",
        source_dir.display(),
        dest_dir.display()
    );

    let placer = FsPlacer::new(config.placer.clone(), Id3TagReader::new())
        .with_display_root(cwd.clone());
    let driver = BatchDriver::new(placer);

    // Per-file failures are already logged and do not change the exit code
    driver
        .run(&source_dir, &dest_dir)
        .context("Sorting aborted")?;

    Ok(())
}

/// Loads and validates configuration from `path`, or defaults plus env.
fn load_settings(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => load_default_config().context("Failed to load configuration")?,
    };

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Command line value, then configured value, then the working directory.
fn resolve_dir(flag: Option<PathBuf>, configured: Option<&PathBuf>, cwd: &Path) -> PathBuf {
    flag.or_else(|| configured.cloned())
        .unwrap_or_else(|| cwd.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from(["mp3sort", "-s", "in", "-d", "out"]).unwrap();
        assert_eq!(args.src_dir, Some(PathBuf::from("in")));
        assert_eq!(args.dst_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_long_flags() {
        let args =
            Args::try_parse_from(["mp3sort", "--src-dir", "/a", "--dst-dir", "/b"]).unwrap();
        assert_eq!(args.src_dir, Some(PathBuf::from("/a")));
        assert_eq!(args.dst_dir, Some(PathBuf::from("/b")));
    }

    #[test]
    fn test_parse_no_flags() {
        let args = Args::try_parse_from(["mp3sort"]).unwrap();
        assert!(args.src_dir.is_none());
        assert!(args.dst_dir.is_none());
    }

    #[test]
    fn test_resolve_dir_precedence() {
        let cwd = Path::new("/work");
        let configured = PathBuf::from("/configured");

        assert_eq!(
            resolve_dir(Some(PathBuf::from("/flag")), Some(&configured), cwd),
            PathBuf::from("/flag")
        );
        assert_eq!(
            resolve_dir(None, Some(&configured), cwd),
            PathBuf::from("/configured")
        );
        assert_eq!(resolve_dir(None, None, cwd), PathBuf::from("/work"));
    }

    #[test]
    fn test_load_settings_missing_file() {
        let result = load_settings(Some(Path::new("/nonexistent/mp3sort.toml")));
        assert!(result.is_err());
    }
}
