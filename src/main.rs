use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use storybook_versions::config::VersionsConfig;
use storybook_versions::logging::{init_file_logger, init_logger};
use storybook_versions::version::resolver::VersionResolver;
use storybook_versions::version::sources::HttpManifestSource;
use storybook_versions::version::store::VersionStore;
use storybook_versions::version::types::{DocsUrlOptions, VersionInfo};

#[derive(Parser)]
#[command(name = "storybook-versions")]
#[command(version, about = "Check for Storybook updates and resolve docs links")]
struct Cli {
    /// Installed version
    #[arg(long)]
    current: String,

    /// Version check payload to use instead of fetching (`{ success, data, time }`)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Never fetch the remote versions document
    #[arg(long)]
    offline: bool,

    /// Link to the docs of the installed MAJOR.MINOR
    #[arg(long)]
    versioned: bool,

    /// Renderer identifier added to the docs link (e.g. "vue")
    #[arg(long)]
    renderer: Option<String>,

    /// Docs page below the root, optionally with a #fragment
    #[arg(long)]
    subpath: Option<String>,

    /// Write logs to the data directory instead of stderr
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = if cli.log_file {
        Some(init_file_logger().context("Failed to set up log file")?)
    } else {
        init_logger();
        None
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<VersionsConfig>(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => VersionsConfig::default(),
    };

    let mut store = VersionStore::with_resolver(
        VersionInfo::new(cli.current),
        VersionResolver::new(&config.docs_url),
    );

    // A manifest file replaces the remote fetch
    match &cli.manifest {
        Some(path) => {
            let payload = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read manifest {}", path.display()))?;
            store.apply_embedded(&payload);
        }
        None if !cli.offline => {
            store
                .refresh(&HttpManifestSource::new(&config.manifest_url))
                .await;
        }
        None => {}
    }

    let options = DocsUrlOptions {
        versioned: cli.versioned,
        renderer: cli.renderer.is_some(),
        subpath: cli.subpath,
    };

    println!("current: {}", store.current_version().version);
    match store.latest_version() {
        Some(latest) => println!("latest: {}", latest.version),
        None => println!("latest: unknown"),
    }
    println!("update available: {}", store.update_available());
    println!("docs: {}", store.docs_url(&options, cli.renderer.as_deref()));

    Ok(())
}
