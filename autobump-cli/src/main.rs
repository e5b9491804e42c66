mod config;

use anyhow::Context;
use autobump_core::adapters::FsPublisher;
use autobump_core::{BumpHandler, run_pipeline};
use autobump_types::ToolInfo;
use camino::Utf8PathBuf;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "autobump",
    version,
    about = "Bump image references in build manifests and stage PR metadata."
)]
struct Cli {
    /// Path to the YAML config file (images and versions).
    #[arg(long)]
    config: Utf8PathBuf,

    /// Repository root to rewrite (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Output directory for PR metadata (default: <repo_root>/artifacts/autobump, git-ignored).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = real_main(cli) {
        error!("Failed to run the bumper tool: {:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    let options = config::load_options(&cli.config).context("load options")?;

    let out_dir = cli
        .out_dir
        .unwrap_or_else(|| cli.repo_root.join("artifacts").join("autobump"));
    debug!(repo_root = %cli.repo_root, out_dir = %out_dir, "starting bump run");

    let handler = BumpHandler::new(&cli.repo_root, &options);
    let publisher = FsPublisher::new(out_dir.clone());

    let record = match run_pipeline(&handler, &publisher, tool_info()) {
        Ok(record) => record,
        Err(e) => {
            let step = e.step().to_string();
            return Err(anyhow::Error::new(e).context(format!("step `{step}` failed")));
        }
    };

    info!(
        changes = record.results.len(),
        "wrote PR metadata to {}", out_dir
    );
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "autobump".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
