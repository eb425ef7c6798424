//! credkit - drive the credential editing model from a terminal.

mod config;
mod prompt;
mod redact;
mod schema;
mod session;
mod settings;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use credkit_core::ports::FullSync;
use credkit_core::sync::{self, SyncError};
use credkit_core::UpdateGate;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use prompt::LinePrompter;
use redact::RedactingEncryptor;
use schema::DirSchema;
use session::EditSession;
use settings::TomlSettings;

/// credkit - custom fields, login URIs and startup tasks
#[derive(Parser, Debug)]
#[command(name = "credkit")]
#[command(about = "Edit credential fields and URIs, and run startup update tasks")]
struct Args {
    /// Path to a config file (defaults to ~/.config/credkit/credkit.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the first-run / upgrade tasks if the build changed.
    Startup {
        /// Treat this run as a debug build (always runs the tasks).
        #[arg(long)]
        debug: bool,
    },
    /// Edit custom fields and URIs interactively and print the saved record.
    ///
    /// Values are shown as redaction markers, never in plain text.
    Edit {
        /// Organization that owns the record (encryption scope).
        #[arg(long)]
        organization: Option<String>,
    },
}

/// No transport is linked into the CLI, so every sync request is refused.
struct OfflineSync;

#[async_trait]
impl FullSync for OfflineSync {
    async fn full_sync(&self, force_resync: bool) -> Result<(), SyncError> {
        tracing::debug!("Full sync requested (force_resync={})", force_resync);
        Err(SyncError::NotAuthenticated)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("credkit=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config)?;

    match args.command {
        Command::Startup { debug } => startup(&config, debug),
        Command::Edit { organization } => edit(organization),
    }
}

fn startup(config: &Config, debug: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (handle, worker) = sync::channel(Arc::new(OfflineSync));
    let worker = runtime.spawn(worker.run());

    let settings = TomlSettings::new(config.data_dir.join("settings.toml"));
    let schema = DirSchema::new(config.data_dir.join("db"));
    let build_id = config.build_id();

    let outcome = UpdateGate::new(&settings, &schema, &handle, build_id.as_str())
        .debug(debug || credkit_core::update::is_debug_build())
        .run()?;
    println!("update tasks ran: {}", outcome.ran_tasks);

    // Let queued syncs drain before the runtime shuts down.
    drop(handle);
    let completed = runtime.block_on(worker).context("Sync worker panicked")?;
    tracing::info!("{} sync(s) completed", completed);
    Ok(())
}

fn edit(organization: Option<String>) -> Result<()> {
    let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let mut session = EditSession::new();
    session.run(&prompter);

    let record = session.save(organization, &RedactingEncryptor);
    let text = toml::to_string_pretty(&record).context("Failed to render record")?;
    println!("{text}");
    Ok(())
}
