//! Media Tracker CLI - Record, list and back up media items
//!
//! Usage:
//!   media-tracker add      - Add an item (prompts for missing fields)
//!   media-tracker list     - Show all items
//!   media-tracker delete   - Delete an item by id
//!   media-tracker clear    - Delete every item
//!   media-tracker export   - Write all items to media-tracker-data.json
//!   media-tracker import   - Replace all items with a JSON export
//!   media-tracker shell    - Interactive mode

mod shell;
mod view;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use media_tracker_core::{
    config::default_config_path, Config, ImportError, MediaController, MediaForm, MediaId,
    StoreError,
};
use std::path::{Path, PathBuf};
use view::TerminalView;

/// Media Tracker - Keep track of what you read, watch and play
#[derive(Parser)]
#[command(name = "media-tracker")]
#[command(about = "Record, list and back up media items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (default: ~/.config/media-tracker/media-tracker.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a media item (missing fields are prompted for)
    Add {
        #[arg(long)]
        title: Option<String>,

        /// Free-form category, e.g. book, movie, game
        #[arg(long = "type")]
        kind: Option<String>,

        /// Free-form state, e.g. planned, in progress, done
        #[arg(long)]
        status: Option<String>,
    },

    /// List all media items
    List,

    /// Delete a media item by id
    Delete {
        /// Item id as shown by `list`
        id: i64,
    },

    /// Delete every media item
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all items as JSON
    Export {
        /// Output file (default: <export_dir>/media-tracker-data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all items with the contents of a JSON export
    Import {
        /// JSON file to import
        file: PathBuf,
    },

    /// Interactive mode
    Shell,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose).and_then(|()| run(cli)) {
        tracing::error!("{:#}", e);
        eprintln!("{} {:#}", "✗".red(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("media_tracker_cli={}", log_level).parse()?)
                .add_directive(format!("media_tracker_core={}", log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        config: config_override,
        ..
    } = cli;
    let config_path = config_override.unwrap_or_else(default_config_path);
    let config = Config::load_or_default(&config_path)?;
    tracing::debug!("Config: {}", config_path.display());

    // One operation at a time on a single thread.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot start async runtime")?;

    let config = &config;
    rt.block_on(async move {
        let mut ctl = MediaController::open(config.data_dir.clone(), TerminalView::new())
            .await
            .with_context(|| format!("Cannot open media store in {}", config.data_dir.display()))?;

        match command {
            Commands::Add {
                title,
                kind,
                status,
            } => cmd_add(&mut ctl, title, kind, status).await,
            Commands::List => cmd_list(&mut ctl).await,
            Commands::Delete { id } => cmd_delete(&mut ctl, MediaId(id)).await,
            Commands::Clear { yes } => cmd_clear(&ctl, yes).await,
            Commands::Export { output } => cmd_export(&ctl, config, output).await,
            Commands::Import { file } => import_and_report(&mut ctl, &file).await,
            Commands::Shell => shell::run(config, &mut ctl).await,
        }
    })
}

// ============ ADD COMMAND ============

async fn cmd_add(
    ctl: &mut MediaController<TerminalView>,
    title: Option<String>,
    kind: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let mut form = MediaForm::new(
        title.unwrap_or_default(),
        kind.unwrap_or_default(),
        status.unwrap_or_default(),
    );
    shell::prompt_form(&mut form)?;

    if form.submit(ctl).await?.is_none() {
        tracing::debug!("Form has a blank field, nothing added");
    }
    Ok(())
}

// ============ LIST COMMAND ============

async fn cmd_list(ctl: &mut MediaController<TerminalView>) -> Result<()> {
    ctl.render_list().await?;
    Ok(())
}

// ============ DELETE COMMAND ============

async fn cmd_delete(ctl: &mut MediaController<TerminalView>, id: MediaId) -> Result<()> {
    ctl.delete_item(id).await?;
    Ok(())
}

// ============ CLEAR COMMAND ============

async fn cmd_clear(ctl: &MediaController<TerminalView>, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Remove every media item?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let removed = ctl.clear_all().await?;
    println!("{} Removed {} items", "✓".green(), removed);
    Ok(())
}

// ============ EXPORT COMMAND ============

async fn cmd_export(
    ctl: &MediaController<TerminalView>,
    config: &Config,
    output: Option<PathBuf>,
) -> Result<()> {
    let path = output.unwrap_or_else(|| config.export_path());
    let rows = ctl.export_to(&path).await?;
    println!(
        "{} Exported {} items to {}",
        "✓".green(),
        rows.to_string().cyan(),
        path.display()
    );
    Ok(())
}

// ============ IMPORT COMMAND ============

/// Import `path`, turning import failures into the user-facing alert text.
async fn import_and_report(ctl: &mut MediaController<TerminalView>, path: &Path) -> Result<()> {
    match ctl.import_file(path).await {
        Ok(summary) => {
            println!(
                "{} Imported {} items from {}",
                "✓".green(),
                summary.imported.to_string().cyan(),
                path.display()
            );
            Ok(())
        }
        Err(StoreError::Import(e)) => {
            tracing::warn!("[import] {}: {}", path.display(), e);
            Err(anyhow!(import_alert(&e)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Alert text for a failed import, noting rows kept from a partial import.
fn import_alert(e: &ImportError) -> String {
    if e.is_before_mutation() {
        e.user_message().to_string()
    } else {
        format!(
            "{} Items imported before the failure were kept.",
            e.user_message()
        )
    }
}
