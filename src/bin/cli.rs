//! CLI for inspecting region distribution

use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand};
use region_dist::common::{parse_store_ids, Config, ExportFormat};
use region_dist::ops::{export_hot_regions, export_regions, print_regions, GridOptions};
use region_dist::shell::{history_path, parse_line, CommandTree, Line, ShellHelper, PROMPT};
use region_dist::{HotKind, PdClient};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "region-dist")]
#[command(about = "Show how regions of a PD cluster are distributed over stores")]
#[command(version)]
struct Cli {
    /// PD address (comma separated, first one is used)
    #[arg(short = 'u', long)]
    pd: Option<String>,

    /// Config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored markers
    #[arg(long)]
    no_color: bool,

    /// Only show these stores (comma separated ids)
    #[arg(short, long)]
    stores: Option<String>,

    /// Start an interactive shell
    #[arg(short, long)]
    interact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show region info of the cluster
    Region {
        #[command(subcommand)]
        command: RegionCommands,
    },

    /// Export hot region info of the cluster
    Hot {
        #[command(subcommand)]
        command: HotCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum RegionCommands {
    /// Print the region map
    Print,

    /// Export the region map as a sheet
    Export(ExportArgs),
}

#[derive(Subcommand, Debug, Clone)]
enum HotCommands {
    /// Export hot read regions
    Read(ExportArgs),

    /// Export hot write regions
    Write(ExportArgs),
}

#[derive(Args, Debug, Clone)]
struct ExportArgs {
    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,
}

impl Cli {
    /// Fill options a shell line left out from the top-level invocation
    fn inherit(mut self, parent: &Cli) -> Self {
        self.pd = self.pd.or_else(|| parent.pd.clone());
        self.config = self.config.or_else(|| parent.config.clone());
        self.stores = self.stores.or_else(|| parent.stores.clone());
        self.no_color |= parent.no_color;
        self
    }

    fn settings(&self) -> anyhow::Result<(Config, GridOptions)> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(pd) = &self.pd {
            config.pd_url = pd.clone();
        }
        if self.no_color {
            config.color = false;
        }
        config.validate()?;

        let stores = self.stores.as_deref().map(parse_store_ids).transpose()?;
        let opts = GridOptions {
            color: config.color,
            stores,
        };
        Ok((config, opts))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, _) = cli.settings()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    tracing::debug!("region-dist {} using PD at {}", region_dist::VERSION, config.pd_url);

    if cli.interact {
        return run_shell(&cli).await;
    }

    match cli.command.clone() {
        Some(command) => run(&cli, command).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

async fn run(cli: &Cli, command: Commands) -> anyhow::Result<()> {
    let (config, opts) = cli.settings()?;
    let client = PdClient::new(&config.pd_url, config.request_timeout())?;

    match command {
        Commands::Region {
            command: RegionCommands::Print,
        } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let report = print_regions(&client, &opts, &mut out)
                .await
                .context("print regions")?;
            tracing::info!(
                "Printed {} regions over {} stores",
                report.regions,
                report.stores
            );
        }

        Commands::Region {
            command: RegionCommands::Export(args),
        } => {
            let format = args.format.unwrap_or(config.export_format);
            let path = config.export_path(args.output.as_deref(), "region", format);
            let report = export_regions(&client, &opts, &path, format)
                .await
                .context("export regions")?;
            println!("Export report:");
            println!("  File: {}", report.path.display());
            println!("  Stores: {}", report.stores);
            println!("  Regions: {}", report.rows);
        }

        Commands::Hot { command } => {
            let (kind, args) = match command {
                HotCommands::Read(args) => (HotKind::Read, args),
                HotCommands::Write(args) => (HotKind::Write, args),
            };
            let format = args.format.unwrap_or(config.export_format);
            let stem = format!("hot-{}", kind);
            let path = config.export_path(args.output.as_deref(), &stem, format);
            let report = export_hot_regions(&client, kind, &opts, &path, format)
                .await
                .with_context(|| format!("export hot {} regions", kind))?;
            println!("Export report:");
            println!("  File: {}", report.path.display());
            println!("  Stores: {}", report.stores);
            println!("  Hot regions: {}", report.rows);
            println!("  Unknown regions: {}", report.unknown_regions);
        }
    }

    Ok(())
}

async fn run_shell(cli: &Cli) -> anyhow::Result<()> {
    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ShellHelper::new(CommandTree::from_command(
        &Cli::command(),
    ))));
    let history = history_path();
    if let Err(e) = editor.load_history(&history) {
        tracing::debug!("No shell history loaded from {}: {}", history.display(), e);
    }

    loop {
        let line = match tokio::task::block_in_place(|| editor.readline(PROMPT)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::warn!("Read line failed: {}", e);
                break;
            }
        };

        let words = match parse_line(&line) {
            Ok(Line::Empty) => continue,
            Ok(Line::Exit) => break,
            Ok(Line::Command(words)) => words,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        editor.add_history_entry(line.as_str())?;

        let argv = std::iter::once("region-dist".to_string()).chain(words);
        let sub = match Cli::try_parse_from(argv) {
            Ok(sub) => sub.inherit(cli),
            Err(e) => {
                // help and version requests land here too
                let _ = e.print();
                continue;
            }
        };

        match sub.command.clone() {
            Some(command) => {
                if let Err(e) = run(&sub, command).await {
                    eprintln!("Error: {:#}", e);
                }
            }
            None => {
                let _ = Cli::command().print_help();
            }
        }
    }

    if let Err(e) = editor.save_history(&history) {
        tracing::warn!("Failed to save shell history to {}: {}", history.display(), e);
    }
    Ok(())
}
