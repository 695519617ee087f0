use clap::Parser;
use eyre::Result;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use tweet_vault_export::loader::DEFAULT_NAMESPACE;
use tweet_vault_export::utils::{self, ExportConfig};
use tweet_vault_export::vault;

/// Convert a Twitter/X data export into date-bucketed Markdown notes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The tweets file of the export (usually data/tweets.js).
    /// account.js must sit in the same directory.
    #[arg(value_name = "TWEETS")]
    tweets: PathBuf,

    /// Existing directory that receives the notes.
    #[arg(value_name = "VAULT")]
    vault: PathBuf,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/tweet-vault-export/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Global namespace of the export's JavaScript files (window.<NS>.tweets.part0).
    #[arg(long, value_name = "NS")]
    namespace: Option<String>,

    /// Comma-separated tags to add to frontmatter (e.g. "twitter,archive").
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    tags: Option<Vec<String>>,

    /// Print the path of each note instead of writing it.
    #[arg(long)]
    dry_run: bool,

    /// Print each file written.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress progress and summary output.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // 1. Load config file (CLI path > default path)
    let file_cfg = utils::load_file_config(cli.config.as_deref())?;

    // 2. Resolve namespace and tags (CLI > Config > Default)
    let namespace = cli
        .namespace
        .or(file_cfg.namespace)
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    let tags = cli.tags.or(file_cfg.tags);

    let config = ExportConfig {
        tweets_path: cli.tweets,
        vault_dir: cli.vault,
        namespace,
        tags,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    };

    // 3. Run the Business Logic
    let summary = vault::execute(&config)?;
    if !config.dry_run {
        log::info!(
            "Done. {} tweets written to {}.",
            summary.written,
            config.vault_dir.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = utils::preflight(&cli.tweets, &cli.vault) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
