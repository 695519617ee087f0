use crate::error::{self, ExportError};
use crate::models::Tweet;
use crate::pipeline;
use crate::renderer;
use crate::utils::ExportConfig;
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub tweets: usize,
    pub written: usize,
}

/// Write one tweet under `vault`, creating its date directories. An existing
/// file at the same path is overwritten. Returns the path written.
pub fn write_tweet(vault: &Path, tweet: &Tweet, tags: Option<&[String]>) -> error::Result<PathBuf> {
    let dir = vault.join(tweet.markdown_directory());
    fs::create_dir_all(&dir).map_err(|e| ExportError::io(&dir, e))?;

    let path = vault.join(tweet.markdown_file());
    let md_file = File::create(&path).map_err(|e| ExportError::io(&path, e))?;
    let mut writer = BufWriter::new(md_file);
    renderer::render_tweet(&mut writer, tweet, tags).map_err(|e| ExportError::io(&path, e))?;
    writer.flush().map_err(|e| ExportError::io(&path, e))?;

    Ok(path)
}

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let s = ProgressBar::new_spinner();
    s.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    s.set_message("Writing tweets...");
    s.enable_steady_tick(Duration::from_millis(80));
    s
}

/// The main entry point for the business logic.
///
/// Every tweet is built before the first file is written, so a malformed
/// record leaves the vault untouched.
pub fn execute(config: &ExportConfig) -> Result<ExportSummary> {
    let stream = pipeline::load(&config.tweets_path, &config.namespace)
        .wrap_err_with(|| format!("Failed to load {}", config.tweets_path.display()))?;
    let tweets: Vec<Tweet> = stream
        .collect::<error::Result<_>>()
        .wrap_err("Failed to read tweets")?;

    if config.dry_run {
        for tweet in &tweets {
            println!("{}", tweet.markdown_file().display());
        }
        return Ok(ExportSummary {
            tweets: tweets.len(),
            written: 0,
        });
    }

    let pb = spinner(config.quiet);
    let tags = config.tags.as_deref();
    let mut written = 0;
    for tweet in &tweets {
        let path = write_tweet(&config.vault_dir, tweet, tags)
            .wrap_err_with(|| format!("Failed to write tweet {}", tweet.identity))?;
        log::debug!("Wrote {}", path.display());
        written += 1;
        pb.set_message(format!("Writing tweets... {}", written));
    }
    pb.finish_and_clear();

    Ok(ExportSummary {
        tweets: tweets.len(),
        written,
    })
}
