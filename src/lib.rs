//! # tweet-vault-export
//!
//! A CLI tool that turns a Twitter/X data export into a tree of Markdown notes,
//! ready to be dropped into an [Obsidian](https://obsidian.md) vault.
//!
//! ## What it does
//!
//! The export ships its data as JavaScript files (`tweets.js`, `account.js`, ...)
//! that assign a JSON array to a browser global. This tool strips the
//! assignment, decodes the records, resolves each tweet's mentions and reply
//! target, and writes one note per tweet at `YYYY/MM/DD/<tweet id>.md` with
//! YAML frontmatter holding the counts and the timestamp.
//!
//! Output is a pure function of the export: running the tool twice produces
//! byte-identical files, and existing notes are overwritten in place.
//!
//! ## Usage
//!
//! ```sh
//! tweet-vault-export ~/twitter-archive/data/tweets.js ~/notes/twitter
//!
//! # Only list the notes that would be written
//! tweet-vault-export ~/twitter-archive/data/tweets.js ~/notes/twitter --dry-run
//! ```
//!
//! Preferences can be persisted in `~/.config/tweet-vault-export/config.toml`.

pub mod error;
pub mod importer;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod renderer;
pub mod utils;
pub mod vault;

pub use error::{ExportError, Result};
pub use models::{Tweet, User};
pub use pipeline::{TweetStream, load};
