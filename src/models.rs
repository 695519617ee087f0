//! Users and tweets built from export records.

use crate::error::{ExportError, Result};
use crate::importer::{RawAccountEntry, RawTweetEntry, RawUser};
use crate::loader::{self, Record};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// File name of the account export, which sits next to the tweets export.
pub const ACCOUNT_FILE: &str = "account.js";

/// Timestamp layout used by `created_at`, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub const TWEETED_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A Twitter account. Two users are the same account when their ids match,
/// whatever their current handle or display name.
#[derive(Debug, Clone)]
pub struct User {
    pub identity: String,
    pub handle: String,
    pub name: String,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl User {
    pub fn from_raw(raw: RawUser) -> Self {
        Self {
            identity: raw.id_str,
            handle: raw.screen_name,
            name: raw.name,
        }
    }

    /// Build a user from an `entities.user_mentions` entry.
    pub fn from_mention_record(record: &Value) -> Result<Self> {
        let raw = RawUser::deserialize(record)
            .map_err(|e| ExportError::schema("mention record", e))?;
        Ok(Self::from_raw(raw))
    }

    /// Build the exporting account's user from the `account.js` file that
    /// sits next to `tweets`.
    pub fn from_account_export(tweets: &Path, namespace: &str) -> Result<Self> {
        let path = account_path(tweets);
        if !path.is_file() {
            return Err(ExportError::schema(
                "account export",
                format!("{} not found", path.display()),
            ));
        }

        let record = loader::load_javascript(&path, namespace)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ExportError::schema("account export", format!("{} is empty", path.display()))
            })?;

        Self::from_account_record(record)
    }

    fn from_account_record(record: Record) -> Result<Self> {
        let entry: RawAccountEntry = serde_json::from_value(Value::Object(record))
            .map_err(|e| ExportError::schema("account record", e))?;
        Ok(Self::from_raw(entry.account.into()))
    }
}

/// Location of the account export for the tweets export at `tweets`.
pub fn account_path(tweets: &Path) -> PathBuf {
    tweets
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(ACCOUNT_FILE)
}

// ---------------------------------------------------------------------------
// Tweet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    pub identity: String,
    /// Raw text, short links included.
    pub full_text: String,
    /// In order of appearance in the record.
    pub mentions: Vec<User>,
    pub in_reply_to: Option<User>,
    pub favourite_count: u64,
    pub retweet_count: u64,
    pub tweeted: DateTime<FixedOffset>,
}

impl Tweet {
    /// Build a tweet from one record of the tweets export.
    ///
    /// When the record names a reply target, it is looked up among the
    /// mentions. A target that is not mentioned resolves to `owner`, which
    /// covers self-replies but also attributes replies to unmentioned
    /// accounts to the owner.
    pub fn from_record(record: Record, owner: &User) -> Result<Self> {
        let entry = RawTweetEntry::deserialize(Value::Object(record))
            .map_err(|e| ExportError::schema("tweet record", e))?;
        let data = entry.tweet;
        check_identity(&data.id_str)?;

        let mentions = data
            .entities
            .user_mentions
            .iter()
            .map(User::from_mention_record)
            .collect::<Result<Vec<_>>>()?;

        let tweeted = parse_tweeted(&data.created_at)?;

        let in_reply_to = data.in_reply_to_user_id.map(|target| {
            mentions
                .iter()
                .find(|user| user.identity == target)
                .unwrap_or(owner)
                .clone()
        });

        Ok(Self {
            identity: data.id_str,
            full_text: data.full_text,
            mentions,
            in_reply_to,
            favourite_count: data.favorited,
            retweet_count: data.retweet_count,
            tweeted,
        })
    }

    /// Date bucket for this tweet, `YYYY/MM/DD/`, relative to the vault.
    pub fn markdown_directory(&self) -> PathBuf {
        PathBuf::from(self.tweeted.format("%Y/%m/%d/").to_string())
    }

    /// Path of this tweet's Markdown file, relative to the vault.
    pub fn markdown_file(&self) -> PathBuf {
        self.markdown_directory()
            .join(format!("{}.md", self.identity))
    }
}

/// Tweet ids name the note file, so they must be plain decimal ids. Anything
/// else could alias another tweet's file or point outside the vault.
fn check_identity(id: &str) -> Result<()> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExportError::schema(
            "tweet record",
            format!("id_str {:?} is not a numeric tweet id", id),
        ));
    }
    Ok(())
}

/// Parse a `created_at` value. RFC 3339 and RFC 2822 are accepted as well.
pub fn parse_tweeted(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    DateTime::parse_from_str(value, TWEETED_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map_err(|_| ExportError::DateFormat {
            value: value.to_string(),
        })
}
