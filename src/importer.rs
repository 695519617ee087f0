//! Serde shapes for the records found in a Twitter data export.
//!
//! Only the fields the vault needs are modelled; everything else in a record
//! is ignored. Counts in older exports are sometimes strings or booleans, so
//! those fields go through [`coerce_count`].
//!
//! ```text
//! account.js  window.YTD.account.part0 = [ { "account": { "accountId", "username", "accountDisplayName", .. } } ]
//! tweets.js   window.YTD.tweets.part0  = [ { "tweet": { "id_str", "full_text", "created_at", "favorited",
//!                                                        "retweet_count", "entities": { "user_mentions": [..] },
//!                                                        "in_reply_to_user_id"? , .. } }, .. ]
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A user as it appears in `entities.user_mentions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    pub id_str: String,
    pub screen_name: String,
    pub name: String,
}

/// Single entry of `account.js`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAccountEntry {
    pub account: RawAccount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccount {
    pub account_id: String,
    pub username: String,
    pub account_display_name: String,
}

impl From<RawAccount> for RawUser {
    fn from(account: RawAccount) -> Self {
        Self {
            id_str: account.account_id,
            screen_name: account.username,
            name: account.account_display_name,
        }
    }
}

// ---------------------------------------------------------------------------
// Tweets
// ---------------------------------------------------------------------------

/// Single entry of the tweets export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTweetEntry {
    pub tweet: RawTweet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTweet {
    pub id_str: String,
    pub full_text: String,
    pub created_at: String,
    /// The export only records whether the owner liked the tweet, so this
    /// is 0 or 1 in practice.
    #[serde(deserialize_with = "deserialize_count")]
    pub favorited: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub retweet_count: u64,
    pub entities: RawEntities,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub in_reply_to_user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEntities {
    /// Kept raw; each entry becomes a user through `User::from_mention_record`.
    pub user_mentions: Vec<Value>,
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Numeric view of a boolean-like or integer-like value.
///
/// Accepts JSON booleans, non-negative integers, and strings holding either
/// `true`/`false` or a decimal integer.
pub fn coerce_count(value: &Value) -> Option<u64> {
    match value {
        Value::Bool(b) => Some(u64::from(*b)),
        Value::Number(n) => n.as_u64(),
        Value::String(s) => match s.trim() {
            "true" | "True" => Some(1),
            "false" | "False" => Some(0),
            digits => digits.parse().ok(),
        },
        _ => None,
    }
}

fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    use serde::de::Error;

    let value = Value::deserialize(deserializer)?;
    coerce_count(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a count, got {}", value)))
}

/// Reply targets are strings in current exports; very old ones used numbers.
fn deserialize_optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected a user id, got {}", other))),
    }
}
