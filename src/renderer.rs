use crate::models::Tweet;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Frontmatter<'a> {
    id: &'a str,
    tweeted: String,
    favourite_count: u64,
    retweet_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    in_reply_to: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    mentions: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
}

/// Obsidian wiki-link to a user's note.
fn wiki_link(handle: &str) -> String {
    format!("[[{}]]", handle)
}

/// Write the Markdown note for `tweet`: YAML frontmatter, then the text,
/// then links to the reply target and the mentioned users.
pub fn render_tweet<W: Write>(
    writer: &mut W,
    tweet: &Tweet,
    tags: Option<&[String]>,
) -> std::io::Result<()> {
    let fm = Frontmatter {
        id: &tweet.identity,
        tweeted: tweet.tweeted.to_rfc3339(),
        favourite_count: tweet.favourite_count,
        retweet_count: tweet.retweet_count,
        in_reply_to: tweet.in_reply_to.as_ref().map(|u| u.handle.as_str()),
        mentions: tweet.mentions.iter().map(|u| u.handle.as_str()).collect(),
        tags: tags.filter(|t| !t.is_empty()),
    };

    writeln!(writer, "---")?;
    let yaml = serde_yaml::to_string(&fm).map_err(std::io::Error::other)?;
    write!(writer, "{}", yaml)?;
    writeln!(writer, "---")?;
    writeln!(writer)?;

    write!(writer, "{}", tweet.full_text)?;
    if !tweet.full_text.ends_with('\n') {
        writeln!(writer)?;
    }

    if tweet.in_reply_to.is_some() || !tweet.mentions.is_empty() {
        writeln!(writer)?;
    }
    if let Some(target) = &tweet.in_reply_to {
        writeln!(writer, "Reply to {}", wiki_link(&target.handle))?;
    }
    if !tweet.mentions.is_empty() {
        let links: Vec<String> = tweet.mentions.iter().map(|u| wiki_link(&u.handle)).collect();
        writeln!(writer, "Mentions: {}", links.join(", "))?;
    }

    Ok(())
}

/// [`render_tweet`] into a string.
pub fn to_markdown(tweet: &Tweet, tags: Option<&[String]>) -> std::io::Result<String> {
    let mut buf = Vec::new();
    render_tweet(&mut buf, tweet, tags)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
