use crate::error::Result;
use crate::loader::{self, Record};
use crate::models::{Tweet, User};
use std::path::Path;

/// Tweets of one export, built one record at a time in file order.
///
/// The stream is consumed once; load the export again to start over.
pub struct TweetStream {
    owner: User,
    records: std::vec::IntoIter<Record>,
}

impl TweetStream {
    /// The account that produced the export.
    pub fn owner(&self) -> &User {
        &self.owner
    }
}

impl Iterator for TweetStream {
    type Item = Result<Tweet>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(Tweet::from_record(record, &self.owner))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

/// Read the account export next to `tweets`, then the tweets export itself.
pub fn load(tweets: &Path, namespace: &str) -> Result<TweetStream> {
    let owner = User::from_account_export(tweets, namespace)?;
    log::debug!("Export owner: @{} ({})", owner.handle, owner.identity);

    let records = loader::load_javascript(tweets, namespace)?;
    Ok(TweetStream {
        owner,
        records: records.into_iter(),
    })
}
