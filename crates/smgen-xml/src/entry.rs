//! URL records and the sink seam.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{ParseChangeFreqError, WriteError};

/// How frequently a URL's content is expected to change.
///
/// A hint defined by the Sitemaps Protocol; crawlers may use it to schedule
/// revisits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol token for this frequency.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }

    const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = ParseChangeFreqError;

    /// Parse a change-frequency token, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| s.eq_ignore_ascii_case(freq.as_str()))
            .ok_or_else(|| ParseChangeFreqError {
                token: s.to_owned(),
            })
    }
}

/// One sitemap record.
///
/// Created during menu extraction and handed to the sink immediately; the
/// producer retains no ownership of emitted entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlEntry {
    /// Absolute URL of the page.
    pub loc: String,
    /// Last-modification instant reported for the page.
    pub last_modified: DateTime<Utc>,
    /// Expected change frequency of the page.
    pub change_freq: ChangeFreq,
}

impl UrlEntry {
    /// Create a record.
    #[must_use]
    pub fn new(
        loc: impl Into<String>,
        last_modified: DateTime<Utc>,
        change_freq: ChangeFreq,
    ) -> Self {
        Self {
            loc: loc.into(),
            last_modified,
            change_freq,
        }
    }
}

/// Consumer of sitemap records.
///
/// The extraction core streams entries into a sink as it produces them and
/// never touches the filesystem itself; [`SitemapWriter`](crate::SitemapWriter)
/// is the shipped implementation.
pub trait UrlSink {
    /// Accept one URL record.
    fn add_url(&mut self, entry: UrlEntry) -> Result<(), WriteError>;

    /// Serialize and persist everything accepted so far.
    ///
    /// Returns the list of file paths actually written.
    fn write(&mut self) -> Result<Vec<PathBuf>, WriteError>;
}
