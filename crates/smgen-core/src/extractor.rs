//! Depth-first menu tree extraction.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use smgen_nav::MenuItem;
use smgen_xml::{ChangeFreq, UrlEntry, UrlSink};
use url::Url;

use crate::error::GenerateError;

/// Walks a menu tree and emits one sitemap record per linked entry.
///
/// Entries are visited depth-first, parent before children, and forwarded to
/// the sink as they are produced; nothing is buffered here. Every record
/// shares the extractor's generation instant and change frequency.
///
/// Menu models must be acyclic trees; an entry listing one of its ancestors
/// as a child would recurse without bound.
pub struct MenuTreeExtractor<'a> {
    base_url: &'a str,
    change_freq: ChangeFreq,
    last_modified: DateTime<Utc>,
}

impl<'a> MenuTreeExtractor<'a> {
    /// Create an extractor resolving hrefs against `base_url`.
    ///
    /// The generation instant is captured here; every emitted record carries
    /// the same last-modified value.
    #[must_use]
    pub fn new(base_url: &'a str, change_freq: ChangeFreq) -> Self {
        Self {
            base_url,
            change_freq,
            last_modified: Utc::now(),
        }
    }

    /// Override the generation instant.
    #[must_use]
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Extract records for every linked entry under `items`.
    ///
    /// Entries without an href are skipped but their children are still
    /// visited.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MalformedUrl`] as soon as any entry's href
    /// cannot be combined with the base URL into a valid absolute URL — the
    /// whole extraction aborts, no partial skip — or
    /// [`GenerateError::Sink`] if the sink rejects a record.
    pub fn extract(
        &self,
        items: &[MenuItem],
        sink: &mut dyn UrlSink,
    ) -> Result<(), GenerateError> {
        for item in items {
            if let Some(href) = item.href.as_deref()
                && !href.is_empty()
            {
                let loc = self.build_url(href)?;
                sink.add_url(UrlEntry::new(loc, self.last_modified, self.change_freq))?;
            }
            self.extract(&item.items, sink)?;
        }
        Ok(())
    }

    /// Build the absolute URL for one href.
    ///
    /// The href is normalized relative to the site root and joined to the
    /// base URL with exactly one separating slash. Each entry resolves
    /// against the base URL independently, never against its parent entry.
    fn build_url(&self, href: &str) -> Result<String, GenerateError> {
        let relative = relative_path(href);
        let loc = if self.base_url.ends_with('/') {
            format!("{}{relative}", self.base_url)
        } else {
            format!("{}/{relative}", self.base_url)
        };
        Url::parse(&loc).map_err(|source| GenerateError::MalformedUrl {
            href: href.to_owned(),
            source,
        })?;
        Ok(loc)
    }
}

/// Normalize an href to be relative to the site root.
///
/// A leading path separator is replaced with a same-directory prefix
/// (`/about` becomes `./about`); anything else passes through unchanged, so
/// applying the rule to an already-relative path never double-prefixes.
fn relative_path(href: &str) -> Cow<'_, str> {
    if href.starts_with('/') {
        Cow::Owned(format!(".{href}"))
    } else {
        Cow::Borrowed(href)
    }
}
