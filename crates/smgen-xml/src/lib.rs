//! XML Sitemap writing for smgen.
//!
//! Implements the writer side of the Sitemaps Protocol: URL records are
//! accumulated through the [`UrlSink`] trait and serialized on demand by
//! [`SitemapWriter`], which splits output into multiple files plus a sitemap
//! index once the per-file URL limit is exceeded.
//!
//! The producer side (menu extraction) only ever sees the [`UrlSink`] seam;
//! everything about persistence, escaping, chunking, and index generation is
//! owned by this crate.

mod entry;
mod error;
mod writer;

pub use entry::{ChangeFreq, UrlEntry, UrlSink};
pub use error::{ParseChangeFreqError, WriteError};
pub use writer::{MAX_URLS_PER_FILE, SitemapWriter};
