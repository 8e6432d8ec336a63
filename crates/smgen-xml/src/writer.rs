//! Sitemap file writer with chunking and index generation.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::entry::{UrlEntry, UrlSink};
use crate::error::WriteError;

/// Sitemaps Protocol namespace.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Per-file URL limit mandated by the Sitemaps Protocol.
pub const MAX_URLS_PER_FILE: usize = 50_000;

/// Accumulates URL records and serializes them to sitemap files.
///
/// Entries are buffered until [`UrlSink::write`] is called. Output is a
/// single `sitemap.xml` while the entry count fits the per-file limit;
/// beyond it, numbered chunk files (`sitemap1.xml`, `sitemap2.xml`, ...)
/// are written together with a `sitemap_index.xml` referencing them.
///
/// With validation enabled, added URLs must live under the base URL and
/// every produced document is re-parsed before it is written.
pub struct SitemapWriter {
    base_url: String,
    out_dir: PathBuf,
    entries: Vec<UrlEntry>,
    validate: bool,
    max_urls: usize,
    output_encoding: String,
}

impl SitemapWriter {
    /// Create a writer for a site rooted at `base_url`, writing into `out_dir`.
    ///
    /// The output directory is created on write if it does not exist.
    #[must_use]
    pub fn new(base_url: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            out_dir: out_dir.into(),
            entries: Vec::new(),
            validate: false,
            max_urls: MAX_URLS_PER_FILE,
            output_encoding: "UTF-8".to_owned(),
        }
    }

    /// Enable or disable output validation.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Override the per-file URL limit.
    ///
    /// The protocol limit of 50 000 is the default; lowering it mainly serves
    /// deployments that also care about the per-file byte limit.
    #[must_use]
    pub fn with_max_urls(mut self, max_urls: usize) -> Self {
        self.max_urls = max_urls;
        self
    }

    /// Set the charset name declared in the XML prolog.
    #[must_use]
    pub fn with_output_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.output_encoding = encoding.into();
        self
    }

    /// Number of URL records accepted so far.
    #[must_use]
    pub fn url_count(&self) -> usize {
        self.entries.len()
    }

    fn serialize_urlset(&self, entries: &[UrlEntry]) -> String {
        let mut out = String::with_capacity(256 + entries.len() * 160);
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="{}"?>"#,
            self.output_encoding
        )
        .unwrap();
        writeln!(out, r#"<urlset xmlns="{SITEMAP_NS}">"#).unwrap();
        for entry in entries {
            out.push_str("  <url>\n");
            writeln!(out, "    <loc>{}</loc>", escape_xml(&entry.loc)).unwrap();
            writeln!(out, "    <lastmod>{}</lastmod>", w3c_day(entry.last_modified)).unwrap();
            writeln!(out, "    <changefreq>{}</changefreq>", entry.change_freq).unwrap();
            out.push_str("  </url>\n");
        }
        out.push_str("</urlset>\n");
        out
    }

    fn serialize_index(&self, filenames: &[String], lastmod: DateTime<Utc>) -> String {
        let mut out = String::with_capacity(256 + filenames.len() * 120);
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="{}"?>"#,
            self.output_encoding
        )
        .unwrap();
        writeln!(out, r#"<sitemapindex xmlns="{SITEMAP_NS}">"#).unwrap();
        for name in filenames {
            out.push_str("  <sitemap>\n");
            writeln!(
                out,
                "    <loc>{}</loc>",
                escape_xml(&join_base(&self.base_url, name))
            )
            .unwrap();
            writeln!(out, "    <lastmod>{}</lastmod>", w3c_day(lastmod)).unwrap();
            out.push_str("  </sitemap>\n");
        }
        out.push_str("</sitemapindex>\n");
        out
    }

    fn write_document(&self, path: &Path, document: &str) -> Result<(), WriteError> {
        if self.validate {
            check_well_formed(document)?;
        }
        std::fs::write(path, document)?;
        Ok(())
    }
}

impl UrlSink for SitemapWriter {
    fn add_url(&mut self, entry: UrlEntry) -> Result<(), WriteError> {
        if self.validate && !entry.loc.starts_with(&self.base_url) {
            return Err(WriteError::OutsideBase {
                url: entry.loc,
                base: self.base_url.clone(),
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    fn write(&mut self) -> Result<Vec<PathBuf>, WriteError> {
        std::fs::create_dir_all(&self.out_dir)?;

        let mut written = Vec::new();

        if self.entries.len() <= self.max_urls {
            let path = self.out_dir.join("sitemap.xml");
            self.write_document(&path, &self.serialize_urlset(&self.entries))?;
            written.push(path);
        } else {
            let mut filenames = Vec::new();
            for (i, chunk) in self.entries.chunks(self.max_urls).enumerate() {
                let name = format!("sitemap{}.xml", i + 1);
                let path = self.out_dir.join(&name);
                self.write_document(&path, &self.serialize_urlset(chunk))?;
                written.push(path);
                filenames.push(name);
            }

            // Entries of one run share a single generation instant.
            let lastmod = self
                .entries
                .first()
                .map_or_else(Utc::now, |entry| entry.last_modified);
            let index_path = self.out_dir.join("sitemap_index.xml");
            self.write_document(&index_path, &self.serialize_index(&filenames, lastmod))?;
            written.push(index_path);
        }

        tracing::debug!(
            urls = self.entries.len(),
            files = written.len(),
            dir = %self.out_dir.display(),
            "wrote sitemap files"
        );
        Ok(written)
    }
}

/// Join a filename under a base URL with exactly one separating slash.
fn join_base(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}

/// Format an instant using the W3C "complete date" pattern.
fn w3c_day(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Escape XML special characters.
fn escape_xml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

/// Re-parse a produced document to confirm it is well-formed.
fn check_well_formed(document: &str) -> Result<(), quick_xml::Error> {
    let mut reader = quick_xml::Reader::from_str(document);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            quick_xml::events::Event::Eof => return Ok(()),
            _ => buf.clear(),
        }
    }
}
