//! Sitemap extraction core.
//!
//! Turns a site's decoration model into a stream of sitemap URL records:
//! [`MenuTreeExtractor`] walks one menu tree depth-first and builds a record
//! per linked entry, [`SitemapAssembler`] validates inputs and drives the
//! extractor across every menu of a model, and [`RenderContext`] carries the
//! per-pass settings that ride along to the writer.
//!
//! The core never touches the filesystem; records are forwarded to a
//! [`UrlSink`](smgen_xml::UrlSink) as they are produced.

mod assembler;
mod context;
mod error;
mod extractor;

pub use assembler::SitemapAssembler;
pub use context::RenderContext;
pub use error::GenerateError;
pub use extractor::MenuTreeExtractor;
