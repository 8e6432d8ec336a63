//! Extraction error types.

use smgen_xml::WriteError;

/// Error raised while assembling a sitemap from a decoration model.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A required input was missing or unusable before extraction started.
    ///
    /// Distinct from any I/O failure the sink may raise later: when this is
    /// returned the sink has received no records.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A menu href could not be combined with the base URL into a valid
    /// absolute URL. Aborts the whole extraction.
    #[error("cannot build sitemap URL from href '{href}': {source}")]
    MalformedUrl {
        /// The offending menu entry href.
        href: String,
        /// The underlying URL parse failure.
        source: url::ParseError,
    },
    /// The sink rejected a record.
    #[error(transparent)]
    Sink(#[from] WriteError),
}
