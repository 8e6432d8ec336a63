//! Writer error types.

/// Error raised while accumulating or writing sitemap files.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// I/O error creating the output directory or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A URL was added that does not live under the sitemap's base URL.
    ///
    /// Only raised when validation is enabled; the Sitemaps Protocol requires
    /// every URL of a sitemap to be below the location it is served from.
    #[error("URL '{url}' is outside base URL '{base}'")]
    OutsideBase {
        /// The rejected URL.
        url: String,
        /// The writer's base URL.
        base: String,
    },
    /// A produced document failed the well-formedness check.
    ///
    /// Only raised when validation is enabled.
    #[error("produced malformed sitemap XML: {0}")]
    MalformedOutput(#[from] quick_xml::Error),
}

/// Error parsing a change-frequency token.
#[derive(Debug, thiserror::Error)]
#[error("unknown change frequency '{token}'")]
pub struct ParseChangeFreqError {
    /// The token that did not match any change frequency.
    pub token: String,
}
