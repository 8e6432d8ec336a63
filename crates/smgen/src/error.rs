//! CLI error types.

use smgen_config::ConfigError;
use smgen_core::GenerateError;
use smgen_nav::DescriptorError;
use smgen_xml::WriteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("site descriptor resolution failed: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("sitemap extraction failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("sitemap write failed: {0}")]
    Write(#[from] WriteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
