//! `smgen generate` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use smgen_config::{CliSettings, Config, Locale};
use smgen_core::{RenderContext, SitemapAssembler};
use smgen_nav::{Project, load_descriptor};
use smgen_xml::{ChangeFreq, SitemapWriter, UrlSink};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Output directory for sitemap files (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Comma-separated locales; the first is the default locale.
    #[arg(long)]
    locales: Option<String>,

    /// How frequently the site is likely to change.
    #[arg(long)]
    change_freq: Option<String>,

    /// Skip sitemap generation.
    #[arg(long, env = "SMGEN_SKIP")]
    skip: bool,

    /// Validate URLs and generated documents.
    #[arg(long)]
    validate: bool,

    /// Path to configuration file (default: auto-discover smgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl GenerateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            locales: self.locales.clone(),
            output_dir: self.output_dir.clone(),
            change_freq: self.change_freq.clone(),
            skip: self.skip.then_some(true),
            validate: self.validate.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config = ?config.config_path, "loaded configuration");

        if config.sitemap.skip {
            output.info("sitemap.skip = true: skipping sitemap generation");
            return Ok(());
        }

        let change_freq = config.change_freq()?;
        let locales = config.locales()?;
        let site = config.require_site()?;
        let project = Project {
            name: site.name.clone(),
            url: site.base_url.clone(),
        };

        // The default locale is the first of the list; it is threaded
        // explicitly through every pass, no process-wide state.
        for (i, locale) in locales.iter().enumerate() {
            render(&config, &project, locale, i == 0, change_freq, &output)?;
        }
        Ok(())
    }
}

/// Run one locale's generation pass.
fn render(
    config: &Config,
    project: &Project,
    locale: &Locale,
    is_default: bool,
    change_freq: ChangeFreq,
    output: &Output,
) -> Result<(), CliError> {
    let site = &config.site_resolved;
    let out_dir = locale_output_dir(&site.output_dir, locale, is_default);
    fs::create_dir_all(&out_dir)?;

    let model = load_descriptor(&site.descriptor_dir, Some(locale.language()))?;

    let context = RenderContext::new(locale.as_str())
        .with_encodings(
            config.sitemap.input_encoding.as_str(),
            config.sitemap.output_encoding.as_str(),
        )
        .with_validation(config.sitemap.validate);
    if context.validate {
        output.info("Validation is switched on, generated sitemaps will be checked.");
    }

    output.info(&format!("Generating sitemap for locale '{locale}'."));

    let mut writer = SitemapWriter::new(project.url.as_str(), &out_dir)
        .with_validation(context.validate)
        .with_output_encoding(context.output_encoding.as_str());

    let assembler = SitemapAssembler::new(context);
    assembler.generate(project, &model, &mut writer, change_freq)?;

    let files = writer.write()?;
    for file in &files {
        output.success(&format!("Generated sitemap: {}", file.display()));
    }
    Ok(())
}

/// Output directory for a locale.
///
/// The default locale writes at the output root; every other locale writes
/// under its language subdirectory, created on demand.
fn locale_output_dir(base: &Path, locale: &Locale, is_default: bool) -> PathBuf {
    if is_default {
        base.to_path_buf()
    } else {
        base.join(locale.language())
    }
}
