//! Configuration management for smgen.
//!
//! Parses `smgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! Two layers of validation:
//! - loading a config file eagerly rejects values that can never work (an
//!   unknown change-frequency token, an empty locale list, empty encodings);
//! - [`Config::require_site`] validates the generation-time requirements
//!   (base URL present and http(s), a named template file that exists) on
//!   demand.

mod locale;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use smgen_xml::ChangeFreq;

pub use locale::{Locale, LocaleList};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "smgen.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the comma-separated locale list.
    pub locales: Option<String>,
    /// Override the sitemap output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the change-frequency token.
    pub change_freq: Option<String>,
    /// Override the skip flag.
    pub skip: Option<bool>,
    /// Override the validation flag.
    pub validate: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteRaw,
    /// Sitemap generation configuration.
    pub sitemap: SitemapConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteRaw {
    base_url: Option<String>,
    name: Option<String>,
    descriptor_dir: Option<String>,
    output_dir: Option<String>,
    template_file: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Absolute base URL of the published site.
    pub base_url: String,
    /// Project name.
    pub name: String,
    /// Directory holding `site.toml` descriptors.
    pub descriptor_dir: PathBuf,
    /// Directory sitemap files are written to.
    pub output_dir: PathBuf,
    /// Optional template file; must exist when named.
    pub template_file: Option<PathBuf>,
}

/// Sitemap generation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Comma-separated locale list; the first token is the default locale.
    pub locales: String,
    /// Change-frequency token, matched case-insensitively.
    pub change_freq: String,
    /// Skip sitemap generation entirely.
    pub skip: bool,
    /// Validate URLs and produced documents.
    pub validate: bool,
    /// Charset of input documents.
    pub input_encoding: String,
    /// Charset declared on written output.
    pub output_encoding: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            locales: "en".to_owned(),
            change_freq: "monthly".to_owned(),
            skip: false,
            validate: false,
            input_encoding: "ISO-8859-1".to_owned(),
            output_encoding: "UTF-8".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `smgen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(locales) = &settings.locales {
            self.sitemap.locales.clone_from(locales);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(change_freq) = &settings.change_freq {
            self.sitemap.change_freq.clone_from(change_freq);
        }
        if let Some(skip) = settings.skip {
            self.sitemap.skip = skip;
        }
        if let Some(validate) = settings.validate {
            self.sitemap.validate = validate;
        }
    }

    /// Parsed change frequency for the run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the configured token does not
    /// name a change frequency.
    pub fn change_freq(&self) -> Result<ChangeFreq, ConfigError> {
        ChangeFreq::from_str(&self.sitemap.change_freq).map_err(|err| {
            ConfigError::Validation(format!(
                "sitemap.change_freq: {err} (expected always, hourly, daily, weekly, monthly, yearly, or never)"
            ))
        })
    }

    /// Parsed locale list for the run; the first locale is the default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no locale token remains after
    /// trimming.
    pub fn locales(&self) -> Result<LocaleList, ConfigError> {
        LocaleList::parse(&self.sitemap.locales).ok_or_else(|| {
            ConfigError::Validation("sitemap.locales must name at least one locale".to_owned())
        })
    }

    /// Get validated site configuration.
    ///
    /// Returns the site config once the generation-time requirements hold:
    /// a non-empty http(s) base URL, and — when one is named — an existing
    /// template file. Use this instead of accessing `site_resolved` directly
    /// when a command is about to generate output.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a requirement is not met.
    pub fn require_site(&self) -> Result<&SiteConfig, ConfigError> {
        require_non_empty(&self.site_resolved.base_url, "site.base_url")?;
        require_http_url(&self.site_resolved.base_url, "site.base_url")?;
        if let Some(template) = &self.site_resolved.template_file
            && !template.exists()
        {
            return Err(ConfigError::Validation(format!(
                "site.template_file '{}' does not exist",
                template.display()
            )));
        }
        Ok(&self.site_resolved)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteRaw::default(),
            sitemap: SitemapConfig::default(),
            site_resolved: SiteConfig {
                base_url: String::new(),
                name: "Site".to_owned(),
                descriptor_dir: base.join("site"),
                output_dir: base.join("target/site"),
                template_file: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Rejects values that can never work regardless of command: an unknown
    /// change-frequency token, an empty locale list, empty encodings. Called
    /// automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.change_freq()?;
        self.locales()?;
        require_non_empty(&self.sitemap.input_encoding, "sitemap.input_encoding")?;
        require_non_empty(&self.sitemap.output_encoding, "sitemap.output_encoding")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            base_url: self.site.base_url.clone().unwrap_or_default(),
            name: self.site.name.clone().unwrap_or_else(|| "Site".to_owned()),
            descriptor_dir: resolve(self.site.descriptor_dir.as_deref(), "site"),
            output_dir: resolve(self.site.output_dir.as_deref(), "target/site"),
            template_file: self
                .site
                .template_file
                .as_deref()
                .map(|file| config_dir.join(file)),
        };
    }
}
