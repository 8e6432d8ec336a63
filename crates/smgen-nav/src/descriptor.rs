//! TOML site descriptor loading with per-locale resolution.

use std::path::{Path, PathBuf};

use crate::model::DecorationModel;

/// Default descriptor filename.
const DESCRIPTOR_FILENAME: &str = "site.toml";

/// Site descriptor resolution or parse error.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// No descriptor found in the descriptor directory.
    #[error("Site descriptor not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading a descriptor file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load the decoration model for a locale from a descriptor directory.
///
/// When `lang` is given, `site.<lang>.toml` is preferred; if no such file
/// exists the default `site.toml` is used, matching the localized-descriptor
/// fallback of conventional site tooling. A missing default descriptor is an
/// error.
///
/// # Errors
///
/// Returns [`DescriptorError::NotFound`] if neither a localized nor a default
/// descriptor exists, or an `Io`/`Parse` error if the chosen file cannot be
/// read or is not a valid descriptor.
pub fn load_descriptor(dir: &Path, lang: Option<&str>) -> Result<DecorationModel, DescriptorError> {
    if let Some(lang) = lang {
        let localized = dir.join(format!("site.{lang}.toml"));
        if localized.exists() {
            tracing::debug!(path = %localized.display(), "loading localized site descriptor");
            return load_file(&localized);
        }
    }

    let default = dir.join(DESCRIPTOR_FILENAME);
    if !default.exists() {
        return Err(DescriptorError::NotFound(default));
    }
    tracing::debug!(path = %default.display(), "loading site descriptor");
    load_file(&default)
}

fn load_file(path: &Path) -> Result<DecorationModel, DescriptorError> {
    let content = std::fs::read_to_string(path)?;
    let model: DecorationModel = toml::from_str(&content)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_descriptor(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_default_descriptor() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_descriptor(
            temp_dir.path(),
            "site.toml",
            r#"
[[menu]]
name = "Documentation"

[[menu.item]]
name = "Guide"
href = "/guide.html"

[[menu.item.item]]
name = "Setup"
href = "/guide/setup.html"

[[menu]]
name = "Reports"

[[menu.item]]
name = "Changelog"
href = "changelog.html"
"#,
        );

        let model = load_descriptor(temp_dir.path(), None).unwrap();

        assert_eq!(model.menus.len(), 2);
        assert_eq!(model.menus[0].name, "Documentation");
        assert_eq!(model.menus[0].items.len(), 1);
        let guide = &model.menus[0].items[0];
        assert_eq!(guide.href.as_deref(), Some("/guide.html"));
        assert_eq!(guide.items.len(), 1);
        assert_eq!(guide.items[0].name, "Setup");
        assert_eq!(model.menus[1].items[0].href.as_deref(), Some("changelog.html"));
    }

    #[test]
    fn test_load_prefers_localized_descriptor() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_descriptor(
            temp_dir.path(),
            "site.toml",
            "[[menu]]\nname = \"Default\"\n",
        );
        write_descriptor(
            temp_dir.path(),
            "site.fr.toml",
            "[[menu]]\nname = \"Français\"\n",
        );

        let model = load_descriptor(temp_dir.path(), Some("fr")).unwrap();

        assert_eq!(model.menus.len(), 1);
        assert_eq!(model.menus[0].name, "Français");
    }

    #[test]
    fn test_load_falls_back_to_default_descriptor() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_descriptor(
            temp_dir.path(),
            "site.toml",
            "[[menu]]\nname = \"Default\"\n",
        );

        let model = load_descriptor(temp_dir.path(), Some("de")).unwrap();

        assert_eq!(model.menus[0].name, "Default");
    }

    #[test]
    fn test_load_missing_descriptor_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = load_descriptor(temp_dir.path(), None).unwrap_err();

        assert!(matches!(err, DescriptorError::NotFound(_)));
        assert!(err.to_string().contains("site.toml"));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_descriptor(temp_dir.path(), "site.toml", "[[menu]\nname = broken");

        let err = load_descriptor(temp_dir.path(), None).unwrap_err();

        assert!(matches!(err, DescriptorError::Parse(_)));
    }

    #[test]
    fn test_load_empty_descriptor_yields_empty_model() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_descriptor(temp_dir.path(), "site.toml", "");

        let model = load_descriptor(temp_dir.path(), None).unwrap();

        assert!(model.menus.is_empty());
    }

    #[test]
    fn test_menu_item_without_href_is_grouping_node() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_descriptor(
            temp_dir.path(),
            "site.toml",
            r#"
[[menu]]
name = "Docs"

[[menu.item]]
name = "Section"

[[menu.item.item]]
name = "Leaf"
href = "leaf.html"
"#,
        );

        let model = load_descriptor(temp_dir.path(), None).unwrap();

        let section = &model.menus[0].items[0];
        assert!(!section.has_href());
        assert!(section.items[0].has_href());
    }
}
